//! State Management
//!
//! Browser token storage and the reactive wrapper around page state.

pub mod auth;
pub mod page;

pub use auth::{provide_token_source, LocalStorageToken};
pub use page::PageHandle;
