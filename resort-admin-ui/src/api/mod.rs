//! Backend Access
//!
//! Browser implementation of the shared backend trait.

pub mod client;

pub use client::{client, GlooClient};
