//! Resort Admin Dashboard
//!
//! Browser front end for the resort admin pages, built with Leptos (WASM).
//!
//! # Features
//!
//! - Booking form with a live price estimate
//! - Analytics dashboard for signed-in admins
//! - Authoritative price lookup
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page behaviour lives in the `resort-admin` crate; this crate
//! supplies the gloo-net transport, the `localStorage` token and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
