//! MindSpace Dashboard
//!
//! Client-side mental wellness suite built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing home page
//! - Wellness dashboard with persisted section selection
//! - Webcam mood tracker with simulated analysis
//! - Product entry form
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is mocked or generated in-browser; there is no
//! backend. The mood tracking logic lives in the `mindspace` core crate.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
