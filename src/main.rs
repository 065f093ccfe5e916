//! Dext to Xero control panel
//!
//! Browser front end for the Dext to Xero integration, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Credential management for Dext, Xero, OpenAI and Google Cloud Vision
//! - Xero OAuth connect and callback handling
//! - Read-only processing dashboard
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives on the backend API, reached over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
