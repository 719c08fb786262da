//! Browser-hosted lazy activation of YouTube video placeholders.
//!
//! This crate is intentionally a stub by default so it builds and tests on
//! native targets without requiring wasm toolchains; the pure modules below
//! (state machine, URL conventions, page config) compile everywhere.
//!
//! Enable the real activator with: `--features web` (and a wasm32 target).

pub mod config;
pub mod slot;
pub mod urls;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
