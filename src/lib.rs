//! folio - portfolio page widgets
//!
//! A curved SVG scrollbar that follows a container's rounded corner, plus the
//! small widgets the portfolio pages share: a scroll progress indicator, a
//! grouped thumbnail carousel and a mobile layout height sync.
//!
//! The widget models are plain Rust and build on every target. The browser
//! bindings in `wasm` are only compiled for `wasm32`; natively the
//! `preview` module renders a scrollbar to a standalone SVG.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout_sync;
pub mod logging;
pub mod progress;
pub mod scrollbar;

#[cfg(not(target_arch = "wasm32"))]
pub mod preview;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
