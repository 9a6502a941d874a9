//! # dataentry-client
//!
//! Browser-side session and routing controller for the DataEntry app.
//!
//! This crate owns the current session, mirrors it to `localStorage`,
//! resolves paths to pages and gates the administration page on the admin
//! role. Rendering lives elsewhere; components receive a
//! `SessionController` explicitly rather than reading ambient state.

pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Install the panic hook and console logger. Call once at startup.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
