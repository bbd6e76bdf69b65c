//! Actix-web middleware.

pub mod logging;

pub use logging::RequestLogger;
