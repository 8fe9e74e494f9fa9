//! Ticket division classifier.
//!
//! Assigns a support ticket to exactly one division using a curated
//! Indonesian/English keyword dictionary, and exposes the engine over HTTP.

pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;

#[cfg(test)]
mod tests;
