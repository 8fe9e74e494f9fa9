//! Test Module
//!
//! Cross-module test suites for the ticket classifier.
//!
//! ## Test Categories
//! - `classifier_tests`: ticket scenarios, fallbacks, determinism, scoring properties
//! - `server_tests`: HTTP routes, request validation, batch limits
//! - `config_tests`: environment parsing and dictionary files

pub mod server_tests;
