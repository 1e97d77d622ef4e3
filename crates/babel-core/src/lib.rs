//! # babel-core
//!
//! Core types, traits, configuration, and error handling for Babel.

pub mod config;
pub mod error;
pub mod languages;
pub mod message;
pub mod traits;

pub use config::shellexpand;
