//! # babel-providers
//!
//! Translation backend implementations for Babel.

pub mod aws;
pub mod libretranslate;

#[cfg(test)]
mod testutil;

pub use aws::AwsTranslator;
pub use libretranslate::LibreTranslator;
