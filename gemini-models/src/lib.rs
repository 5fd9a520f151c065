//! Client crate for the Google Gemini model registry.

pub mod client;
pub mod error;
pub mod models;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
