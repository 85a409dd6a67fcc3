//! External service interactions
//!
//! This module contains services for talking to the NLP backend:
//! - HTTP client and wire types
//! - Background text processing (five-way fan-out)
//! - Comparison example loading with per-word fallback

pub mod client;
pub mod example_loader;
pub mod processor;

#[cfg(test)]
pub mod testing;

pub use client::{HttpBackend, NlpBackend};
pub use example_loader::ExampleLoader;
pub use processor::TextProcessor;
