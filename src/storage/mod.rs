//! Storage
//!
//! Configuration file access. There is deliberately no other persistence:
//! analysis inputs and results are request-scoped.

pub mod config;

pub use config::ConfigService;
