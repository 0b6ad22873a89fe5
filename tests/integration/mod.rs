//! Integration Tests Module
//!
//! End-to-end tests for the analysis pipelines against a mocked analysis
//! service, plus validation and session behavior at the command facade.

// Pipeline scenarios against a wiremock analysis service
mod pipeline_test;

// Validation and session/stale-guard behavior of the command facade
mod command_test;
