//! Unit tests for the job module.
//!
//! Tests are organised by component: domain values, the three graph passes,
//! extraction helpers, and the processing service.

mod extraction_tests;
mod graph_fixtures;
mod sanitize_tests;
