//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep link times down.
//!
//! Structure:
//! - helpers: `TestEditor` builder and shared assertions
//! - integration: multi-component editor workflows
//! - unit: single-component tests against the public API

mod integration;
mod unit;
