//! Shared test utilities for the backend.
//!
//! Currently this is just the unified logging initialization used by both
//! unit and integration test binaries.

pub mod logging;
