//! Mock metric source for testing.
//!
//! This module provides `MockSource` and pre-built scenarios for
//! exercising the collector and renderer without probing the host.

mod scenarios;
mod source;

pub use source::MockSource;
