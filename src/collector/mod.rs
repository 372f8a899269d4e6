//! Point-in-time system metrics collection.
//!
//! This module provides the queries behind the report sections, with
//! support for mocking so the collector can be tested on any host.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   SystemCollector                    │
//! │    collect_cpu / collect_memory / collect_disk       │
//! │          collect_os / collect_network                │
//! │                          │                           │
//! │                  ┌───────▼──────┐                    │
//! │                  │ MetricSource │ (trait)            │
//! │                  └───────┬──────┘                    │
//! └──────────────────────────┼───────────────────────────┘
//!                            │
//!            ┌───────────────┼───────────────┐
//!            │               │               │
//!     ┌──────▼──────┐ ┌──────▼──────┐ ┌──────▼──────┐
//!     │SysinfoSource│ │ MockSource  │ │  Scenarios  │
//!     │(Production) │ │ (Testing)   │ │ (Fixtures)  │
//!     └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production
//!
//! ```ignore
//! use sysreport::collector::{SysinfoSource, SystemCollector};
//!
//! let source = SysinfoSource::new()?;
//! let mut collector = SystemCollector::new(source);
//! let cpu = collector.collect_cpu();
//! ```
//!
//! ## Testing (with MockSource)
//!
//! ```
//! use sysreport::collector::{MockSource, SystemCollector};
//!
//! let source = MockSource::typical_workstation();
//! let mut collector = SystemCollector::new(source);
//! let cpu = collector.collect_cpu();
//! assert_eq!(cpu.logical_cores, 8);
//! ```

pub mod mock;
pub mod system;
pub mod traits;

// Re-exports for public API
pub use mock::MockSource;
pub use system::{CollectError, SystemCollector};
pub use traits::{
    CPU_SAMPLE_WINDOW, CpuFacts, DiskFacts, MemoryFacts, MetricSource, OsFacts, SysinfoSource,
};
