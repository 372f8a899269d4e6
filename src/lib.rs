//! sysreport - point-in-time system information report library.
//!
//! This library provides the pieces behind the `sysreport` binary:
//! - `collector` - metric queries over a swappable source
//! - `report` - fixed-layout rendering of the collected snapshots
//! - `fmt` - human-readable byte quantities
//! - `model` - the snapshot types the report is built from

pub mod collector;
pub mod fmt;
pub mod model;
pub mod report;
