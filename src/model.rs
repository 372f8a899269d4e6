//! Snapshot types for a single report run.
//!
//! Every struct here is an immutable point-in-time record: queried once,
//! printed once, discarded. Missing data is carried as an explicit
//! sentinel (or `None`), never as a panic.

/// Placeholder substituted when genuine data cannot be obtained.
pub const UNKNOWN: &str = "Unknown";

/// CPU identity, topology and instantaneous utilization.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSnapshot {
    /// Marketing name of the processor.
    /// Source: brand string of the first CPU reported by the source
    pub processor: String,

    /// Architecture the binary was compiled for ("x86_64", "aarch64", ...).
    /// Source: `std::env::consts::ARCH`
    pub architecture: String,

    /// Physical core count, `None` when the platform does not expose it.
    pub physical_cores: Option<usize>,

    /// Logical core (hardware thread) count.
    pub logical_cores: usize,

    /// Aggregate utilization over the sampling window, 0-100.
    pub usage_percent: f32,
}

/// Physical memory counters at query time.
///
/// All byte values and the percent are passed through from the metric
/// source; nothing is recomputed at this layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySnapshot {
    /// Total installed RAM (bytes).
    pub total: u64,

    /// Memory available for new allocations, free plus reclaimable (bytes).
    pub available: u64,

    /// Memory in active use (bytes). Not `total - available`: caches
    /// count as available but not as used.
    pub used: u64,

    /// Source-provided utilization, 0-100.
    pub percent: f32,
}

/// Usage of the volume backing the report's mount point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskSnapshot {
    /// Volume capacity (bytes).
    pub total: u64,

    /// Occupied space, `total - free` (bytes).
    pub used: u64,

    /// Remaining space (bytes).
    pub free: u64,

    /// `used / total * 100`, or 0.0 for a zero-capacity volume.
    pub percent: f32,
}

/// Descriptive strings identifying the operating system and toolchain.
#[derive(Debug, Clone, PartialEq)]
pub struct OsSnapshot {
    /// OS family or distribution name ("Ubuntu", "Windows", ...).
    pub family: String,

    /// Kernel release ("5.15.0-89-generic", ...).
    pub release: String,

    /// OS version string ("22.04", ...).
    pub version: String,

    /// Machine architecture, same value the CPU snapshot reports.
    pub machine: String,

    /// Processor brand string. Collected for completeness; the report
    /// prints it in the CPU section only.
    pub processor: String,

    /// Toolchain version number embedded at build time.
    /// Source: `RUSTC_VERSION` from `build.rs`
    pub runtime_version: String,
}

/// Host identity on the network.
///
/// Hostname and address stand or fall together: a failure anywhere in
/// resolution replaces both with [`UNKNOWN`], never just one.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    /// Local hostname, or [`UNKNOWN`].
    pub hostname: String,

    /// Dotted-quad IPv4 address the hostname resolves to, or [`UNKNOWN`].
    pub ip_address: String,
}

impl NetworkSnapshot {
    /// The atomic fallback pair: both fields sentinel, never just one.
    pub fn unknown() -> Self {
        Self {
            hostname: UNKNOWN.to_string(),
            ip_address: UNKNOWN.to_string(),
        }
    }
}
