//! Abstractions for metric access to enable testing and mocking.
//!
//! The `MetricSource` trait allows the collector to work with both the
//! real `sysinfo` backend in production and mock implementations for
//! hermetic tests.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use sysinfo::{Disks, System};
use tracing::debug;

use crate::collector::system::CollectError;

/// Wall-clock window for the blocking CPU utilization sample.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// CPU identity and topology as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuFacts {
    /// Brand string of the first CPU, empty when unavailable.
    pub brand: String,
    /// Physical core count, `None` when the platform hides it.
    pub physical_cores: Option<usize>,
    /// Logical core (hardware thread) count.
    pub logical_cores: usize,
}

/// Physical memory counters in bytes plus the backend's utilization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryFacts {
    /// Total installed RAM.
    pub total: u64,
    /// Free plus reclaimable memory.
    pub available: u64,
    /// Memory in active use (excludes reclaimable caches).
    pub used: u64,
    /// Utilization percent as the backend defines it:
    /// `(total - available) / total * 100`.
    pub percent: f32,
}

/// Capacity of one mounted volume in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskFacts {
    pub total: u64,
    pub available: u64,
}

/// OS descriptor strings; `None` where the platform hides a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsFacts {
    /// Distribution or product name ("Ubuntu", "Windows", ...).
    pub name: Option<String>,
    /// Kernel release ("5.15.0-89-generic", ...).
    pub kernel_version: Option<String>,
    /// OS version string ("22.04", ...).
    pub os_version: Option<String>,
}

/// Abstraction over the operating system's metric facilities.
///
/// `SystemCollector` is generic over this trait so its logic can be
/// exercised against canned values without touching a live host.
pub trait MetricSource {
    /// CPU identity and core topology.
    fn cpu_facts(&self) -> CpuFacts;

    /// Aggregate CPU utilization (0-100) measured over
    /// [`CPU_SAMPLE_WINDOW`]. Real implementations block the calling
    /// thread for the window.
    fn sample_cpu_usage(&mut self) -> f32;

    /// Physical memory counters.
    fn memory_facts(&self) -> MemoryFacts;

    /// Mounted volumes with their capacities, in backend order.
    fn volumes(&self) -> Vec<(PathBuf, DiskFacts)>;

    /// OS descriptor strings.
    fn os_facts(&self) -> OsFacts;

    /// Local hostname and the IPv4 address it resolves to, as one
    /// fallible step: failure of either half fails the whole pair.
    fn resolve_identity(&self) -> io::Result<(String, IpAddr)>;
}

/// Production `MetricSource` backed by the `sysinfo` crate.
///
/// Use this to report on the host the tool runs on.
pub struct SysinfoSource {
    system: System,
    disks: Disks,
}

impl SysinfoSource {
    /// Creates the source with an initial full refresh.
    ///
    /// Fails with [`CollectError::Unsupported`] on platforms where the
    /// backend cannot report metrics.
    pub fn new() -> Result<Self, CollectError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(CollectError::Unsupported);
        }

        let mut system = System::new_all();
        system.refresh_all();
        let disks = Disks::new_with_refreshed_list();
        debug!(
            cpus = system.cpus().len(),
            volumes = disks.list().len(),
            "metrics backend initialized"
        );

        Ok(Self { system, disks })
    }
}

impl MetricSource for SysinfoSource {
    fn cpu_facts(&self) -> CpuFacts {
        CpuFacts {
            brand: self
                .system
                .cpus()
                .first()
                .map(|cpu| cpu.brand().trim().to_string())
                .unwrap_or_default(),
            physical_cores: self.system.physical_core_count(),
            logical_cores: self.system.cpus().len(),
        }
    }

    fn sample_cpu_usage(&mut self) -> f32 {
        // Two refreshes bracketing the window yield usage over the window.
        self.system.refresh_cpu_usage();
        std::thread::sleep(CPU_SAMPLE_WINDOW);
        self.system.refresh_cpu_usage();
        self.system.global_cpu_info().cpu_usage()
    }

    fn memory_facts(&self) -> MemoryFacts {
        let total = self.system.total_memory();
        let available = self.system.available_memory();
        let percent = if total > 0 {
            (total.saturating_sub(available) as f64 / total as f64 * 100.0) as f32
        } else {
            0.0
        };

        MemoryFacts {
            total,
            available,
            used: self.system.used_memory(),
            percent,
        }
    }

    fn volumes(&self) -> Vec<(PathBuf, DiskFacts)> {
        self.disks
            .list()
            .iter()
            .map(|disk| {
                (
                    disk.mount_point().to_path_buf(),
                    DiskFacts {
                        total: disk.total_space(),
                        available: disk.available_space(),
                    },
                )
            })
            .collect()
    }

    fn os_facts(&self) -> OsFacts {
        OsFacts {
            name: System::name(),
            kernel_version: System::kernel_version(),
            os_version: System::os_version(),
        }
    }

    fn resolve_identity(&self) -> io::Result<(String, IpAddr)> {
        let hostname = hostname::get()?.into_string().map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "hostname is not valid UTF-8")
        })?;

        // gethostbyname analog: resolve the hostname, keep the first
        // IPv4 result. A v6-only answer counts as failure.
        let address = (hostname.as_str(), 0u16)
            .to_socket_addrs()?
            .map(|addr| addr.ip())
            .find(|ip| ip.is_ipv4())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no IPv4 address for host '{}'", hostname),
                )
            })?;

        Ok((hostname, address))
    }
}
