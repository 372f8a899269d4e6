//! System collector producing point-in-time snapshots from a metric source.

use std::path::PathBuf;

use tracing::debug;

use crate::collector::traits::MetricSource;
use crate::model::{
    CpuSnapshot, DiskSnapshot, MemorySnapshot, NetworkSnapshot, OsSnapshot, UNKNOWN,
};

/// Mount point the disk query reports on when none is configured.
const DEFAULT_MOUNT: &str = "/";

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// Platform has no usable metrics backend.
    Unsupported,
    /// No mounted volume available for the requested mount point.
    DiskNotFound(PathBuf),
    /// I/O error while emitting the report.
    Io(std::io::Error),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Unsupported => {
                write!(f, "system metrics are not supported on this platform")
            }
            CollectError::DiskNotFound(mount) => {
                write!(f, "no mounted volume found for {}", mount.display())
            }
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

/// Collects the report's five snapshots from a [`MetricSource`].
///
/// Every query is independent; no query consumes another's output.
pub struct SystemCollector<S: MetricSource> {
    source: S,
    mount_point: PathBuf,
}

impl<S: MetricSource> SystemCollector<S> {
    /// Creates a collector reporting on the root volume.
    pub fn new(source: S) -> Self {
        Self {
            source,
            mount_point: PathBuf::from(DEFAULT_MOUNT),
        }
    }

    /// Overrides the volume the disk query reports on.
    pub fn with_mount_point(mut self, mount: impl Into<PathBuf>) -> Self {
        self.mount_point = mount.into();
        self
    }

    /// CPU identity, topology and utilization.
    ///
    /// Blocks for the sampling window while the source measures
    /// utilization. Missing data degrades to explicit unknowns.
    pub fn collect_cpu(&mut self) -> CpuSnapshot {
        let facts = self.source.cpu_facts();
        let usage = self.source.sample_cpu_usage();

        CpuSnapshot {
            processor: or_unknown(facts.brand),
            architecture: std::env::consts::ARCH.to_string(),
            physical_cores: facts.physical_cores,
            logical_cores: facts.logical_cores,
            usage_percent: usage,
        }
    }

    /// Memory counters, passed through from the source untouched.
    pub fn collect_memory(&self) -> MemorySnapshot {
        let facts = self.source.memory_facts();

        MemorySnapshot {
            total: facts.total,
            available: facts.available,
            used: facts.used,
            percent: facts.percent,
        }
    }

    /// Usage of the volume at the configured mount point.
    ///
    /// Falls back to the first listed volume when the mount point does
    /// not appear verbatim (there is no `/` on Windows). A volume that
    /// reports zero capacity yields 0.0 percent, never NaN.
    pub fn collect_disk(&self) -> Result<DiskSnapshot, CollectError> {
        let volumes = self.source.volumes();
        let facts = volumes
            .iter()
            .find(|(mount, _)| mount == &self.mount_point)
            .or_else(|| volumes.first())
            .map(|(_, facts)| *facts)
            .ok_or_else(|| CollectError::DiskNotFound(self.mount_point.clone()))?;

        let used = facts.total.saturating_sub(facts.available);
        let percent = if facts.total > 0 {
            (used as f64 / facts.total as f64 * 100.0) as f32
        } else {
            0.0
        };
        debug!(
            mount = %self.mount_point.display(),
            total = facts.total,
            "volume selected"
        );

        Ok(DiskSnapshot {
            total: facts.total,
            used,
            free: facts.available,
            percent,
        })
    }

    /// OS descriptor strings, with per-field sentinel fallbacks.
    pub fn collect_os(&self) -> OsSnapshot {
        let facts = self.source.os_facts();
        let cpu = self.source.cpu_facts();

        OsSnapshot {
            family: facts.name.unwrap_or_else(|| UNKNOWN.to_string()),
            release: facts.kernel_version.unwrap_or_else(|| UNKNOWN.to_string()),
            version: facts.os_version.unwrap_or_else(|| UNKNOWN.to_string()),
            machine: std::env::consts::ARCH.to_string(),
            processor: or_unknown(cpu.brand),
            runtime_version: env!("RUSTC_VERSION").to_string(),
        }
    }

    /// Network identity, degrading to the sentinel pair on any failure.
    ///
    /// Resolution errors are absorbed here and never propagate; both
    /// fields fall back together, never one without the other.
    pub fn collect_network(&self) -> NetworkSnapshot {
        match self.source.resolve_identity() {
            Ok((hostname, ip)) => NetworkSnapshot {
                hostname,
                ip_address: ip.to_string(),
            },
            Err(e) => {
                debug!(error = %e, "network identity resolution failed");
                NetworkSnapshot::unknown()
            }
        }
    }
}

fn or_unknown(value: String) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockSource;
    use std::net::{IpAddr, Ipv4Addr};

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn collect_cpu_reports_topology_and_usage() {
        let mut collector = SystemCollector::new(MockSource::typical_workstation());

        let cpu = collector.collect_cpu();

        assert_eq!(cpu.processor, "Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz");
        assert_eq!(cpu.architecture, std::env::consts::ARCH);
        assert_eq!(cpu.physical_cores, Some(8));
        assert_eq!(cpu.logical_cores, 8);
        assert!((cpu.usage_percent - 37.2).abs() < f32::EPSILON);
    }

    #[test]
    fn collect_cpu_degrades_missing_data_to_unknowns() {
        let mut collector = SystemCollector::new(MockSource::headless_vm());

        let cpu = collector.collect_cpu();

        assert_eq!(cpu.processor, UNKNOWN);
        assert_eq!(cpu.physical_cores, None);
        assert_eq!(cpu.logical_cores, 2);
    }

    #[test]
    fn collect_memory_passes_source_values_through() {
        let collector = SystemCollector::new(MockSource::typical_workstation());

        let memory = collector.collect_memory();

        assert_eq!(memory.total, 16 * GIB);
        assert_eq!(memory.available, 8 * GIB);
        assert_eq!(memory.used, 7 * GIB + 512 * 1024 * 1024);
        assert!((memory.percent - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn collect_disk_computes_percent_from_capacity() {
        let collector = SystemCollector::new(MockSource::typical_workstation());

        let disk = collector.collect_disk().unwrap();

        assert_eq!(disk.total, 400 * GIB);
        assert_eq!(disk.used, 200 * GIB);
        assert_eq!(disk.free, 200 * GIB);
        assert!((disk.percent - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn collect_disk_zero_capacity_is_zero_percent() {
        let collector = SystemCollector::new(MockSource::empty_volume());

        let disk = collector.collect_disk().unwrap();

        assert_eq!(disk.total, 0);
        assert_eq!(disk.used, 0);
        assert_eq!(disk.percent, 0.0);
        assert!(!disk.percent.is_nan());
    }

    #[test]
    fn collect_disk_falls_back_to_first_volume() {
        let mut source = MockSource::new();
        source.add_volume("C:\\", 100 * GIB, 40 * GIB);
        source.add_volume("D:\\", 500 * GIB, 500 * GIB);
        let collector = SystemCollector::new(source);

        let disk = collector.collect_disk().unwrap();

        assert_eq!(disk.total, 100 * GIB);
        assert_eq!(disk.used, 60 * GIB);
        assert!((disk.percent - 60.0).abs() < 0.01);
    }

    #[test]
    fn collect_disk_honors_configured_mount_point() {
        let mut source = MockSource::new();
        source.add_volume("/", 100 * GIB, 50 * GIB);
        source.add_volume("/data", 1000 * GIB, 250 * GIB);
        let collector = SystemCollector::new(source).with_mount_point("/data");

        let disk = collector.collect_disk().unwrap();

        assert_eq!(disk.total, 1000 * GIB);
        assert!((disk.percent - 75.0).abs() < 0.01);
    }

    #[test]
    fn collect_disk_without_volumes_is_an_error() {
        let collector = SystemCollector::new(MockSource::new());

        let err = collector.collect_disk().unwrap_err();

        assert!(matches!(err, CollectError::DiskNotFound(_)));
        assert!(err.to_string().contains("/"));
    }

    #[test]
    fn collect_os_reports_descriptor_strings() {
        let collector = SystemCollector::new(MockSource::typical_workstation());

        let os = collector.collect_os();

        assert_eq!(os.family, "Ubuntu");
        assert_eq!(os.release, "5.15.0-89-generic");
        assert_eq!(os.version, "22.04");
        assert_eq!(os.machine, std::env::consts::ARCH);
        assert_eq!(os.processor, "Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz");
        assert!(!os.runtime_version.is_empty());
    }

    #[test]
    fn collect_os_falls_back_per_field() {
        let collector = SystemCollector::new(MockSource::headless_vm());

        let os = collector.collect_os();

        assert_eq!(os.family, UNKNOWN);
        assert_eq!(os.release, UNKNOWN);
        assert_eq!(os.version, UNKNOWN);
        assert_eq!(os.processor, UNKNOWN);
    }

    #[test]
    fn collect_network_reports_resolved_identity() {
        let collector = SystemCollector::new(MockSource::typical_workstation());

        let network = collector.collect_network();

        assert_eq!(network.hostname, "atlas");
        assert_eq!(network.ip_address, "192.168.1.42");
    }

    #[test]
    fn collect_network_failure_yields_the_sentinel_pair() {
        let collector = SystemCollector::new(MockSource::offline_host());

        let network = collector.collect_network();

        assert_eq!(network.hostname, UNKNOWN);
        assert_eq!(network.ip_address, UNKNOWN);
    }

    #[test]
    fn collect_network_never_mixes_resolved_and_sentinel() {
        let mut source = MockSource::typical_workstation();
        source.set_identity("atlas", IpAddr::V4(Ipv4Addr::new(192, 168, 1, 42)));
        source.fail_identity();
        let collector = SystemCollector::new(source);

        let network = collector.collect_network();

        assert_eq!(network, NetworkSnapshot::unknown());
    }

    #[test]
    fn collect_error_messages_are_descriptive() {
        assert_eq!(
            CollectError::Unsupported.to_string(),
            "system metrics are not supported on this platform"
        );
        assert_eq!(
            CollectError::DiskNotFound(PathBuf::from("/")).to_string(),
            "no mounted volume found for /"
        );
        let io_err = CollectError::from(std::io::Error::other("sink closed"));
        assert!(io_err.to_string().contains("sink closed"));
    }
}
