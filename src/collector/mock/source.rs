//! In-memory metric source backed by hand-set values.

use std::io;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::collector::traits::{CpuFacts, DiskFacts, MemoryFacts, MetricSource, OsFacts};

/// Metric source that serves canned values instead of probing the host.
///
/// Starts with empty facts and no volumes; populate it through the
/// setters, or start from one of the prebuilt scenarios.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    cpu: CpuFacts,
    cpu_usage: f32,
    memory: MemoryFacts,
    volumes: Vec<(PathBuf, DiskFacts)>,
    os: OsFacts,
    identity: Option<(String, IpAddr)>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cpu(&mut self, brand: &str, physical_cores: Option<usize>, logical_cores: usize) {
        self.cpu = CpuFacts {
            brand: brand.to_string(),
            physical_cores,
            logical_cores,
        };
    }

    pub fn set_cpu_usage(&mut self, percent: f32) {
        self.cpu_usage = percent;
    }

    pub fn set_memory(&mut self, total: u64, available: u64, used: u64, percent: f32) {
        self.memory = MemoryFacts {
            total,
            available,
            used,
            percent,
        };
    }

    pub fn add_volume(&mut self, mount: &str, total: u64, available: u64) {
        self.volumes
            .push((PathBuf::from(mount), DiskFacts { total, available }));
    }

    pub fn clear_volumes(&mut self) {
        self.volumes.clear();
    }

    pub fn set_os(
        &mut self,
        name: Option<&str>,
        kernel_version: Option<&str>,
        os_version: Option<&str>,
    ) {
        self.os = OsFacts {
            name: name.map(str::to_string),
            kernel_version: kernel_version.map(str::to_string),
            os_version: os_version.map(str::to_string),
        };
    }

    pub fn set_identity(&mut self, hostname: &str, ip: IpAddr) {
        self.identity = Some((hostname.to_string(), ip));
    }

    /// Makes identity resolution fail, as on a host without a resolver.
    pub fn fail_identity(&mut self) {
        self.identity = None;
    }
}

impl MetricSource for MockSource {
    fn cpu_facts(&self) -> CpuFacts {
        self.cpu.clone()
    }

    /// Returns the canned value immediately, no sampling delay.
    fn sample_cpu_usage(&mut self) -> f32 {
        self.cpu_usage
    }

    fn memory_facts(&self) -> MemoryFacts {
        self.memory
    }

    fn volumes(&self) -> Vec<(PathBuf, DiskFacts)> {
        self.volumes.clone()
    }

    fn os_facts(&self) -> OsFacts {
        self.os.clone()
    }

    fn resolve_identity(&self) -> io::Result<(String, IpAddr)> {
        self.identity
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "identity resolution disabled"))
    }
}
