//! Pre-built mock source scenarios for testing.
//!
//! These scenarios provide realistic host states for exercising the
//! collector and the report renderer.

use std::net::{IpAddr, Ipv4Addr};

use super::source::MockSource;

const GIB: u64 = 1024 * 1024 * 1024;
const MIB: u64 = 1024 * 1024;

#[allow(dead_code)]
impl MockSource {
    /// Creates a typical developer workstation with every fact present.
    ///
    /// Includes: 8-core desktop CPU, 16 GiB of RAM at half use, a root
    /// volume at half capacity, and a resolvable hostname.
    pub fn typical_workstation() -> Self {
        let mut source = Self::new();

        source.set_cpu("Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz", Some(8), 8);
        source.set_cpu_usage(37.2);
        source.set_memory(16 * GIB, 8 * GIB, 7 * GIB + 512 * MIB, 50.0);
        source.add_volume("/", 400 * GIB, 200 * GIB);
        source.set_os(Some("Ubuntu"), Some("5.15.0-89-generic"), Some("22.04"));
        source.set_identity("atlas", IpAddr::V4(Ipv4Addr::new(192, 168, 1, 42)));

        source
    }

    /// Creates a stripped-down guest where the backend cannot name
    /// the CPU, count physical cores, or describe the OS.
    pub fn headless_vm() -> Self {
        let mut source = Self::new();

        source.set_cpu("", None, 2);
        source.set_cpu_usage(3.0);
        source.set_memory(2 * GIB, GIB, 512 * MIB, 50.0);
        source.add_volume("/", 20 * GIB, 15 * GIB);
        source.set_os(None, None, None);
        source.set_identity("vm-01", IpAddr::V4(Ipv4Addr::new(10, 0, 2, 15)));

        source
    }

    /// Creates a workstation whose hostname resolves to no address.
    pub fn offline_host() -> Self {
        let mut source = Self::typical_workstation();
        source.fail_identity();
        source
    }

    /// Creates a workstation whose only volume reports zero capacity,
    /// as a pseudo-filesystem does.
    pub fn empty_volume() -> Self {
        let mut source = Self::typical_workstation();
        source.clear_volumes();
        source.add_volume("/", 0, 0);
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::MetricSource;

    #[test]
    fn test_typical_workstation_has_every_fact() {
        let source = MockSource::typical_workstation();

        assert!(!source.cpu_facts().brand.is_empty());
        assert_eq!(source.memory_facts().total, 16 * GIB);
        assert_eq!(source.volumes().len(), 1);
        assert!(source.os_facts().name.is_some());
        assert!(source.resolve_identity().is_ok());
    }

    #[test]
    fn test_headless_vm_omits_identities() {
        let source = MockSource::headless_vm();

        assert!(source.cpu_facts().brand.is_empty());
        assert_eq!(source.cpu_facts().physical_cores, None);
        assert!(source.os_facts().name.is_none());
        assert!(source.os_facts().kernel_version.is_none());
    }

    #[test]
    fn test_offline_host_cannot_resolve() {
        let source = MockSource::offline_host();
        assert!(source.resolve_identity().is_err());
    }

    #[test]
    fn test_empty_volume_reports_zero_capacity() {
        let source = MockSource::empty_volume();

        let volumes = source.volumes();
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].1.total, 0);
    }
}
