//! Fixed-layout, human-readable report rendering.
//!
//! Each section renderer is a pure function of its snapshot. The
//! report writer alternates collection and emission, so a failing
//! query surfaces after the sections already written.

use std::io::Write;

use chrono::{DateTime, Local};

use crate::collector::system::{CollectError, SystemCollector};
use crate::collector::traits::MetricSource;
use crate::fmt::format_bytes;
use crate::model::{
    CpuSnapshot, DiskSnapshot, MemorySnapshot, NetworkSnapshot, OsSnapshot, UNKNOWN,
};

const BANNER_WIDTH: usize = 50;
const TITLE: &str = "           SYSTEM INFORMATION";

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

fn bullet(label: &str, value: impl std::fmt::Display) -> String {
    format!("   • {}: {}\n", label, value)
}

/// Banner block and generation timestamp, followed by a blank line.
pub fn render_header(now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(&banner());
    out.push('\n');
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&banner());
    out.push('\n');
    out.push_str(&format!(
        "Generated on: {}\n",
        now.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push('\n');
    out
}

pub fn render_cpu(cpu: &CpuSnapshot) -> String {
    let physical = match cpu.physical_cores {
        Some(count) => count.to_string(),
        None => UNKNOWN.to_string(),
    };

    let mut out = String::from("🖥️  CPU Information:\n");
    out.push_str(&bullet("Processor", &cpu.processor));
    out.push_str(&bullet("Architecture", &cpu.architecture));
    out.push_str(&bullet("Physical Cores", physical));
    out.push_str(&bullet("Logical Cores", cpu.logical_cores));
    out.push_str(&bullet("CPU Usage", format!("{:.1}%", cpu.usage_percent)));
    out.push('\n');
    out
}

pub fn render_memory(memory: &MemorySnapshot) -> String {
    let mut out = String::from("💾 Memory Information:\n");
    out.push_str(&bullet("Total RAM", format_bytes(memory.total)));
    out.push_str(&bullet("Available RAM", format_bytes(memory.available)));
    out.push_str(&bullet("Used RAM", format_bytes(memory.used)));
    out.push_str(&bullet("Memory Usage", format!("{:.1}%", memory.percent)));
    out.push('\n');
    out
}

pub fn render_disk(disk: &DiskSnapshot) -> String {
    let mut out = String::from("💿 Disk Information:\n");
    out.push_str(&bullet("Total Space", format_bytes(disk.total)));
    out.push_str(&bullet("Used Space", format_bytes(disk.used)));
    out.push_str(&bullet("Free Space", format_bytes(disk.free)));
    out.push_str(&bullet("Disk Usage", format!("{:.1}%", disk.percent)));
    out.push('\n');
    out
}

/// The OS snapshot's processor field is collected but not printed,
/// matching the report's fixed line set.
pub fn render_os(os: &OsSnapshot) -> String {
    let mut out = String::from("🖥️  Operating System:\n");
    out.push_str(&bullet("OS", format!("{} {}", os.family, os.release)));
    out.push_str(&bullet("Version", &os.version));
    out.push_str(&bullet("Machine", &os.machine));
    out.push_str(&bullet("Rust Version", &os.runtime_version));
    out.push('\n');
    out
}

pub fn render_network(network: &NetworkSnapshot) -> String {
    let mut out = String::from("🌐 Network Information:\n");
    out.push_str(&bullet("Hostname", &network.hostname));
    out.push_str(&bullet("IP Address", &network.ip_address));
    out.push('\n');
    out
}

/// Closing banner line.
pub fn render_footer() -> String {
    let mut out = banner();
    out.push('\n');
    out
}

/// Collects and writes the full report, section by section.
///
/// Every section is rendered and written before the next query runs,
/// so output produced up to a failure stays on the wire. The disk
/// query is the only fallible one; its error aborts the report.
pub fn write_report<S, W>(
    collector: &mut SystemCollector<S>,
    out: &mut W,
) -> Result<(), CollectError>
where
    S: MetricSource,
    W: Write,
{
    out.write_all(render_header(Local::now()).as_bytes())?;

    let cpu = collector.collect_cpu();
    out.write_all(render_cpu(&cpu).as_bytes())?;

    let memory = collector.collect_memory();
    out.write_all(render_memory(&memory).as_bytes())?;

    let disk = collector.collect_disk()?;
    out.write_all(render_disk(&disk).as_bytes())?;

    let os = collector.collect_os();
    out.write_all(render_os(&os).as_bytes())?;

    let network = collector.collect_network();
    out.write_all(render_network(&network).as_bytes())?;

    out.write_all(render_footer().as_bytes())?;
    out.flush()?;

    Ok(())
}
