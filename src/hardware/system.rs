//! System information aggregator

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cpu::{CpuInfo, CPUINFO_PATH};
use super::gpu::{GpuInfo, GpuResolver};
use super::ram::{MemInfo, MEMINFO_PATH};
use super::usage::Usage;
use super::{disk, host};
use crate::config::Config;

/// Width of the label column, "Kernel:  " included
const LABEL_WIDTH: usize = 9;

/// Complete system information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// "user@host"
    pub header: String,
    /// Distribution name
    pub os: String,
    /// Kernel release
    pub kernel: String,
    /// Human readable uptime
    pub uptime: String,
    /// Login shell
    pub shell: String,
    /// CPU label with core/thread counts
    pub cpu: String,
    /// Display controllers, in PCI address order
    pub gpus: Vec<GpuInfo>,
    /// RAM in use (None when /proc/meminfo is unreadable)
    pub memory: Option<Usage>,
    /// Swap in use
    pub swap: Option<Usage>,
    /// Root filesystem in use
    pub root: Option<Usage>,
}

impl SystemInfo {
    /// Detect all system information
    pub fn detect(config: &Config) -> Self {
        let resolver = GpuResolver::new(
            config.pci.database_paths.clone(),
            config.pci.integrated_table,
        );
        let gpus = resolver.detect(&config.sysfs.pci_devices_dir, config.sysfs.max_gpus);

        let cpu = CpuInfo::read(Path::new(CPUINFO_PATH))
            .map(|cpu| cpu.label())
            .unwrap_or_else(|| "unknown".to_string());

        let meminfo = MemInfo::read(Path::new(MEMINFO_PATH));

        SystemInfo {
            header: host::header(),
            os: host::os_name(Path::new(host::OS_RELEASE_PATH), Path::new(host::ISSUE_PATH)),
            kernel: host::kernel(),
            uptime: host::uptime(Path::new(host::UPTIME_PATH)),
            shell: host::shell(),
            cpu,
            gpus,
            memory: meminfo.as_ref().map(MemInfo::memory),
            swap: meminfo.as_ref().map(MemInfo::swap),
            root: disk::root_usage(),
        }
    }

    /// Labelled values in display order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("OS:", self.os.clone()),
            ("Kernel:", self.kernel.clone()),
            ("Uptime:", self.uptime.clone()),
            ("Shell:", self.shell.clone()),
            ("CPU:", self.cpu.clone()),
        ];
        fields.extend(self.gpus.iter().map(|gpu| ("GPU:", gpu.name.clone())));

        for (label, usage) in [("Memory:", self.memory), ("Swap:", self.swap), ("Root:", self.root)] {
            if let Some(usage) = usage {
                fields.push((label, usage.to_string()));
            }
        }

        fields.retain(|(_, value)| !value.is_empty());
        fields
    }

    /// Display system info as formatted string
    pub fn display(&self, color: bool) -> String {
        let mut output = String::new();

        if !self.header.is_empty() {
            let rule = "-".repeat(self.header.chars().count());
            if color {
                output.push_str(&format!("{}\n{}\n", self.header.bold(), rule));
            } else {
                output.push_str(&format!("{}\n{}\n", self.header, rule));
            }
        }

        for (label, value) in self.fields() {
            let label = format!("{label:<LABEL_WIDTH$}");
            if color {
                output.push_str(&format!("{}{}\n", label.bright_cyan().bold(), value));
            } else {
                output.push_str(&format!("{label}{value}\n"));
            }
        }

        output.push('\n');
        output
    }
}
