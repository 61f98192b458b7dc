//! RAM and swap detection from /proc/meminfo

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::usage::Usage;
use crate::text::ByteUnit;

pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// The /proc/meminfo counters we use, in kB
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    pub buffers: u64,
    pub cached: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

impl MemInfo {
    /// Parse meminfo content. Unknown or malformed lines are ignored.
    pub fn parse(content: &str) -> Self {
        let mut info = MemInfo::default();

        for line in content.lines() {
            // Format: "MemTotal:       16384000 kB"
            let Some((key, rest)) = line.split_once(':') else {
                continue;
            };
            let Some(value) = rest
                .split_whitespace()
                .next()
                .and_then(|v| v.parse::<u64>().ok())
            else {
                continue;
            };

            match key {
                "MemTotal" => info.mem_total = value,
                "MemFree" => info.mem_free = value,
                "Buffers" => info.buffers = value,
                "Cached" => info.cached = value,
                "SwapTotal" => info.swap_total = value,
                "SwapFree" => info.swap_free = value,
                _ => {}
            }
        }

        info
    }

    /// Read and parse a meminfo file
    pub fn read(path: &Path) -> Option<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(err) => {
                tracing::debug!("Could not read {}: {}", path.display(), err);
                None
            }
        }
    }

    /// RAM in use, counting buffers and page cache as free
    pub fn memory(&self) -> Usage {
        let available = self.mem_free + self.buffers + self.cached;
        Usage::new(
            self.mem_total.saturating_sub(available),
            self.mem_total,
            ByteUnit::KiB,
        )
    }

    pub fn swap(&self) -> Usage {
        Usage::new(
            self.swap_total.saturating_sub(self.swap_free),
            self.swap_total,
            ByteUnit::KiB,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
MemTotal:       16318508 kB
MemFree:         9046328 kB
MemAvailable:   12730384 kB
Buffers:          339864 kB
Cached:          3435332 kB
SwapCached:            8 kB
Active:          3939064 kB
SwapTotal:       2097148 kB
SwapFree:        1048574 kB
";

    #[test]
    fn parses_the_counters_we_need() {
        let info = MemInfo::parse(SAMPLE);
        assert_eq!(info.mem_total, 16318508);
        assert_eq!(info.mem_free, 9046328);
        assert_eq!(info.buffers, 339864);
        assert_eq!(info.cached, 3435332);
        assert_eq!(info.swap_total, 2097148);
        assert_eq!(info.swap_free, 1048574);
    }

    #[test]
    fn memory_excludes_buffers_and_cache() {
        let usage = MemInfo::parse(SAMPLE).memory();
        assert_eq!(usage.used, 16318508 - 9046328 - 339864 - 3435332);
        assert_eq!(usage.total, 16318508);
        assert_eq!(usage.percent(), 21);
    }

    #[test]
    fn swap_usage() {
        let usage = MemInfo::parse(SAMPLE).swap();
        assert_eq!(usage.used, 1048574);
        assert_eq!(usage.to_string(), "1024MiB / 2GiB (50%)");
    }

    #[test]
    fn no_swap_configured() {
        let info = MemInfo::parse("MemTotal: 1024 kB\nSwapTotal: 0 kB\nSwapFree: 0 kB\n");
        assert_eq!(info.swap().to_string(), "0B / 0B (0%)");
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        assert_eq!(MemInfo::read(file.path()), Some(MemInfo::parse(SAMPLE)));
        assert_eq!(MemInfo::read(Path::new("/nonexistent/meminfo")), None);
    }
}
