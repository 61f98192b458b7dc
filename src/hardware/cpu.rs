//! CPU detection module
//!
//! Reads the first processor block of /proc/cpuinfo and produces a label
//! like "AMD Ryzen 9 5950X (16C/32T)".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::names::NameCleaner;
use crate::text::{truncate_to, FieldStyle};

pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Longest CPU model name we keep
const CPU_NAME_CAPACITY: usize = 127;

/// Vendor names that already lead a model string
const VENDOR_PREFIXES: [&str; 6] = ["Intel ", "AMD ", "Cyrix ", "IDT ", "VIA ", "Transmeta "];

/// CPU information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Cleaned model name (e.g., "Intel Core i7-8700K @ 3.70GHz")
    pub name: String,
    /// Raw vendor_id (e.g., "GenuineIntel")
    pub vendor: String,
    /// Physical cores per package
    pub cores: Option<u32>,
    /// Logical threads per package
    pub threads: Option<u32>,
    /// Index of the last `processor` entry read
    pub last_processor: Option<u32>,
}

impl CpuInfo {
    /// Parse /proc/cpuinfo content.
    ///
    /// Stops reading once the model, core and thread counts are known, so
    /// on x86 only the first processor block is looked at.
    pub fn parse(content: &str) -> Self {
        let cleaner = NameCleaner::with_capacity(CPU_NAME_CAPACITY);
        let mut info = CpuInfo::default();

        for line in content.lines() {
            if line.starts_with("processor") {
                info.last_processor = parse_count(line);
            } else if line.starts_with("vendor_id") {
                info.vendor = FieldStyle::Colon.extract(line);
            } else if line.starts_with("model name") {
                info.name = cleaner.clean(&FieldStyle::Colon.extract(line));
            } else if line.starts_with("cpu cores") {
                info.cores = parse_count(line);
            } else if line.starts_with("siblings") {
                info.threads = parse_count(line);
            }

            if !info.name.is_empty() && info.cores.is_some() && info.threads.is_some() {
                break;
            }
        }

        info.name = with_vendor_prefix(&info.name, &info.vendor);
        info
    }

    /// Read and parse a cpuinfo file
    pub fn read(path: &Path) -> Option<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(err) => {
                tracing::debug!("Could not read {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Display label, e.g. "Intel Core i5-10400 @ 2.90GHz (6C/12T)"
    pub fn label(&self) -> String {
        let name = if self.name.is_empty() {
            "unknown"
        } else {
            self.name.as_str()
        };

        match (self.cores.or(self.threads), self.threads) {
            (Some(cores), Some(threads)) if cores != threads => {
                format!("{name} ({cores}C/{threads}T)")
            }
            (Some(cores), _) => format!("{name} ({cores}C)"),
            // No topology fields (e.g. ARM): count processor entries
            (None, _) => {
                let count = self.last_processor.unwrap_or(0) + 1;
                format!("{name} ({count}C)")
            }
        }
    }
}

fn parse_count(line: &str) -> Option<u32> {
    FieldStyle::Colon.extract(line).trim().parse().ok()
}

/// Put the vendor in front of model names that leave it out
/// (e.g. "Pentium III (Coppermine)" from a GenuineIntel part).
fn with_vendor_prefix(model: &str, vendor_id: &str) -> String {
    if model.is_empty() || vendor_id.is_empty() || vendor_id.starts_with('u') {
        return model.to_string();
    }
    if VENDOR_PREFIXES.iter().any(|prefix| model.contains(prefix)) {
        return model.to_string();
    }

    let vendor = if vendor_id.contains("Intel") || vendor_id.contains("Iotel") {
        "Intel"
    } else if vendor_id.contains("AMD") {
        "AMD"
    } else if vendor_id.contains("Cyrix") {
        "Cyrix"
    } else if vendor_id.contains("Centaur") {
        "IDT/Centaur"
    } else if vendor_id.contains("VIA") {
        "VIA"
    } else if vendor_id.contains("Transmeta") || vendor_id.contains("TM") {
        "Transmeta"
    } else {
        vendor_id
    };

    let mut name = format!("{vendor} {model}");
    truncate_to(&mut name, CPU_NAME_CAPACITY);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    const RYZEN: &str = "\
processor\t: 0
vendor_id\t: AuthenticAMD
cpu family\t: 25
model\t\t: 33
model name\t: AMD Ryzen 9 5950X 16-Core Processor
stepping\t: 0
siblings\t: 32
core id\t\t: 0
cpu cores\t: 16

processor\t: 1
vendor_id\t: AuthenticAMD
model name\t: AMD Ryzen 9 5950X 16-Core Processor
";

    #[test]
    fn ryzen_label() {
        let info = CpuInfo::parse(RYZEN);
        assert_eq!(info.name, "AMD Ryzen 9 5950X");
        assert_eq!(info.vendor, "AuthenticAMD");
        assert_eq!(info.cores, Some(16));
        assert_eq!(info.threads, Some(32));
        assert_eq!(info.last_processor, Some(0));
        assert_eq!(info.label(), "AMD Ryzen 9 5950X (16C/32T)");
    }

    #[test]
    fn equal_cores_and_threads_print_once() {
        let info = CpuInfo::parse(
            "processor\t: 0\nvendor_id\t: GenuineIntel\n\
             model name\t: Intel(R) Core(TM) i5-9400F CPU @ 2.90GHz\n\
             siblings\t: 6\ncpu cores\t: 6\n",
        );
        assert_eq!(info.label(), "Intel Core i5-9400F @ 2.90GHz (6C)");
    }

    #[test]
    fn threads_stand_in_for_missing_cores() {
        let info = CpuInfo::parse("model name\t: Intel(R) Atom(TM) CPU N270\nsiblings\t: 2\n");
        assert_eq!(info.label(), "Intel Atom N270 (2C)");
    }

    #[test]
    fn processor_entries_counted_without_topology() {
        let info = CpuInfo::parse(
            "processor\t: 0\nmodel name\t: ARMv7 Processor rev 4 (v7l)\n\
             processor\t: 1\nprocessor\t: 2\nprocessor\t: 3\n",
        );
        assert_eq!(info.label(), "ARMv7 rev 4 (v7l) (4C)");
    }

    #[test]
    fn missing_model_is_unknown() {
        assert_eq!(CpuInfo::parse("processor\t: 0\n").label(), "unknown (1C)");
    }

    #[test]
    fn vendor_backfilled_from_vendor_id() {
        assert_eq!(
            with_vendor_prefix("Pentium III (Coppermine)", "GenuineIntel"),
            "Intel Pentium III (Coppermine)"
        );
        assert_eq!(with_vendor_prefix("6x86", "CyrixInstead"), "Cyrix 6x86");
        assert_eq!(with_vendor_prefix("C3 Nehemiah", "CentaurHauls"), "IDT/Centaur C3 Nehemiah");
        assert_eq!(with_vendor_prefix("Crusoe TM5800", "GenuineTMx86"), "Transmeta Crusoe TM5800");
        assert_eq!(with_vendor_prefix("Vortex86", "Vortex86 SoC"), "Vortex86 SoC Vortex86");
    }

    #[test]
    fn vendor_not_added_twice_or_when_unknown() {
        assert_eq!(with_vendor_prefix("AMD Athlon 64", "AuthenticAMD"), "AMD Athlon 64");
        assert_eq!(with_vendor_prefix("Geode", "unknown"), "Geode");
        assert_eq!(with_vendor_prefix("Geode", ""), "Geode");
    }

    #[test]
    fn k6_gets_its_vendor_back() {
        let info = CpuInfo::parse(
            "processor\t: 0\nvendor_id\t: AuthenticAMD\nmodel name\t: AMD-K6(tm) 3D processor\n",
        );
        assert_eq!(info.name, "AMD K6 3D");
    }
}
