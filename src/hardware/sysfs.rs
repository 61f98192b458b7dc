//! sysfs helpers: single-value hex attribute files and PCI enumeration

use std::fs;
use std::path::Path;

use super::gpu::GpuId;

/// Default location of the PCI device tree
pub const PCI_DEVICES_DIR: &str = "/sys/bus/pci/devices";

/// PCI base class for display controllers
const DISPLAY_CONTROLLER_CLASS: u32 = 0x03;

/// Parse a hexadecimal token the way sysfs writes them (`0x0300`, `10de`).
///
/// Leading whitespace is skipped and parsing stops at the first non-hex
/// character. Returns `None` when no digit is present.
pub fn parse_hex(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(text.len());
    u32::from_str_radix(&text[..end], 16).ok()
}

/// Read one hexadecimal integer from a single-line file, 0 on any failure.
pub fn read_hex_file(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(content) => parse_hex(&content).unwrap_or(0),
        Err(err) => {
            tracing::debug!("Could not read {}: {}", path.display(), err);
            0
        }
    }
}

/// List display controllers under `devices_dir`, in address order.
///
/// Stops after `limit` matches. An unreadable directory yields no devices.
pub fn display_controllers(devices_dir: &Path, limit: usize) -> Vec<GpuId> {
    let entries = match fs::read_dir(devices_dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!("Could not list {}: {}", devices_dir.display(), err);
            return Vec::new();
        }
    };

    let mut addresses: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .filter(|name| !name.to_string_lossy().starts_with('.'))
        .collect();
    addresses.sort();

    let mut gpus = Vec::new();
    for address in addresses {
        if gpus.len() >= limit {
            break;
        }

        let device_dir = devices_dir.join(&address);
        let class = read_hex_file(&device_dir.join("class"));
        if class >> 16 != DISPLAY_CONTROLLER_CLASS {
            continue;
        }

        let id = GpuId::new(
            read_hex_file(&device_dir.join("vendor")) as u16,
            read_hex_file(&device_dir.join("device")) as u16,
        );
        tracing::debug!("Display controller {} at {}", id, address.to_string_lossy());
        gpus.push(id);
    }

    gpus
}
