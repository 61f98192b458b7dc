//! GPU detection module
//!
//! Display controllers are found by walking the PCI tree in sysfs; their
//! numeric vendor/device ids are turned into names with:
//! - Intel: the built-in integrated GPU table
//! - Everything else: the system pci.ids database

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::igpu::{intel_igpu_name, INTEL_VENDOR_ID};
use super::names::NameCleaner;
use super::pci::{PciDatabase, PciError};
use super::sysfs;

/// At most this many GPUs are reported by default
pub const DEFAULT_MAX_GPUS: usize = 4;

/// Room for "<vendor> <device>" built from two database names
const GPU_NAME_CAPACITY: usize = 256;

/// PCI vendor/device pair of a display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GpuId {
    pub vendor: u16,
    pub device: u16,
}

impl GpuId {
    pub fn new(vendor: u16, device: u16) -> Self {
        Self { vendor, device }
    }

    /// Label used when no name can be found, e.g. "unknown (10de:2204)"
    pub fn unknown_label(&self) -> String {
        format!("unknown ({self})")
    }
}

impl fmt::Display for GpuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor, self.device)
    }
}

/// A detected GPU and its display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuInfo {
    pub id: GpuId,
    /// Display name (e.g., "NVIDIA GeForce RTX 3090"), never empty
    pub name: String,
}

/// Turns PCI ids into display names
#[derive(Debug, Clone)]
pub struct GpuResolver {
    database_paths: Vec<PathBuf>,
    integrated_table: bool,
    cleaner: NameCleaner,
}

impl GpuResolver {
    pub fn new(database_paths: Vec<PathBuf>, integrated_table: bool) -> Self {
        Self {
            database_paths,
            integrated_table,
            cleaner: NameCleaner::with_capacity(GPU_NAME_CAPACITY),
        }
    }

    /// Resolve a display name. Never fails: unresolvable ids come back as
    /// "unknown (vvvv:dddd)".
    pub fn resolve(&self, id: GpuId) -> String {
        if let Some(name) = self.integrated_name(id) {
            return name;
        }

        match self.lookup(id) {
            Ok(name) => name,
            Err(err) => {
                tracing::debug!("No name for GPU {}: {}", id, err);
                id.unknown_label()
            }
        }
    }

    /// Fast path for Intel integrated graphics
    fn integrated_name(&self, id: GpuId) -> Option<String> {
        if !self.integrated_table || id.vendor != INTEL_VENDOR_ID {
            return None;
        }
        let name = intel_igpu_name(id.device)?;
        Some(self.cleaner.clean(&format!("Intel {name}")))
    }

    fn lookup(&self, id: GpuId) -> Result<String, PciError> {
        let database = PciDatabase::locate(&self.database_paths)?;
        tracing::debug!("Resolving {} with {}", id, database.path().display());
        let names = database.lookup(id)?;
        Ok(self
            .cleaner
            .clean(&format!("{} {}", names.vendor, names.device)))
    }

    /// Detect and name up to `limit` GPUs under `devices_dir`
    pub fn detect(&self, devices_dir: &Path, limit: usize) -> Vec<GpuInfo> {
        sysfs::display_controllers(devices_dir, limit)
            .into_iter()
            .map(|id| GpuInfo {
                id,
                name: self.resolve(id),
            })
            .collect()
    }
}
