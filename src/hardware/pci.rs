//! pci.ids database lookup
//!
//! The database is a plain text file maintained by the PCI ID project:
//!
//! ```text
//! # comment
//! 10de  NVIDIA Corporation
//! \t2204  GA102 [GeForce RTX 3090]
//! \t\t147d 3895  RTX 3090 subsystem
//! C 00  Unclassified device
//! ```
//!
//! Vendor lines start at column 0, device lines with one tab, subsystem
//! lines with two. Device lines belong to the closest vendor line above them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::gpu::GpuId;

/// Well-known locations of the database, tried in order
pub const DEFAULT_DATABASE_PATHS: [&str; 2] =
    ["/usr/share/misc/pci.ids", "/usr/share/hwdata/pci.ids"];

/// Errors raised while resolving names from the database
#[derive(Debug, Error)]
pub enum PciError {
    #[error("No PCI ID database found (searched {0:?})")]
    DatabaseNotFound(Vec<PathBuf>),

    #[error("Failed to read PCI ID database {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Vendor {0:04x} is not listed")]
    VendorNotFound(u16),

    #[error("Device {device:04x} is not listed under vendor {vendor:04x}")]
    DeviceNotFound { vendor: u16, device: u16 },
}

/// Vendor and device names as written in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PciNames {
    pub vendor: String,
    pub device: String,
}

/// Handle on a pci.ids file. Each lookup opens and scans it afresh.
#[derive(Debug, Clone)]
pub struct PciDatabase {
    path: PathBuf,
}

impl PciDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the first candidate path that exists.
    pub fn locate<P: AsRef<Path>>(candidates: &[P]) -> Result<Self, PciError> {
        candidates
            .iter()
            .map(|path| path.as_ref())
            .find(|path| path.exists())
            .map(Self::new)
            .ok_or_else(|| {
                PciError::DatabaseNotFound(
                    candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the vendor and device names for `id`.
    pub fn lookup(&self, id: GpuId) -> Result<PciNames, PciError> {
        let io_error = |source| PciError::Io {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(io_error)?;
        scan(BufReader::new(file), id).map_err(|err| match err {
            ScanError::Io(source) => io_error(source),
            ScanError::Lookup(err) => err,
        })
    }
}

enum ScanError {
    Io(io::Error),
    Lookup(PciError),
}

/// Split `<4 hex>  <name>` into its id and name.
fn split_record(record: &str) -> Option<(&str, &str)> {
    let id = record.get(..4)?;
    let name = record.get(6..).unwrap_or("");
    Some((id, name.trim_end_matches(['\n', '\r'])))
}

fn scan<R: BufRead>(mut reader: R, id: GpuId) -> Result<PciNames, ScanError> {
    let vendor_hex = format!("{:04x}", id.vendor);
    let device_hex = format!("{:04x}", id.device);

    let mut vendor: Option<String> = None;
    let mut seen_vendor = false;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(ScanError::Io)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.is_empty() || line.starts_with('#') || line.starts_with('C') {
            continue;
        }

        let tabs = line.bytes().take_while(|&b| b == b'\t').count();
        let Some((record_id, name)) = split_record(&line[tabs..]) else {
            continue;
        };

        match tabs {
            // Every vendor line re-arms matching, so a device id is only
            // accepted inside its own vendor's block
            0 => {
                if record_id == vendor_hex {
                    vendor = Some(name.to_string());
                    seen_vendor = true;
                } else {
                    vendor = None;
                }
            }
            1 if record_id == device_hex => {
                if let Some(vendor) = vendor.take() {
                    return Ok(PciNames {
                        vendor,
                        device: name.to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    Err(ScanError::Lookup(if seen_vendor {
        PciError::DeviceNotFound {
            vendor: id.vendor,
            device: id.device,
        }
    } else {
        PciError::VendorNotFound(id.vendor)
    }))
}
