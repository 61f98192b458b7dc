//! Hardware detection module
//!
//! Detects CPU, GPU, memory and host details from procfs, sysfs and the
//! system pci.ids database, and turns vendor strings into clean labels.

pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod host;
mod igpu;
pub mod names;
pub mod pci;
pub mod ram;
pub mod sysfs;
mod system;
mod usage;

pub use system::SystemInfo;
