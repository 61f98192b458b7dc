//! Root filesystem usage

use std::path::Path;
use sysinfo::Disks;

use super::usage::Usage;
use crate::text::ByteUnit;

/// Usage of the filesystem mounted at `/`, if it is listed
pub fn root_usage() -> Option<Usage> {
    let disks = Disks::new_with_refreshed_list();
    let usage = disks
        .list()
        .iter()
        .find(|disk| disk.mount_point() == Path::new("/"))
        .map(|disk| usage_from_space(disk.total_space(), disk.available_space()));

    if usage.is_none() {
        tracing::debug!("No disk mounted at /");
    }
    usage
}

/// Used space counts blocks reserved for root as used, so on ext4 the
/// figure sits a few percent above a `total - f_bfree` reading.
fn usage_from_space(total: u64, available: u64) -> Usage {
    Usage::new(total.saturating_sub(available), total, ByteUnit::B)
}
