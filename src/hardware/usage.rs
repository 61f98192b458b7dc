//! Used/total amounts rendered as "<used> / <total> (P%)"

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::{format_bytes, ByteUnit};

/// Amount in use out of a total, both in `unit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub used: u64,
    pub total: u64,
    pub unit: ByteUnit,
}

impl Usage {
    pub fn new(used: u64, total: u64, unit: ByteUnit) -> Self {
        Self { used, total, unit }
    }

    /// Whole percent in use, truncated; 0 when the total is 0
    pub fn percent(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (u128::from(self.used) * 100 / u128::from(self.total)) as u64
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} ({}%)",
            format_bytes(self.used, self.unit),
            format_bytes(self.total, self.unit),
            self.percent()
        )
    }
}
