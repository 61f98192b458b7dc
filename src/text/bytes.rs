//! Binary byte-size formatting (B, KiB, MiB, GiB, TiB)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit an input amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteUnit {
    B,
    KiB,
    MiB,
    GiB,
    TiB,
}

impl ByteUnit {
    /// Units tried when picking an output unit, largest first
    const DESCENDING: [ByteUnit; 4] = [ByteUnit::TiB, ByteUnit::GiB, ByteUnit::MiB, ByteUnit::KiB];

    /// Number of bytes in one of this unit
    pub fn bytes(self) -> u128 {
        match self {
            ByteUnit::B => 1,
            ByteUnit::KiB => 1 << 10,
            ByteUnit::MiB => 1 << 20,
            ByteUnit::GiB => 1 << 30,
            ByteUnit::TiB => 1 << 40,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ByteUnit::B => "B",
            ByteUnit::KiB => "KiB",
            ByteUnit::MiB => "MiB",
            ByteUnit::GiB => "GiB",
            ByteUnit::TiB => "TiB",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Format an amount given in `unit` using the largest binary unit it reaches.
///
/// One decimal digit, rounded half-up; a zero decimal is omitted entirely.
///
/// ```ignore
/// assert_eq!(format_bytes(1536, ByteUnit::KiB), "1.5MiB");
/// assert_eq!(format_bytes(4, ByteUnit::GiB), "4GiB");
/// ```
pub fn format_bytes(value: u64, unit: ByteUnit) -> String {
    let bytes = u128::from(value) * unit.bytes();

    for target in ByteUnit::DESCENDING {
        let size = target.bytes();
        if bytes < size {
            continue;
        }

        let mut whole = bytes / size;
        let remainder = bytes % size;
        let mut tenths = (remainder * 10 + size / 2) / size;
        if tenths == 10 {
            whole += 1;
            tenths = 0;
        }

        return if tenths == 0 {
            format!("{whole}{target}")
        } else {
            format!("{whole}.{tenths}{target}")
        };
    }

    format!("{bytes}B")
}
