//! Marketing-name cleanup for CPU and GPU labels
//!
//! Vendor strings from /proc/cpuinfo and pci.ids are full of legal marks and
//! boilerplate ("Intel(R) Core(TM) i7 CPU", "Advanced Micro Devices, Inc.
//! [AMD/ATI]"). The cleaner strips those down to what a person would call the
//! part.

use regex::Regex;
use std::sync::OnceLock;

use crate::text::{erase, replace, truncate_to};

/// Literal tokens erased from every name, in this order.
///
/// Parenthesised marks go before the bare `tm` so "(tm)" is not left as "()".
const BOILERPLATE: &[&str] = &[
    "AMD-", // K6
    ", Inc.",
    ", Inc",
    "(R)",
    "(tm)",
    "(tm )", // Duron
    "tm",
    "(TM)",
    " APU",
    " Dual Core",
    " Controller",
    " Corporation",
    " CPU",
    " Eight-Core",
    " Electronics Systems", // Matrox
    " Family",
    " Interactive", // 3dfx
    " Ltd.",
    " Microsystems", // Trident
    " processor",
    " Processor",
    " Quad Core",
    " Quad-Core",
    " Six-Core",
    " Technologies",   // VIA
    " Technology LLC", // Loongson
    " w/ multimedia extensions",
    " 2x Core/Bus Clock", // Cyrix 6x86
    " 3x Core/Bus Clock", // Cyrix 5x86
    " 75 - 200",          // Pentium
];

/// Default upper bound on a cleaned name, in bytes
pub const DEFAULT_NAME_CAPACITY: usize = 255;

/// Core-count tokens such as " 16-Core" or " 64 Cores"
fn core_count_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s\d+[- ]Cores?\b").expect("core-count pattern is valid"))
}

/// Processor/GPU name cleaner with a fixed output capacity.
///
/// Input longer than the capacity is cut before cleaning, and the result
/// never exceeds it. Truncation is silent.
#[derive(Debug, Clone, Copy)]
pub struct NameCleaner {
    capacity: usize,
}

impl Default for NameCleaner {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_NAME_CAPACITY)
    }
}

impl NameCleaner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Clean a raw vendor name.
    pub fn clean(&self, raw: &str) -> String {
        let mut name = raw.to_string();
        truncate_to(&mut name, self.capacity);
        if name.is_empty() {
            return name;
        }

        for pattern in BOILERPLATE {
            if name.contains(pattern) {
                name = erase(&name, pattern);
            }
        }

        // Ryzen and EPYC brand strings carry the core count, the summary
        // line reports it separately
        if name.contains("AMD") && (name.contains("Ryzen") || name.contains("EPYC")) {
            name = core_count_pattern().replacen(&name, 1, "").into_owned();
        }

        if name.contains("Advanced Micro Devices") {
            name = replace(&name, "Advanced Micro Devices", "AMD");
            if name.contains("AMD [AMD/ATI]") {
                name = replace(&name, "AMD [AMD/ATI]", "AMD/ATI");
            }
        }

        if name.contains("Generation Core") && name.contains("Graphics") {
            name = replace(&name, "Generation Core", "Gen Core");
        }

        if name.contains("Pentium 4 - M") {
            name = replace(&name, "Pentium 4 - M", "Pentium 4-M");
        }

        while name.contains("  ") {
            name = replace(&name, "  ", " ");
        }

        truncate_to(&mut name, self.capacity);
        name
    }
}
