//! Intel integrated graphics names by PCI device id
//!
//! pci.ids names most Intel iGPUs by platform codename ("CoffeeLake-S GT2"),
//! and older distributions ship databases that predate the part. This table
//! maps the common ids straight to the marketing name.

/// Intel's PCI vendor id
pub const INTEL_VENDOR_ID: u16 = 0x8086;

/// Marketing name of an Intel integrated GPU, without the "Intel" prefix.
pub fn intel_igpu_name(device: u16) -> Option<&'static str> {
    let name = match device {
        // i8xx / i9xx chipset graphics
        0x7121 => "82810 Integrated Graphics",
        0x3577 => "82830M Integrated Graphics",
        0x2562 => "82845G Integrated Graphics",
        0x3582 => "82852/855GM Integrated Graphics",
        0x2572 => "82865G Integrated Graphics",
        0x2582 => "82915G/GV/910GL Integrated Graphics",
        0x2592 => "82915GM/GMS/910GML Integrated Graphics",
        0x2772 => "82945G/GZ Integrated Graphics",
        0x27a2 => "Mobile 945GM/GMS/940GML Integrated Graphics",
        0x29c2 => "G33/G31 Integrated Graphics",
        0x2a02 => "GMA X3100",
        0x2a42 => "GMA 4500MHD",
        0x2e22 | 0x2e32 => "GMA X4500",
        0xa001 | 0xa011 => "GMA 3150",

        // Westmere and Sandy Bridge
        0x0042 | 0x0046 => "HD Graphics",
        0x0102 | 0x0106 => "HD Graphics 2000",
        0x0112 | 0x0116 | 0x0122 | 0x0126 => "HD Graphics 3000",

        // Ivy Bridge
        0x0152 | 0x0156 => "HD Graphics 2500",
        0x0162 | 0x0166 => "HD Graphics 4000",
        0x016a => "HD Graphics P4000",

        // Haswell
        0x0402 | 0x0406 => "HD Graphics",
        0x0412 | 0x0416 => "HD Graphics 4600",
        0x041e | 0x0a16 => "HD Graphics 4400",
        0x0a1e => "HD Graphics 4200",
        0x0a26 => "HD Graphics 5000",
        0x0a2e => "Iris Graphics 5100",
        0x0d22 | 0x0d26 => "Iris Pro Graphics 5200",

        // Broadwell
        0x161e => "HD Graphics 5300",
        0x1616 => "HD Graphics 5500",
        0x1626 => "HD Graphics 6000",
        0x162b => "Iris Graphics 6100",
        0x1622 => "Iris Pro Graphics 6200",

        // Skylake
        0x1902 | 0x1906 => "HD Graphics 510",
        0x191e => "HD Graphics 515",
        0x1916 => "HD Graphics 520",
        0x1912 | 0x191b => "HD Graphics 530",
        0x1926 => "Iris Graphics 540",
        0x1927 => "Iris Graphics 550",
        0x193b => "Iris Pro Graphics 580",

        // Kaby Lake and Whiskey Lake
        0x5902 => "HD Graphics 610",
        0x591e => "HD Graphics 615",
        0x5916 => "HD Graphics 620",
        0x5912 | 0x591b => "HD Graphics 630",
        0x5917 | 0x3ea0 => "UHD Graphics 620",
        0x5926 => "Iris Plus Graphics 640",
        0x5927 => "Iris Plus Graphics 650",

        // Coffee Lake and Comet Lake
        0x3e90 | 0x3e93 | 0x9ba8 => "UHD Graphics 610",
        0x3e91 | 0x3e92 | 0x3e98 | 0x3e9b | 0x9bc5 | 0x9bc8 => "UHD Graphics 630",
        0x3ea5 => "Iris Plus Graphics 655",
        0x9b41 => "UHD Graphics",

        // Ice Lake
        0x8a56 => "UHD Graphics G1",
        0x8a5a => "Iris Plus Graphics G4",
        0x8a52 => "Iris Plus Graphics G7",

        // Tiger Lake, Rocket Lake, Alder Lake, Raptor Lake
        0x9a40 | 0x9a49 => "Iris Xe Graphics",
        0x9a78 => "UHD Graphics",
        0x4c8b => "UHD Graphics 730",
        0x4c8a => "UHD Graphics 750",
        0x4692 => "UHD Graphics 730",
        0x4680 | 0xa780 => "UHD Graphics 770",
        0x46a6 | 0x46a8 | 0xa7a0 => "Iris Xe Graphics",
        0x46d1 => "UHD Graphics",

        _ => return None,
    };
    Some(name)
}
