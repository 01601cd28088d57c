// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! BSP Memory Management.

use crate::memory::Region;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The board's physical memory map.
pub mod map {

    /// Physical devices.
    pub mod mmio {
        pub const SYSREGS_START: usize = 0x1c01_0000;
        pub const PL011_UART_START: usize = 0x1c09_0000;
    }
}

/// Number of regions in the boot-time layout report.
pub const NUM_REGIONS: usize = if cfg!(feature = "initrd") { 5 } else { 4 };

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

// Symbols from the linker script.
#[cfg(target_os = "none")]
mod symbols {
    use core::cell::UnsafeCell;

    extern "Rust" {
        pub static __text_start: UnsafeCell<()>;
        pub static __text_end: UnsafeCell<()>;
        pub static __mbox_start: UnsafeCell<()>;
        pub static __mbox_end: UnsafeCell<()>;
        pub static __kernel_start: UnsafeCell<()>;
        pub static __kernel_end: UnsafeCell<()>;
        pub static __dtb_start: UnsafeCell<()>;
        pub static __dtb_end: UnsafeCell<()>;

        #[cfg(feature = "initrd")]
        pub static __filesystem_start: UnsafeCell<()>;
        #[cfg(feature = "initrd")]
        pub static __filesystem_end: UnsafeCell<()>;
    }
}

/// One accessor per linker symbol. On the build host, where there is no linker script, the
/// nominal board addresses stand in so the layout logic stays testable.
macro_rules! linker_symbol {
    ($fn_name:ident, $symbol:ident, $host_value:expr) => {
        #[cfg(target_os = "none")]
        fn $fn_name() -> usize {
            unsafe { symbols::$symbol.get() as usize }
        }

        #[cfg(not(target_os = "none"))]
        fn $fn_name() -> usize {
            $host_value
        }
    };
}

linker_symbol!(text_start, __text_start, 0x8000_0000);
linker_symbol!(text_end, __text_end, 0x8002_0000);
linker_symbol!(mbox_start, __mbox_start, 0x8002_0000);
linker_symbol!(mbox_end, __mbox_end, 0x8002_1000);
linker_symbol!(kernel_start, __kernel_start, 0x8008_0000);
linker_symbol!(kernel_end, __kernel_end, 0x8400_0000);
linker_symbol!(dtb_start, __dtb_start, 0x8800_0000);
linker_symbol!(dtb_end, __dtb_end, 0x8801_0000);

#[cfg(feature = "initrd")]
linker_symbol!(filesystem_start, __filesystem_start, 0x8400_0000);
#[cfg(feature = "initrd")]
linker_symbol!(filesystem_end, __filesystem_end, 0x8800_0000);

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The boot-time memory layout, for the report printed by the boot core.
pub fn layout() -> [Region; NUM_REGIONS] {
    let mut regions = [Region {
        name: "",
        start: 0,
        end: 0,
    }; NUM_REGIONS];

    regions[0] = Region {
        name: "text",
        start: text_start(),
        end: text_end(),
    };
    regions[1] = Region {
        name: "mailboxes",
        start: mbox_start(),
        end: mbox_end(),
    };
    regions[2] = Region {
        name: "kernel",
        start: kernel_start(),
        end: kernel_end(),
    };
    regions[3] = Region {
        name: "dtb",
        start: dtb_start(),
        end: dtb_end(),
    };

    #[cfg(feature = "initrd")]
    {
        regions[4] = Region {
            name: "filesystem",
            start: filesystem_start(),
            end: filesystem_end(),
        };
    }

    regions
}

/// The address the kernel image is loaded at. This is where the boot core jumps.
pub fn kernel_entry_point() -> u64 {
    kernel_start() as u64
}

/// The address the device tree blob is loaded at. Handed to the kernel in a register.
pub fn dtb_address() -> u64 {
    dtb_start() as u64
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Every reported region is non-empty and named.
    #[test]
    fn layout_regions_are_sane() {
        for region in layout() {
            assert!(!region.name.is_empty());
            assert!(region.start < region.end, "region {}", region.name);
        }
    }

    /// The jump target and DTB pointer lie inside their announced regions.
    #[test]
    fn entry_points_match_layout() {
        let regions = layout();

        let kernel = regions.iter().find(|r| r.name == "kernel").unwrap();
        assert_eq!(kernel_entry_point(), kernel.start as u64);

        let dtb = regions.iter().find(|r| r.name == "dtb").unwrap();
        assert_eq!(dtb_address(), dtb.start as u64);
    }
}
