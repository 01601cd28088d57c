// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural boot code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::boot::arch_boot

use crate::{bsp, cpu::write_sysreg};
use core::arch::global_asm;

// Assembly counterpart to this file.
global_asm!(
    include_str!("boot.s"),
    CONST_CORE_ID_MASK = const 0xff,
    CONST_NUM_CORES = const bsp::cpu::NUM_CORES,
    CONST_STACK_SIZE = const 0x4000,
);

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

/// Saved program status for the kernel's first instruction: everything masked, and the mode the
/// kernel's world expects.
mod spsr {
    pub const D: u64 = 1 << 9;
    pub const A: u64 = 1 << 8;
    pub const I: u64 = 1 << 7;
    pub const F: u64 = 1 << 6;

    /// AArch64 EL2, using SP_EL2.
    pub const M_EL2H: u64 = 0b1001;
    /// AArch64 EL1, using SP_EL1.
    pub const M_EL1H: u64 = 0b0101;
    /// AArch32 hyp mode.
    pub const M_HYP: u64 = 0x1a;
}

#[cfg(feature = "kernel_32")]
const SPSR_KERNEL: u64 = spsr::A | spsr::I | spsr::F | spsr::M_HYP;

#[cfg(all(not(feature = "kernel_32"), feature = "armv8r"))]
const SPSR_KERNEL: u64 = spsr::D | spsr::A | spsr::I | spsr::F | spsr::M_EL1H;

#[cfg(all(not(feature = "kernel_32"), not(feature = "armv8r")))]
const SPSR_KERNEL: u64 = spsr::D | spsr::A | spsr::I | spsr::F | spsr::M_EL2H;

// SCTLR values for the kernel's entry level: RES1 bits, little-endian, caches and MMU off. The
// 32-bit kernel variant uses the AArch32 register layout, with the CP15 barrier enable set.
#[cfg(not(feature = "kernel_32"))]
const SCTLR_EL1_RES1: u64 = (0b11 << 28) | (0b11 << 22) | (1 << 11);

#[cfg(feature = "kernel_32")]
const SCTLR_EL1_KERNEL32: u64 = (0b11 << 22) | (1 << 11) | (1 << 5) | (0b11 << 4);

#[cfg(not(feature = "armv8r"))]
const SCTLR_EL2_KERNEL: u64 =
    (0b11 << 28) | (0b11 << 22) | (1 << 18) | (1 << 16) | (1 << 11) | (0b11 << 4);

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The Rust entry of the firmware, called from the assembly stub on every core.
///
/// # Safety
///
/// - Runs with a valid per-core stack and zeroed `.bss`, and nothing else.
#[no_mangle]
pub unsafe extern "C" fn _start_rust() -> ! {
    crate::firmware_init()
}

/// Hand the executing core to the kernel at `addr`.
///
/// Drops to the kernel's exception level via an exception return, with a well-defined SCTLR and
/// all interrupts masked. The four argument registers carry `args`.
pub fn jump_kernel(addr: u64, args: [u64; 4]) -> ! {
    #[cfg(feature = "kernel_32")]
    write_sysreg!("sctlr_el1", SCTLR_EL1_KERNEL32);

    #[cfg(not(feature = "kernel_32"))]
    write_sysreg!("sctlr_el1", SCTLR_EL1_RES1);

    // On Armv8-R the firmware itself lives at EL2; anywhere else EL2 belongs to the kernel's
    // world and gets a defined state.
    #[cfg(not(feature = "armv8r"))]
    write_sysreg!("sctlr_el2", SCTLR_EL2_KERNEL);

    unsafe {
        #[cfg(not(feature = "armv8r"))]
        core::arch::asm!(
            "msr elr_el3, {addr}",
            "msr spsr_el3, {spsr}",
            "eret",
            addr = in(reg) addr,
            spsr = in(reg) SPSR_KERNEL,
            in("x0") args[0],
            in("x1") args[1],
            in("x2") args[2],
            in("x3") args[3],
            options(noreturn)
        );

        #[cfg(feature = "armv8r")]
        core::arch::asm!(
            "msr elr_el2, {addr}",
            "msr spsr_el2, {spsr}",
            "eret",
            addr = in(reg) addr,
            spsr = in(reg) SPSR_KERNEL,
            in("x0") args[0],
            in("x1") args[1],
            in("x2") args[2],
            in("x3") args[3],
            options(noreturn)
        );
    }
}
