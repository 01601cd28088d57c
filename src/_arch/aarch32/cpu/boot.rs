// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural boot code, AArch32 flavor.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::boot::arch_boot

use crate::bsp;
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

/// Program status for the kernel's first instruction: asynchronous aborts, IRQ and FIQ masked,
/// hyp mode.
const SPSR_KERNEL: u32 = (1 << 8) | (1 << 7) | (1 << 6) | 0x1a;

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

/// Hand the executing core to the kernel at `addr` via an exception return out of monitor mode.
pub fn jump_kernel(addr: u64, args: [u64; 4]) -> ! {
    unsafe {
        core::arch::asm!(
            "msr spsr_cxsf, {spsr}",
            "mov lr, {addr}",
            "movs pc, lr",
            spsr = in(reg) SPSR_KERNEL,
            addr = in(reg) addr as u32,
            in("r0") args[0] as u32,
            in("r1") args[1] as u32,
            in("r2") args[2] as u32,
            in("r3") args[3] as u32,
            options(noreturn)
        )
    }
}
