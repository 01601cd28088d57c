// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural processor code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::arch_cpu

use aarch64_cpu::{asm, asm::barrier, registers::MPIDR_EL1};
use tock_registers::interfaces::Readable;

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

/// The affinity fields of MPIDR_EL1: Aff3 and Aff2..Aff0.
const MPIDR_AFFINITY_BITS: u64 = 0xff_00ff_ffff;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Raw system register access for registers the `aarch64_cpu` crate does not model. Registers
/// newer than the base architecture are named by their S-encoding so the firmware assembles with
/// any binutils/LLVM vintage.
macro_rules! read_sysreg {
    ($reg:literal) => {{
        let value: u64;
        unsafe {
            core::arch::asm!(
                concat!("mrs {value}, ", $reg),
                value = out(reg) value,
                options(nomem, nostack)
            )
        };
        value
    }};
}

macro_rules! write_sysreg {
    ($reg:literal, $value:expr) => {{
        let value: u64 = $value;
        unsafe {
            core::arch::asm!(
                concat!("msr ", $reg, ", {value}"),
                value = in(reg) value,
                options(nomem, nostack)
            )
        };
    }};
}

pub(crate) use {read_sysreg, write_sysreg};

pub use asm::nop;

/// The executing core's hardware affinity value.
pub fn affinity_id() -> u64 {
    MPIDR_EL1.get() & MPIDR_AFFINITY_BITS
}

/// Wait for an event, with a low-power sleep.
#[inline(always)]
pub fn wait_for_event() {
    asm::wfe();
}

/// Wake every core waiting for an event.
#[inline(always)]
pub fn send_event() {
    asm::sev();
}

/// A full system memory barrier.
#[inline(always)]
pub fn memory_barrier() {
    barrier::dsb(barrier::SY);
}

/// An instruction synchronization barrier.
#[inline(always)]
pub fn instruction_sync_barrier() {
    barrier::isb(barrier::SY);
}

/// Pause execution on the core.
#[inline(always)]
pub fn wait_forever() -> ! {
    loop {
        asm::wfe()
    }
}
