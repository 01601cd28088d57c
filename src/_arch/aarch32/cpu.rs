// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural processor code, AArch32 flavor.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::arch_cpu

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

/// The affinity fields of MPIDR: Aff2..Aff0.
const MPIDR_AFFINITY_BITS: u32 = 0x00ff_ffff;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// CP15 register access. Registers are addressed by their `opc1, CRn, CRm, opc2` coordinates.
macro_rules! read_cp15 {
    ($opc1:literal, $crn:literal, $crm:literal, $opc2:literal) => {{
        let value: u32;
        unsafe {
            core::arch::asm!(
                concat!(
                    "mrc p15, ", $opc1, ", {value}, ", $crn, ", ", $crm, ", ", $opc2
                ),
                value = out(reg) value,
                options(nomem, nostack)
            )
        };
        value
    }};
}

macro_rules! write_cp15 {
    ($opc1:literal, $crn:literal, $crm:literal, $opc2:literal, $value:expr) => {{
        let value: u32 = $value;
        unsafe {
            core::arch::asm!(
                concat!(
                    "mcr p15, ", $opc1, ", {value}, ", $crn, ", ", $crm, ", ", $opc2
                ),
                value = in(reg) value,
                options(nomem, nostack)
            )
        };
    }};
}

pub(crate) use {read_cp15, write_cp15};

/// The executing core's hardware affinity value.
pub fn affinity_id() -> u64 {
    u64::from(read_cp15!(0, "c0", "c0", 5) & MPIDR_AFFINITY_BITS)
}

/// Wait for an event, with a low-power sleep.
#[inline(always)]
pub fn wait_for_event() {
    unsafe { core::arch::asm!("wfe", options(nomem, nostack)) };
}

/// Wake every core waiting for an event.
#[inline(always)]
pub fn send_event() {
    unsafe { core::arch::asm!("sev", options(nomem, nostack)) };
}

#[inline(always)]
pub fn nop() {
    unsafe { core::arch::asm!("nop", options(nomem, nostack)) };
}

/// A full system memory barrier.
#[inline(always)]
pub fn memory_barrier() {
    unsafe { core::arch::asm!("dsb sy", options(nostack)) };
}

/// An instruction synchronization barrier.
#[inline(always)]
pub fn instruction_sync_barrier() {
    unsafe { core::arch::asm!("isb sy", options(nostack)) };
}

/// Pause execution on the core.
#[inline(always)]
pub fn wait_forever() -> ! {
    loop {
        wait_for_event()
    }
}
