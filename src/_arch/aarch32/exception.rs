// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural exception handling, AArch32 flavor.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::exception::arch_exception

use crate::{
    cpu::{self, write_cp15},
    exception::PrivilegeLevel,
};
use core::{arch::global_asm, cell::UnsafeCell};

// The monitor vector table. Only the SMC entry does anything; the firmware itself never takes
// exceptions.
global_asm!(
    r#"
.section .text
.arm

.align 5
__monitor_vectors:
	b	.			// Reset
	b	.			// Undefined instruction
	b	.L_smc_entry		// Secure monitor call
	b	.			// Prefetch abort
	b	.			// Data abort
	b	.			// Reserved
	b	.			// IRQ
	b	.			// FIQ

// r0-r3 carry arguments and return value; everything else is preserved by
// the AAPCS on the Rust side, except r12 and the banked link register.
.L_smc_entry:
	push	{{r12, lr}}
	bl	smc_dispatch
	pop	{{r12, lr}}
	movs	pc, lr

.size	__monitor_vectors, . - __monitor_vectors
.global	__monitor_vectors
"#
);

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// The entry point of every service call taken by the monitor vectors.
#[no_mangle]
extern "C" fn smc_dispatch(function_id: u32, arg0: u32, arg1: u32) -> i32 {
    crate::psci::call(u64::from(function_id), u64::from(arg0), u64::from(arg1))
}

fn current_mode() -> u32 {
    let cpsr: u32;
    unsafe { core::arch::asm!("mrs {value}, cpsr", value = out(reg) cpsr, options(nomem, nostack)) };

    cpsr & 0x1f
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The processor's current privilege level.
pub fn current_privilege_level() -> (PrivilegeLevel, &'static str) {
    match current_mode() {
        0x16 => (PrivilegeLevel::Monitor, "Mon"),
        0x1a => (PrivilegeLevel::Hypervisor, "Hyp"),
        0x13 => (PrivilegeLevel::Kernel, "Svc"),
        0x10 => (PrivilegeLevel::User, "Usr"),
        _ => (PrivilegeLevel::Unknown, "Unknown"),
    }
}

/// Point MVBAR at the monitor vectors.
///
/// Returns false when the firmware does not run in monitor mode, in which case no service can be
/// provided.
pub fn install_secure_vectors() -> bool {
    extern "Rust" {
        static __monitor_vectors: UnsafeCell<()>;
    }

    if current_privilege_level().0 != PrivilegeLevel::Monitor {
        return false;
    }

    let mvbar = unsafe { __monitor_vectors.get() as u32 };

    write_cp15!(0, "c12", "c0", 1, mvbar);
    cpu::instruction_sync_barrier();

    true
}
