// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural exception handling.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::exception::arch_exception

use crate::{
    cpu::{self, write_sysreg},
    exception::PrivilegeLevel,
};
use aarch64_cpu::registers::CurrentEL;
use core::{arch::global_asm, cell::UnsafeCell};
use tock_registers::interfaces::Readable;

// Assembly counterpart to this file.
global_asm!(include_str!("exception.s"));

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// The entry point of every service call taken by the secure vectors.
#[no_mangle]
extern "C" fn smc_dispatch(function_id: u64, arg0: u64, arg1: u64) -> i64 {
    i64::from(crate::psci::call(function_id, arg0, arg1))
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The processor's current privilege level.
pub fn current_privilege_level() -> (PrivilegeLevel, &'static str) {
    match CurrentEL.read(CurrentEL::EL) {
        3 => (PrivilegeLevel::Monitor, "EL3"),
        2 => (PrivilegeLevel::Hypervisor, "EL2"),
        1 => (PrivilegeLevel::Kernel, "EL1"),
        _ => (PrivilegeLevel::Unknown, "Unknown"),
    }
}

/// Point the highest implemented exception level's vectors at the service dispatcher.
///
/// Returns false when the firmware does not own that level, in which case no service can be
/// provided.
pub fn install_secure_vectors() -> bool {
    extern "Rust" {
        static __secure_vectors: UnsafeCell<()>;
    }

    let vbar = unsafe { __secure_vectors.get() as u64 };

    match CurrentEL.read(CurrentEL::EL) {
        3 if !cfg!(feature = "armv8r") => {
            write_sysreg!("vbar_el3", vbar);
            cpu::instruction_sync_barrier();
            true
        }
        2 if cfg!(feature = "armv8r") => {
            write_sysreg!("vbar_el2", vbar);
            cpu::instruction_sync_barrier();
            true
        }
        _ => false,
    }
}
