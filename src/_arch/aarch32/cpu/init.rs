// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural per-core state initialization, AArch32 flavor.
//!
//! The 32-bit monitor setup is a fraction of its 64-bit sibling: route the non-secure world,
//! open the FPU coprocessors to it, and advertise the counter frequency.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::init::arch_init

use crate::{
    bsp,
    cpu::{self, write_cp15},
    exception::{self, PrivilegeLevel},
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

/// SCR: non-secure, HVC enabled.
const SCR_KERNEL: u32 = (1 << 0) | (1 << 8);

/// NSACR: the non-secure world may use the VFP/SIMD coprocessors.
const NSACR_KERNEL: u32 = 0b11 << 10;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Initialize the executing core's architectural state.
///
/// Entered below monitor mode there is nothing to do; a previous-stage firmware owns the
/// configuration, and the PSCI bootstrap handles the fallout.
pub fn init_core_state(_core: usize) {
    if exception::current_privilege_level().0 != PrivilegeLevel::Monitor {
        return;
    }

    write_cp15!(0, "c1", "c1", 0, SCR_KERNEL);
    write_cp15!(0, "c1", "c1", 2, NSACR_KERNEL);

    cpu::instruction_sync_barrier();
}

/// Advertise the board's fixed system counter frequency.
///
/// CNTFRQ is writable from the entry mode whether or not that is monitor mode, so this runs on
/// every core.
pub fn set_counter_frequency() {
    write_cp15!(0, "c14", "c0", 0, bsp::cpu::COUNTER_FREQ as u32);
    cpu::instruction_sync_barrier();
}
