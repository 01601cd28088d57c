// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Architectural per-core state initialization.
//!
//! Reads the ID register snapshot, derives the target configuration, and writes it. Registers
//! younger than the base architecture are addressed by their S-encoding; see the comments for
//! their names.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::init::arch_init

use crate::{
    bsp,
    cpu::{self, init::FeatureRegisters, read_sysreg, write_sysreg},
};
use aarch64_cpu::registers::{CurrentEL, CNTFRQ_EL0};
use tock_registers::interfaces::{Readable, Writeable};

#[cfg(not(feature = "armv8r"))]
use crate::cpu::init::MonitorConfig;

#[cfg(feature = "armv8r")]
use crate::{cpu::init::HypervisorConfig, println};
#[cfg(feature = "armv8r")]
use aarch64_cpu::registers::{MIDR_EL1, MPIDR_EL1};

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// Snapshot the ID registers the configuration derivation depends on.
fn feature_registers() -> FeatureRegisters {
    FeatureRegisters {
        id_aa64isar0: read_sysreg!("id_aa64isar0_el1"),
        id_aa64isar1: read_sysreg!("id_aa64isar1_el1"),
        id_aa64isar2: read_sysreg!("S3_0_C0_C6_2"), // ID_AA64ISAR2_EL1
        id_aa64mmfr0: read_sysreg!("id_aa64mmfr0_el1"),
        id_aa64mmfr1: read_sysreg!("id_aa64mmfr1_el1"),
        id_aa64mmfr3: read_sysreg!("S3_0_C0_C7_3"), // ID_AA64MMFR3_EL1
        id_aa64pfr0: read_sysreg!("id_aa64pfr0_el1"),
        id_aa64pfr1: read_sysreg!("id_aa64pfr1_el1"),
        id_aa64dfr0: read_sysreg!("id_aa64dfr0_el1"),
        id_aa64smfr0: read_sysreg!("S3_0_C0_C4_5"), // ID_AA64SMFR0_EL1
    }
}

/// Write the EL3 configuration for the executing core.
#[cfg(not(feature = "armv8r"))]
fn init_el3() {
    let config = MonitorConfig::compute(&feature_registers(), cfg!(feature = "kernel_32"));

    write_sysreg!("scr_el3", config.scr);
    write_sysreg!("cptr_el3", config.cptr);
    write_sysreg!("mdcr_el3", config.mdcr);

    // The enables written above gate the registers below.
    cpu::instruction_sync_barrier();

    if config.clear_fine_grained_traps2 {
        write_sysreg!("S3_4_C3_C1_0", 0); // HDFGRTR2_EL2
        write_sysreg!("S3_4_C3_C1_1", 0); // HDFGWTR2_EL2
        write_sysreg!("S3_4_C3_C1_2", 0); // HFGRTR2_EL2
        write_sysreg!("S3_4_C3_C1_3", 0); // HFGWTR2_EL2
        write_sysreg!("S3_4_C3_C1_7", 0); // HFGITR2_EL2
    }

    if config.clear_tcr2 {
        write_sysreg!("S3_4_C2_C0_3", 0); // TCR2_EL2
        write_sysreg!("S3_0_C2_C0_3", 0); // TCR2_EL1
    }

    if config.clear_sctlr2 {
        write_sysreg!("S3_4_C1_C0_3", 0); // SCTLR2_EL2
        write_sysreg!("S3_0_C1_C0_3", 0); // SCTLR2_EL1
    }

    if let Some(zcr) = config.zcr {
        write_sysreg!("S3_6_C1_C2_0", zcr); // ZCR_EL3
    }

    if let Some(smcr) = config.smcr {
        write_sysreg!("S3_6_C1_C2_6", smcr); // SMCR_EL3
    }
}

/// Write the EL2 configuration for the executing core of an Armv8-R system.
#[cfg(feature = "armv8r")]
fn init_el2_armv8r(core: usize) {
    let config = match HypervisorConfig::compute(&feature_registers()) {
        Ok(config) => config,
        Err(msg) => {
            println!("CPU{core}: FATAL: {msg}");
            cpu::wait_forever()
        }
    };

    // EL1 sees the real core's identity.
    write_sysreg!("vpidr_el2", MIDR_EL1.get());
    write_sysreg!("vmpidr_el2", MPIDR_EL1.get());

    write_sysreg!("S3_4_C2_C0_0", 0); // VSCTLR_EL2
    write_sysreg!("S3_4_C2_C6_2", config.vstcr); // VSTCR_EL2
    write_sysreg!("vtcr_el2", config.vtcr);
    write_sysreg!("cntvoff_el2", 0);
    write_sysreg!("cptr_el2", config.cptr);
    write_sysreg!("mdcr_el2", 0);
    write_sysreg!("hcr_el2", read_sysreg!("hcr_el2") | config.hcr_set);

    cpu::instruction_sync_barrier();
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Initialize the executing core's architectural state.
///
/// Entered below the highest implemented exception level there is nothing to do; a previous-stage
/// firmware owns the configuration, and the PSCI bootstrap handles the fallout.
pub fn init_core_state(_core: usize) {
    let el = CurrentEL.read(CurrentEL::EL);

    #[cfg(not(feature = "armv8r"))]
    if el == 3 {
        init_el3();
    }

    #[cfg(feature = "armv8r")]
    if el == 2 {
        init_el2_armv8r(_core);
    }
}

/// Advertise the board's fixed system counter frequency.
///
/// CNTFRQ_EL0 is writable from the entry level whether or not that is the level the full
/// configuration is gated on, so this runs on every core.
pub fn set_counter_frequency() {
    CNTFRQ_EL0.set(bsp::cpu::COUNTER_FREQ);
    cpu::instruction_sync_barrier();
}
