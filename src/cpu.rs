// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Processor code.

#[cfg(all(target_arch = "aarch64", target_os = "none"))]
#[path = "_arch/aarch64/cpu.rs"]
mod arch_cpu;

#[cfg(all(target_arch = "arm", target_os = "none"))]
#[path = "_arch/aarch32/cpu.rs"]
mod arch_cpu;

#[cfg(not(target_os = "none"))]
#[path = "_arch/host/cpu.rs"]
mod arch_cpu;

pub mod boot;
pub mod init;
pub mod smp;

//--------------------------------------------------------------------------------------------------
// Architectural Public Reexports
//--------------------------------------------------------------------------------------------------
pub use arch_cpu::{
    affinity_id, instruction_sync_barrier, memory_barrier, nop, send_event, wait_for_event,
    wait_forever,
};

#[cfg(all(target_arch = "aarch64", target_os = "none"))]
pub(crate) use arch_cpu::{read_sysreg, write_sysreg};

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub(crate) use arch_cpu::write_cp15;

#[cfg(test)]
pub use arch_cpu::set_affinity_id;
