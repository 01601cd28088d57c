// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! The springboard binary.
//!
//! A thin shim that is loaded alongside a kernel image and a device tree
//! blob. All cores enter here out of reset; the firmware serializes their
//! bring-up, installs a secure monitor with a PSCI `CPU_ON`/`CPU_OFF`
//! service, and finally springs into the kernel proper.
//!
//! # Code organization
//!
//! The heavy lifting lives in `lib.rs` and its modules. This file only
//! provides the early entry function that the per-core assembly stub jumps
//! to.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use springboard::{cpu, psci};

/// Early firmware code running on every core.
///
/// # Safety
///
/// - Only the per-core assembly stub may call this, exactly once per core,
///   with a valid stack and zeroed `.bss`.
#[cfg(target_os = "none")]
#[no_mangle]
unsafe fn firmware_init() -> ! {
    // A core whose affinity is not in the board's table has nowhere to go.
    let core = match cpu::smp::core_id() {
        Some(core) => core,
        None => cpu::wait_forever(),
    };

    cpu::boot::bring_up(core);

    psci::first_spin()
}

#[cfg(not(target_os = "none"))]
fn main() {}
