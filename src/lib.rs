// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Multi-core boot firmware for Arm development platforms.
//!
//! The firmware takes every core of the system out of reset, writes the
//! architectural state the kernel expects to find, publishes a PSCI
//! `CPU_ON`/`CPU_OFF` service at the secure monitor, and jumps the primary
//! core into a pre-loaded kernel image. Secondary cores park on a per-core
//! mailbox until the kernel releases them through PSCI.
//!
//! # Code organization and architecture
//!
//! The code is divided into different *modules*, each representing a typical
//! **subsystem** of the firmware. Top-level module files live directly in
//! the `src` folder.
//!
//! Most subsystems have a generic part and an architecture- or
//! board-specific part:
//!
//! - Processor architecture code lives in `src/_arch`, bound to its
//!   subsystem with `#[path]` attributes. The `_arch/host` binding maps the
//!   hardware primitives onto plain threads and fences so the protocol core
//!   is exercised by `cargo test` on the build host.
//! - Board support lives in `src/bsp`, selected by a cargo feature.
//!
//! The architecture and board parts are never imported directly by user
//! code; their public items are re-exported by the subsystem they belong
//! to.

#![cfg_attr(not(test), no_std)]

mod synchronization;

#[cfg(target_os = "none")]
mod panic_wait;

pub mod bsp;
pub mod console;
pub mod cpu;
pub mod driver;
pub mod exception;
pub mod memory;
pub mod print;
pub mod psci;

/// Version string.
pub fn version() -> &'static str {
    concat!(
        env!("CARGO_PKG_NAME"),
        " version ",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(target_os = "none")]
extern "Rust" {
    /// The early firmware entry, defined in the binary crate.
    fn firmware_init() -> !;
}
