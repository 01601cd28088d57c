// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! BSP Processor code.

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The logical index of the boot core.
pub const BOOT_CORE_ID: usize = 0;

/// Number of cores the firmware manages.
pub const NUM_CORES: usize = 4;

/// Hardware affinity values (MPIDR affinity fields) of the managed cores, in logical order.
///
/// The position in this table is the core's logical index. A core reporting an affinity that is
/// not listed here takes no part in the boot protocol.
pub const CORE_AFFINITIES: [u64; NUM_CORES] = [0x000, 0x001, 0x002, 0x003];

/// The fixed frequency of the generic timer's system counter, in Hz.
pub const COUNTER_FREQ: u64 = 24_000_000;
