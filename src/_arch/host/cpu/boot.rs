// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Host binding of the kernel handover.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::boot::arch_boot

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// A recorded kernel handover, unwound through the would-be jump.
///
/// Tests catch this as the panic payload of the thread that played the released core; the
/// unwinding stands in for the one-way control transfer.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpRecord {
    pub addr: u64,
    pub args: [u64; 4],
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Hand the executing core to the kernel.
#[cfg(test)]
pub fn jump_kernel(addr: u64, args: [u64; 4]) -> ! {
    std::panic::panic_any(JumpRecord { addr, args })
}

#[cfg(not(test))]
pub fn jump_kernel(_addr: u64, _args: [u64; 4]) -> ! {
    crate::cpu::wait_forever()
}
