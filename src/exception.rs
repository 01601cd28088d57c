// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Exception handling.

#[cfg(all(target_arch = "aarch64", target_os = "none"))]
#[path = "_arch/aarch64/exception.rs"]
mod arch_exception;

#[cfg(all(target_arch = "arm", target_os = "none"))]
#[path = "_arch/aarch32/exception.rs"]
mod arch_exception;

#[cfg(not(target_os = "none"))]
#[path = "_arch/host/exception.rs"]
mod arch_exception;

//--------------------------------------------------------------------------------------------------
// Architectural Public Reexports
//--------------------------------------------------------------------------------------------------
pub use arch_exception::{current_privilege_level, install_secure_vectors};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Kernel privilege levels.
#[allow(missing_docs)]
#[derive(Eq, PartialEq)]
pub enum PrivilegeLevel {
    Monitor,
    Hypervisor,
    Kernel,
    User,
    Unknown,
}
