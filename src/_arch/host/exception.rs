// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Host binding of exception handling.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::exception::arch_exception

use crate::exception::PrivilegeLevel;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The processor's current privilege level.
pub fn current_privilege_level() -> (PrivilegeLevel, &'static str) {
    (PrivilegeLevel::Unknown, "Host")
}

/// On the host the secure vector install trivially succeeds, so the PSCI bootstrap takes the
/// same path as a firmware owning the highest exception level.
pub fn install_secure_vectors() -> bool {
    true
}
