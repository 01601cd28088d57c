// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Device driver.

#[cfg(feature = "bsp_fvp")]
mod arm;
mod common;

#[cfg(feature = "bsp_fvp")]
pub use arm::*;
