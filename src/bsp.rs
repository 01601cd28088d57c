// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Conditional reexporting of Board Support Packages.

mod device_driver;

#[cfg(feature = "bsp_fvp")]
mod fvp;

#[cfg(feature = "bsp_fvp")]
pub use fvp::*;
