// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Arm Ltd. peripheral drivers.

mod pl011_uart;
mod v2m_sysregs;

pub use pl011_uart::*;
pub use v2m_sysregs::*;
