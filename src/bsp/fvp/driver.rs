// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! BSP driver support.

use super::memory::map;
use crate::{bsp::device_driver, console, driver::interface::DeviceDriver};

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static PL011_UART: device_driver::PL011Uart =
    unsafe { device_driver::PL011Uart::new(map::mmio::PL011_UART_START) };

static V2M_SYSREGS: device_driver::V2mSysregs =
    unsafe { device_driver::V2mSysregs::new(map::mmio::SYSREGS_START) };

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Initialize the board's drivers and register the UART as the global console.
///
/// Called by the boot core, once, before any printing happens.
pub fn init() {
    static DRIVERS: [&(dyn DeviceDriver + Sync); 2] = [&PL011_UART, &V2M_SYSREGS];

    for drv in DRIVERS {
        if let Err(msg) = unsafe { drv.init() } {
            panic!("Error initializing driver: {}: {}", drv.compatible(), msg);
        }
    }

    console::register_console(&PL011_UART);
}
