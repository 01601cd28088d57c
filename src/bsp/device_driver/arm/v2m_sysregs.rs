// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Versatile Express system register block driver.
//!
//! Only one job here: route the CLCD video output through the motherboard mux, so a kernel that
//! drives the CLCD actually gets pixels out. The kernel itself cannot do this, the config bus is
//! not part of the kernel-visible platform.
//!
//! # Resources
//!
//! - <https://developer.arm.com/documentation/dui0447/latest>

use crate::{bsp::device_driver::common::MMIODerefWrapper, driver};
use tock_registers::{
    interfaces::Writeable, register_bitfields, register_structs,
    registers::{ReadWrite, WriteOnly},
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// System Configuration Control Register.
    SYS_CFGCTRL [
        /// Start a transfer.
        START OFFSET(31) NUMBITS(1) [],

        /// Transfer direction, from the config controller's point of view.
        WRITE OFFSET(30) NUMBITS(1) [],

        /// Config function to access.
        FUNCTION OFFSET(20) NUMBITS(6) [
            MuxFpga = 7
        ],

        /// Target site.
        SITE OFFSET(16) NUMBITS(2) [
            Motherboard = 0
        ]
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    pub RegisterBlock {
        (0x00 => _reserved1),
        (0xa0 => SYS_CFGDATA: ReadWrite<u32>),
        (0xa4 => SYS_CFGCTRL: WriteOnly<u32, SYS_CFGCTRL::Register>),
        (0xa8 => @END),
    }
}

type Registers = MMIODerefWrapper<RegisterBlock>;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Representation of the system register block.
pub struct V2mSysregs {
    registers: Registers,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl V2mSysregs {
    pub const COMPATIBLE: &'static str = "V2M Sysregs";

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide a correct MMIO start address.
    pub const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            registers: Registers::new(mmio_start_addr),
        }
    }
}

//------------------------------------------------------------------------------
// OS Interface Code
//------------------------------------------------------------------------------

impl driver::interface::DeviceDriver for V2mSysregs {
    fn compatible(&self) -> &'static str {
        Self::COMPATIBLE
    }

    unsafe fn init(&self) -> Result<(), &'static str> {
        // Route the CLCD to the motherboard.
        self.registers.SYS_CFGDATA.set(0);
        self.registers.SYS_CFGCTRL.write(
            SYS_CFGCTRL::START::SET
                + SYS_CFGCTRL::WRITE::SET
                + SYS_CFGCTRL::FUNCTION::MuxFpga
                + SYS_CFGCTRL::SITE::Motherboard,
        );

        Ok(())
    }
}
