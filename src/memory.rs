// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Memory Management.

use crate::{bsp, println};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// A named address range in the boot-time memory layout. `end` is exclusive.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Print the board's boot-time memory layout.
pub fn print_layout() {
    println!("Memory layout:");

    for region in bsp::memory::layout() {
        println!(
            "  [{:#010x}..{:#010x}] => {}",
            region.start, region.end, region.name
        );
    }
}
