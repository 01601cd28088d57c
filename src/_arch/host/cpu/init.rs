// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Host binding of the per-core state initialization.
//!
//! The configuration derivation itself is architecture-independent and fully covered on the
//! host; only the register writes have no equivalent here.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::init::arch_init

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

pub fn init_core_state(_core: usize) {}

#[cfg(test)]
std::thread_local! {
    static COUNTER_FREQ_SET: core::cell::Cell<bool> = const { core::cell::Cell::new(false) };
}

/// Record the counter frequency write. Tracked per test thread, like the affinity value.
pub fn set_counter_frequency() {
    #[cfg(test)]
    COUNTER_FREQ_SET.with(|set| set.set(true));
}

#[cfg(test)]
pub fn counter_frequency_programmed() -> bool {
    COUNTER_FREQ_SET.with(|set| set.get())
}
