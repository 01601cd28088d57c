// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Host binding of the processor primitives.
//!
//! Maps the event and barrier instructions onto fences and scheduler hints so the boot protocol
//! can run, and be tested, as plain threads on the build host.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of
//! this file is:
//!
//! crate::cpu::arch_cpu

use core::sync::atomic::{fence, Ordering};

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// A full memory barrier.
pub fn memory_barrier() {
    fence(Ordering::SeqCst);
}

/// An instruction synchronization barrier. Context synchronization has no host equivalent.
pub fn instruction_sync_barrier() {
    fence(Ordering::SeqCst);
}

/// Wait for an event. On the host, just give the scheduler a chance.
pub fn wait_for_event() {
    #[cfg(test)]
    std::thread::yield_now();

    #[cfg(not(test))]
    core::hint::spin_loop();
}

/// Send an event. Host waiters poll, so this is a no-op.
pub fn send_event() {}

pub fn nop() {
    core::hint::spin_loop();
}

/// Park the calling context forever.
pub fn wait_forever() -> ! {
    loop {
        wait_for_event();
    }
}

/// The executing core's hardware affinity value.
#[cfg(not(test))]
pub fn affinity_id() -> u64 {
    0
}

#[cfg(test)]
std::thread_local! {
    static AFFINITY_ID: core::cell::Cell<u64> = const { core::cell::Cell::new(0) };
}

/// The executing core's hardware affinity value. Each test thread plays the role of one core.
#[cfg(test)]
pub fn affinity_id() -> u64 {
    AFFINITY_ID.with(|id| id.get())
}

/// Assign the calling thread's affinity value.
#[cfg(test)]
pub fn set_affinity_id(affinity: u64) {
    AFFINITY_ID.with(|id| id.set(affinity));
}
