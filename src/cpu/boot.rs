// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Boot code.

#[cfg(all(target_arch = "aarch64", target_os = "none"))]
#[path = "../_arch/aarch64/cpu/boot.rs"]
mod arch_boot;

#[cfg(all(target_arch = "arm", target_os = "none"))]
#[path = "../_arch/aarch32/cpu/boot.rs"]
mod arch_boot;

#[cfg(not(target_os = "none"))]
#[path = "../_arch/host/cpu/boot.rs"]
mod arch_boot;

use crate::{bsp, console, cpu, exception, memory, println};
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[cfg(test)]
pub use arch_boot::JumpRecord;

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

/// The logical index of the core whose turn it is to initialize. Cores take turns in ascending
/// order; a value of `NUM_CORES` means every core is done.
static CPU_NEXT: AtomicUsize = AtomicUsize::new(0);

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// One-time global setup, done by the boot core before any turn-taking starts.
fn global_setup() {
    bsp::driver::init();

    println!("{}", crate::version());
    println!("Booting on: {}", bsp::board_name());
    println!("Entered at {}", exception::current_privilege_level().1);
    memory::print_layout();
    println!("Using PSCI");
}

/// Block until it is `core`'s turn in the bring-up sequence.
pub(crate) fn wait_turn(core: usize) {
    while CPU_NEXT.load(Ordering::Acquire) != core {
        cpu::wait_for_event();
    }
}

/// Pass the bring-up turn on to the next core.
pub(crate) fn finish_turn(core: usize) {
    CPU_NEXT.store(core + 1, Ordering::Release);
    cpu::memory_barrier();
    cpu::send_event();
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Run the serialized per-core bring-up protocol.
///
/// Every core calls this exactly once. The boot core additionally performs the global setup
/// before taking its turn, and blocks afterwards until the last core has finished, so that the
/// kernel is only ever entered on a fully initialized machine.
pub fn bring_up(core: usize) {
    if core == bsp::cpu::BOOT_CORE_ID {
        global_setup();
    }

    wait_turn(core);

    println!(
        "CPU{}: (affinity {:#05x}) initializing",
        core,
        cpu::affinity_id()
    );
    cpu::init::initialize_core_state(core);
    crate::psci::init(core);

    finish_turn(core);

    if core == bsp::cpu::BOOT_CORE_ID {
        while CPU_NEXT.load(Ordering::Acquire) != bsp::cpu::NUM_CORES {
            cpu::wait_for_event();
        }

        println!(
            "Chars written to console: {}",
            console::console().chars_written()
        );
        println!("All CPUs initialized. Entering kernel");
        println!();
    }
}

/// Park on `mailbox` until somebody publishes an address other than `invalid`, then jump there
/// with zeroed arguments.
///
/// This is the one low-level release primitive, used both by classic spin-table secondaries and
/// by PSCI `CPU_ON`.
pub fn spin(mailbox: &AtomicU64, invalid: u64) -> ! {
    let mut addr = invalid;

    while addr == invalid {
        cpu::wait_for_event();
        addr = mailbox.load(Ordering::Acquire);
    }

    arch_boot::jump_kernel(addr, [0; 4])
}

/// First release decision after bring-up.
///
/// The boot core jumps straight into the pre-loaded kernel with the boot-argument convention the
/// kernel's world expects. Everybody else invalidates their mailbox and parks on it.
pub fn first_spin(core: usize, mailbox: &AtomicU64, invalid: u64) -> ! {
    if core == bsp::cpu::BOOT_CORE_ID {
        let dtb = bsp::memory::dtb_address();

        arch_boot::jump_kernel(bsp::memory::kernel_entry_point(), kernel_boot_args(dtb))
    } else {
        mailbox.store(invalid, Ordering::Release);
        cpu::memory_barrier();

        spin(mailbox, invalid)
    }
}

/// The register arguments handed to the kernel on first entry.
///
/// A 64-bit kernel takes the DTB pointer in the first argument. A 32-bit kernel follows the
/// legacy convention: zero, an invalid machine type and the DTB pointer. A native AArch32
/// firmware always boots a 32-bit kernel, feature flag or not.
pub fn kernel_boot_args(dtb: u64) -> [u64; 4] {
    if cfg!(any(feature = "kernel_32", target_arch = "arm")) {
        [0, u64::MAX, dtb, 0]
    } else {
        [dtb, 0, 0, 0]
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::{panic, sync::Mutex, thread};

    /// Cores pass through the turn-taking gate strictly in ascending logical order, no matter in
    /// which order they arrive.
    #[test]
    fn turns_are_taken_in_ascending_core_order() {
        const NUM_CORES: usize = bsp::cpu::NUM_CORES;

        let order = Mutex::new(Vec::new());

        thread::scope(|s| {
            // Spawn in reverse so the highest core is most likely to arrive first.
            for core in (0..NUM_CORES).rev() {
                let order = &order;

                s.spawn(move || {
                    wait_turn(core);
                    order.lock().unwrap().push(core);
                    finish_turn(core);
                });
            }
        });

        assert_eq!(*order.lock().unwrap(), (0..NUM_CORES).collect::<Vec<_>>());
        assert_eq!(CPU_NEXT.load(Ordering::Acquire), NUM_CORES);
    }

    /// A parked core ignores the invalid sentinel and releases on the first real address.
    #[test]
    fn spin_releases_on_published_address() {
        const INVALID: u64 = u64::MAX;

        let mailbox = AtomicU64::new(INVALID);

        thread::scope(|s| {
            let handle = s.spawn(|| {
                let caught = panic::catch_unwind(|| spin(&mailbox, INVALID));
                caught.unwrap_err()
            });

            mailbox.store(0x8008_0000, Ordering::Release);

            let payload = handle.join().unwrap();
            let record = payload.downcast_ref::<JumpRecord>().unwrap();

            assert_eq!(record.addr, 0x8008_0000);
            assert_eq!(record.args, [0; 4]);
        });
    }

    /// 64-bit kernels get the DTB in the first argument register.
    #[cfg(not(any(feature = "kernel_32", target_arch = "arm")))]
    #[test]
    fn boot_args_64_bit_convention() {
        assert_eq!(kernel_boot_args(0x8800_0000), [0x8800_0000, 0, 0, 0]);
    }

    /// 32-bit kernels get zero, an invalid machine type, and the DTB.
    #[cfg(any(feature = "kernel_32", target_arch = "arm"))]
    #[test]
    fn boot_args_32_bit_convention() {
        assert_eq!(
            kernel_boot_args(0x8800_0000),
            [0, u64::MAX, 0x8800_0000, 0]
        );
    }
}
