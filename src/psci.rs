// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! PSCI: the Power State Coordination Interface service.
//!
//! The firmware publishes the two calls a kernel needs for SMP bring-up and teardown, `CPU_ON`
//! and `CPU_OFF`, on top of one shared data structure: a per-core mailbox table of release
//! addresses. An entry holds the address the core will jump to, or the invalid sentinel while
//! the core is (or is about to be) parked.
//!
//! Writers take the bakery lock; a parked core polls only its own entry and takes no lock, so
//! release and park can never deadlock each other.

use crate::{bsp, cpu, exception, println, synchronization::BakeryLock};
use core::sync::atomic::{AtomicU64, Ordering};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The mailbox sentinel. No kernel lives in the last page of the address space.
pub const ADDR_INVALID: u64 = u64::MAX;

/// PSCI return values.
pub const SUCCESS: i32 = 0;
pub const NOT_SUPPORTED: i32 = -1;
pub const INVALID_PARAMETERS: i32 = -2;
pub const DENIED: i32 = -3;
pub const ALREADY_ON: i32 = -4;

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

const FN_CPU_OFF: u64 = 0x8400_0002;

// The function id of CPU_ON encodes the calling convention. A 32-bit kernel makes SMC32 calls,
// and a native AArch32 firmware always boots one.
#[cfg(not(any(feature = "kernel_32", target_arch = "arm")))]
const FN_CPU_ON: u64 = 0xc400_0003;
#[cfg(any(feature = "kernel_32", target_arch = "arm"))]
const FN_CPU_ON: u64 = 0x8400_0003;

const NUM_CORES: usize = bsp::cpu::NUM_CORES;

/// What a core does about the service after the secure vector install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceState {
    Installed,
    ContinueWithout,
    Park,
}

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

/// The release mailboxes, one per core. Placed in a dedicated page so the memory layout report
/// can name the range the kernel will be poking at.
#[cfg_attr(target_os = "none", link_section = ".mbox")]
static BRANCH_TABLE: [AtomicU64; NUM_CORES] = [const { AtomicU64::new(ADDR_INVALID) }; NUM_CORES];

static TABLE_LOCK: BakeryLock<NUM_CORES> = BakeryLock::new();

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// Decide the degraded-capability policy after the vector install attempt.
///
/// The boot core can always still enter the kernel, service or no service. A secondary core
/// without the service is parked for good: nobody would ever be able to release it.
fn service_state(install_ok: bool, core: usize) -> ServiceState {
    if install_ok {
        ServiceState::Installed
    } else if core == bsp::cpu::BOOT_CORE_ID {
        ServiceState::ContinueWithout
    } else {
        ServiceState::Park
    }
}

/// Publish a release address for `target`. Caller must hold the table lock.
fn store_address(target: usize, address: u64) -> i32 {
    if BRANCH_TABLE[target].load(Ordering::Acquire) != ADDR_INVALID {
        return ALREADY_ON;
    }

    BRANCH_TABLE[target].store(address, Ordering::Release);
    cpu::memory_barrier();
    cpu::send_event();

    SUCCESS
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// CPU_ON: release the core with hardware affinity `target_affinity` to `address`.
pub fn cpu_on(target_affinity: u64, address: u64) -> i32 {
    let target = match cpu::smp::logical_core_id(target_affinity) {
        Some(target) => target,
        None => return INVALID_PARAMETERS,
    };

    // The bakery lock needs the caller's own identity.
    let this = match cpu::smp::core_id() {
        Some(this) => this,
        None => return DENIED,
    };

    TABLE_LOCK.acquire(this);
    let ret = store_address(target, address);
    TABLE_LOCK.release(this);

    ret
}

/// CPU_OFF: take the calling core out of service.
///
/// The core invalidates its own mailbox and parks on it. Control never returns to the caller;
/// the core re-enters the kernel at whatever address a later `CPU_ON` publishes.
pub fn cpu_off() -> ! {
    match cpu::smp::core_id() {
        Some(core) => {
            BRANCH_TABLE[core].store(ADDR_INVALID, Ordering::Release);
            cpu::memory_barrier();

            cpu::boot::spin(&BRANCH_TABLE[core], ADDR_INVALID)
        }
        None => cpu::wait_forever(),
    }
}

/// The SMC dispatcher. Unknown function ids are reported as such, per the SMC calling
/// convention.
pub fn call(function_id: u64, arg0: u64, arg1: u64) -> i32 {
    match function_id {
        FN_CPU_ON => cpu_on(arg0, arg1),
        FN_CPU_OFF => cpu_off(),
        _ => NOT_SUPPORTED,
    }
}

/// Per-core PSCI bootstrap, run during the core's bring-up turn.
///
/// Installing the service means pointing the secure vector table at the SMC dispatcher, which is
/// only possible when the firmware owns the highest implemented exception level. When it does
/// not, `service_state` decides between carrying on degraded (the kernel must cope without PSCI)
/// and parking.
pub fn init(core: usize) {
    let state = service_state(exception::install_secure_vectors(), core);

    if state != ServiceState::Installed {
        println!("CPU{core}: WARNING: PSCI not installed, not booted at the highest exception level");
    }

    if state == ServiceState::Park {
        cpu::wait_forever();
    }
}

/// The tail of the per-core boot path: hand the executing core to `first_spin` with its own
/// mailbox.
///
/// Cores with an unknown affinity have no mailbox and are parked.
pub fn first_spin() -> ! {
    match cpu::smp::core_id() {
        Some(core) => cpu::boot::first_spin(core, &BRANCH_TABLE[core], ADDR_INVALID),
        None => cpu::wait_forever(),
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::boot::JumpRecord;
    use std::{panic, thread};

    // The tests share the branch table. Each test uses its own disjoint set of target cores and
    // its own requester identity, so they can run concurrently.

    /// CPU_ON releases an off core exactly once; the second call sees it on.
    #[test]
    fn cpu_on_releases_once() {
        cpu::set_affinity_id(bsp::cpu::CORE_AFFINITIES[0]);
        let target = bsp::cpu::CORE_AFFINITIES[1];

        assert_eq!(cpu_on(target, 0x8000_1000), SUCCESS);
        assert_eq!(cpu_on(target, 0xbad0_0000), ALREADY_ON);

        // The refused call must not have clobbered the published address.
        assert_eq!(BRANCH_TABLE[1].load(Ordering::Acquire), 0x8000_1000);
    }

    /// CPU_ON rejects affinities the board does not have.
    #[test]
    fn cpu_on_rejects_unknown_affinity() {
        cpu::set_affinity_id(bsp::cpu::CORE_AFFINITIES[0]);

        assert_eq!(cpu_on(0xdead, 0x8000_0000), INVALID_PARAMETERS);
    }

    /// A successful vector install makes the service available on every core.
    #[test]
    fn bootstrap_installs_on_every_core() {
        for core in 0..NUM_CORES {
            assert_eq!(service_state(true, core), ServiceState::Installed);
        }
    }

    /// Without the secure vectors, the boot core carries on degraded while every secondary core
    /// is parked.
    #[test]
    fn bootstrap_degrades_without_secure_vectors() {
        assert_eq!(
            service_state(false, bsp::cpu::BOOT_CORE_ID),
            ServiceState::ContinueWithout
        );

        for core in (0..NUM_CORES).filter(|&core| core != bsp::cpu::BOOT_CORE_ID) {
            assert_eq!(service_state(false, core), ServiceState::Park);
        }
    }

    /// Unknown function ids fall through to NOT_SUPPORTED.
    #[test]
    fn call_rejects_unknown_function() {
        // PSCI_VERSION, deliberately not implemented.
        assert_eq!(call(0x8400_0000, 0, 0), NOT_SUPPORTED);
    }

    /// Full CPU_OFF/CPU_ON round trip: the core invalidates its mailbox, parks, and re-enters
    /// the kernel at the newly published address without ever returning to the old context.
    #[test]
    fn cpu_off_on_round_trip() {
        // Seed a stale release address, as if the core had been running since a previous CPU_ON.
        // CPU_OFF must reset it, which is also this test's cue that the core has gone down.
        BRANCH_TABLE[3].store(0x1111_0000, Ordering::Release);

        let parked = thread::spawn(|| {
            cpu::set_affinity_id(bsp::cpu::CORE_AFFINITIES[3]);

            let caught = panic::catch_unwind(|| cpu_off());
            caught.unwrap_err()
        });

        while BRANCH_TABLE[3].load(Ordering::Acquire) != ADDR_INVALID {
            thread::yield_now();
        }

        cpu::set_affinity_id(bsp::cpu::CORE_AFFINITIES[2]);
        assert_eq!(cpu_on(bsp::cpu::CORE_AFFINITIES[3], 0x9000_0000), SUCCESS);

        let payload = parked.join().unwrap();
        let record = payload.downcast_ref::<JumpRecord>().unwrap();

        assert_eq!(record.addr, 0x9000_0000);
        assert_eq!(record.args, [0; 4]);
    }

    /// The boot core's first spin jumps straight into the pre-loaded kernel with the DTB
    /// argument convention.
    #[cfg(not(any(feature = "kernel_32", target_arch = "arm")))]
    #[test]
    fn boot_core_enters_kernel_directly() {
        let handle = thread::spawn(|| {
            cpu::set_affinity_id(bsp::cpu::CORE_AFFINITIES[bsp::cpu::BOOT_CORE_ID]);

            let caught = panic::catch_unwind(|| first_spin());
            caught.unwrap_err()
        });

        let payload = handle.join().unwrap();
        let record = payload.downcast_ref::<JumpRecord>().unwrap();

        assert_eq!(record.addr, bsp::memory::kernel_entry_point());
        assert_eq!(record.args[0], bsp::memory::dtb_address());
    }
}
