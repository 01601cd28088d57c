// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Synchronization primitives.
//!
//! # Resources
//!
//!   - <https://doc.rust-lang.org/book/ch16-00-concurrency.html>
//!   - <https://lamport.azurewebsites.net/pubs/bakery.pdf>

use crate::cpu;
use core::{
    cell::UnsafeCell,
    sync::atomic::{fence, AtomicBool, AtomicU64, Ordering},
};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Synchronization interfaces.
pub mod interface {

    /// Any object implementing this trait guarantees exclusive access to the data wrapped within
    /// the Mutex for the duration of the provided closure.
    pub trait Mutex {
        /// The type of the data that is wrapped by this mutex.
        type Data;

        /// Locks the mutex and grants the closure temporary mutable access to the wrapped data.
        fn lock<'a, R>(&'a self, f: impl FnOnce(&'a mut Self::Data) -> R) -> R;
    }
}

/// A lock that relies on its callers for exclusion.
///
/// Does not protect against concurrent access from other cores to the contained data. This is
/// fine to use for the global console, because printing only ever happens from the core whose
/// turn it is in the strictly serialized bring-up sequence.
pub struct NullLock<T>
where
    T: ?Sized,
{
    data: UnsafeCell<T>,
}

/// Lamport's bakery lock over `NUM_CORES` participants.
///
/// A true spinlock needs atomic read-modify-write instructions, and those in turn need the data
/// caches and MMU enabled. This firmware runs with both off, so mutual exclusion is built from
/// single-copy-atomic loads and stores plus barriers only, which is exactly what the bakery
/// algorithm was designed for.
///
/// Callers identify themselves by their logical core index. The lock does not wrap the protected
/// data, because parked cores must be able to read their own mailbox entry while another core
/// holds the lock to write it.
pub struct BakeryLock<const NUM_CORES: usize> {
    choosing: [AtomicBool; NUM_CORES],
    number: [AtomicU64; NUM_CORES],
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

unsafe impl<T> Send for NullLock<T> where T: ?Sized + Send {}
unsafe impl<T> Sync for NullLock<T> where T: ?Sized + Send {}

impl<T> NullLock<T> {
    /// Create an instance.
    pub const fn new(data: T) -> Self {
        Self {
            data: UnsafeCell::new(data),
        }
    }
}

impl<const NUM_CORES: usize> BakeryLock<NUM_CORES> {
    /// Create an instance.
    pub const fn new() -> Self {
        Self {
            choosing: [const { AtomicBool::new(false) }; NUM_CORES],
            number: [const { AtomicU64::new(0) }; NUM_CORES],
        }
    }

    /// Acquire the lock as core `this`.
    ///
    /// Spins until every other core with a smaller ticket (ties broken by core index) has
    /// released again.
    pub fn acquire(&self, this: usize) {
        self.choosing[this].store(true, Ordering::SeqCst);
        fence(Ordering::SeqCst);

        let mut max = 0;
        for number in self.number.iter() {
            max = max.max(number.load(Ordering::SeqCst));
        }
        let ticket = max + 1;

        self.number[this].store(ticket, Ordering::SeqCst);
        fence(Ordering::SeqCst);
        self.choosing[this].store(false, Ordering::SeqCst);
        fence(Ordering::SeqCst);
        cpu::send_event();

        for other in 0..NUM_CORES {
            if other == this {
                continue;
            }

            while self.choosing[other].load(Ordering::SeqCst) {
                cpu::wait_for_event();
            }

            loop {
                let t = self.number[other].load(Ordering::SeqCst);

                if t == 0 || t > ticket || (t == ticket && other > this) {
                    break;
                }

                cpu::wait_for_event();
            }
        }
    }

    /// Release the lock as core `this`.
    pub fn release(&self, this: usize) {
        fence(Ordering::SeqCst);
        self.number[this].store(0, Ordering::SeqCst);
        fence(Ordering::SeqCst);
        cpu::send_event();
    }
}

//------------------------------------------------------------------------------
// OS Interface Code
//------------------------------------------------------------------------------

impl<T> interface::Mutex for NullLock<T> {
    type Data = T;

    fn lock<'a, R>(&'a self, f: impl FnOnce(&'a mut Self::Data) -> R) -> R {
        // Exclusion is guaranteed by the bring-up protocol, not by this lock.
        let data = unsafe { &mut *self.data.get() };

        f(data)
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    struct RacyCounter(UnsafeCell<u64>);
    unsafe impl Sync for RacyCounter {}

    /// BakeryLock provides mutual exclusion under contention.
    #[test]
    fn bakery_lock_is_mutually_exclusive() {
        const NUM_CORES: usize = 4;
        const ROUNDS: u64 = 500;

        let lock = BakeryLock::<NUM_CORES>::new();
        let in_critical_section = AtomicBool::new(false);
        let counter = RacyCounter(UnsafeCell::new(0));

        thread::scope(|s| {
            for this in 0..NUM_CORES {
                let lock = &lock;
                let in_critical_section = &in_critical_section;
                let counter = &counter;

                s.spawn(move || {
                    for _ in 0..ROUNDS {
                        lock.acquire(this);

                        assert!(!in_critical_section.swap(true, Ordering::SeqCst));
                        unsafe { *counter.0.get() += 1 };
                        in_critical_section.store(false, Ordering::SeqCst);

                        lock.release(this);
                    }
                });
            }
        });

        assert_eq!(unsafe { *counter.0.get() }, NUM_CORES as u64 * ROUNDS);
    }

    /// An uncontended lock can be taken and released repeatedly.
    #[test]
    fn bakery_lock_is_reentrant_after_release() {
        let lock = BakeryLock::<4>::new();

        for _ in 0..3 {
            lock.acquire(2);
            lock.release(2);
        }
    }
}
