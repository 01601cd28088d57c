// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! System console.

mod null_console;

use crate::synchronization::{self, NullLock};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Console interfaces.
pub mod interface {
    use core::fmt;

    /// Console write functions.
    pub trait Write {
        /// Write a single character.
        fn write_char(&self, c: char);

        /// Write a Rust format string.
        fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result;

        /// Block until the last buffered character has been physically put on the TX wire.
        fn flush(&self);
    }

    /// Console statistics.
    pub trait Statistics {
        /// Return the number of characters written.
        fn chars_written(&self) -> usize {
            0
        }
    }

    /// Trait alias for a full-fledged console.
    pub trait All: Write + Statistics {}
}

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static CUR_CONSOLE: NullLock<&'static (dyn interface::All + Sync)> =
    NullLock::new(&null_console::NULL_CONSOLE);

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------
use synchronization::interface::Mutex;

/// Register a new console.
pub fn register_console(new_console: &'static (dyn interface::All + Sync)) {
    CUR_CONSOLE.lock(|con| *con = new_console);
}

/// Return a reference to the currently registered console.
///
/// This is the global console used by all printing macros.
pub fn console() -> &'static dyn interface::All {
    CUR_CONSOLE.lock(|con| *con)
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::{
        fmt,
        sync::atomic::{AtomicUsize, Ordering},
    };

    struct CountingConsole {
        chars_written: AtomicUsize,
    }

    impl interface::Write for CountingConsole {
        fn write_char(&self, _c: char) {
            self.chars_written.fetch_add(1, Ordering::Relaxed);
        }

        fn write_fmt(&self, _args: fmt::Arguments) -> fmt::Result {
            Ok(())
        }

        fn flush(&self) {}
    }

    impl interface::Statistics for CountingConsole {
        fn chars_written(&self) -> usize {
            self.chars_written.load(Ordering::Relaxed)
        }
    }

    impl interface::All for CountingConsole {}

    /// A registered console's statistics are visible through the global accessor, which is what
    /// the boot summary reports.
    #[test]
    fn registered_console_reports_statistics() {
        static CONSOLE: CountingConsole = CountingConsole {
            chars_written: AtomicUsize::new(0),
        };

        register_console(&CONSOLE);

        console().write_char('x');
        console().write_char('y');

        assert_eq!(console().chars_written(), 2);
    }
}
