// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Symmetric multiprocessing.

use crate::{bsp, cpu};

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Map a hardware affinity value to the board's dense logical core index.
///
/// Returns `None` for affinities the board does not list. Such cores must not take part in the
/// boot protocol.
pub fn logical_core_id(affinity: u64) -> Option<usize> {
    bsp::cpu::CORE_AFFINITIES.iter().position(|&id| id == affinity)
}

/// The logical core index of the executing core.
pub fn core_id() -> Option<usize> {
    logical_core_id(cpu::affinity_id())
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Every affinity in the board table maps back to its own index.
    #[test]
    fn logical_ids_are_dense_and_injective() {
        for (i, &affinity) in bsp::cpu::CORE_AFFINITIES.iter().enumerate() {
            assert_eq!(logical_core_id(affinity), Some(i));
        }
    }

    /// Affinities outside the table are rejected.
    #[test]
    fn unknown_affinity_is_rejected() {
        assert_eq!(logical_core_id(0xdead_beef), None);
    }

    /// The executing core's identity follows the thread-local affinity.
    #[test]
    fn core_id_follows_own_affinity() {
        cpu::set_affinity_id(bsp::cpu::CORE_AFFINITIES[1]);
        assert_eq!(core_id(), Some(1));

        cpu::set_affinity_id(0xffff_ffff);
        assert_eq!(core_id(), None);

        cpu::set_affinity_id(bsp::cpu::CORE_AFFINITIES[0]);
    }
}
