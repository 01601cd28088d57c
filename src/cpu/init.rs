// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025 The springboard developers

//! Per-core architectural state initialization.
//!
//! The kernel must find the machine in a well-defined configuration: nothing traps to the secure
//! world that the kernel may legitimately touch, optional extensions are enabled to their maximum,
//! and registers that reset to UNKNOWN values are zeroed.
//!
//! Which configuration that is depends entirely on the ID register values of the executing core,
//! so the decision logic is kept as pure functions from an ID register snapshot to a target
//! configuration. The architecture binding reads the snapshot and writes the result; the logic in
//! between runs identically on the build host, against in-memory register values.

#[cfg(all(target_arch = "aarch64", target_os = "none"))]
#[path = "../_arch/aarch64/cpu/init.rs"]
mod arch_init;

#[cfg(all(target_arch = "arm", target_os = "none"))]
#[path = "../_arch/aarch32/cpu/init.rs"]
mod arch_init;

#[cfg(not(target_os = "none"))]
#[path = "../_arch/host/cpu/init.rs"]
mod arch_init;

use tock_registers::{interfaces::Readable, register_bitfields, registers::InMemoryRegister};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {u64,
    pub ID_AA64ISAR0 [
        TME OFFSET(24) NUMBITS(4) []
    ],
    pub ID_AA64ISAR1 [
        GPI OFFSET(28) NUMBITS(4) [],
        GPA OFFSET(24) NUMBITS(4) [],
        API OFFSET(8) NUMBITS(4) [],
        APA OFFSET(4) NUMBITS(4) []
    ],
    pub ID_AA64ISAR2 [
        APA3 OFFSET(12) NUMBITS(4) [],
        GPA3 OFFSET(8) NUMBITS(4) []
    ],
    pub ID_AA64MMFR0 [
        ECV OFFSET(60) NUMBITS(4) [],
        FGT OFFSET(56) NUMBITS(4) [],
        MSA_FRAC OFFSET(52) NUMBITS(4) [],
        MSA OFFSET(48) NUMBITS(4) []
    ],
    pub ID_AA64MMFR1 [
        HCX OFFSET(40) NUMBITS(4) []
    ],
    pub ID_AA64MMFR3 [
        D128 OFFSET(32) NUMBITS(4) [],
        S2POE OFFSET(20) NUMBITS(4) [],
        S1POE OFFSET(16) NUMBITS(4) [],
        S2PIE OFFSET(12) NUMBITS(4) [],
        S1PIE OFFSET(8) NUMBITS(4) [],
        SCTLRX OFFSET(4) NUMBITS(4) [],
        TCRX OFFSET(0) NUMBITS(4) []
    ],
    pub ID_AA64PFR0 [
        CSV2 OFFSET(56) NUMBITS(4) [],
        SVE OFFSET(32) NUMBITS(4) [],
        RAS OFFSET(28) NUMBITS(4) []
    ],
    pub ID_AA64PFR1 [
        THE OFFSET(48) NUMBITS(4) [],
        CSV2_FRAC OFFSET(32) NUMBITS(4) [],
        SME OFFSET(24) NUMBITS(4) [],
        MTE OFFSET(8) NUMBITS(4) []
    ],
    pub ID_AA64DFR0 [
        BRBE OFFSET(52) NUMBITS(4) [],
        TRACEBUFFER OFFSET(44) NUMBITS(4) [],
        PMSVER OFFSET(32) NUMBITS(4) [],
        PMUVER OFFSET(8) NUMBITS(4) [],
        DEBUGVER OFFSET(0) NUMBITS(4) []
    ],
    pub ID_AA64SMFR0 [
        FA64 OFFSET(63) NUMBITS(1) []
    ]
}

/// A snapshot of the ID registers consulted during core initialization.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureRegisters {
    pub id_aa64isar0: u64,
    pub id_aa64isar1: u64,
    pub id_aa64isar2: u64,
    pub id_aa64mmfr0: u64,
    pub id_aa64mmfr1: u64,
    pub id_aa64mmfr3: u64,
    pub id_aa64pfr0: u64,
    pub id_aa64pfr1: u64,
    pub id_aa64dfr0: u64,
    pub id_aa64smfr0: u64,
}

/// SCR_EL3 bit assignments.
pub mod scr {
    pub const NS: u64 = 1 << 0;
    pub const RES1: u64 = 0b11 << 4;
    pub const HCE: u64 = 1 << 8;
    pub const RW: u64 = 1 << 10;
    pub const APK: u64 = 1 << 16;
    pub const API: u64 = 1 << 17;
    pub const ATA: u64 = 1 << 26;
    pub const FGTEN: u64 = 1 << 27;
    pub const ECVEN: u64 = 1 << 28;
    pub const TME: u64 = 1 << 34;
    pub const HXEN: u64 = 1 << 38;
    pub const ENTP2: u64 = 1 << 41;
    pub const TCR2EN: u64 = 1 << 43;
    pub const SCTLR2EN: u64 = 1 << 44;
    pub const PIEN: u64 = 1 << 45;
    pub const D128EN: u64 = 1 << 47;
    pub const RCWMASKEN: u64 = 1 << 50;
    pub const FGTEN2: u64 = 1 << 59;
}

/// MDCR_EL3 bit assignments.
pub mod mdcr {
    /// Profiling buffer: non-secure owning translation regime, no trap.
    pub const NSPB_NS_NOTRAP: u64 = 0b11 << 12;
    /// Trace buffer: non-secure owning translation regime, no trap.
    pub const NSTB_NS_NOTRAP: u64 = 0b11 << 24;
    /// Branch record buffer: accessible, recording not prohibited.
    pub const SBRBE_NOTRAP: u64 = 0b11 << 32;
    pub const ENPMSN: u64 = 1 << 36;
    pub const EBWE: u64 = 1 << 43;
    pub const ENPM2: u64 = 1 << 48;
}

/// CPTR_EL3 bit assignments.
pub mod cptr_el3 {
    pub const EZ: u64 = 1 << 8;
    pub const ESM: u64 = 1 << 12;
}

/// HCR_EL2 bit assignments.
pub mod hcr {
    pub const APK: u64 = 1 << 40;
    pub const API: u64 = 1 << 41;
    pub const FIEN: u64 = 1 << 47;
    pub const ENSCXT: u64 = 1 << 53;
}

/// ZCR_EL3 values.
pub mod zcr {
    /// Request the maximum implemented vector length.
    pub const LEN_MAX: u64 = 0xf;
}

/// SMCR_EL3 values.
pub mod smcr {
    pub const FA64: u64 = 1 << 31;
    /// Request the maximum implemented streaming vector length.
    pub const LEN_MAX: u64 = 0xf;
}

/// VTCR_EL2 (Armv8-R) bit assignments.
pub mod vtcr {
    /// EL1&0 use the virtual memory system architecture.
    pub const MSA_VMSA: u64 = 1 << 31;
}

/// CPTR_EL2 (Armv8-R) values.
pub mod cptr_el2 {
    pub const RES1: u64 = 0x33ff;
}

/// The secure monitor configuration for one core, as derived from its ID registers.
///
/// `scr`, `cptr` and `mdcr` are full target values. The `clear_*` flags request zeroing of
/// registers that only exist when the corresponding feature does, and whose reset value is
/// UNKNOWN. `zcr`/`smcr` are written after the CPTR traps have been opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    pub scr: u64,
    pub cptr: u64,
    pub mdcr: u64,
    pub zcr: Option<u64>,
    pub smcr: Option<u64>,
    pub clear_fine_grained_traps2: bool,
    pub clear_tcr2: bool,
    pub clear_sctlr2: bool,
}

/// The EL2 configuration for one core of an Armv8-R system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HypervisorConfig {
    /// Bits OR-ed into HCR_EL2 on top of its reset value.
    pub hcr_set: u64,
    pub vtcr: u64,
    pub vstcr: u64,
    pub cptr: u64,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl FeatureRegisters {
    /// Whether any flavor of pointer authentication is implemented.
    fn has_pauth(&self) -> bool {
        let isar1 = InMemoryRegister::<u64, ID_AA64ISAR1::Register>::new(self.id_aa64isar1);
        let isar2 = InMemoryRegister::<u64, ID_AA64ISAR2::Register>::new(self.id_aa64isar2);

        isar1.read(ID_AA64ISAR1::APA) != 0
            || isar1.read(ID_AA64ISAR1::API) != 0
            || isar1.read(ID_AA64ISAR1::GPA) != 0
            || isar1.read(ID_AA64ISAR1::GPI) != 0
            || isar2.read(ID_AA64ISAR2::APA3) != 0
            || isar2.read(ID_AA64ISAR2::GPA3) != 0
    }
}

impl MonitorConfig {
    /// Derive the EL3 configuration from an ID register snapshot.
    ///
    /// The policy throughout: hand every discovered extension to the non-secure world, untrapped
    /// and at full capability.
    pub fn compute(regs: &FeatureRegisters, kernel_is_32bit: bool) -> Self {
        let isar0 = InMemoryRegister::<u64, ID_AA64ISAR0::Register>::new(regs.id_aa64isar0);
        let mmfr0 = InMemoryRegister::<u64, ID_AA64MMFR0::Register>::new(regs.id_aa64mmfr0);
        let mmfr1 = InMemoryRegister::<u64, ID_AA64MMFR1::Register>::new(regs.id_aa64mmfr1);
        let mmfr3 = InMemoryRegister::<u64, ID_AA64MMFR3::Register>::new(regs.id_aa64mmfr3);
        let pfr0 = InMemoryRegister::<u64, ID_AA64PFR0::Register>::new(regs.id_aa64pfr0);
        let pfr1 = InMemoryRegister::<u64, ID_AA64PFR1::Register>::new(regs.id_aa64pfr1);
        let dfr0 = InMemoryRegister::<u64, ID_AA64DFR0::Register>::new(regs.id_aa64dfr0);
        let smfr0 = InMemoryRegister::<u64, ID_AA64SMFR0::Register>::new(regs.id_aa64smfr0);

        let mut scr = scr::RES1 | scr::NS | scr::HCE;
        let mut cptr = 0;
        let mut mdcr = 0;
        let mut zcr = None;
        let mut smcr = None;
        let mut clear_fine_grained_traps2 = false;
        let mut clear_tcr2 = false;
        let mut clear_sctlr2 = false;

        // A 32-bit kernel enters EL1 in AArch32, everything else gets AArch64.
        if !kernel_is_32bit {
            scr |= scr::RW;
        }

        if regs.has_pauth() {
            scr |= scr::APK | scr::API;
        }

        if isar0.read(ID_AA64ISAR0::TME) != 0 {
            scr |= scr::TME;
        }

        let fgt = mmfr0.read(ID_AA64MMFR0::FGT);
        if fgt != 0 {
            scr |= scr::FGTEN;

            if fgt >= 2 {
                scr |= scr::FGTEN2;
                clear_fine_grained_traps2 = true;
            }
        }

        if mmfr0.read(ID_AA64MMFR0::ECV) >= 2 {
            scr |= scr::ECVEN;
        }

        if mmfr1.read(ID_AA64MMFR1::HCX) != 0 {
            scr |= scr::HXEN;
        }

        if mmfr3.read(ID_AA64MMFR3::TCRX) != 0 {
            scr |= scr::TCR2EN;
            clear_tcr2 = true;
        }

        if mmfr3.read(ID_AA64MMFR3::S1PIE) != 0
            || mmfr3.read(ID_AA64MMFR3::S2PIE) != 0
            || mmfr3.read(ID_AA64MMFR3::S1POE) != 0
            || mmfr3.read(ID_AA64MMFR3::S2POE) != 0
        {
            scr |= scr::PIEN;
        }

        if pfr1.read(ID_AA64PFR1::MTE) >= 2 {
            scr |= scr::ATA;
        }

        if mmfr3.read(ID_AA64MMFR3::SCTLRX) != 0 {
            scr |= scr::SCTLR2EN;
            clear_sctlr2 = true;
        }

        if mmfr3.read(ID_AA64MMFR3::D128) != 0 {
            scr |= scr::D128EN;
        }

        if pfr1.read(ID_AA64PFR1::THE) != 0 {
            scr |= scr::RCWMASKEN;
        }

        let pmsver = dfr0.read(ID_AA64DFR0::PMSVER);
        if pmsver != 0 {
            mdcr |= mdcr::NSPB_NS_NOTRAP;

            if pmsver >= 3 {
                mdcr |= mdcr::ENPMSN;
            }
        }

        if dfr0.read(ID_AA64DFR0::TRACEBUFFER) != 0 {
            mdcr |= mdcr::NSTB_NS_NOTRAP;
        }

        if dfr0.read(ID_AA64DFR0::BRBE) != 0 {
            mdcr |= mdcr::SBRBE_NOTRAP;
        }

        if dfr0.read(ID_AA64DFR0::DEBUGVER) >= 0xb {
            mdcr |= mdcr::EBWE;
        }

        let pmuver = dfr0.read(ID_AA64DFR0::PMUVER);
        if pmuver >= 0b1001 && pmuver != 0xf {
            mdcr |= mdcr::ENPM2;
        }

        if pfr0.read(ID_AA64PFR0::SVE) != 0 {
            cptr |= cptr_el3::EZ;
            zcr = Some(zcr::LEN_MAX);
        }

        if pfr1.read(ID_AA64PFR1::SME) != 0 {
            cptr |= cptr_el3::ESM;
            scr |= scr::ENTP2;

            let mut val = smcr::LEN_MAX;
            if smfr0.read(ID_AA64SMFR0::FA64) != 0 {
                val |= smcr::FA64;
            }
            smcr = Some(val);
        }

        Self {
            scr,
            cptr,
            mdcr,
            zcr,
            smcr,
            clear_fine_grained_traps2,
            clear_tcr2,
            clear_sctlr2,
        }
    }
}

impl HypervisorConfig {
    /// Derive the EL2 configuration for an Armv8-R core.
    ///
    /// The kernel is entered at EL1 under a VMSA translation regime, so a core whose memory
    /// system cannot provide VMSA at EL1&0 is unusable.
    pub fn compute(regs: &FeatureRegisters) -> Result<Self, &'static str> {
        let mmfr0 = InMemoryRegister::<u64, ID_AA64MMFR0::Register>::new(regs.id_aa64mmfr0);
        let pfr0 = InMemoryRegister::<u64, ID_AA64PFR0::Register>::new(regs.id_aa64pfr0);
        let pfr1 = InMemoryRegister::<u64, ID_AA64PFR1::Register>::new(regs.id_aa64pfr1);

        if mmfr0.read(ID_AA64MMFR0::MSA) != 0xf || mmfr0.read(ID_AA64MMFR0::MSA_FRAC) < 2 {
            return Err("CPU does not support VMSA at EL1, cannot boot a kernel");
        }

        let mut hcr_set = 0;

        let csv2 = pfr0.read(ID_AA64PFR0::CSV2);
        if csv2 >= 2 || (csv2 == 1 && pfr1.read(ID_AA64PFR1::CSV2_FRAC) >= 2) {
            hcr_set |= hcr::ENSCXT;
        }

        if pfr0.read(ID_AA64PFR0::RAS) >= 2 {
            hcr_set |= hcr::FIEN;
        }

        if regs.has_pauth() {
            hcr_set |= hcr::APK | hcr::API;
        }

        Ok(Self {
            hcr_set,
            vtcr: vtcr::MSA_VMSA,
            vstcr: 0,
            cptr: cptr_el2::RES1,
        })
    }
}

/// Write the architectural state the kernel expects to find on the executing core.
///
/// Must run on every core, exactly once, during its bring-up turn.
pub fn initialize_core_state(core: usize) {
    arch_init::init_core_state(core);

    // The counter frequency is advertised from any entry level, so it is not part of the
    // privilege-gated configuration above.
    arch_init::set_counter_frequency();
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(regs: &FeatureRegisters) -> MonitorConfig {
        MonitorConfig::compute(regs, false)
    }

    /// The counter frequency register is programmed on every core, even when the entry level
    /// keeps the privilege-gated configuration from running.
    #[test]
    fn counter_frequency_programmed_unconditionally() {
        initialize_core_state(1);

        assert!(arch_init::counter_frequency_programmed());
    }

    /// With all features absent, only the baseline routing bits are set and nothing is trapped.
    #[test]
    fn baseline_monitor_config() {
        let cfg = compute(&FeatureRegisters::default());

        assert_eq!(cfg.scr, scr::RES1 | scr::NS | scr::HCE | scr::RW);
        assert_eq!(cfg.cptr, 0);
        assert_eq!(cfg.mdcr, 0);
        assert_eq!(cfg.zcr, None);
        assert_eq!(cfg.smcr, None);
        assert!(!cfg.clear_fine_grained_traps2);
        assert!(!cfg.clear_tcr2);
        assert!(!cfg.clear_sctlr2);
    }

    /// A 32-bit kernel must not get the lower-EL AArch64 bit.
    #[test]
    fn kernel_32_drops_rw() {
        let cfg = MonitorConfig::compute(&FeatureRegisters::default(), true);

        assert_eq!(cfg.scr & scr::RW, 0);
    }

    /// Pointer authentication keys are untrapped whichever ID register advertises them.
    #[test]
    fn pauth_enables_key_access() {
        let via_isar1 = FeatureRegisters {
            id_aa64isar1: 1 << 4, // APA
            ..Default::default()
        };
        let via_isar2 = FeatureRegisters {
            id_aa64isar2: 1 << 12, // APA3
            ..Default::default()
        };

        for regs in [via_isar1, via_isar2] {
            let cfg = compute(&regs);
            assert_eq!(cfg.scr & (scr::APK | scr::API), scr::APK | scr::API);
        }

        let cfg = compute(&FeatureRegisters::default());
        assert_eq!(cfg.scr & (scr::APK | scr::API), 0);
    }

    /// Fine-grained traps: version 1 only opens the traps, version 2 additionally requires the
    /// second-generation trap registers to be zeroed.
    #[test]
    fn fine_grained_trap_versions() {
        let v1 = compute(&FeatureRegisters {
            id_aa64mmfr0: 1 << 56,
            ..Default::default()
        });
        assert_ne!(v1.scr & scr::FGTEN, 0);
        assert_eq!(v1.scr & scr::FGTEN2, 0);
        assert!(!v1.clear_fine_grained_traps2);

        let v2 = compute(&FeatureRegisters {
            id_aa64mmfr0: 2 << 56,
            ..Default::default()
        });
        assert_ne!(v2.scr & scr::FGTEN, 0);
        assert_ne!(v2.scr & scr::FGTEN2, 0);
        assert!(v2.clear_fine_grained_traps2);
    }

    /// The enhanced counter virtualization bit needs the self-synchronized variant.
    #[test]
    fn ecv_requires_version_two() {
        let v1 = compute(&FeatureRegisters {
            id_aa64mmfr0: 1 << 60,
            ..Default::default()
        });
        assert_eq!(v1.scr & scr::ECVEN, 0);

        let v2 = compute(&FeatureRegisters {
            id_aa64mmfr0: 2 << 60,
            ..Default::default()
        });
        assert_ne!(v2.scr & scr::ECVEN, 0);
    }

    /// Memory tagging only gets allocation tag access from the full (non-EL0-only) version on.
    #[test]
    fn mte_requires_full_version() {
        let instruction_only = compute(&FeatureRegisters {
            id_aa64pfr1: 1 << 8,
            ..Default::default()
        });
        assert_eq!(instruction_only.scr & scr::ATA, 0);

        let full = compute(&FeatureRegisters {
            id_aa64pfr1: 2 << 8,
            ..Default::default()
        });
        assert_ne!(full.scr & scr::ATA, 0);
    }

    /// Extended register presence flags request both the enable bit and the UNKNOWN-reset zeroing.
    #[test]
    fn extended_register_zeroing() {
        let cfg = compute(&FeatureRegisters {
            id_aa64mmfr3: (1 << 0) | (1 << 4), // TCRX | SCTLRX
            ..Default::default()
        });

        assert_ne!(cfg.scr & scr::TCR2EN, 0);
        assert_ne!(cfg.scr & scr::SCTLR2EN, 0);
        assert!(cfg.clear_tcr2);
        assert!(cfg.clear_sctlr2);
    }

    /// Permission indirection and overlay flavors all funnel into the one enable bit.
    #[test]
    fn permission_indirection_enable() {
        for shift in [8, 12, 16, 20] {
            let cfg = compute(&FeatureRegisters {
                id_aa64mmfr3: 1 << shift,
                ..Default::default()
            });
            assert_ne!(cfg.scr & scr::PIEN, 0);
        }
    }

    /// Debug and profiling features map onto MDCR_EL3.
    #[test]
    fn debug_features_in_mdcr() {
        let spe_v1 = compute(&FeatureRegisters {
            id_aa64dfr0: 1 << 32,
            ..Default::default()
        });
        assert_eq!(spe_v1.mdcr, mdcr::NSPB_NS_NOTRAP);

        let spe_v3 = compute(&FeatureRegisters {
            id_aa64dfr0: 3 << 32,
            ..Default::default()
        });
        assert_eq!(spe_v3.mdcr, mdcr::NSPB_NS_NOTRAP | mdcr::ENPMSN);

        let trbe = compute(&FeatureRegisters {
            id_aa64dfr0: 1 << 44,
            ..Default::default()
        });
        assert_eq!(trbe.mdcr, mdcr::NSTB_NS_NOTRAP);

        let brbe = compute(&FeatureRegisters {
            id_aa64dfr0: 1 << 52,
            ..Default::default()
        });
        assert_eq!(brbe.mdcr, mdcr::SBRBE_NOTRAP);

        let debug_v8p9 = compute(&FeatureRegisters {
            id_aa64dfr0: 0xb,
            ..Default::default()
        });
        assert_eq!(debug_v8p9.mdcr, mdcr::EBWE);

        let pmu_v3p9 = compute(&FeatureRegisters {
            id_aa64dfr0: 0b1001 << 8,
            ..Default::default()
        });
        assert_eq!(pmu_v3p9.mdcr, mdcr::ENPM2);

        // An IMPLEMENTATION DEFINED PMU gets nothing.
        let pmu_impdef = compute(&FeatureRegisters {
            id_aa64dfr0: 0xf << 8,
            ..Default::default()
        });
        assert_eq!(pmu_impdef.mdcr, 0);
    }

    /// SVE is untrapped and cranked to the maximum vector length.
    #[test]
    fn sve_full_length() {
        let cfg = compute(&FeatureRegisters {
            id_aa64pfr0: 1 << 32,
            ..Default::default()
        });

        assert_ne!(cfg.cptr & cptr_el3::EZ, 0);
        assert_eq!(cfg.zcr, Some(zcr::LEN_MAX));
    }

    /// SME is untrapped, TPIDR2 access is allowed, and FA64 is passed through when present.
    #[test]
    fn sme_full_length() {
        let plain = compute(&FeatureRegisters {
            id_aa64pfr1: 1 << 24,
            ..Default::default()
        });
        assert_ne!(plain.cptr & cptr_el3::ESM, 0);
        assert_ne!(plain.scr & scr::ENTP2, 0);
        assert_eq!(plain.smcr, Some(smcr::LEN_MAX));

        let fa64 = compute(&FeatureRegisters {
            id_aa64pfr1: 1 << 24,
            id_aa64smfr0: 1 << 63,
            ..Default::default()
        });
        assert_eq!(fa64.smcr, Some(smcr::LEN_MAX | smcr::FA64));
    }

    /// An Armv8-R core without VMSA support at EL1 is rejected.
    #[test]
    fn armv8r_requires_vmsa() {
        assert!(HypervisorConfig::compute(&FeatureRegisters::default()).is_err());

        let pmsa_only = FeatureRegisters {
            id_aa64mmfr0: 0xf << 48, // MSA, but MSA_FRAC == 0
            ..Default::default()
        };
        assert!(HypervisorConfig::compute(&pmsa_only).is_err());
    }

    /// A VMSA-capable Armv8-R core gets the baseline EL2 configuration.
    #[test]
    fn armv8r_baseline() {
        let regs = FeatureRegisters {
            id_aa64mmfr0: (0xf << 48) | (2 << 52),
            ..Default::default()
        };
        let cfg = HypervisorConfig::compute(&regs).unwrap();

        assert_eq!(cfg.hcr_set, 0);
        assert_eq!(cfg.vtcr, vtcr::MSA_VMSA);
        assert_eq!(cfg.vstcr, 0);
        assert_eq!(cfg.cptr, cptr_el2::RES1);
    }

    /// Armv8-R speculation and RAS mitigations follow the ID registers.
    #[test]
    fn armv8r_mitigation_bits() {
        let base = (0xf << 48) | (2 << 52);

        let csv2 = FeatureRegisters {
            id_aa64mmfr0: base,
            id_aa64pfr0: 2 << 56,
            ..Default::default()
        };
        assert_ne!(
            HypervisorConfig::compute(&csv2).unwrap().hcr_set & hcr::ENSCXT,
            0
        );

        let csv2_frac = FeatureRegisters {
            id_aa64mmfr0: base,
            id_aa64pfr0: 1 << 56,
            id_aa64pfr1: 2 << 32,
            ..Default::default()
        };
        assert_ne!(
            HypervisorConfig::compute(&csv2_frac).unwrap().hcr_set & hcr::ENSCXT,
            0
        );

        let ras = FeatureRegisters {
            id_aa64mmfr0: base,
            id_aa64pfr0: 2 << 28,
            ..Default::default()
        };
        assert_ne!(
            HypervisorConfig::compute(&ras).unwrap().hcr_set & hcr::FIEN,
            0
        );
    }
}
