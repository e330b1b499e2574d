//! Shared-vector source registers
//!
//! The Cortex-M0/M0+ mainstream parts mirror each peripheral's interrupt
//! request in a SYSCFG `ITLINEx` register, one per vector. Every part
//! latches EXTI edges in a pending register (split into rising and falling
//! halves on G0).

use strata_hal::{Family, PendingLines, PendingSource};

const SYSCFG_BASE: usize = 0x4001_0000;
const SYSCFG_ITLINE0: usize = 0x80;

/// Memory-mapped pending-source registers of one family
pub struct PendingRegisters {
    itline_base: Option<usize>,
    exti_pending: &'static [usize],
}

impl PendingRegisters {
    /// Registers of `family`
    pub const fn new(family: Family) -> Self {
        match family {
            Family::F0 => Self {
                itline_base: Some(SYSCFG_BASE + SYSCFG_ITLINE0),
                exti_pending: &[0x4001_0400 + 0x14],
            },
            Family::G0 => Self {
                itline_base: Some(SYSCFG_BASE + SYSCFG_ITLINE0),
                // RPR1, FPR1
                exti_pending: &[0x4002_1800 + 0x0C, 0x4002_1800 + 0x10],
            },
            Family::F1 | Family::L0 => Self {
                itline_base: None,
                exti_pending: &[0x4001_0400 + 0x14],
            },
            Family::F4 => Self {
                itline_base: None,
                exti_pending: &[0x4001_3C00 + 0x14],
            },
        }
    }

    #[allow(unsafe_code)]
    fn read(address: usize) -> u32 {
        // SAFETY: only fixed, always-readable status registers of the
        // selected family are passed in
        unsafe { core::ptr::read_volatile(address as *const u32) }
    }
}

impl PendingLines for PendingRegisters {
    fn is_pending(&self, source: PendingSource) -> bool {
        match source {
            PendingSource::ItLine { line, bit } => match self.itline_base {
                Some(base) => Self::read(base + 4 * usize::from(line)) & (1 << bit) != 0,
                // No status register: cannot rule the source out
                None => true,
            },
            PendingSource::Exti(line) => self
                .exti_pending
                .iter()
                .any(|&register| Self::read(register) & (1 << line) != 0),
        }
    }
}
