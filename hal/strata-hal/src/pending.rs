//! Pending interrupt source registers
//!
//! When several peripherals share one vector, some parts expose a secondary
//! register telling which of them actually raised the interrupt. The
//! interrupt dispatcher consults it through [`PendingLines`] to avoid
//! invoking unrelated handlers.

/// Location of a pending bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PendingSource {
    /// Bit of a SYSCFG interrupt line status register
    ItLine { line: u8, bit: u8 },
    /// EXTI pending register bit for a line
    Exti(u8),
}

/// Pending-source register access
pub trait PendingLines {
    /// Check if the given source is currently pending
    fn is_pending(&self, source: PendingSource) -> bool;
}
