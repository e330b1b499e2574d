//! Interrupt controller abstractions
//!
//! Priorities follow the Cortex-M convention: numerically lower means more
//! urgent. Preemption priority and subpriority are passed separately and
//! encoded by the implementation according to its priority grouping.

/// Hardware interrupt number (position in the vendor vector table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Irqn(pub u16);

/// Nested vectored interrupt controller operations
pub trait InterruptControl {
    /// Set the preemption priority and subpriority of a line
    fn set_priority(&self, irq: Irqn, priority: u8, subpriority: u8);

    /// Unmask a line
    fn enable(&self, irq: Irqn);

    /// Mask a line
    fn disable(&self, irq: Irqn);

    /// Clear the controller-level pending state of a line
    fn clear_pending(&self, irq: Irqn);

    /// Line whose handler is currently executing, if any
    ///
    /// Returns `None` in thread mode. System exceptions are reported through
    /// [`InterruptControl::exception_priority`] instead.
    fn active_vector(&self) -> Option<Irqn>;

    /// Preemption priority of a line
    fn priority(&self, irq: Irqn) -> u8;

    /// Preemption priority of the active system exception, if one is running
    fn exception_priority(&self) -> Option<u8> {
        None
    }

    /// Preemption priority of the current execution context
    ///
    /// `None` means the foreground (thread mode).
    fn execution_priority(&self) -> Option<u8> {
        match self.active_vector() {
            Some(irq) => Some(self.priority(irq)),
            None => self.exception_priority(),
        }
    }
}

/// Entry point the vector table forwards raw interrupts to
pub trait InterruptSink {
    /// Handle the interrupt raised on `irq`
    fn fire(&self, irq: Irqn);
}
