//! Cooperative waiting
//!
//! Blocking waits in the core (draining the transmit queue, waiting for
//! queue space) never mask interrupts. They call [`Idle::yield_now`] on
//! every iteration so the platform can sleep, run deferred work, or in a
//! simulation deliver the interrupts that let the wait make progress.

/// Cooperative yield hook
pub trait Idle {
    /// Give up the processor briefly while waiting for interrupts
    fn yield_now(&self);
}

/// Busy-spin yield
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinIdle;

impl Idle for SpinIdle {
    fn yield_now(&self) {
        core::hint::spin_loop();
    }
}
