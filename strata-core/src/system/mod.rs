//! Process-wide services
//!
//! The [`Platform`] context bundles every hardware boundary the core talks
//! to, plus the integrator's fatal error hook. It is built once by the board
//! support code and passed by reference to every component, in place of
//! global singletons.

pub mod runtime;

use core::cell::{Cell, RefCell};

use heapless::Vec;
use strata_hal::{Family, GpioRegisters, Idle, InterruptControl, Peripheral, PeripheralClocks, PinName};

use crate::irq::VectorTable;

pub use runtime::{Board, Runtime, SerialEventSource, Sketch};

/// Unrecoverable conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fatal {
    /// Pin name does not resolve to a port on this part
    InvalidPin(PinName),
    /// Frame format needs a word length the UART cannot express
    UnsupportedWordLength(u8),
    /// No clock gate exists for the peripheral instance
    UnmappedPeripheral(Peripheral),
    /// Peripheral is already bound to another driver
    PeripheralInUse(Peripheral),
    /// Driver was started without owning its peripheral
    Unbound(Peripheral),
    /// Peripheral has no interrupt vector on this family
    NoVector(Peripheral),
}

/// System error hook
///
/// Called exactly once per fatal condition. The default [`Halt`] handler
/// never returns; integrators may log, blink an LED, or reset instead.
pub trait SystemErrorHandler {
    /// Handle an unrecoverable condition
    fn on_fatal(&self, error: Fatal);
}

/// Default system error handler: stop forever
#[derive(Debug, Default, Clone, Copy)]
pub struct Halt;

impl SystemErrorHandler for Halt {
    fn on_fatal(&self, _error: Fatal) {
        loop {
            core::hint::spin_loop();
        }
    }
}

/// Recording system error handler
///
/// Keeps the first `N` fatal conditions and returns to the caller, which
/// then bails out with the error. Meant for hosted builds and tests where
/// halting would hang the process.
#[derive(Debug, Default)]
pub struct FatalLog<const N: usize> {
    reported: RefCell<Vec<Fatal, N>>,
    total: Cell<usize>,
}

impl<const N: usize> FatalLog<N> {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            reported: RefCell::new(Vec::new()),
            total: Cell::new(0),
        }
    }

    /// Recorded conditions, oldest first
    pub fn reported(&self) -> Vec<Fatal, N> {
        self.reported.borrow().clone()
    }

    /// Number of conditions reported, including ones past capacity
    pub fn count(&self) -> usize {
        self.total.get()
    }
}

impl<const N: usize> SystemErrorHandler for FatalLog<N> {
    fn on_fatal(&self, error: Fatal) {
        self.total.set(self.total.get() + 1);
        let _ = self.reported.borrow_mut().push(error);
    }
}

/// Hardware context shared by all components
#[derive(Clone, Copy)]
pub struct Platform<'a> {
    /// Vector table of the target family
    pub vectors: &'static VectorTable,
    /// Interrupt controller
    pub interrupts: &'a dyn InterruptControl,
    /// Peripheral clock gates
    pub clocks: &'a dyn PeripheralClocks,
    /// GPIO registers
    pub gpio: &'a dyn GpioRegisters,
    /// Cooperative yield for blocking waits
    pub idle: &'a dyn Idle,
    /// Fatal error hook
    pub errors: &'a dyn SystemErrorHandler,
}

impl<'a> Platform<'a> {
    /// Chip family the vector table was built for
    pub fn family(&self) -> Family {
        self.vectors.family
    }

    /// Report a fatal condition to the system error handler
    ///
    /// Returns the error so callers can bail out with `Err(platform.fatal(e))`
    /// when the handler does return.
    pub fn fatal(&self, error: Fatal) -> Fatal {
        error!("fatal: {:?}", error);
        self.errors.on_fatal(error);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_hal::Port;

    #[test]
    fn test_fatal_log_keeps_first_entries() {
        let log: FatalLog<1> = FatalLog::new();
        log.on_fatal(Fatal::UnsupportedWordLength(6));
        log.on_fatal(Fatal::NoVector(Peripheral::Usart(9)));
        assert_eq!(log.count(), 2);
        assert_eq!(log.reported().as_slice(), &[Fatal::UnsupportedWordLength(6)]);
    }

    #[test]
    fn test_fatal_log_records_pin() {
        let log: FatalLog<2> = FatalLog::new();
        let pin = PinName::new(Port::C, 13);
        log.on_fatal(Fatal::InvalidPin(pin));
        assert_eq!(log.reported().first(), Some(&Fatal::InvalidPin(pin)));
    }
}
