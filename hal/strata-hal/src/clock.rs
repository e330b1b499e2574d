//! Peripheral clock gating
//!
//! Every call reports whether the peripheral instance is mapped to a clock
//! gate on this part. An unmapped instance is a configuration error the core
//! escalates to the system error handler.

use crate::peripheral::Peripheral;

/// Peripheral clock and reset control
pub trait PeripheralClocks {
    /// Enable the bus clock of a peripheral
    ///
    /// Returns `false` if this part has no clock gate for the instance.
    fn enable(&self, peripheral: Peripheral) -> bool;

    /// Disable the bus clock of a peripheral
    ///
    /// Returns `false` if this part has no clock gate for the instance.
    fn disable(&self, peripheral: Peripheral) -> bool;

    /// Assert and release the peripheral reset line
    ///
    /// Returns `false` if this part has no reset line for the instance.
    fn reset_pulse(&self, peripheral: Peripheral) -> bool;
}
