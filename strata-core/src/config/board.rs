//! Board configuration
//!
//! Describes which family a board uses and how its console serial port is
//! wired. Variant crates provide a `const` instance of [`BoardConfig`].

use strata_hal::{Family, Peripheral, PinName};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::serial::{SerialSettings, DEFAULT_BAUD, DEFAULT_FORMAT};

/// Console serial port wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsoleConfig {
    /// UART instance
    pub peripheral: Peripheral,
    /// Receive pin
    pub rx: PinName,
    /// Transmit pin
    pub tx: PinName,
    /// Alternate function routing the UART to `rx`
    pub rx_af: u8,
    /// Alternate function routing the UART to `tx`
    pub tx_af: u8,
    /// Baud rate
    pub baud: u32,
    /// Packed frame format
    pub format: u8,
}

impl ConsoleConfig {
    /// Console on the given instance and pins with default line settings
    pub const fn new(peripheral: Peripheral, rx: PinName, tx: PinName, af: u8) -> Self {
        Self {
            peripheral,
            rx,
            tx,
            rx_af: af,
            tx_af: af,
            baud: DEFAULT_BAUD,
            format: DEFAULT_FORMAT,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Chip family
    pub family: Family,
    /// Console serial port, if the board has one
    pub console: Option<ConsoleConfig>,
    /// Serial interrupt settings
    pub serial: SerialSettings,
}

impl BoardConfig {
    /// Board without a console using default serial settings
    pub const fn new(family: Family) -> Self {
        Self {
            family,
            console: None,
            serial: SerialSettings {
                priority: super::serial::UART_IRQ_PRIORITY,
                subpriority: super::serial::UART_IRQ_SUBPRIORITY,
            },
        }
    }

    /// Attach a console
    pub const fn with_console(mut self, console: ConsoleConfig) -> Self {
        self.console = Some(console);
        self
    }
}
