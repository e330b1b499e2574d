//! Serial port configuration
//!
//! Frame formats use the packed byte encoding of the portable serial API:
//!
//! ```text
//!   bit 5-4   bit 3      bit 2-1
//! ┌─────────┬──────────┬───────────┐
//! │ parity  │ stop     │ data bits │
//! │ 00 none │ 0 = 1    │ 00 = 5    │
//! │ 10 even │ 1 = 2    │ 01 = 6    │
//! │ 11 odd  │          │ 10 = 7    │
//! │         │          │ 11 = 8    │
//! └─────────┴──────────┴───────────┘
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const SERIAL_5N1: u8 = 0x00;
pub const SERIAL_6N1: u8 = 0x02;
pub const SERIAL_7N1: u8 = 0x04;
pub const SERIAL_8N1: u8 = 0x06;
pub const SERIAL_5N2: u8 = 0x08;
pub const SERIAL_6N2: u8 = 0x0A;
pub const SERIAL_7N2: u8 = 0x0C;
pub const SERIAL_8N2: u8 = 0x0E;
pub const SERIAL_5E1: u8 = 0x20;
pub const SERIAL_6E1: u8 = 0x22;
pub const SERIAL_7E1: u8 = 0x24;
pub const SERIAL_8E1: u8 = 0x26;
pub const SERIAL_5E2: u8 = 0x28;
pub const SERIAL_6E2: u8 = 0x2A;
pub const SERIAL_7E2: u8 = 0x2C;
pub const SERIAL_8E2: u8 = 0x2E;
pub const SERIAL_5O1: u8 = 0x30;
pub const SERIAL_6O1: u8 = 0x32;
pub const SERIAL_7O1: u8 = 0x34;
pub const SERIAL_8O1: u8 = 0x36;
pub const SERIAL_5O2: u8 = 0x38;
pub const SERIAL_6O2: u8 = 0x3A;
pub const SERIAL_7O2: u8 = 0x3C;
pub const SERIAL_8O2: u8 = 0x3E;

/// Default baud rate
pub const DEFAULT_BAUD: u32 = 115200;

/// Default frame format
pub const DEFAULT_FORMAT: u8 = SERIAL_8N1;

/// Default UART interrupt preemption priority
pub const UART_IRQ_PRIORITY: u8 = 1;

/// Default UART interrupt subpriority
pub const UART_IRQ_SUBPRIORITY: u8 = 0;

/// Interrupt settings shared by every serial port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SerialSettings {
    /// Preemption priority of the UART interrupt
    ///
    /// Also the threshold above which `write` refuses to block.
    pub priority: u8,
    /// Subpriority of the UART interrupt (never used for blocking decisions)
    pub subpriority: u8,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            priority: UART_IRQ_PRIORITY,
            subpriority: UART_IRQ_SUBPRIORITY,
        }
    }
}
