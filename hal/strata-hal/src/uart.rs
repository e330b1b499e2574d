//! UART peripheral abstractions
//!
//! Models the vendor's interrupt-driven UART primitives: one call to arm a
//! single-byte reception, one call to start an interrupt-driven transmission
//! of a buffer, and an interrupt service routine that reports completion
//! events back to the caller.

use bitflags::bitflags;

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Physical word length (includes the parity bit)
    pub word_length: WordLength,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            word_length: WordLength::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Hardware word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WordLength {
    Seven,
    Eight,
    Nine,
}

impl WordLength {
    /// Resolve a word length from a bit count
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            7 => Some(WordLength::Seven),
            8 => Some(WordLength::Eight),
            9 => Some(WordLength::Nine),
            _ => None,
        }
    }
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

/// Busy state reported by the peripheral driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartState {
    /// No transfer in progress
    Ready,
    /// Reception in progress
    BusyRx,
    /// Transmission in progress
    BusyTx,
    /// Reception and transmission in progress
    BusyTxRx,
}

impl UartState {
    /// Check if a reception is still in progress
    pub fn is_receiving(&self) -> bool {
        matches!(self, UartState::BusyRx | UartState::BusyTxRx)
    }

    /// Check if a transmission is still in progress
    pub fn is_transmitting(&self) -> bool {
        matches!(self, UartState::BusyTx | UartState::BusyTxRx)
    }
}

bitflags! {
    /// Receive error flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ErrorFlags: u8 {
        /// Parity error
        const PARITY  = 1 << 0;
        /// Framing error
        const FRAMING = 1 << 1;
        /// Noise detected
        const NOISE   = 1 << 2;
        /// Receiver overrun
        const OVERRUN = 1 << 3;
    }
}

/// Completion event reported by the UART interrupt service routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartEvent {
    /// A single armed reception finished with the given byte
    RxComplete(u8),
    /// The submitted transmit buffer has been fully shifted out
    TxComplete,
    /// Reception aborted by a line error
    Error(ErrorFlags),
}

/// Error from UART driver calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    /// A transfer of the same direction is already in progress
    Busy,
    /// The configuration was rejected by the peripheral
    InvalidConfig,
    /// The peripheral did not respond in time
    Timeout,
}

/// Interrupt-driven UART peripheral
///
/// All methods take `&self`: the same peripheral is driven from the
/// foreground and from its interrupt handler. Implementations own whatever
/// interior mutability their registers need.
pub trait UartPeripheral {
    /// Program the peripheral (baud rate, frame format) and enable it
    fn init(&self, config: &UartConfig) -> Result<(), UartError>;

    /// Arm an interrupt-driven reception of exactly one byte
    fn receive_it(&self) -> Result<(), UartError>;

    /// Start an interrupt-driven transmission of `data`
    ///
    /// The caller guarantees `data` is neither moved nor modified until
    /// [`UartEvent::TxComplete`] is reported, so implementations may keep
    /// reading from it after this call returns.
    fn transmit_it(&self, data: &[u8]) -> Result<(), UartError>;

    /// Current busy state
    fn state(&self) -> UartState;

    /// Clear the given line error flags
    fn clear_errors(&self, flags: ErrorFlags);

    /// Service the peripheral interrupt
    ///
    /// Reports each completion the hardware signalled to `on_event`, in the
    /// order the vendor driver would invoke its callbacks.
    fn service_interrupt(&self, on_event: &mut dyn FnMut(UartEvent));
}
