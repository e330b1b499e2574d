//! Buffered serial ports
//!
//! - [`SerialPort`] - byte stream over one UART instance
//! - [`SerialRegistry`] - binds ports to instances for interrupt delivery
//! - [`format`] - packed frame format decoding
//! - [`io`] - `embedded-io` adapters

pub mod format;
pub mod io;
pub mod port;
pub mod registry;

pub use io::IoError;
pub use port::{ErrorCounts, SerialError, SerialPins, SerialPort};
pub use registry::{SerialInterrupt, SerialRegistry};
