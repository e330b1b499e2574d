//! `embedded-io` adapters
//!
//! Lets code written against the `embedded-io` byte stream traits use a
//! [`SerialPort`] directly. Reads wait cooperatively for at least one byte;
//! writes report an error only when the port accepted nothing at all.
//!
//! Every port operation takes `&self`, so the traits are implemented for
//! `&SerialPort` as well. A port bound into a registry is shared and can
//! only be used through a shared reference.

use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write, WriteReady};
use strata_hal::UartPeripheral;

use super::SerialPort;

/// Error from the byte stream adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// The port has not been started with `begin`
    NotConfigured,
    /// The transmit queue is full and the caller cannot wait
    WouldBlock,
}

impl embedded_io::Error for IoError {
    fn kind(&self) -> ErrorKind {
        match self {
            IoError::NotConfigured => ErrorKind::NotConnected,
            IoError::WouldBlock => ErrorKind::Other,
        }
    }
}

impl<U: UartPeripheral, const RX: usize, const TX: usize> SerialPort<'_, U, RX, TX> {
    fn require_configured(&self) -> Result<(), IoError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(IoError::NotConfigured)
        }
    }

    fn io_read(&self, buf: &mut [u8]) -> Result<usize, IoError> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.require_configured()?;

        // `end` from another context abandons the wait
        let first = loop {
            match self.read() {
                Some(byte) => break byte,
                None => {
                    self.require_configured()?;
                    self.platform().idle.yield_now();
                }
            }
        };
        buf[0] = first;

        let mut count = 1;
        while count < buf.len() {
            match self.read() {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        Ok(count)
    }

    fn io_write(&self, buf: &[u8]) -> Result<usize, IoError> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.require_configured()?;
        match self.write_bytes(buf) {
            0 => Err(IoError::WouldBlock),
            written => Ok(written),
        }
    }

    fn io_flush(&self) -> Result<(), IoError> {
        self.require_configured()?;
        self.flush();
        Ok(())
    }

    fn io_read_ready(&self) -> Result<bool, IoError> {
        self.require_configured()?;
        Ok(self.available() > 0)
    }

    fn io_write_ready(&self) -> Result<bool, IoError> {
        self.require_configured()?;
        Ok(self.available_for_write() > 0)
    }
}

macro_rules! impl_io {
    ($($port:ty),+) => {$(
        impl<U: UartPeripheral, const RX: usize, const TX: usize> ErrorType for $port {
            type Error = IoError;
        }

        impl<U: UartPeripheral, const RX: usize, const TX: usize> Read for $port {
            fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
                self.io_read(buf)
            }
        }

        impl<U: UartPeripheral, const RX: usize, const TX: usize> ReadReady for $port {
            fn read_ready(&mut self) -> Result<bool, Self::Error> {
                self.io_read_ready()
            }
        }

        impl<U: UartPeripheral, const RX: usize, const TX: usize> Write for $port {
            fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
                self.io_write(buf)
            }

            fn flush(&mut self) -> Result<(), Self::Error> {
                self.io_flush()
            }
        }

        impl<U: UartPeripheral, const RX: usize, const TX: usize> WriteReady for $port {
            fn write_ready(&mut self) -> Result<bool, Self::Error> {
                self.io_write_ready()
            }
        }
    )+};
}

impl_io!(SerialPort<'_, U, RX, TX>, &SerialPort<'_, U, RX, TX>);
