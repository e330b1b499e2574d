//! Interrupt-driven serial port
//!
//! # Transmit path
//!
//! The foreground appends to the TX queue and the UART interrupt drains it
//! in chunks. A chunk is a contiguous run starting at the queue's read
//! index, at most half the queue long, handed to the peripheral by
//! reference:
//!
//! ```text
//!            read index        boundary             write index
//!                 │                │                     │
//!   ┌─────────────▼────────────────▼─────────────────────▼─────────┐
//!   │             │ chunk in flight│ queued by foreground │  free   │
//!   └─────────────┴────────────────┴──────────────────────┴─────────┘
//! ```
//!
//! Whoever starts a chunk first claims the transmitter by flipping the
//! active flag, so a more urgent writer that preempts the foreground while
//! a chunk is being set up only queues its bytes.
//!
//! The read index only moves to the recorded boundary once the peripheral
//! reports the chunk complete, so the foreground can never overwrite bytes
//! the hardware is still shifting out. Capping chunks at half the queue
//! leaves the other half free for the foreground while a chunk is in
//! flight.
//!
//! # Receive path
//!
//! The peripheral is always armed for exactly one byte. Each completion
//! pushes the byte into the RX queue (dropping it when the queue is full)
//! and re-arms immediately.

use embassy_sync::blocking_mutex::raw::RawMutex;
use portable_atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use strata_hal::gpio::Pull;
use strata_hal::uart::{ErrorFlags, UartError, UartEvent, UartPeripheral};
use strata_hal::{Irqn, Peripheral, PinName};

use super::format;
use super::registry::{SerialInterrupt, SerialRegistry};
use crate::config::{ConsoleConfig, SerialSettings};
use crate::pinmux::{self, PinMode};
use crate::queue::RingQueue;
use crate::system::{Fatal, Platform, SerialEventSource};

/// Error from serial port setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Condition already reported to the system error handler
    Fatal(Fatal),
    /// The peripheral driver rejected the configuration
    Init(UartError),
}

impl From<Fatal> for SerialError {
    fn from(error: Fatal) -> Self {
        SerialError::Fatal(error)
    }
}

/// Pins and alternate functions of a serial port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialPins {
    /// Receive pin
    pub rx: PinName,
    /// Transmit pin
    pub tx: PinName,
    /// Alternate function routing the UART to `rx`
    pub rx_af: u8,
    /// Alternate function routing the UART to `tx`
    pub tx_af: u8,
}

/// Snapshot of receive error counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorCounts {
    pub parity: u32,
    pub framing: u32,
    pub noise: u32,
    pub overrun: u32,
    /// Bytes dropped because the RX queue was full
    pub rx_dropped: u32,
}

struct ErrorCounters {
    parity: AtomicU32,
    framing: AtomicU32,
    noise: AtomicU32,
    overrun: AtomicU32,
    rx_dropped: AtomicU32,
}

impl ErrorCounters {
    const fn new() -> Self {
        Self {
            parity: AtomicU32::new(0),
            framing: AtomicU32::new(0),
            noise: AtomicU32::new(0),
            overrun: AtomicU32::new(0),
            rx_dropped: AtomicU32::new(0),
        }
    }

    fn record(&self, flags: ErrorFlags) {
        for (flag, counter) in [
            (ErrorFlags::PARITY, &self.parity),
            (ErrorFlags::FRAMING, &self.framing),
            (ErrorFlags::NOISE, &self.noise),
            (ErrorFlags::OVERRUN, &self.overrun),
        ] {
            if flags.contains(flag) {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn snapshot(&self) -> ErrorCounts {
        ErrorCounts {
            parity: self.parity.load(Ordering::Relaxed),
            framing: self.framing.load(Ordering::Relaxed),
            noise: self.noise.load(Ordering::Relaxed),
            overrun: self.overrun.load(Ordering::Relaxed),
            rx_dropped: self.rx_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Buffered serial port over one UART instance
///
/// `RX` and `TX` are the queue sizes (powers of two); each queue holds one
/// byte less than its size.
pub struct SerialPort<'a, U: UartPeripheral, const RX: usize = 64, const TX: usize = 64> {
    platform: Platform<'a>,
    uart: U,
    peripheral: Peripheral,
    pins: SerialPins,
    settings: SerialSettings,
    rx: RingQueue<RX>,
    tx: RingQueue<TX>,
    /// Read index the TX queue moves to when the chunk in flight completes
    tx_boundary: AtomicUsize,
    tx_active: AtomicBool,
    configured: AtomicBool,
    bound: AtomicBool,
    errors: ErrorCounters,
}

impl<'a, U: UartPeripheral, const RX: usize, const TX: usize> SerialPort<'a, U, RX, TX> {
    /// Create an unconfigured port
    pub fn new(platform: Platform<'a>, uart: U, peripheral: Peripheral, pins: SerialPins) -> Self {
        Self {
            platform,
            uart,
            peripheral,
            pins,
            settings: SerialSettings::default(),
            rx: RingQueue::new(),
            tx: RingQueue::new(),
            tx_boundary: AtomicUsize::new(0),
            tx_active: AtomicBool::new(false),
            configured: AtomicBool::new(false),
            bound: AtomicBool::new(false),
            errors: ErrorCounters::new(),
        }
    }

    /// Create a port for a board console
    pub fn console(platform: Platform<'a>, uart: U, console: &ConsoleConfig) -> Self {
        let pins = SerialPins {
            rx: console.rx,
            tx: console.tx,
            rx_af: console.rx_af,
            tx_af: console.tx_af,
        };
        Self::new(platform, uart, console.peripheral, pins)
    }

    /// Override the interrupt settings
    pub fn with_settings(mut self, settings: SerialSettings) -> Self {
        self.settings = settings;
        self
    }

    /// UART instance this port drives
    pub fn peripheral(&self) -> Peripheral {
        self.peripheral
    }

    /// Hardware context this port runs on
    pub fn platform(&self) -> &Platform<'a> {
        &self.platform
    }

    /// Underlying peripheral driver
    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Check if `begin` has run without a matching `end`
    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::Acquire)
    }

    /// Check if a chunk is being shifted out
    pub fn is_transmitting(&self) -> bool {
        self.tx_active.load(Ordering::Acquire)
    }

    /// Receive error counters since construction
    pub fn error_counts(&self) -> ErrorCounts {
        self.errors.snapshot()
    }

    /// Check if this port owns its instance in a registry
    pub fn is_bound(&self) -> bool {
        self.bound.load(Ordering::Acquire)
    }

    /// Bind this port into `registry`, taking ownership of its instance
    ///
    /// Interrupts only reach bound ports, and `begin` refuses to touch the
    /// hardware of a port that is not bound. A second port on the same
    /// instance is fatal.
    pub fn attach<M: RawMutex>(&'a self, registry: &SerialRegistry<'a, M>) -> Result<(), Fatal> {
        registry
            .bind(self.peripheral, self)
            .map_err(|error| self.platform.fatal(error))?;
        self.bound.store(true, Ordering::Release);
        Ok(())
    }

    /// Shut the port down and release its binding
    ///
    /// Does nothing for a port that never bound, so it cannot evict the
    /// owner of the instance.
    pub fn detach<M: RawMutex>(&self, registry: &SerialRegistry<'a, M>) {
        if !self.is_bound() {
            return;
        }
        self.end();
        registry.unbind(self.peripheral);
        self.bound.store(false, Ordering::Release);
    }

    fn irq(&self) -> Option<Irqn> {
        self.platform.vectors.irq_for(self.peripheral)
    }

    /// Configure the peripheral and start receiving
    ///
    /// `format` is a packed frame format such as
    /// [`SERIAL_8N1`](crate::config::SERIAL_8N1). The port must be bound
    /// with [`attach`](Self::attach) first.
    pub fn begin(&self, baud: u32, format: u8) -> Result<(), SerialError> {
        let platform = &self.platform;
        let peripheral = self.peripheral;

        if !self.is_bound() {
            return Err(platform.fatal(Fatal::Unbound(peripheral)).into());
        }
        let config = format::uart_config(baud, format, platform.family())
            .map_err(|error| platform.fatal(error))?;
        let irq = self
            .irq()
            .ok_or_else(|| platform.fatal(Fatal::NoVector(peripheral)))?;

        if !platform.clocks.enable(peripheral) {
            return Err(platform.fatal(Fatal::UnmappedPeripheral(peripheral)).into());
        }
        platform.clocks.reset_pulse(peripheral);

        pinmux::configure(
            platform,
            self.pins.tx,
            PinMode::Alternate {
                function: self.pins.tx_af,
                open_drain: false,
                pull: Pull::Up,
            },
        )?;
        pinmux::configure(
            platform,
            self.pins.rx,
            PinMode::AlternateInput {
                function: self.pins.rx_af,
                pull: Pull::Up,
            },
        )?;

        self.uart.init(&config).map_err(SerialError::Init)?;

        // Keep the line masked until the first reception is armed
        platform.interrupts.disable(irq);
        self.rx.clear();
        self.tx.clear();
        self.tx_boundary.store(0, Ordering::Relaxed);
        self.tx_active.store(false, Ordering::Release);
        self.uart.receive_it().map_err(SerialError::Init)?;
        self.configured.store(true, Ordering::Release);
        self.unmask(irq);

        info!("{:?} up at {=u32} baud", peripheral, baud);
        Ok(())
    }

    /// Drain the transmitter and shut the peripheral down
    pub fn end(&self) {
        if !self.is_configured() {
            return;
        }
        self.flush();

        if let Some(irq) = self.irq() {
            self.platform.interrupts.disable(irq);
        }
        self.configured.store(false, Ordering::Release);
        self.tx_active.store(false, Ordering::Release);
        self.platform.clocks.reset_pulse(self.peripheral);
        self.platform.clocks.disable(self.peripheral);
        self.rx.clear();

        info!("{:?} down", self.peripheral);
    }

    /// Number of received bytes waiting to be read
    pub fn available(&self) -> usize {
        self.rx.len()
    }

    /// Number of bytes `write` can queue without waiting
    pub fn available_for_write(&self) -> usize {
        self.tx.free()
    }

    /// Next received byte, without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.rx.peek()
    }

    /// Consume the next received byte
    pub fn read(&self) -> Option<u8> {
        self.rx.pop()
    }

    /// Wait until every queued byte has been handed to the peripheral and sent
    pub fn flush(&self) {
        let Some(irq) = self.irq() else {
            return;
        };
        while self.is_configured() && (!self.tx.is_empty() || self.is_transmitting()) {
            self.kick(irq);
            self.platform.idle.yield_now();
        }
    }

    /// Queue one byte for transmission
    ///
    /// Returns the number of bytes queued: 1, or 0 if the port is not
    /// configured or the queue is full in a context that must not wait.
    pub fn write(&self, byte: u8) -> usize {
        if !self.is_configured() {
            return 0;
        }
        let Some(irq) = self.irq() else {
            return 0;
        };

        if self.can_block() {
            self.tx.push_blocking(byte, || self.wait_for_space(irq));
        } else if !self.tx.push(byte) {
            return 0;
        }

        // A chunk in flight picks the byte up when it completes
        self.kick(irq);
        1
    }

    /// Queue a buffer, returning how many bytes were accepted
    pub fn write_bytes(&self, data: &[u8]) -> usize {
        let mut written = 0;
        for &byte in data {
            if self.write(byte) == 0 {
                break;
            }
            written += 1;
        }
        written
    }

    /// Check if waiting for TX space cannot starve the UART interrupt
    fn can_block(&self) -> bool {
        match self.platform.interrupts.execution_priority() {
            None => true,
            Some(current) => current > self.settings.priority,
        }
    }

    fn wait_for_space(&self, irq: Irqn) {
        self.kick(irq);
        self.platform.idle.yield_now();
    }

    /// Start a chunk if none is in flight
    fn kick(&self, irq: Irqn) {
        if self
            .tx_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }
        self.platform.interrupts.disable(irq);
        self.start_chunk();
        self.unmask(irq);
    }

    fn unmask(&self, irq: Irqn) {
        let interrupts = self.platform.interrupts;
        interrupts.set_priority(irq, self.settings.priority, self.settings.subpriority);
        interrupts.enable(irq);
    }

    /// Submit the next chunk, or go idle when nothing is queued
    ///
    /// The caller holds the transmitter claim and runs with the UART
    /// interrupt masked or from inside it.
    fn start_chunk(&self) {
        let len = self.tx.contiguous_len().min(TX / 2);
        if len == 0 {
            self.tx_active.store(false, Ordering::Release);
            return;
        }

        match self.uart.transmit_it(self.tx.contiguous(len)) {
            Ok(()) => self.tx_boundary.store(self.tx.index_after(len), Ordering::Relaxed),
            // A transfer is still shifting out; its completion restarts us
            // and the boundary still points at the read index
            Err(UartError::Busy) => debug!("{:?} transmitter busy", self.peripheral),
            Err(error) => {
                warn!("{:?} rejected chunk: {:?}", self.peripheral, error);
                self.tx_active.store(false, Ordering::Release);
            }
        }
    }

    fn handle_event(&self, event: UartEvent) {
        match event {
            UartEvent::TxComplete => self.on_tx_complete(),
            UartEvent::RxComplete(byte) => self.on_rx_complete(byte),
            UartEvent::Error(flags) => self.on_error(flags),
        }
    }

    fn on_tx_complete(&self) {
        if !self.is_transmitting() {
            return;
        }
        self.tx.advance_to(self.tx_boundary.load(Ordering::Relaxed));
        self.start_chunk();
    }

    fn on_rx_complete(&self, byte: u8) {
        if self.uart.state().is_receiving() {
            return;
        }
        if !self.rx.push(byte) {
            trace!("{:?} rx queue full, byte dropped", self.peripheral);
            self.errors.rx_dropped.fetch_add(1, Ordering::Relaxed);
        }
        self.rearm();
    }

    fn on_error(&self, flags: ErrorFlags) {
        debug!("{:?} rx error {=u8:#x}", self.peripheral, flags.bits());
        self.uart.clear_errors(ErrorFlags::all());
        self.errors.record(flags);
        self.rearm();
    }

    fn rearm(&self) {
        if let Err(error) = self.uart.receive_it() {
            warn!("{:?} could not re-arm reception: {:?}", self.peripheral, error);
        }
    }
}

impl<U: UartPeripheral, const RX: usize, const TX: usize> SerialInterrupt for SerialPort<'_, U, RX, TX> {
    fn on_interrupt(&self) {
        if !self.is_configured() {
            return;
        }
        self.uart.service_interrupt(&mut |event| self.handle_event(event));
    }
}

impl<U: UartPeripheral, const RX: usize, const TX: usize> SerialEventSource for SerialPort<'_, U, RX, TX> {
    fn has_input(&self) -> bool {
        self.available() > 0
    }
}
