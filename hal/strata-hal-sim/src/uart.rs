use std::cell::RefCell;
use std::collections::VecDeque;

use strata_hal::uart::{ErrorFlags, UartConfig, UartError, UartEvent, UartPeripheral, UartState};

#[derive(Default)]
struct State {
    config: Option<UartConfig>,
    reject_init: bool,
    reject_tx: usize,
    rx_armed: bool,
    inbox: VecDeque<u8>,
    error: Option<ErrorFlags>,
    spurious: VecDeque<u8>,
    cleared: u8,
    in_flight: Option<Vec<u8>>,
    tx_done: bool,
    manual_tx: bool,
    loopback: bool,
    submissions: Vec<Vec<u8>>,
    wire: Vec<u8>,
}

impl State {
    fn next_event(&mut self) -> Option<UartEvent> {
        if let Some(byte) = self.spurious.pop_front() {
            return Some(UartEvent::RxComplete(byte));
        }
        if self.rx_armed {
            if let Some(flags) = self.error.take() {
                self.rx_armed = false;
                return Some(UartEvent::Error(flags));
            }
            if let Some(byte) = self.inbox.pop_front() {
                self.rx_armed = false;
                return Some(UartEvent::RxComplete(byte));
            }
        }
        if self.in_flight.is_some() && (self.tx_done || !self.manual_tx) {
            let chunk = self.in_flight.take().unwrap_or_default();
            self.tx_done = false;
            if self.loopback {
                self.inbox.extend(chunk.iter().copied());
            }
            self.wire.extend(chunk);
            return Some(UartEvent::TxComplete);
        }
        None
    }

    fn has_event(&self) -> bool {
        !self.spurious.is_empty()
            || (self.rx_armed && (self.error.is_some() || !self.inbox.is_empty()))
            || (self.in_flight.is_some() && (self.tx_done || !self.manual_tx))
    }
}

/// Simulated interrupt-driven UART
///
/// A submitted chunk is copied at submission and completes the next time
/// the interrupt is serviced, or only after [`SimUart::complete_tx`] in
/// manual mode. With loopback on, completed bytes arrive on the receiver.
#[derive(Default)]
pub struct SimUart {
    state: RefCell<State>,
}

impl SimUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// UART whose receiver hears its own transmitter
    pub fn loopback() -> Self {
        let uart = Self::new();
        uart.state.borrow_mut().loopback = true;
        uart
    }

    /// Only complete chunks released with [`SimUart::complete_tx`]
    pub fn manual_tx(self) -> Self {
        self.state.borrow_mut().manual_tx = true;
        self
    }

    /// Make `init` fail
    pub fn reject_init(&self, reject: bool) {
        self.state.borrow_mut().reject_init = reject;
    }

    /// Make the next `count` transmit submissions fail
    pub fn reject_tx(&self, count: usize) {
        self.state.borrow_mut().reject_tx = count;
    }

    /// Let the chunk in flight finish at the next service
    pub fn complete_tx(&self) {
        self.state.borrow_mut().tx_done = true;
    }

    /// Queue a byte arriving on the line
    pub fn inject_rx(&self, byte: u8) {
        self.state.borrow_mut().inbox.push_back(byte);
    }

    /// Abort the armed reception with line errors
    pub fn inject_error(&self, flags: ErrorFlags) {
        self.state.borrow_mut().error = Some(flags);
    }

    /// Report a reception completion without finishing the reception
    pub fn inject_spurious_rx(&self, byte: u8) {
        self.state.borrow_mut().spurious.push_back(byte);
    }

    pub fn config(&self) -> Option<UartConfig> {
        self.state.borrow().config
    }

    pub fn rx_armed(&self) -> bool {
        self.state.borrow().rx_armed
    }

    /// Union of all flags cleared so far
    pub fn cleared_errors(&self) -> ErrorFlags {
        ErrorFlags::from_bits_truncate(self.state.borrow().cleared)
    }

    /// Chunk currently being shifted out
    pub fn in_flight(&self) -> Option<Vec<u8>> {
        self.state.borrow().in_flight.clone()
    }

    /// Every chunk accepted by `transmit_it`, in order
    pub fn submissions(&self) -> Vec<Vec<u8>> {
        self.state.borrow().submissions.clone()
    }

    /// Bytes that finished transmission, in order
    pub fn wire(&self) -> Vec<u8> {
        self.state.borrow().wire.clone()
    }

    /// Check if servicing the interrupt would report something
    pub fn has_pending_event(&self) -> bool {
        self.state.borrow().has_event()
    }
}

impl UartPeripheral for SimUart {
    fn init(&self, config: &UartConfig) -> Result<(), UartError> {
        let mut state = self.state.borrow_mut();
        if state.reject_init {
            return Err(UartError::InvalidConfig);
        }
        state.config = Some(*config);
        state.rx_armed = false;
        state.in_flight = None;
        Ok(())
    }

    fn receive_it(&self) -> Result<(), UartError> {
        let mut state = self.state.borrow_mut();
        if state.rx_armed {
            return Err(UartError::Busy);
        }
        state.rx_armed = true;
        Ok(())
    }

    fn transmit_it(&self, data: &[u8]) -> Result<(), UartError> {
        let mut state = self.state.borrow_mut();
        if state.in_flight.is_some() {
            return Err(UartError::Busy);
        }
        if state.reject_tx > 0 {
            state.reject_tx -= 1;
            return Err(UartError::Timeout);
        }
        state.in_flight = Some(data.to_vec());
        state.submissions.push(data.to_vec());
        Ok(())
    }

    fn state(&self) -> UartState {
        let state = self.state.borrow();
        match (state.rx_armed, state.in_flight.is_some()) {
            (false, false) => UartState::Ready,
            (true, false) => UartState::BusyRx,
            (false, true) => UartState::BusyTx,
            (true, true) => UartState::BusyTxRx,
        }
    }

    fn clear_errors(&self, flags: ErrorFlags) {
        self.state.borrow_mut().cleared |= flags.bits();
    }

    fn service_interrupt(&self, on_event: &mut dyn FnMut(UartEvent)) {
        // Release the borrow before each callback; handlers call back in
        loop {
            let event = self.state.borrow_mut().next_event();
            match event {
                Some(event) => on_event(event),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_reception() {
        let uart = SimUart::new();
        uart.inject_rx(1);
        uart.inject_rx(2);

        let mut seen = Vec::new();
        uart.service_interrupt(&mut |e| seen.push(e));
        assert!(seen.is_empty());

        uart.receive_it().unwrap();
        assert_eq!(uart.state(), UartState::BusyRx);
        uart.service_interrupt(&mut |e| seen.push(e));
        assert_eq!(seen, [UartEvent::RxComplete(1)]);
        assert!(!uart.has_pending_event());
    }

    #[test]
    fn test_manual_completion_and_loopback() {
        let uart = SimUart::loopback().manual_tx();
        uart.transmit_it(b"hi").unwrap();
        assert_eq!(uart.transmit_it(b"x"), Err(UartError::Busy));
        assert!(!uart.has_pending_event());

        uart.complete_tx();
        let mut seen = Vec::new();
        uart.service_interrupt(&mut |e| seen.push(e));
        assert_eq!(seen, [UartEvent::TxComplete]);
        assert_eq!(uart.wire(), b"hi");

        uart.receive_it().unwrap();
        assert!(uart.has_pending_event());
    }

    #[test]
    fn test_rejected_submission() {
        let uart = SimUart::new();
        uart.reject_tx(1);
        assert_eq!(uart.transmit_it(b"a"), Err(UartError::Timeout));
        assert!(uart.transmit_it(b"a").is_ok());
        assert_eq!(uart.submissions(), [b"a".to_vec()]);
    }
}
