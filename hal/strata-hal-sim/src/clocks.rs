use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use strata_hal::{Peripheral, PeripheralClocks};

#[derive(Default)]
struct State {
    unmapped: HashSet<Peripheral>,
    enabled: HashSet<Peripheral>,
    resets: HashMap<Peripheral, u32>,
}

/// Simulated peripheral clock gates
///
/// Every instance is mapped unless [`SimClocks::unmap`] says otherwise.
#[derive(Default)]
pub struct SimClocks {
    state: RefCell<State>,
}

impl SimClocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the part lack a clock gate for `peripheral`
    pub fn unmap(&self, peripheral: Peripheral) {
        self.state.borrow_mut().unmapped.insert(peripheral);
    }

    pub fn is_enabled(&self, peripheral: Peripheral) -> bool {
        self.state.borrow().enabled.contains(&peripheral)
    }

    /// Number of reset pulses sent to `peripheral`
    pub fn resets(&self, peripheral: Peripheral) -> u32 {
        self.state.borrow().resets.get(&peripheral).copied().unwrap_or(0)
    }

    fn mapped(&self, peripheral: Peripheral) -> bool {
        !self.state.borrow().unmapped.contains(&peripheral)
    }
}

impl PeripheralClocks for SimClocks {
    fn enable(&self, peripheral: Peripheral) -> bool {
        if !self.mapped(peripheral) {
            return false;
        }
        self.state.borrow_mut().enabled.insert(peripheral);
        true
    }

    fn disable(&self, peripheral: Peripheral) -> bool {
        if !self.mapped(peripheral) {
            return false;
        }
        self.state.borrow_mut().enabled.remove(&peripheral);
        true
    }

    fn reset_pulse(&self, peripheral: Peripheral) -> bool {
        if !self.mapped(peripheral) {
            return false;
        }
        *self.state.borrow_mut().resets.entry(peripheral).or_default() += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_instance() {
        let clocks = SimClocks::new();
        clocks.unmap(Peripheral::Usart(7));
        assert!(!clocks.enable(Peripheral::Usart(7)));
        assert!(!clocks.reset_pulse(Peripheral::Usart(7)));
        assert!(clocks.enable(Peripheral::Usart(1)));
        assert!(clocks.is_enabled(Peripheral::Usart(1)));
    }
}
