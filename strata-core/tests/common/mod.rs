//! Shared bench for the cross-module tests

#![allow(dead_code)]

use strata_core::irq::VectorTable;
use strata_core::serial::SerialPins;
use strata_core::system::{FatalLog, Platform};
use strata_hal::{Family, Idle, Irqn, Peripheral, PinName, Port};
use strata_hal_sim::{SimClocks, SimGpio, SimNvic};

/// Simulated hardware that outlives every component under test
pub struct Bench {
    pub nvic: SimNvic,
    pub clocks: SimClocks,
    pub gpio: SimGpio,
    pub errors: FatalLog<8>,
}

impl Bench {
    pub fn new() -> Self {
        Self {
            nvic: SimNvic::new(),
            clocks: SimClocks::new(),
            gpio: SimGpio::new(),
            errors: FatalLog::new(),
        }
    }

    pub fn platform<'a>(&'a self, family: Family, idle: &'a dyn Idle) -> Platform<'a> {
        Platform {
            vectors: VectorTable::for_family(family),
            interrupts: &self.nvic,
            clocks: &self.clocks,
            gpio: &self.gpio,
            idle,
            errors: &self.errors,
        }
    }
}

/// USART1 on PA9/PA10, AF7 on parts with an alternate function matrix
pub fn usart1_pins() -> SerialPins {
    SerialPins {
        rx: PinName::new(Port::A, 10),
        tx: PinName::new(Port::A, 9),
        rx_af: 7,
        tx_af: 7,
    }
}

/// Vector number a peripheral interrupts on
pub fn irq_of(family: Family, peripheral: Peripheral) -> Irqn {
    VectorTable::for_family(family)
        .irq_for(peripheral)
        .expect("peripheral has a vector")
}

/// Deterministic payload
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}
