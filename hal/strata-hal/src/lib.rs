//! Strata Hardware Abstraction Layer
//!
//! This crate defines the boundary between the strata core and the vendor
//! low-level drivers of a concrete microcontroller. The core never touches a
//! register directly; it calls into these traits, and chip-specific crates
//! (or the host simulator) implement them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application sketch (setup / tick)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  strata-core (serial, irq, pinmux)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  strata-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ strata-hal-   │       │ strata-hal-   │
//! │   cortexm     │       │     sim       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartPeripheral`] - Interrupt-driven UART primitives
//! - [`interrupt::InterruptControl`] - Vector priority, masking, introspection
//! - [`clock::PeripheralClocks`] - Peripheral clock gates and reset pulses
//! - [`gpio::GpioRegisters`] - Pin mode, pull, speed and alternate function
//! - [`pending::PendingLines`] - Shared-vector source disambiguation
//! - [`idle::Idle`] - Cooperative yield used by blocking waits

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod idle;
pub mod interrupt;
pub mod pending;
pub mod peripheral;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::PeripheralClocks;
pub use gpio::{GpioRegisters, PinName, Port};
pub use idle::{Idle, SpinIdle};
pub use interrupt::{InterruptControl, InterruptSink, Irqn};
pub use pending::{PendingLines, PendingSource};
pub use peripheral::{Family, Peripheral};
pub use uart::{UartEvent, UartPeripheral};
