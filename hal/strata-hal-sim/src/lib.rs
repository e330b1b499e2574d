//! Host simulation of the strata hardware boundary
//!
//! Every [`strata_hal`] trait has a recording double here that models just
//! enough of the hardware for the core's behavior to be observable:
//!
//! - [`SimNvic`] - priorities, masks, pending bits and an active-vector stack
//! - [`SimClocks`] - clock gates and reset pulses, with unmappable instances
//! - [`SimGpio`] - per-pin register fields plus a log of every write
//! - [`SimUart`] - single-byte reception, chunk transmission, a wire and an
//!   optional loopback
//! - [`SimPending`] - settable pending-source bits
//! - [`SimIdle`] - yield hook that delivers simulated interrupts
//!
//! All doubles use interior mutability and are meant for single-threaded
//! tests.

mod clocks;
mod gpio;
mod idle;
mod nvic;
mod pending;
mod uart;

pub use clocks::SimClocks;
pub use gpio::{GpioOp, GpioSnapshot, PinState, SimGpio};
pub use idle::SimIdle;
pub use nvic::{NvicOp, SimNvic};
pub use pending::SimPending;
pub use uart::SimUart;
