//! Cortex-M implementation of the strata interrupt boundary
//!
//! - [`CortexmInterrupts`] - NVIC priorities and masks, active vector
//!   introspection through the SCB
//! - [`PendingRegisters`] - SYSCFG interrupt-line status and EXTI pending
//!   registers used to tell apart the sources of a shared vector
//! - [`forward`] - glue from the runtime's default handler to an
//!   [`InterruptSink`](strata_hal::InterruptSink)
//!
//! Also provides the single-core `critical-section` implementation that
//! `portable-atomic` and the serial registry mutex rely on.
//!
//! Only builds for Cortex-M targets.

#![no_std]
#![deny(unsafe_code)]

mod nvic;
mod pending;

pub use nvic::{forward, CortexmInterrupts};
pub use pending::PendingRegisters;
