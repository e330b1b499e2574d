//! Board-agnostic core of the strata microcontroller compatibility layer
//!
//! This crate contains everything between the application sketch and the
//! vendor peripheral drivers that does not depend on a specific chip:
//!
//! - Lock-free SPSC byte queue
//! - Interrupt-driven serial ports with chunked double-buffered transmit
//! - Interrupt remapping tables and the shared-vector dispatcher
//! - Pin configuration state machine and digital I/O
//! - System error hook and bootstrap super-loop
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod irq;
pub mod pinmux;
pub mod queue;
pub mod serial;
pub mod system;
