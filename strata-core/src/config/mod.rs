//! Configuration types
//!
//! Board-level configuration for serial ports and interrupt priorities.
//! All types are `Copy` with sensible defaults so boards only spell out what
//! differs from them.

pub mod board;
pub mod serial;

pub use board::*;
pub use serial::*;
