//! Per-family vector tables
//!
//! Each table lists every vector of the largest part in the family. Smaller
//! parts simply never raise the vectors they lack. Shared vectors are gated
//! on SYSCFG interrupt-line status bits where the family has them, and
//! multi-line EXTI vectors on the EXTI pending register.

pub mod f0;
pub mod f1;
pub mod f4;
pub mod g0;
pub mod l0;
