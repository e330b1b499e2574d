//! Interrupt remapping
//!
//! Each chip family defines its own set of physical interrupt vectors, and
//! many of them are shared by several peripherals. This module maps them
//! onto a small, stable set of logical per-peripheral handlers:
//!
//! ```text
//!   physical vector            routes                     logical handler
//! ┌───────────────────┐   ┌──────────────────────┐   ┌──────────────────┐
//! │ USART3_8_IRQn (29)│──▶│ Usart(3) ? ITLINE29.0│──▶│ serial registry  │
//! │                   │   │ Usart(4) ? ITLINE29.1│──▶│ serial registry  │
//! │                   │   │ ...                  │   │                  │
//! └───────────────────┘   └──────────────────────┘   └──────────────────┘
//! ```
//!
//! The mapping is plain data ([`VectorTable`]), one static table per family
//! in [`families`], and a single generic [`Dispatcher`] walks it. Handlers
//! are registered at run time, so a peripheral nobody registered for costs
//! a table lookup and nothing else.

#[macro_use]
mod table;

pub mod dispatch;
pub mod families;
pub mod target;

pub use dispatch::{Dispatcher, LogicalHandler};
pub use table::{Route, VectorEntry, VectorTable, MAX_ROUTES};
