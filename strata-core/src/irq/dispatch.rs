//! Physical-to-logical interrupt dispatch
//!
//! The vector table of a firmware image points every physical vector at one
//! trampoline that calls [`Dispatcher::dispatch`] with the active interrupt
//! number. The dispatcher clears the line at the controller, then walks the
//! routes of the vector and invokes each registered handler whose pending
//! bit is set, or every candidate when the part cannot tell them apart.

use strata_hal::{InterruptControl, InterruptSink, Irqn, PendingLines, Peripheral};

use super::VectorTable;

/// Logical per-peripheral interrupt handler
pub trait LogicalHandler {
    /// Check if this handler services `peripheral`
    fn handles(&self, peripheral: Peripheral) -> bool;

    /// Service an interrupt raised on behalf of `peripheral`
    fn on_interrupt(&self, peripheral: Peripheral);
}

/// Routes physical vectors to registered logical handlers
pub struct Dispatcher<'a, const H: usize = 8> {
    table: &'static VectorTable,
    interrupts: &'a dyn InterruptControl,
    pending: Option<&'a dyn PendingLines>,
    handlers: [Option<&'a dyn LogicalHandler>; H],
}

impl<'a, const H: usize> Dispatcher<'a, H> {
    /// Create a dispatcher over `table`
    ///
    /// Without a pending-line accessor every route of a shared vector is
    /// called and the handlers must tolerate spurious calls.
    pub fn new(
        table: &'static VectorTable,
        interrupts: &'a dyn InterruptControl,
        pending: Option<&'a dyn PendingLines>,
    ) -> Self {
        Self {
            table,
            interrupts,
            pending,
            handlers: [None; H],
        }
    }

    /// Vector table this dispatcher walks
    pub fn table(&self) -> &'static VectorTable {
        self.table
    }

    /// Register a logical handler
    ///
    /// Returns `false` if every slot is taken.
    pub fn register(&mut self, handler: &'a dyn LogicalHandler) -> bool {
        match self.handlers.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(handler);
                true
            }
            None => {
                warn!("dispatcher full, handler dropped");
                false
            }
        }
    }

    /// Handle physical vector `irq`
    ///
    /// Returns the number of logical handler calls made.
    pub fn dispatch(&self, irq: Irqn) -> usize {
        let Some(entry) = self.table.lookup(irq) else {
            trace!("irq {=u16} has no vector entry", irq.0);
            return 0;
        };

        // Clear first so a source re-raising during its handler pends again
        self.interrupts.clear_pending(irq);

        let mut calls = 0;
        for target in entry.active_targets(self.pending) {
            for handler in self.handlers.iter().flatten() {
                if handler.handles(target) {
                    handler.on_interrupt(target);
                    calls += 1;
                }
            }
        }
        calls
    }
}

impl<const H: usize> InterruptSink for Dispatcher<'_, H> {
    fn fire(&self, irq: Irqn) {
        self.dispatch(irq);
    }
}
