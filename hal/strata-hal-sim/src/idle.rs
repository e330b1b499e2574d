use std::cell::{Cell, RefCell};

use strata_hal::{Idle, InterruptControl, InterruptSink, Irqn};

use crate::nvic::SimNvic;
use crate::uart::SimUart;

/// Yield hook that delivers simulated UART interrupts
///
/// Each yield services every watched UART that has an event, provided its
/// line is enabled and its priority can preempt the current context. The
/// handler runs with the line marked active on the [`SimNvic`], so priority
/// introspection inside it sees an interrupt context.
pub struct SimIdle<'a> {
    nvic: &'a SimNvic,
    sink: Cell<Option<&'a dyn InterruptSink>>,
    watched: RefCell<Vec<(&'a SimUart, Irqn)>>,
    yields: Cell<usize>,
}

impl<'a> SimIdle<'a> {
    pub fn new(nvic: &'a SimNvic) -> Self {
        Self {
            nvic,
            sink: Cell::new(None),
            watched: RefCell::new(Vec::new()),
            yields: Cell::new(0),
        }
    }

    /// Route fired interrupts to `sink`
    pub fn attach(&self, sink: &'a dyn InterruptSink) {
        self.sink.set(Some(sink));
    }

    /// Fire `irq` whenever `uart` has an event
    pub fn watch(&self, uart: &'a SimUart, irq: Irqn) {
        self.watched.borrow_mut().push((uart, irq));
    }

    /// Number of yields so far
    pub fn yields(&self) -> usize {
        self.yields.get()
    }

    /// Yield until no watched UART can make progress
    ///
    /// Returns the number of yields taken, capped at `limit`.
    pub fn settle(&self, limit: usize) -> usize {
        let mut taken = 0;
        while taken < limit && self.deliver() > 0 {
            taken += 1;
        }
        taken
    }

    /// Fire every deliverable interrupt once
    fn deliver(&self) -> usize {
        let Some(sink) = self.sink.get() else {
            return 0;
        };
        let ready: Vec<Irqn> = self
            .watched
            .borrow()
            .iter()
            .filter(|(uart, irq)| {
                uart.has_pending_event()
                    && self.nvic.is_enabled(*irq)
                    && self.nvic.can_preempt(self.nvic.priority(*irq))
            })
            .map(|(_, irq)| *irq)
            .collect();

        for irq in &ready {
            self.nvic.set_pending(*irq);
            self.nvic.push_active(*irq);
            sink.fire(*irq);
            self.nvic.pop_active();
        }
        ready.len()
    }
}

impl Idle for SimIdle<'_> {
    fn yield_now(&self) {
        self.yields.set(self.yields.get() + 1);
        self.deliver();
    }
}
