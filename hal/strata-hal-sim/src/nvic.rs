use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use strata_hal::{InterruptControl, Irqn};

/// Interrupt controller call, as logged by [`SimNvic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NvicOp {
    SetPriority(Irqn, u8, u8),
    Enable(Irqn),
    Disable(Irqn),
    ClearPending(Irqn),
}

#[derive(Default)]
struct State {
    priorities: HashMap<Irqn, (u8, u8)>,
    enabled: HashSet<Irqn>,
    pending: HashSet<Irqn>,
    active: Vec<Irqn>,
    exception: Option<u8>,
    log: Vec<NvicOp>,
}

/// Simulated nested vectored interrupt controller
#[derive(Default)]
pub struct SimNvic {
    state: RefCell<State>,
}

impl SimNvic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a line pending
    pub fn set_pending(&self, irq: Irqn) {
        self.state.borrow_mut().pending.insert(irq);
    }

    pub fn is_pending(&self, irq: Irqn) -> bool {
        self.state.borrow().pending.contains(&irq)
    }

    pub fn is_enabled(&self, irq: Irqn) -> bool {
        self.state.borrow().enabled.contains(&irq)
    }

    /// Priority and subpriority last programmed for a line
    pub fn priority_of(&self, irq: Irqn) -> Option<(u8, u8)> {
        self.state.borrow().priorities.get(&irq).copied()
    }

    /// Enter the handler of `irq`
    pub fn push_active(&self, irq: Irqn) {
        self.state.borrow_mut().active.push(irq);
    }

    /// Leave the innermost active handler
    pub fn pop_active(&self) -> Option<Irqn> {
        self.state.borrow_mut().active.pop()
    }

    /// Pretend a system exception at `priority` is running
    pub fn set_exception(&self, priority: Option<u8>) {
        self.state.borrow_mut().exception = priority;
    }

    /// Check if a handler at `priority` may preempt the current context
    pub fn can_preempt(&self, priority: u8) -> bool {
        match self.execution_priority() {
            None => true,
            Some(current) => priority < current,
        }
    }

    /// Every call made so far, oldest first
    pub fn log(&self) -> Vec<NvicOp> {
        self.state.borrow().log.clone()
    }
}

impl InterruptControl for SimNvic {
    fn set_priority(&self, irq: Irqn, priority: u8, subpriority: u8) {
        let mut state = self.state.borrow_mut();
        state.priorities.insert(irq, (priority, subpriority));
        state.log.push(NvicOp::SetPriority(irq, priority, subpriority));
    }

    fn enable(&self, irq: Irqn) {
        let mut state = self.state.borrow_mut();
        state.enabled.insert(irq);
        state.log.push(NvicOp::Enable(irq));
    }

    fn disable(&self, irq: Irqn) {
        let mut state = self.state.borrow_mut();
        state.enabled.remove(&irq);
        state.log.push(NvicOp::Disable(irq));
    }

    fn clear_pending(&self, irq: Irqn) {
        let mut state = self.state.borrow_mut();
        state.pending.remove(&irq);
        state.log.push(NvicOp::ClearPending(irq));
    }

    fn active_vector(&self) -> Option<Irqn> {
        self.state.borrow().active.last().copied()
    }

    fn priority(&self, irq: Irqn) -> u8 {
        self.priority_of(irq).map_or(0, |(priority, _)| priority)
    }

    fn exception_priority(&self) -> Option<u8> {
        self.state.borrow().exception
    }
}
