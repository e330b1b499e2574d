use std::cell::RefCell;
use std::collections::HashSet;

use strata_hal::{PendingLines, PendingSource};

/// Simulated pending-source registers
#[derive(Default)]
pub struct SimPending {
    raised: RefCell<HashSet<PendingSource>>,
}

impl SimPending {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self, source: PendingSource) {
        self.raised.borrow_mut().insert(source);
    }

    pub fn lower(&self, source: PendingSource) {
        self.raised.borrow_mut().remove(&source);
    }
}

impl PendingLines for SimPending {
    fn is_pending(&self, source: PendingSource) -> bool {
        self.raised.borrow().contains(&source)
    }
}
