//! NVIC and SCB access

use cortex_m::interrupt::InterruptNumber;
use cortex_m::peripheral::scb::{Exception, SystemHandler, VectActive};
use cortex_m::peripheral::{NVIC, SCB};
use strata_hal::{Family, InterruptControl, InterruptSink, Irqn};

/// Interrupt line number in the form `cortex-m` expects
#[derive(Clone, Copy)]
struct Line(u16);

// SAFETY: callers only build lines from vector table entries of the running
// family, which are valid device interrupt numbers
#[allow(unsafe_code)]
unsafe impl InterruptNumber for Line {
    fn number(self) -> u16 {
        self.0
    }
}

/// NVIC-backed interrupt control
///
/// Priorities are packed into the implemented upper bits of each priority
/// byte: preemption priority above `sub_bits` bits of subpriority.
pub struct CortexmInterrupts {
    priority_bits: u8,
    sub_bits: u8,
}

impl CortexmInterrupts {
    /// Interrupt control for `family`, all priority bits used for preemption
    pub const fn new(family: Family) -> Self {
        Self {
            priority_bits: family.priority_bits(),
            sub_bits: 0,
        }
    }

    /// Reserve `sub_bits` of the priority field for subpriority
    ///
    /// Must match the priority grouping programmed in `SCB.AIRCR`.
    pub const fn with_sub_bits(mut self, sub_bits: u8) -> Self {
        self.sub_bits = if sub_bits > self.priority_bits {
            self.priority_bits
        } else {
            sub_bits
        };
        self
    }

    fn encode(&self, priority: u8, subpriority: u8) -> u8 {
        let preempt_bits = self.priority_bits - self.sub_bits;
        let preempt = priority & ((1 << preempt_bits) - 1);
        let sub = subpriority & ((1 << self.sub_bits) - 1);
        ((preempt << self.sub_bits) | sub) << (8 - self.priority_bits)
    }

    fn decode(&self, raw: u8) -> u8 {
        (raw >> (8 - self.priority_bits)) >> self.sub_bits
    }
}

impl InterruptControl for CortexmInterrupts {
    #[allow(unsafe_code)]
    fn set_priority(&self, irq: Irqn, priority: u8, subpriority: u8) {
        // SAFETY: only the priority register of this line is written, and
        // changing it cannot break a priority-based critical section of ours
        unsafe {
            let mut nvic = cortex_m::Peripherals::steal().NVIC;
            nvic.set_priority(Line(irq.0), self.encode(priority, subpriority));
        }
    }

    #[allow(unsafe_code)]
    fn enable(&self, irq: Irqn) {
        // SAFETY: the line's handler is the dispatcher, which is always sound
        unsafe { NVIC::unmask(Line(irq.0)) }
    }

    fn disable(&self, irq: Irqn) {
        NVIC::mask(Line(irq.0));
    }

    fn clear_pending(&self, irq: Irqn) {
        NVIC::unpend(Line(irq.0));
    }

    fn active_vector(&self) -> Option<Irqn> {
        match SCB::vect_active() {
            VectActive::Interrupt { irqn } => Some(Irqn(u16::from(irqn))),
            _ => None,
        }
    }

    fn priority(&self, irq: Irqn) -> u8 {
        self.decode(NVIC::get_priority(Line(irq.0)))
    }

    fn exception_priority(&self) -> Option<u8> {
        let handler = match SCB::vect_active() {
            VectActive::ThreadMode | VectActive::Interrupt { .. } => return None,
            VectActive::Exception(Exception::SVCall) => SystemHandler::SVCall,
            VectActive::Exception(Exception::PendSV) => SystemHandler::PendSV,
            VectActive::Exception(Exception::SysTick) => SystemHandler::SysTick,
            // Fixed or configurable faults: treat as most urgent
            VectActive::Exception(_) => return Some(0),
        };
        Some(self.decode(SCB::get_priority(handler)))
    }
}

/// Forward a `DefaultHandler` invocation to `sink`
///
/// `irqn` is the value the runtime passes to its default handler; negative
/// numbers are system exceptions and are ignored.
pub fn forward(sink: &dyn InterruptSink, irqn: i16) {
    if let Ok(irq) = u16::try_from(irqn) {
        sink.fire(Irqn(irq));
    }
}
