use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use strata_hal::gpio::{ModeRegister, OutputType, Pull, Remap, Speed};
use strata_hal::{GpioRegisters, PinName, Port};

/// Register write, as logged by [`SimGpio`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioOp {
    Remap(Remap, bool),
    PortClock(Port),
    Speed(PinName, Speed),
    Mode(PinName, ModeRegister),
    OutputType(PinName, OutputType),
    Alternate(PinName, u8),
    Pull(PinName, Pull),
    Write(PinName, bool),
}

/// Register fields of one pin; `None` means never written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinState {
    pub speed: Option<Speed>,
    pub mode: Option<ModeRegister>,
    pub output_type: Option<OutputType>,
    pub alternate: Option<u8>,
    pub pull: Option<Pull>,
    /// Output data latch
    pub output: bool,
}

/// Register state of the whole GPIO block, for comparisons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpioSnapshot {
    pub pins: BTreeMap<PinName, PinState>,
    pub port_clocks: BTreeSet<Port>,
    pub remaps: Vec<(Remap, bool)>,
}

#[derive(Default)]
struct State {
    pins: BTreeMap<PinName, PinState>,
    port_clocks: BTreeSet<Port>,
    remaps: HashMap<Remap, bool>,
    inputs: HashMap<PinName, bool>,
    ops: Vec<GpioOp>,
}

/// Simulated GPIO block
///
/// All eleven ports exist unless [`SimGpio::set_port_count`] trims them.
pub struct SimGpio {
    state: RefCell<State>,
    port_count: Cell<u8>,
}

impl Default for SimGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl SimGpio {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::default()),
            port_count: Cell::new(11),
        }
    }

    /// Keep only the first `count` ports (A, B, ...)
    pub fn set_port_count(&self, count: u8) {
        self.port_count.set(count);
    }

    /// Drive the external level seen by a pin's input stage
    pub fn drive_input(&self, pin: PinName, high: bool) {
        self.state.borrow_mut().inputs.insert(pin, high);
    }

    pub fn pin_state(&self, pin: PinName) -> Option<PinState> {
        self.state.borrow().pins.get(&pin).copied()
    }

    /// Last value written to a remap switch
    pub fn remap(&self, remap: Remap) -> Option<bool> {
        self.state.borrow().remaps.get(&remap).copied()
    }

    pub fn port_clock_enabled(&self, port: Port) -> bool {
        self.state.borrow().port_clocks.contains(&port)
    }

    /// Every register write so far, oldest first
    pub fn ops(&self) -> Vec<GpioOp> {
        self.state.borrow().ops.clone()
    }

    pub fn write_count(&self) -> usize {
        self.state.borrow().ops.len()
    }

    pub fn snapshot(&self) -> GpioSnapshot {
        let state = self.state.borrow();
        let mut remaps: Vec<_> = state.remaps.iter().map(|(r, on)| (*r, *on)).collect();
        remaps.sort_by_key(|(r, _)| *r as u8);
        GpioSnapshot {
            pins: state.pins.clone(),
            port_clocks: state.port_clocks.clone(),
            remaps,
        }
    }

    fn update(&self, pin: PinName, op: GpioOp, apply: impl FnOnce(&mut PinState)) {
        let mut state = self.state.borrow_mut();
        apply(state.pins.entry(pin).or_default());
        state.ops.push(op);
    }
}

impl GpioRegisters for SimGpio {
    fn port_exists(&self, port: Port) -> bool {
        port.index() < self.port_count.get()
    }

    fn enable_port_clock(&self, port: Port) {
        let mut state = self.state.borrow_mut();
        state.port_clocks.insert(port);
        state.ops.push(GpioOp::PortClock(port));
    }

    fn set_speed(&self, pin: PinName, speed: Speed) {
        self.update(pin, GpioOp::Speed(pin, speed), |s| s.speed = Some(speed));
    }

    fn set_mode(&self, pin: PinName, mode: ModeRegister) {
        self.update(pin, GpioOp::Mode(pin, mode), |s| s.mode = Some(mode));
    }

    fn set_output_type(&self, pin: PinName, output: OutputType) {
        self.update(pin, GpioOp::OutputType(pin, output), |s| s.output_type = Some(output));
    }

    fn set_alternate(&self, pin: PinName, function: u8) {
        self.update(pin, GpioOp::Alternate(pin, function), |s| s.alternate = Some(function));
    }

    fn set_pull(&self, pin: PinName, pull: Pull) {
        self.update(pin, GpioOp::Pull(pin, pull), |s| s.pull = Some(pull));
    }

    fn set_remap(&self, remap: Remap, enabled: bool) {
        let mut state = self.state.borrow_mut();
        state.remaps.insert(remap, enabled);
        state.ops.push(GpioOp::Remap(remap, enabled));
    }

    fn write(&self, pin: PinName, high: bool) {
        self.update(pin, GpioOp::Write(pin, high), |s| s.output = high);
    }

    fn read(&self, pin: PinName) -> bool {
        let state = self.state.borrow();
        if let Some(level) = state.inputs.get(&pin) {
            return *level;
        }
        // Undriven pins read back their own output latch
        state.pins.get(&pin).is_some_and(|s| s.output)
    }

    fn output_state(&self, pin: PinName) -> bool {
        self.state.borrow().pins.get(&pin).is_some_and(|s| s.output)
    }
}
