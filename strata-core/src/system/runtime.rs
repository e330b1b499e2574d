//! Bootstrap and foreground super-loop
//!
//! Startup runs the board's clock/peripheral initialisation once, then the
//! sketch's `setup`, then loops forever calling `tick` followed by any
//! serial event hooks whose port has received data.

/// Board-specific initialisation
pub trait Board {
    /// Core clock tree and system peripherals
    fn init(&self);

    /// Variant-specific setup run after [`Board::init`]
    fn init_variant(&self) {}
}

/// Application entry points
pub trait Sketch {
    /// Called once after board initialisation
    fn setup(&mut self);

    /// Called repeatedly from the foreground loop
    fn tick(&mut self);

    /// Called after `tick` when serial event source `port` has input
    fn serial_event(&mut self, _port: usize) {}
}

/// Something the foreground loop can poll for received input
pub trait SerialEventSource {
    /// Check if received data is waiting to be read
    fn has_input(&self) -> bool;
}

/// Foreground runtime
pub struct Runtime<'a, const N: usize = 4> {
    sources: [Option<&'a dyn SerialEventSource>; N],
}

impl<'a, const N: usize> Default for Runtime<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> Runtime<'a, N> {
    /// Create a runtime without event sources
    pub const fn new() -> Self {
        Self { sources: [None; N] }
    }

    /// Register a serial event source
    ///
    /// Returns the index passed to [`Sketch::serial_event`], or `None` if
    /// all slots are used.
    pub fn add_event_source(&mut self, source: &'a dyn SerialEventSource) -> Option<usize> {
        let index = self.sources.iter().position(Option::is_none)?;
        self.sources[index] = Some(source);
        Some(index)
    }

    /// Run board initialisation and the sketch's setup
    pub fn start(&self, board: &dyn Board, sketch: &mut dyn Sketch) {
        board.init();
        board.init_variant();
        info!("board initialised, running setup");
        sketch.setup();
    }

    /// Run one iteration of the foreground loop
    pub fn poll(&self, sketch: &mut dyn Sketch) {
        sketch.tick();
        self.dispatch_events(sketch);
    }

    /// Start and loop forever
    pub fn run(&self, board: &dyn Board, sketch: &mut dyn Sketch) -> ! {
        self.start(board, sketch);
        loop {
            self.poll(sketch);
        }
    }

    fn dispatch_events(&self, sketch: &mut dyn Sketch) {
        for (index, source) in self.sources.iter().enumerate() {
            if let Some(source) = source {
                if source.has_input() {
                    sketch.serial_event(index);
                }
            }
        }
    }
}
