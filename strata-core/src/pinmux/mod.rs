//! Pin configuration state machine
//!
//! Applies a requested [`PinMode`] to a pin as a fixed sequence of register
//! writes:
//!
//! ```text
//! resolve port ──▶ remap quirk ──▶ port clock ──▶ speed ──▶ mode
//!      │                                                     │
//!      ▼                                                     ▼
//!  Fatal::InvalidPin                              alternate function ──▶ pull
//! ```
//!
//! Every step writes a value derived only from `(pin, mode, family)`, so
//! applying the same request twice leaves the registers as applying it once.

pub mod digital;

use strata_hal::gpio::{ModeRegister, OutputType, Pull, Remap, Speed};
use strata_hal::{Family, PinName, Port};

use crate::system::{Fatal, Platform};

pub use digital::{digital_read, digital_write, GpioPin};

/// Requested pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Digital input
    Input(Pull),
    /// General purpose output
    Output { open_drain: bool, pull: Pull },
    /// Analog
    Analog,
    /// Alternate function driven by the peripheral (e.g. UART TX)
    Alternate {
        function: u8,
        open_drain: bool,
        pull: Pull,
    },
    /// Alternate function sampled by the peripheral (e.g. UART RX)
    ///
    /// The legacy GPIO block has no input-side routing, so there this is a
    /// plain input.
    AlternateInput { function: u8, pull: Pull },
}

impl PinMode {
    /// Push-pull output without pull
    pub const OUTPUT: PinMode = PinMode::Output {
        open_drain: false,
        pull: Pull::None,
    };

    /// Floating input
    pub const INPUT: PinMode = PinMode::Input(Pull::None);

    /// Check if the pin output stage is enabled in this mode
    pub fn drives_pin(&self) -> bool {
        matches!(self, PinMode::Output { .. } | PinMode::Alternate { .. })
    }

    fn pull(&self) -> Pull {
        match *self {
            PinMode::Input(pull)
            | PinMode::Output { pull, .. }
            | PinMode::Alternate { pull, .. }
            | PinMode::AlternateInput { pull, .. } => pull,
            PinMode::Analog => Pull::None,
        }
    }

    fn output_type(&self) -> OutputType {
        match *self {
            PinMode::Output { open_drain: true, .. } | PinMode::Alternate { open_drain: true, .. } => {
                OutputType::OpenDrain
            }
            _ => OutputType::PushPull,
        }
    }

    /// Mode as the given family's GPIO block expresses it
    fn resolve(self, family: Family) -> PinMode {
        match self {
            PinMode::AlternateInput { pull, .. } if family.has_legacy_gpio() => PinMode::Input(pull),
            mode => mode,
        }
    }

    fn mode_register(&self) -> ModeRegister {
        match self {
            PinMode::Input(_) => ModeRegister::Input,
            PinMode::Output { .. } => ModeRegister::Output,
            PinMode::Analog => ModeRegister::Analog,
            PinMode::Alternate { .. } | PinMode::AlternateInput { .. } => ModeRegister::Alternate,
        }
    }

    fn alternate_function(&self) -> Option<u8> {
        match *self {
            PinMode::Alternate { function, .. } | PinMode::AlternateInput { function, .. } => {
                Some(function)
            }
            _ => None,
        }
    }
}

/// Remap switch a pin needs before its mode is set
///
/// On parts that can route PA11/PA12 onto the PA9/PA10 pads, asking for
/// either pin of a pair selects which one the pad carries.
fn remap_for(family: Family, pin: PinName) -> Option<(Remap, bool)> {
    if !family.has_pa11_pa12_remap() || pin.port() != Some(Port::A) {
        return None;
    }
    match pin.pin() {
        9 | 10 => Some((Remap::Pa11Pa12, false)),
        11 | 12 => Some((Remap::Pa11Pa12, true)),
        _ => None,
    }
}

/// Resolve the port of `pin`, reporting an unresolvable pin as fatal
pub(crate) fn resolve_port(platform: &Platform<'_>, pin: PinName) -> Result<Port, Fatal> {
    match pin.port() {
        Some(port) if platform.gpio.port_exists(port) => Ok(port),
        _ => Err(platform.fatal(Fatal::InvalidPin(pin))),
    }
}

/// Configure `pin` for `mode`
///
/// An unresolvable pin is reported to the system error handler before any
/// register is touched.
pub fn configure(platform: &Platform<'_>, pin: PinName, mode: PinMode) -> Result<(), Fatal> {
    let port = resolve_port(platform, pin)?;
    let family = platform.family();
    let gpio = platform.gpio;
    let mode = mode.resolve(family);

    if let Some((remap, enabled)) = remap_for(family, pin) {
        gpio.set_remap(remap, enabled);
    }

    gpio.enable_port_clock(port);

    if mode.drives_pin() {
        gpio.set_speed(pin, Speed::High);
    }

    gpio.set_mode(pin, mode.mode_register());
    if mode.drives_pin() {
        gpio.set_output_type(pin, mode.output_type());
    }

    if let Some(function) = mode.alternate_function() {
        // Legacy block routes by peripheral remap, not per pin
        if !family.has_legacy_gpio() {
            gpio.set_alternate(pin, function);
        }
    }

    let pull = mode.pull();
    if family.has_legacy_gpio() && mode == PinMode::Input(Pull::None) {
        gpio.set_mode(pin, ModeRegister::Floating);
    } else {
        gpio.set_pull(pin, pull);
    }

    trace!("pin {=u8:#x} configured", pin.raw());
    Ok(())
}
