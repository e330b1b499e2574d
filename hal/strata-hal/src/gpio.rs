//! GPIO register abstractions
//!
//! Pins are addressed by a packed [`PinName`] (port in the high nibble, pin
//! within the port in the low nibble). The [`GpioRegisters`] trait exposes
//! the individual register fields the pin configuration state machine
//! programs, one call per field, so the order of side effects stays under
//! the caller's control.

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
}

impl Port {
    /// Resolve a port from its index (A = 0)
    pub fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Port::A,
            1 => Port::B,
            2 => Port::C,
            3 => Port::D,
            4 => Port::E,
            5 => Port::F,
            6 => Port::G,
            7 => Port::H,
            8 => Port::I,
            9 => Port::J,
            10 => Port::K,
            _ => return None,
        })
    }

    /// Index of this port (A = 0)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Port letter
    pub fn letter(self) -> char {
        (b'A' + self.index()) as char
    }
}

/// Packed logical pin identifier
///
/// The encoding is not validated on construction: a name whose port nibble
/// does not resolve is representable so the configuration layer can reject
/// it through the system error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinName(u8);

impl PinName {
    /// Build a pin name from a port and pin number (0-15)
    pub const fn new(port: Port, pin: u8) -> Self {
        Self(((port as u8) << 4) | (pin & 0x0F))
    }

    /// Wrap a raw packed identifier
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Raw packed identifier
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Port owning this pin, if the port nibble names one
    pub fn port(self) -> Option<Port> {
        Port::from_index(self.0 >> 4)
    }

    /// Pin number within the port
    pub const fn pin(self) -> u8 {
        self.0 & 0x0F
    }

    /// Parse a pin string
    ///
    /// Supports formats like "PA0" or "PB12".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let rest = s.strip_prefix('P')?;
        let mut chars = rest.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let port = Port::from_index(letter as u8 - b'A')?;

        let pin: u8 = chars.as_str().parse().ok()?;
        if pin > 15 {
            return None;
        }

        Some(Self::new(port, pin))
    }
}

/// Output drive speed class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Pull resistor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

/// Output stage type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputType {
    PushPull,
    OpenDrain,
}

/// Base mode register value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeRegister {
    /// Digital input (with pull on the legacy block)
    Input,
    /// Floating input (legacy block only)
    Floating,
    /// General purpose output
    Output,
    /// Alternate function
    Alternate,
    /// Analog
    Analog,
}

/// Pin remap switches that must be set before the GPIO mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Remap {
    /// Route PA11/PA12 onto the pads shared with PA9/PA10
    Pa11Pa12,
}

/// GPIO register access
///
/// Each method writes exactly one register field. Implementations must not
/// derive any other field from the written value.
pub trait GpioRegisters {
    /// Check if this part implements the given port
    fn port_exists(&self, port: Port) -> bool;

    /// Enable the bus clock of a port
    fn enable_port_clock(&self, port: Port);

    /// Program the output speed field
    fn set_speed(&self, pin: PinName, speed: Speed);

    /// Program the base mode field
    fn set_mode(&self, pin: PinName, mode: ModeRegister);

    /// Program the output type field
    fn set_output_type(&self, pin: PinName, output: OutputType);

    /// Program the alternate function selector
    fn set_alternate(&self, pin: PinName, function: u8);

    /// Program the pull configuration
    fn set_pull(&self, pin: PinName, pull: Pull);

    /// Set or clear a pin remap switch
    fn set_remap(&self, remap: Remap, enabled: bool);

    /// Drive the output data bit
    fn write(&self, pin: PinName, high: bool);

    /// Sample the input data bit
    fn read(&self, pin: PinName) -> bool;

    /// Read back the output data bit
    fn output_state(&self, pin: PinName) -> bool;
}
