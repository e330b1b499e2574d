//! Digital pin I/O
//!
//! Thin level read/write helpers over configured pins, plus [`GpioPin`], a
//! handle implementing the `embedded-hal` digital traits so drivers written
//! against them can run on top of the pin state machine.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use strata_hal::gpio::Pull;
use strata_hal::PinName;

use super::{configure, resolve_port, PinMode};
use crate::system::{Fatal, Platform};

/// Drive an output pin high or low
pub fn digital_write(platform: &Platform<'_>, pin: PinName, high: bool) -> Result<(), Fatal> {
    resolve_port(platform, pin)?;
    platform.gpio.write(pin, high);
    Ok(())
}

/// Sample the input level of a pin
pub fn digital_read(platform: &Platform<'_>, pin: PinName) -> Result<bool, Fatal> {
    resolve_port(platform, pin)?;
    Ok(platform.gpio.read(pin))
}

/// Configured digital pin
pub struct GpioPin<'a> {
    platform: &'a Platform<'a>,
    pin: PinName,
}

impl<'a> GpioPin<'a> {
    /// Configure `pin` as a push-pull output driven to `initial`
    pub fn output(platform: &'a Platform<'a>, pin: PinName, initial: bool) -> Result<Self, Fatal> {
        // Latch the level first so the pin never glitches to the reset value
        resolve_port(platform, pin)?;
        platform.gpio.write(pin, initial);
        configure(platform, pin, PinMode::OUTPUT)?;
        Ok(Self { platform, pin })
    }

    /// Configure `pin` as an input
    pub fn input(platform: &'a Platform<'a>, pin: PinName, pull: Pull) -> Result<Self, Fatal> {
        configure(platform, pin, PinMode::Input(pull))?;
        Ok(Self { platform, pin })
    }

    /// Pin this handle drives
    pub fn pin(&self) -> PinName {
        self.pin
    }
}

impl ErrorType for GpioPin<'_> {
    type Error = Infallible;
}

impl OutputPin for GpioPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.platform.gpio.write(self.pin, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.platform.gpio.write(self.pin, true);
        Ok(())
    }
}

impl StatefulOutputPin for GpioPin<'_> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.platform.gpio.output_state(self.pin))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.platform.gpio.output_state(self.pin))
    }
}

impl InputPin for GpioPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.platform.gpio.read(self.pin))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.platform.gpio.read(self.pin))
    }
}
