//! Peripheral and chip family identifiers
//!
//! A [`Peripheral`] names a logical peripheral instance independent of which
//! physical interrupt vector, clock gate or register block serves it on a
//! given chip. A [`Family`] names the silicon line whose quirks apply.

/// Logical peripheral instance
///
/// USART and UART instances share one numbering space (`UART4` is
/// `Usart(4)`), matching the vendor reference manuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Peripheral {
    /// Window watchdog
    Wwdg,
    /// Power voltage detector (and VDDIO2 monitor where present)
    Pvd,
    /// Real-time clock, tamper and wakeup
    Rtc,
    /// Flash interface
    Flash,
    /// Reset and clock control
    Rcc,
    /// Clock recovery system
    Crs,
    /// External interrupt line
    Exti(u8),
    /// Touch sensing controller
    Tsc,
    /// DMA channel or stream: (controller, channel)
    Dma(u8, u8),
    /// DMA request multiplexer
    Dmamux,
    /// Analog-to-digital converter
    Adc(u8),
    /// Comparator
    Comp(u8),
    /// General/advanced/basic timer
    Tim(u8),
    /// Low-power timer
    Lptim(u8),
    /// Digital-to-analog converter
    Dac,
    /// I2C controller
    I2c(u8),
    /// SPI controller
    Spi(u8),
    /// USART or UART instance
    Usart(u8),
    /// Low-power UART instance
    Lpuart(u8),
    /// bxCAN controller
    Can(u8),
    /// FDCAN controller
    Fdcan(u8),
    /// HDMI-CEC controller
    Cec,
    /// USB full-speed device
    Usb,
    /// USB OTG full-speed
    OtgFs,
    /// USB OTG high-speed
    OtgHs,
    /// USB Type-C power delivery
    Ucpd(u8),
    /// AES accelerator
    Aes,
    /// Random number generator
    Rng,
    /// LCD controller
    Lcd,
    /// SD/MMC interface
    Sdio,
    /// External memory controller
    Fsmc,
    /// Ethernet MAC
    Eth,
    /// Camera interface
    Dcmi,
    /// Hash processor
    Hash,
    /// Floating point unit
    Fpu,
}

impl Peripheral {
    /// Check if this peripheral is a serial port the core can drive
    pub fn is_serial(&self) -> bool {
        matches!(self, Peripheral::Usart(_) | Peripheral::Lpuart(_))
    }
}

/// Microcontroller family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Cortex-M0 mainstream line
    F0,
    /// Cortex-M3 mainstream line (legacy GPIO block)
    F1,
    /// Cortex-M4 high-performance line
    F4,
    /// Cortex-M0+ mainstream line
    G0,
    /// Cortex-M0+ ultra-low-power line
    L0,
}

impl Family {
    /// Check if the UART word-length field can express `bits`
    ///
    /// `bits` counts the parity bit when parity is enabled.
    pub fn supports_word_length(&self, bits: u8) -> bool {
        match bits {
            8 | 9 => true,
            // M1 bit only exists on the newer USART block
            7 => matches!(self, Family::F0 | Family::G0 | Family::L0),
            _ => false,
        }
    }

    /// Check if the GPIO block uses the legacy CRL/CRH layout
    ///
    /// On these parts a UART receive pin is a plain input, floating input
    /// is its own mode, and there is no per-pin alternate-function selector.
    pub fn has_legacy_gpio(&self) -> bool {
        matches!(self, Family::F1)
    }

    /// Check if PA11/PA12 can be remapped onto the PA9/PA10 pads
    pub fn has_pa11_pa12_remap(&self) -> bool {
        matches!(self, Family::F0 | Family::G0)
    }

    /// Number of implemented NVIC priority bits
    pub const fn priority_bits(&self) -> u8 {
        match self {
            Family::F0 | Family::G0 | Family::L0 => 2,
            Family::F1 | Family::F4 => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_peripherals() {
        assert!(Peripheral::Usart(1).is_serial());
        assert!(Peripheral::Lpuart(1).is_serial());
        assert!(!Peripheral::Tim(1).is_serial());
        assert!(!Peripheral::Spi(2).is_serial());
    }

    #[test]
    fn test_word_length_support() {
        assert!(Family::F1.supports_word_length(8));
        assert!(Family::F1.supports_word_length(9));
        assert!(!Family::F1.supports_word_length(7));
        assert!(Family::G0.supports_word_length(7));
        assert!(!Family::F4.supports_word_length(6));
    }

    #[test]
    fn test_family_quirks() {
        assert!(Family::F1.has_legacy_gpio());
        assert!(!Family::F4.has_legacy_gpio());
        assert!(Family::F0.has_pa11_pa12_remap());
        assert!(!Family::L0.has_pa11_pa12_remap());
    }
}
