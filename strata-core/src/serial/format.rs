//! Packed frame format decoding

use strata_hal::uart::{Parity, StopBits, UartConfig, WordLength};
use strata_hal::Family;

use crate::system::Fatal;

const DATA_BITS_MASK: u8 = 0x06;
const STOP_BITS_TWO: u8 = 0x08;
const PARITY_MASK: u8 = 0x30;
const PARITY_EVEN: u8 = 0x20;
const PARITY_ODD: u8 = 0x30;

/// Number of data bits encoded in `format` (5 to 8)
pub fn data_bits(format: u8) -> u8 {
    5 + ((format & DATA_BITS_MASK) >> 1)
}

/// Parity encoded in `format`
///
/// Only the even and odd patterns are recognised; anything else is no parity.
pub fn parity(format: u8) -> Parity {
    match format & PARITY_MASK {
        PARITY_EVEN => Parity::Even,
        PARITY_ODD => Parity::Odd,
        _ => Parity::None,
    }
}

/// Stop bits encoded in `format`
pub fn stop_bits(format: u8) -> StopBits {
    if format & STOP_BITS_TWO != 0 {
        StopBits::Two
    } else {
        StopBits::One
    }
}

/// Physical word length of `format`: data bits plus the parity bit
pub fn word_bits(format: u8) -> u8 {
    let parity_bit = u8::from(parity(format) != Parity::None);
    data_bits(format) + parity_bit
}

/// Build the UART configuration for `baud` and `format` on `family`
///
/// Fails with [`Fatal::UnsupportedWordLength`] when the family cannot
/// express the physical word length.
pub fn uart_config(baud: u32, format: u8, family: Family) -> Result<UartConfig, Fatal> {
    let bits = word_bits(format);
    let word_length = WordLength::from_bits(bits)
        .filter(|_| family.supports_word_length(bits))
        .ok_or(Fatal::UnsupportedWordLength(bits))?;

    Ok(UartConfig {
        baudrate: baud,
        word_length,
        parity: parity(format),
        stop_bits: stop_bits(format),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;

    #[test]
    fn test_default_format() {
        let config = uart_config(115200, SERIAL_8N1, Family::F4).unwrap();
        assert_eq!(config, UartConfig::default());
    }

    #[test]
    fn test_parity_adds_a_bit() {
        let config = uart_config(9600, SERIAL_8E1, Family::F1).unwrap();
        assert_eq!(config.word_length, WordLength::Nine);
        assert_eq!(config.parity, Parity::Even);

        let config = uart_config(9600, SERIAL_7O2, Family::F1).unwrap();
        assert_eq!(config.word_length, WordLength::Eight);
        assert_eq!(config.parity, Parity::Odd);
        assert_eq!(config.stop_bits, StopBits::Two);
    }

    #[test]
    fn test_seven_bit_words_need_m1() {
        assert_eq!(
            uart_config(9600, SERIAL_7N1, Family::G0).map(|c| c.word_length),
            Ok(WordLength::Seven)
        );
        assert_eq!(
            uart_config(9600, SERIAL_7N1, Family::F4),
            Err(Fatal::UnsupportedWordLength(7))
        );
    }

    #[test]
    fn test_short_words_unsupported() {
        for format in [SERIAL_5N1, SERIAL_6N1, SERIAL_5E2] {
            for family in [Family::F0, Family::F1, Family::F4, Family::G0, Family::L0] {
                assert!(uart_config(9600, format, family).is_err(), "{:#x}", format);
            }
        }
        assert_eq!(word_bits(SERIAL_6E1), 7);
    }

    #[test]
    fn test_unknown_parity_pattern_is_none() {
        assert_eq!(parity(0x16), Parity::None);
        assert_eq!(data_bits(0x16), 8);
    }
}
