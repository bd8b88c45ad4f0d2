//! MAX72xx register map.
//!
//! Each chip exposes sixteen register addresses; only the ones below are
//! writable, and the driver can only ever emit these. `NoOp` fills the chain
//! slots of devices a targeted write must leave untouched.

use crate::{Error, Result};

/// Writable MAX72xx register addresses.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// No operation; the chip latches the pair and ignores it.
    NoOp = 0x00,
    /// Digit 0 (row 0 on a matrix).
    Digit0 = 0x01,
    /// Digit 1.
    Digit1 = 0x02,
    /// Digit 2.
    Digit2 = 0x03,
    /// Digit 3.
    Digit3 = 0x04,
    /// Digit 4.
    Digit4 = 0x05,
    /// Digit 5.
    Digit5 = 0x06,
    /// Digit 6.
    Digit6 = 0x07,
    /// Digit 7.
    Digit7 = 0x08,
    /// Code B decode configuration, see [`DecodeMode`].
    DecodeMode = 0x09,
    /// Brightness, 0x00..=0x0F.
    Intensity = 0x0A,
    /// Number of scanned digits minus one.
    ScanLimit = 0x0B,
    /// Power mode: 0 = shutdown, 1 = normal operation.
    Shutdown = 0x0C,
    /// Display test: 1 lights every LED regardless of register data.
    DisplayTest = 0x0F,
}

impl Register {
    /// Register address as sent on the wire.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// The eight digit registers in ascending order (`Digit0` first).
    pub const fn digits() -> [Register; 8] {
        [
            Register::Digit0,
            Register::Digit1,
            Register::Digit2,
            Register::Digit3,
            Register::Digit4,
            Register::Digit5,
            Register::Digit6,
            Register::Digit7,
        ]
    }

    /// Maps a digit index (0..=7) to its register.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` for indexes above 7.
    pub fn try_digit(digit: u8) -> Result<Register> {
        match digit {
            0..=7 => Ok(Register::digits()[usize::from(digit)]),
            _ => Err(Error::OutOfBounds),
        }
    }
}

/// Code B decode configuration.
///
/// With decoding enabled the chip translates register values like `0`-`9`,
/// `E`, `H`, `L` into 7-segment patterns by itself. Matrix use wants
/// [`DecodeMode::NoDecode`] so every bit drives one LED directly.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeMode {
    /// No decoding; raw segment data on every digit.
    NoDecode = 0x00,
    /// Code B decode on digit 0 only.
    Digit0 = 0x01,
    /// Code B decode on digits 0 to 3.
    Digits0To3 = 0x0F,
    /// Code B decode on all digits.
    AllDigits = 0xFF,
}

impl DecodeMode {
    /// Register value as sent on the wire.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_addresses() {
        assert_eq!(Register::NoOp.addr(), 0x00);
        assert_eq!(Register::Digit0.addr(), 0x01);
        assert_eq!(Register::Digit7.addr(), 0x08);
        assert_eq!(Register::DecodeMode.addr(), 0x09);
        assert_eq!(Register::Intensity.addr(), 0x0A);
        assert_eq!(Register::ScanLimit.addr(), 0x0B);
        assert_eq!(Register::Shutdown.addr(), 0x0C);
        assert_eq!(Register::DisplayTest.addr(), 0x0F);
    }

    #[test]
    fn test_digits_ascending() {
        let addrs: Vec<u8> = Register::digits().iter().map(|r| r.addr()).collect();
        assert_eq!(addrs, vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    }

    #[test]
    fn test_try_digit_valid() {
        assert_eq!(Register::try_digit(0), Ok(Register::Digit0));
        assert_eq!(Register::try_digit(3), Ok(Register::Digit3));
        assert_eq!(Register::try_digit(7), Ok(Register::Digit7));
    }

    #[test]
    fn test_try_digit_invalid() {
        assert_eq!(Register::try_digit(8), Err(Error::OutOfBounds));
        assert_eq!(Register::try_digit(255), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_decode_mode_values() {
        assert_eq!(DecodeMode::NoDecode.value(), 0x00);
        assert_eq!(DecodeMode::Digit0.value(), 0x01);
        assert_eq!(DecodeMode::Digits0To3.value(), 0x0F);
        assert_eq!(DecodeMode::AllDigits.value(), 0xFF);
    }
}
