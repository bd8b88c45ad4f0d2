//! Error types for the MAX72xx chain driver.

use embedded_hal::spi;
use thiserror::Error;

/// Errors returned by driver operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A device address, LED coordinate, row, column, intensity, or scan
    /// limit was outside its valid range. Nothing was written to the bus.
    #[error("device address, coordinate, or register value out of range")]
    OutOfBounds,

    /// The SPI transport reported a failure. The driver relays the HAL's
    /// error classification without interpreting it; the frame may no longer
    /// mirror the hardware.
    #[error("spi transport error: {0:?}")]
    Transport(spi::ErrorKind),
}

// Blanket conversion so `?` accepts any HAL SPI error type. Requires that
// `Error` itself never implements `spi::Error`.
impl<E: spi::Error> From<E> for Error {
    fn from(err: E) -> Self {
        Self::Transport(err.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spi_error_conversion() {
        let err = Error::from(spi::ErrorKind::Overrun);
        assert_eq!(err, Error::Transport(spi::ErrorKind::Overrun));
    }

    #[test]
    fn test_error_comparison() {
        assert_eq!(Error::OutOfBounds, Error::OutOfBounds);
        assert_ne!(Error::OutOfBounds, Error::Transport(spi::ErrorKind::Other));
    }
}
