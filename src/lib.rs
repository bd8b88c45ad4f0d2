//! Driver for daisy-chained MAX72xx LED display controllers (MAX7219/MAX7221).
//!
//! The driver keeps a logical frame (one byte per row, eight rows per chained
//! device) and pushes every change to the chips through an
//! [`embedded_hal::spi::SpiDevice`]. The chain length is the const generic `N`
//! (default 1): it sizes the frame, sizes every outgoing SPI transaction
//! (`2 * N` bytes, one register/value pair per device), and bounds every
//! device-address check.
//!
//! Writes that target a single device pad every other chain slot with the
//! no-op register, so one transaction never disturbs its neighbours. Single-LED
//! and column updates read-modify-write against the frame, so lighting one LED
//! never clears the rest of its row.
//!
//! The frame is advisory: it mirrors the hardware only as long as every
//! mutating call succeeds. There is no readback or resync.
//!
//! # Example
//!
//! ```rust,ignore
//! use max72xx_frame::Max72xx;
//!
//! // Four chained 8x8 modules on one SPI bus (Mode 0, 10 MHz or less).
//! let mut display: Max72xx<_, 4> = Max72xx::new(spi);
//! display.init()?;
//! display.set_intensity_all(0x04)?;
//! display.set_led(0, 3, 2, true)?;
//! display.set_row(2, 0, 0b1010_1010)?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod frame;
pub mod registers;

mod driver;

pub use crate::driver::Max72xx;
pub use crate::error::Error;
pub use crate::frame::Frame;

/// Number of digit registers (rows) per MAX72xx device.
pub const NUM_DIGITS: u8 = 8;

/// Highest intensity level accepted by the intensity register.
pub const MAX_INTENSITY: u8 = 0x0F;

/// Result type for all fallible driver operations.
pub type Result<T> = core::result::Result<T, Error>;
