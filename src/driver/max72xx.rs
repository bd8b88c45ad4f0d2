//! Core MAX72xx chain driver implementation

use embedded_hal::spi::SpiDevice;

use crate::{
    MAX_INTENSITY, NUM_DIGITS, Result,
    error::Error,
    frame::Frame,
    registers::{DecodeMode, Register},
};

/// Driver for a chain of MAX72xx LED display controllers.
/// Communicates over SPI using the embedded-hal `SpiDevice` trait.
///
/// `N` is the number of daisy-chained devices (default 1). It sizes the
/// logical frame and every outgoing transaction; `N == 0` fails to compile.
///
/// The SPI interface must use Mode 0, which means the clock is low when idle
/// and data is read on the rising edge of the clock signal. The SPI frequency
/// must be 10 MHz or less, as required by the MAX72xx datasheets.
///
/// Construction performs no bus traffic and leaves the chips in whatever
/// power state they woke up in; call [`Max72xx::init`] (or `shutdown_all`,
/// `set_intensity_all`, `clear_all` individually) to bring the chain into a
/// known state.
pub struct Max72xx<SPI, const N: usize = 1> {
    spi: SPI,
    frame: Frame<N>,
}

impl<SPI, const N: usize> Max72xx<SPI, N>
where
    SPI: SpiDevice,
{
    /// Creates a new driver instance over the given SPI interface with an
    /// all-off logical frame.
    pub fn new(spi: SPI) -> Self {
        const { assert!(N > 0, "a MAX72xx chain needs at least one device") };

        Self {
            spi,
            frame: Frame::new(),
        }
    }

    /// Returns the number of devices in the chain (the const generic `N`).
    pub const fn device_count(&self) -> usize {
        N
    }

    /// Read access to the logical frame.
    ///
    /// The frame mirrors the hardware only as long as every mutating call
    /// succeeded; after a failed write it may be ahead of the chips.
    pub const fn frame(&self) -> &Frame<N> {
        &self.frame
    }

    /// Brings every device in the chain into a known state: powered on,
    /// display test off, all eight digits scanned, no Code B decoding, and
    /// a cleared display.
    pub fn init(&mut self) -> Result<()> {
        self.shutdown_all(false)?;

        self.display_test_all(false)?;
        self.set_scan_limit_all(NUM_DIGITS)?;
        self.set_decode_mode_all(DecodeMode::NoDecode)?;

        self.clear_all()?;

        Ok(())
    }

    /// Writes a value to one register of one device in the chain.
    ///
    /// Each MAX72xx latches a 16-bit packet: one byte for the register
    /// address and one byte for the data. To update a single device the full
    /// `2 * N`-byte transaction is built fresh, with the target's pair at
    /// offset `addr * 2` and every other slot left as `(NoOp, 0x00)`, so the
    /// other devices in the chain latch no-ops and keep their state.
    ///
    /// Chain position convention: device 0 is the first pair sent, which
    /// after shifting ends up in the device furthest from the controller.
    ///
    /// This is the single choke point every targeted operation funnels
    /// through; the device-address check lives here once. Register validity
    /// needs no check because [`Register`] cannot hold an invalid address.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `addr >= N`, without touching the
    /// bus, or `Error::Transport` if the SPI write fails.
    pub(crate) fn write_device_register(
        &mut self,
        addr: usize,
        register: Register,
        value: u8,
    ) -> Result<()> {
        if addr >= N {
            return Err(Error::OutOfBounds);
        }

        // Zero-filled means (NoOp, 0x00) in every non-targeted slot.
        let mut buffer = [[0u8; 2]; N];
        buffer[addr] = [register.addr(), value];

        self.spi.write(buffer.as_flattened())?;

        Ok(())
    }

    /// Writes one (register, value) pair to each device in the chain in a
    /// single transaction, `ops[0]` going to device 0.
    pub(crate) fn write_chain_registers(&mut self, ops: [(Register, u8); N]) -> Result<()> {
        let mut buffer = [[0u8; 2]; N];
        for (slot, (register, value)) in buffer.iter_mut().zip(ops) {
            *slot = [register.addr(), value];
        }

        self.spi.write(buffer.as_flattened())?;

        Ok(())
    }

    /// Enters or leaves shutdown mode on one device.
    ///
    /// The register value is the inverted flag (1 = normal operation,
    /// 0 = shutdown), so `shutdown(addr, true)` writes `0x00`. Idempotent;
    /// the driver does not track the chip's power state.
    pub fn shutdown(&mut self, addr: usize, enter: bool) -> Result<()> {
        let value = if enter { 0x00 } else { 0x01 };
        self.write_device_register(addr, Register::Shutdown, value)
    }

    /// Enters or leaves shutdown mode on every device in one transaction.
    pub fn shutdown_all(&mut self, enter: bool) -> Result<()> {
        let value = if enter { 0x00 } else { 0x01 };
        self.write_chain_registers([(Register::Shutdown, value); N])
    }

    /// Enables or disables display test mode on one device.
    ///
    /// While enabled, every LED of that device is lit regardless of the
    /// digit registers. The logical frame is not affected.
    pub fn display_test(&mut self, addr: usize, enable: bool) -> Result<()> {
        let value = if enable { 0x01 } else { 0x00 };
        self.write_device_register(addr, Register::DisplayTest, value)
    }

    /// Enables or disables display test mode on every device in one
    /// transaction.
    pub fn display_test_all(&mut self, enable: bool) -> Result<()> {
        let value = if enable { 0x01 } else { 0x00 };
        self.write_chain_registers([(Register::DisplayTest, value); N])
    }

    /// Sets how many digits (rows) one device actively scans.
    ///
    /// `limit` is the number of used digits, 1..=8; the chip register takes
    /// `limit - 1`. Matrix modules want the full 8.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `limit` is not in `1..=8`.
    pub fn set_scan_limit(&mut self, addr: usize, limit: u8) -> Result<()> {
        if !(1..=NUM_DIGITS).contains(&limit) {
            return Err(Error::OutOfBounds);
        }

        self.write_device_register(addr, Register::ScanLimit, limit - 1)
    }

    /// Sets the scan limit on every device in one transaction.
    ///
    /// `limit` must be in 1..=8. Internally sends `limit - 1` to each chip.
    pub fn set_scan_limit_all(&mut self, limit: u8) -> Result<()> {
        if !(1..=NUM_DIGITS).contains(&limit) {
            return Err(Error::OutOfBounds);
        }

        self.write_chain_registers([(Register::ScanLimit, limit - 1); N])
    }

    /// Selects which digits of one device use Code B decoding.
    ///
    /// Decoding turns register values like `0`-`9`, `E`, `H`, `L` into
    /// 7-segment patterns automatically; see [`DecodeMode`]. Matrix use
    /// wants [`DecodeMode::NoDecode`].
    pub fn set_decode_mode(&mut self, addr: usize, mode: DecodeMode) -> Result<()> {
        self.write_device_register(addr, Register::DecodeMode, mode.value())
    }

    /// Sets the decode mode on every device in one transaction.
    pub fn set_decode_mode_all(&mut self, mode: DecodeMode) -> Result<()> {
        self.write_chain_registers([(Register::DecodeMode, mode.value()); N])
    }

    /// Sets the brightness intensity (0 to 15) of one device.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `intensity > 0x0F`, before any bus
    /// traffic.
    pub fn set_intensity(&mut self, addr: usize, intensity: u8) -> Result<()> {
        if intensity > MAX_INTENSITY {
            return Err(Error::OutOfBounds);
        }

        self.write_device_register(addr, Register::Intensity, intensity)
    }

    /// Sets the brightness intensity on every device in one transaction.
    pub fn set_intensity_all(&mut self, intensity: u8) -> Result<()> {
        if intensity > MAX_INTENSITY {
            return Err(Error::OutOfBounds);
        }

        self.write_chain_registers([(Register::Intensity, intensity); N])
    }

    /// Turns every LED of one device off.
    ///
    /// Writes `0x00` to the eight digit registers in ascending order (one
    /// transaction each), zeroing the matching frame row before each write.
    /// Stops at the first failed write, leaving the device partially
    /// cleared; there is no rollback.
    pub fn clear(&mut self, addr: usize) -> Result<()> {
        if addr >= N {
            return Err(Error::OutOfBounds);
        }

        for (row, register) in Register::digits().into_iter().enumerate() {
            self.frame.set_row(addr, row as u8, 0x00);
            self.write_device_register(addr, register, 0x00)?;
        }

        Ok(())
    }

    /// Turns every LED of every device off, one transaction per digit
    /// register (eight in total).
    pub fn clear_all(&mut self) -> Result<()> {
        for (row, register) in Register::digits().into_iter().enumerate() {
            for addr in 0..N {
                self.frame.set_row(addr, row as u8, 0x00);
            }
            self.write_chain_registers([(register, 0x00); N])?;
        }

        Ok(())
    }

    /// Switches a single LED on or off.
    ///
    /// `x` is the digit (row) index and selects the digit register
    /// (`Digit0 + x`); `y` is the segment (column) index and selects bit
    /// `7 - y` of the row byte, matching the chip's segment line order:
    ///
    /// | Bit         | 7  | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
    /// |-------------|----|---|---|---|---|---|---|---|
    /// | **Segment** | DP | A | B | C | D | E | F | G |
    ///
    /// On an 8x8 matrix module, `x` is the row and `y` the column, with
    /// `y = 0` on the DP side. Wiring varies between modules; if the output
    /// appears mirrored or rotated, remap coordinates in the caller.
    ///
    /// The driver merges the bit into the frame row for `(addr, x)` and
    /// writes the whole updated row byte, so the other seven LEDs of that
    /// row keep their state.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `addr >= N` or either coordinate is
    /// above 7; the frame is left untouched.
    pub fn set_led(&mut self, addr: usize, x: u8, y: u8, state: bool) -> Result<()> {
        if addr >= N || y > 7 {
            return Err(Error::OutOfBounds);
        }
        let register = Register::try_digit(x)?;

        let row = self.frame.set_led(addr, x, y, state);
        self.write_device_register(addr, register, row)
    }

    /// Overwrites one row (all 8 segments) of one device with a bit mask.
    ///
    /// Bit `7 - y` of `value` is the LED at column `y`, as in [`set_led`].
    /// Updates the frame row and writes it through in one register write.
    ///
    /// [`set_led`]: Max72xx::set_led
    pub fn set_row(&mut self, addr: usize, row: u8, value: u8) -> Result<()> {
        if addr >= N {
            return Err(Error::OutOfBounds);
        }
        let register = Register::try_digit(row)?;

        self.frame.set_row(addr, row, value);
        self.write_device_register(addr, register, value)
    }

    /// Overwrites one column (one bit across all eight rows) of one device
    /// with a bit mask, bit `7 - row` of `value` driving row `row`.
    ///
    /// The hardware has no column register, so this issues eight row
    /// updates in ascending order, each read-modify-writing the frame row
    /// so the other seven columns keep their state. Stops at the first
    /// failed write; rows already written stay updated.
    pub fn set_column(&mut self, addr: usize, column: u8, value: u8) -> Result<()> {
        if addr >= N || column > 7 {
            return Err(Error::OutOfBounds);
        }

        for (row, register) in Register::digits().into_iter().enumerate() {
            let state = value & (1 << (7 - row)) != 0;
            let updated = self.frame.set_led(addr, row as u8, column, state);
            self.write_device_register(addr, register, updated)?;
        }

        Ok(())
    }
}
