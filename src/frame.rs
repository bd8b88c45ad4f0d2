//! Logical frame mirror for a chain of MAX72xx devices.
//!
//! One byte per digit register, eight per device. The driver updates the
//! frame before every hardware write so single-bit changes can be merged
//! into the full row byte the chip expects. The mirror is advisory: after a
//! failed write it may be ahead of the hardware until the caller retries.

/// In-memory mirror of the digit registers of `N` chained devices.
///
/// Row `x` of device `addr` holds one byte; bit `7 - y` of that byte is the
/// LED at column `y`, matching the chip's DP..G segment ordering (`y = 0` is
/// the most significant bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame<const N: usize> {
    rows: [[u8; 8]; N],
}

impl<const N: usize> Frame<N> {
    /// An all-off frame.
    pub(crate) const fn new() -> Self {
        Self { rows: [[0; 8]; N] }
    }

    /// The eight row bytes of one device, or `None` if `addr` is out of
    /// range.
    pub fn device(&self, addr: usize) -> Option<&[u8; 8]> {
        self.rows.get(addr)
    }

    /// One row byte, or `None` if `addr` or `row` is out of range.
    pub fn row(&self, addr: usize, row: u8) -> Option<u8> {
        self.rows.get(addr)?.get(usize::from(row)).copied()
    }

    /// The state of a single LED, or `None` if any index is out of range.
    pub fn led(&self, addr: usize, x: u8, y: u8) -> Option<bool> {
        if y > 7 {
            return None;
        }
        let row = self.row(addr, x)?;
        Some(row & mask(y) != 0)
    }

    /// Overwrites one row byte. Caller validates bounds.
    pub(crate) fn set_row(&mut self, addr: usize, row: u8, value: u8) {
        self.rows[addr][usize::from(row)] = value;
    }

    /// Sets or clears one bit of a row and returns the updated row byte.
    /// Caller validates bounds.
    pub(crate) fn set_led(&mut self, addr: usize, x: u8, y: u8, state: bool) -> u8 {
        let row = &mut self.rows[addr][usize::from(x)];
        if state {
            *row |= mask(y);
        } else {
            *row &= !mask(y);
        }
        *row
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit for column `y` within a row byte (`y = 0` selects the MSB).
const fn mask(y: u8) -> u8 {
    1 << (7 - y)
}
