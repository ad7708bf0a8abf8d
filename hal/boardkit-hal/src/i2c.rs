//! I2C bus abstractions
//!
//! Provides traits for I2C operations that can be implemented
//! by chip-specific drivers.

/// Role of this node on the I2C bus
///
/// The raw values match the numeric mode codes used by board scripts
/// (0 = controller, 1 = target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum I2cMode {
    /// Bus controller (master); the mode option is the clock rate in Hz
    #[default]
    Controller = 0,
    /// Bus target (slave); the mode option is the own 7-bit address
    Target = 1,
}

impl I2cMode {
    /// Get the mode as its raw code
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a mode from its raw code
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(I2cMode::Controller),
            1 => Some(I2cMode::Target),
            _ => None,
        }
    }
}

/// I2C bus
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. In target mode the address argument is ignored.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// I2C controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}
