//! Simulated bus peripherals
//!
//! All three buses are loopbacks: whatever is written comes back on the
//! next read. They keep the configuration they were opened with so tests
//! can check what reached the driver.

use core::fmt;

use boardkit_hal::{I2cBus, I2cMode, SpiBus, SpiConfig, UartConfig, UartRx, UartTx};
use heapless::Deque;

/// Loopback buffer depth in bytes
pub const LOOPBACK_DEPTH: usize = 64;

/// Byte returned by an I2C read with nothing buffered (idle bus)
const I2C_IDLE: u8 = 0xFF;

/// Error from a simulated bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimBusError {
    /// Loopback buffer is full
    Overflow,
    /// Read and write buffers differ in length
    LengthMismatch,
}

impl fmt::Display for SimBusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimBusError::Overflow => write!(f, "loopback buffer full"),
            SimBusError::LengthMismatch => write!(f, "buffer length mismatch"),
        }
    }
}

fn push_all(buf: &mut Deque<u8, LOOPBACK_DEPTH>, data: &[u8]) -> Result<(), SimBusError> {
    if buf.capacity() - buf.len() < data.len() {
        return Err(SimBusError::Overflow);
    }
    for &byte in data {
        buf.push_back(byte).map_err(|_| SimBusError::Overflow)?;
    }
    Ok(())
}

/// Loopback I2C bus
#[derive(Debug)]
pub struct SimI2c {
    bus: u8,
    mode: I2cMode,
    mode_option: u32,
    buffer: Deque<u8, LOOPBACK_DEPTH>,
}

impl SimI2c {
    pub fn new(bus: u8, mode: I2cMode, mode_option: u32) -> Self {
        Self {
            bus,
            mode,
            mode_option,
            buffer: Deque::new(),
        }
    }

    /// Bus index
    pub fn bus(&self) -> u8 {
        self.bus
    }

    /// Controller or target
    pub fn mode(&self) -> I2cMode {
        self.mode
    }

    /// Clock rate (controller) or own address (target)
    pub fn mode_option(&self) -> u32 {
        self.mode_option
    }
}

impl I2cBus for SimI2c {
    type Error = SimBusError;

    fn write(&mut self, _address: u8, data: &[u8]) -> Result<(), Self::Error> {
        push_all(&mut self.buffer, data)
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        for byte in buf.iter_mut() {
            *byte = self.buffer.pop_front().unwrap_or(I2C_IDLE);
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write(address, write_data)?;
        self.read(address, read_buf)
    }
}

/// Loopback SPI bus (MISO wired to MOSI)
#[derive(Debug, Clone)]
pub struct SimSpi {
    bus: u8,
    options: Option<SpiConfig>,
}

impl SimSpi {
    pub fn new(bus: u8, options: Option<SpiConfig>) -> Self {
        Self { bus, options }
    }

    /// Bus index
    pub fn bus(&self) -> u8 {
        self.bus
    }

    /// Check if the caller supplied options
    pub fn options_supplied(&self) -> bool {
        self.options.is_some()
    }

    /// Effective configuration
    pub fn config(&self) -> SpiConfig {
        self.options.unwrap_or_default()
    }
}

impl SpiBus for SimSpi {
    type Error = SimBusError;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        if read.len() != write.len() {
            return Err(SimBusError::LengthMismatch);
        }
        read.copy_from_slice(write);
        Ok(())
    }

    fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        buf.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, _data: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Loopback UART (TX wired to RX)
#[derive(Debug)]
pub struct SimUart {
    port: u8,
    options: Option<UartConfig>,
    rx: Deque<u8, LOOPBACK_DEPTH>,
}

impl SimUart {
    pub fn new(port: u8, options: Option<UartConfig>) -> Self {
        Self {
            port,
            options,
            rx: Deque::new(),
        }
    }

    /// Port index
    pub fn port(&self) -> u8 {
        self.port
    }

    /// Check if the caller supplied options
    pub fn options_supplied(&self) -> bool {
        self.options.is_some()
    }

    /// Effective configuration
    pub fn config(&self) -> UartConfig {
        self.options.unwrap_or_default()
    }
}

impl UartTx for SimUart {
    type Error = SimBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        push_all(&mut self.rx, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl UartRx for SimUart {
    type Error = SimBusError;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.rx.pop_front() {
                Some(byte) => {
                    *slot = byte;
                    count += 1;
                }
                None => break,
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i2c_loopback() {
        let mut i2c = SimI2c::new(1, I2cMode::Target, 0x42);
        assert_eq!(i2c.bus(), 1);
        assert_eq!(i2c.mode(), I2cMode::Target);
        assert_eq!(i2c.mode_option(), 0x42);

        let mut buf = [0u8; 3];
        i2c.write_read(0x10, &[0xAB], &mut buf).unwrap();
        assert_eq!(buf, [0xAB, 0xFF, 0xFF]);
    }

    #[test]
    fn test_i2c_overflow() {
        let mut i2c = SimI2c::new(0, I2cMode::Controller, 100_000);
        let data = [0u8; LOOPBACK_DEPTH + 1];
        assert_eq!(i2c.write(0x10, &data), Err(SimBusError::Overflow));
        // Nothing partially queued
        let mut buf = [0u8; 1];
        i2c.read(0x10, &mut buf).unwrap();
        assert_eq!(buf, [0xFF]);
    }

    #[test]
    fn test_spi_transfer_lengths() {
        let mut spi = SimSpi::new(0, None);
        let mut read = [0u8; 2];
        assert_eq!(
            spi.transfer(&mut read, &[1, 2, 3]),
            Err(SimBusError::LengthMismatch)
        );

        let mut data = [9u8, 8];
        spi.transfer_in_place(&mut data).unwrap();
        assert_eq!(data, [9, 8]);
        spi.read(&mut data).unwrap();
        assert_eq!(data, [0, 0]);
    }

    #[test]
    fn test_spi_options_kept() {
        let config = SpiConfig {
            frequency: 8_000_000,
            ..SpiConfig::default()
        };
        let spi = SimSpi::new(1, Some(config));
        assert!(spi.options_supplied());
        assert_eq!(spi.config().frequency, 8_000_000);
    }

    #[test]
    fn test_uart_loopback() {
        let mut uart = SimUart::new(1, None);
        assert!(!uart.options_supplied());
        assert_eq!(uart.config(), UartConfig::default());

        uart.write_blocking(b"ok").unwrap();
        uart.flush().unwrap();
        assert_eq!(uart.read_byte(), Ok(b'o'));
        let mut buf = [0u8; 8];
        assert_eq!(uart.read_blocking(&mut buf), Ok(1));
        assert_eq!(buf[0], b'k');
        assert_eq!(uart.read_blocking(&mut buf), Ok(0));
    }
}
