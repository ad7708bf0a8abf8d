//! Peripheral constructor traits
//!
//! Each peripheral role has one constructor trait. A driver set (for a chip,
//! or the host simulator) implements all of them and is handed to the board
//! descriptor, which calls them after validating a request.
//!
//! Constructors never fail: the descriptor has already checked that the
//! requested pin or bus exists on the board.

use crate::button::{Edge, Pull};
use crate::gpio::PinMode;
use crate::i2c::I2cMode;
use crate::spi::SpiConfig;
use crate::uart::UartConfig;

/// Constructs GPIO lines
pub trait GpioDriver {
    /// GPIO handle type
    type Gpio;

    /// Claim `pin` as a GPIO line in the given mode
    fn gpio(&mut self, pin: u8, mode: PinMode) -> Self::Gpio;
}

/// Constructs LEDs
pub trait LedDriver {
    /// LED handle type
    type Led;

    /// Drive an LED wired to `pin`
    fn led(&mut self, pin: u8) -> Self::Led;
}

/// Constructs buttons
pub trait ButtonDriver {
    /// Button handle type
    type Button;

    /// Watch a button wired to `pin`
    ///
    /// `None` for any argument selects the driver's default.
    fn button(
        &mut self,
        pin: u8,
        event: Option<Edge>,
        debounce_ms: Option<u32>,
        pull: Option<Pull>,
    ) -> Self::Button;
}

/// Constructs PWM channels
pub trait PwmDriver {
    /// PWM handle type
    type Pwm;

    /// Generate a PWM waveform on `pin`
    ///
    /// # Arguments
    /// * `frequency_hz` - Output frequency
    /// * `duty` - Duty cycle ratio (0.0 - 1.0)
    fn pwm(&mut self, pin: u8, frequency_hz: f32, duty: f32) -> Self::Pwm;
}

/// Constructs ADC channels
pub trait AdcDriver {
    /// ADC handle type
    type Adc;

    /// Sample the analog input on `pin`
    fn adc(&mut self, pin: u8) -> Self::Adc;
}

/// Constructs I2C buses
pub trait I2cDriver {
    /// I2C handle type
    type I2c;

    /// Set up I2C bus `bus`
    ///
    /// `mode_option` is the clock rate in Hz for [`I2cMode::Controller`]
    /// and the own address for [`I2cMode::Target`].
    fn i2c(&mut self, bus: u8, mode: I2cMode, mode_option: u32) -> Self::I2c;
}

/// Constructs SPI buses
pub trait SpiDriver {
    /// SPI handle type
    type Spi;

    /// Set up SPI bus `bus`
    ///
    /// `None` means the caller supplied no options and the driver applies
    /// its own defaults.
    fn spi(&mut self, bus: u8, options: Option<SpiConfig>) -> Self::Spi;
}

/// Constructs UART ports
pub trait UartDriver {
    /// UART handle type
    type Uart;

    /// Open UART port `port`
    ///
    /// `None` means the caller supplied no options and the driver applies
    /// its own defaults.
    fn uart(&mut self, port: u8, options: Option<UartConfig>) -> Self::Uart;
}

/// A complete driver set covering every peripheral role
pub trait PeripheralDrivers:
    GpioDriver
    + LedDriver
    + ButtonDriver
    + PwmDriver
    + AdcDriver
    + I2cDriver
    + SpiDriver
    + UartDriver
{
}

// Blanket implementation
impl<T> PeripheralDrivers for T where
    T: GpioDriver
        + LedDriver
        + ButtonDriver
        + PwmDriver
        + AdcDriver
        + I2cDriver
        + SpiDriver
        + UartDriver
{
}
