//! Simulated driver set
//!
//! In-memory peripherals for running board code on the host. Every
//! constructor is counted per role, so tests can observe how often a
//! descriptor actually built something.
//!
//! - GPIO lines and LEDs hold their level in memory
//! - Buttons are [`DebouncedButton`]s over a simulated input line
//! - PWM and ADC channels record their settings / return injected readings
//! - I2C, SPI and UART are loopbacks that remember their configuration

use boardkit_core::PeripheralRole;
use boardkit_hal::driver::{
    AdcDriver, ButtonDriver, GpioDriver, I2cDriver, LedDriver, PwmDriver, SpiDriver, UartDriver,
};
use boardkit_hal::{Edge, I2cMode, PinMode, Pull, SpiConfig, UartConfig};

use crate::button::{DebouncedButton, DEFAULT_DEBOUNCE_MS};

pub mod adc;
pub mod bus;
pub mod gpio;
pub mod pwm;

pub use adc::SimAdc;
pub use bus::{SimBusError, SimI2c, SimSpi, SimUart};
pub use gpio::{SimGpio, SimLed};
pub use pwm::SimPwm;

/// Simulated button: debounce logic over a simulated input line
pub type SimButton = DebouncedButton<SimGpio>;

/// Driver set backed by in-memory peripherals
#[derive(Debug, Default)]
pub struct SimDrivers {
    /// Constructor calls per role, indexed by `PeripheralRole as usize`
    constructed: [u32; PeripheralRole::ALL.len()],
}

impl SimDrivers {
    /// Create a driver set with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles constructed for a role
    pub fn constructed(&self, role: PeripheralRole) -> u32 {
        self.constructed[role as usize]
    }

    /// Number of handles constructed across all roles
    pub fn total_constructed(&self) -> u32 {
        self.constructed.iter().sum()
    }

    fn count(&mut self, role: PeripheralRole) {
        self.constructed[role as usize] += 1;
    }
}

impl GpioDriver for SimDrivers {
    type Gpio = SimGpio;

    fn gpio(&mut self, pin: u8, mode: PinMode) -> SimGpio {
        self.count(PeripheralRole::Gpio);
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: gpio {} as {}", pin, mode);
        SimGpio::new(pin, mode)
    }
}

impl LedDriver for SimDrivers {
    type Led = SimLed;

    fn led(&mut self, pin: u8) -> SimLed {
        self.count(PeripheralRole::Led);
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: led on pin {}", pin);
        SimLed::new(pin)
    }
}

impl ButtonDriver for SimDrivers {
    type Button = SimButton;

    fn button(
        &mut self,
        pin: u8,
        event: Option<Edge>,
        debounce_ms: Option<u32>,
        pull: Option<Pull>,
    ) -> SimButton {
        self.count(PeripheralRole::Button);
        let edge = event.unwrap_or_default();
        let debounce_ms = debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS);
        let mode = match pull.unwrap_or_default() {
            Pull::None => PinMode::Input,
            Pull::Up => PinMode::InputPullUp,
            Pull::Down => PinMode::InputPullDown,
        };
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: button on pin {} ({}, {} ms)", pin, edge, debounce_ms);
        DebouncedButton::new(SimGpio::new(pin, mode), edge, debounce_ms)
    }
}

impl PwmDriver for SimDrivers {
    type Pwm = SimPwm;

    fn pwm(&mut self, pin: u8, frequency_hz: f32, duty: f32) -> SimPwm {
        self.count(PeripheralRole::Pwm);
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: pwm on pin {} ({} Hz, duty {})", pin, frequency_hz, duty);
        SimPwm::new(pin, frequency_hz, duty)
    }
}

impl AdcDriver for SimDrivers {
    type Adc = SimAdc;

    fn adc(&mut self, pin: u8) -> SimAdc {
        self.count(PeripheralRole::Adc);
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: adc on pin {}", pin);
        SimAdc::new(pin)
    }
}

impl I2cDriver for SimDrivers {
    type I2c = SimI2c;

    fn i2c(&mut self, bus: u8, mode: I2cMode, mode_option: u32) -> SimI2c {
        self.count(PeripheralRole::I2c);
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: i2c{} as {} ({})", bus, mode, mode_option);
        SimI2c::new(bus, mode, mode_option)
    }
}

impl SpiDriver for SimDrivers {
    type Spi = SimSpi;

    fn spi(&mut self, bus: u8, options: Option<SpiConfig>) -> SimSpi {
        self.count(PeripheralRole::Spi);
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: spi{} (options given: {})", bus, options.is_some());
        SimSpi::new(bus, options)
    }
}

impl UartDriver for SimDrivers {
    type Uart = SimUart;

    fn uart(&mut self, port: u8, options: Option<UartConfig>) -> SimUart {
        self.count(PeripheralRole::Uart);
        #[cfg(feature = "defmt")]
        defmt::trace!("sim: uart{} (options given: {})", port, options.is_some());
        SimUart::new(port, options)
    }
}
