//! Recording driver set for unit tests

use boardkit_hal::driver::{
    AdcDriver, ButtonDriver, GpioDriver, I2cDriver, LedDriver, PwmDriver, SpiDriver, UartDriver,
};
use boardkit_hal::{Edge, I2cMode, PinMode, Pull, SpiConfig, UartConfig};
use std::vec::Vec;

/// A driver call as seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Gpio(u8, PinMode),
    Led(u8),
    Button(u8, Option<Edge>, Option<u32>, Option<Pull>),
    Pwm(u8, f32, f32),
    Adc(u8),
    I2c(u8, I2cMode, u32),
    Spi(u8, Option<SpiConfig>),
    Uart(u8, Option<UartConfig>),
}

/// Handle returned by the mock: the call that built it plus a serial
#[derive(Debug, PartialEq)]
pub(crate) struct Handle {
    pub call: Call,
    pub serial: usize,
}

/// Mock driver set that records every constructor call
#[derive(Default)]
pub(crate) struct MockDrivers {
    pub calls: Vec<Call>,
}

impl MockDrivers {
    fn record(&mut self, call: Call) -> Handle {
        self.calls.push(call.clone());
        Handle {
            call,
            serial: self.calls.len(),
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl GpioDriver for MockDrivers {
    type Gpio = Handle;
    fn gpio(&mut self, pin: u8, mode: PinMode) -> Handle {
        self.record(Call::Gpio(pin, mode))
    }
}

impl LedDriver for MockDrivers {
    type Led = Handle;
    fn led(&mut self, pin: u8) -> Handle {
        self.record(Call::Led(pin))
    }
}

impl ButtonDriver for MockDrivers {
    type Button = Handle;
    fn button(
        &mut self,
        pin: u8,
        event: Option<Edge>,
        debounce_ms: Option<u32>,
        pull: Option<Pull>,
    ) -> Handle {
        self.record(Call::Button(pin, event, debounce_ms, pull))
    }
}

impl PwmDriver for MockDrivers {
    type Pwm = Handle;
    fn pwm(&mut self, pin: u8, frequency_hz: f32, duty: f32) -> Handle {
        self.record(Call::Pwm(pin, frequency_hz, duty))
    }
}

impl AdcDriver for MockDrivers {
    type Adc = Handle;
    fn adc(&mut self, pin: u8) -> Handle {
        self.record(Call::Adc(pin))
    }
}

impl I2cDriver for MockDrivers {
    type I2c = Handle;
    fn i2c(&mut self, bus: u8, mode: I2cMode, mode_option: u32) -> Handle {
        self.record(Call::I2c(bus, mode, mode_option))
    }
}

impl SpiDriver for MockDrivers {
    type Spi = Handle;
    fn spi(&mut self, bus: u8, options: Option<SpiConfig>) -> Handle {
        self.record(Call::Spi(bus, options))
    }
}

impl UartDriver for MockDrivers {
    type Uart = Handle;
    fn uart(&mut self, port: u8, options: Option<UartConfig>) -> Handle {
        self.record(Call::Uart(port, options))
    }
}
