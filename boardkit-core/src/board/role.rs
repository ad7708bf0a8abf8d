//! Peripheral roles and named peripherals

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Functional category of a hardware capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PeripheralRole {
    Gpio,
    Led,
    Button,
    Pwm,
    Adc,
    I2c,
    Spi,
    Uart,
}

impl PeripheralRole {
    /// Every role, in declaration order
    pub const ALL: [PeripheralRole; 8] = [
        PeripheralRole::Gpio,
        PeripheralRole::Led,
        PeripheralRole::Button,
        PeripheralRole::Pwm,
        PeripheralRole::Adc,
        PeripheralRole::I2c,
        PeripheralRole::Spi,
        PeripheralRole::Uart,
    ];

    /// Lowercase name, as used in board config files
    pub fn as_str(self) -> &'static str {
        match self {
            PeripheralRole::Gpio => "gpio",
            PeripheralRole::Led => "led",
            PeripheralRole::Button => "button",
            PeripheralRole::Pwm => "pwm",
            PeripheralRole::Adc => "adc",
            PeripheralRole::I2c => "i2c",
            PeripheralRole::Spi => "spi",
            PeripheralRole::Uart => "uart",
        }
    }

    /// Parse a lowercase role name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }

    /// Roles addressed by pin and validated against a capability table
    pub fn is_per_pin(self) -> bool {
        matches!(self, PeripheralRole::Pwm | PeripheralRole::Adc)
    }

    /// Roles addressed by bus index and validated against the declared count
    pub fn is_bus(self) -> bool {
        matches!(
            self,
            PeripheralRole::I2c | PeripheralRole::Spi | PeripheralRole::Uart
        )
    }
}

impl fmt::Display for PeripheralRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeripheralRole::Gpio => "GPIO",
            PeripheralRole::Led => "LED",
            PeripheralRole::Button => "button",
            PeripheralRole::Pwm => "PWM",
            PeripheralRole::Adc => "ADC",
            PeripheralRole::I2c => "I2C",
            PeripheralRole::Spi => "SPI",
            PeripheralRole::Uart => "UART",
        };
        f.write_str(name)
    }
}

/// Board default peripherals addressed by identifier rather than pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedPeripheral {
    /// Onboard LED
    Led0,
    /// Onboard button
    Btn0,
}
