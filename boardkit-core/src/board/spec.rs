//! Board capability tables
//!
//! A [`BoardSpec`] is plain data: how many of each peripheral the board
//! has, which pins can do PWM or ADC, and where the onboard LED and button
//! are wired. It borrows its tables so that a board can be a `const`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::role::{NamedPeripheral, PeripheralRole};
use crate::config::ConfigError;

/// Declared number of peripherals per role
///
/// The GPIO, LED, button, PWM and ADC counts are informational. The I2C,
/// SPI and UART counts bound the valid bus indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeripheralCounts {
    pub gpio: u8,
    pub led: u8,
    pub button: u8,
    pub pwm: u8,
    pub adc: u8,
    pub i2c: u8,
    pub spi: u8,
    pub uart: u8,
}

impl PeripheralCounts {
    /// Declared count for a role
    pub fn get(&self, role: PeripheralRole) -> u8 {
        match role {
            PeripheralRole::Gpio => self.gpio,
            PeripheralRole::Led => self.led,
            PeripheralRole::Button => self.button,
            PeripheralRole::Pwm => self.pwm,
            PeripheralRole::Adc => self.adc,
            PeripheralRole::I2c => self.i2c,
            PeripheralRole::Spi => self.spi,
            PeripheralRole::Uart => self.uart,
        }
    }

    /// Set the declared count for a role
    pub fn set(&mut self, role: PeripheralRole, count: u8) {
        let slot = match role {
            PeripheralRole::Gpio => &mut self.gpio,
            PeripheralRole::Led => &mut self.led,
            PeripheralRole::Button => &mut self.button,
            PeripheralRole::Pwm => &mut self.pwm,
            PeripheralRole::Adc => &mut self.adc,
            PeripheralRole::I2c => &mut self.i2c,
            PeripheralRole::Spi => &mut self.spi,
            PeripheralRole::Uart => &mut self.uart,
        };
        *slot = count;
    }
}

/// Fixed pins of the board's default peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedPins {
    /// Onboard LED pin
    pub led0: u8,
    /// Onboard button pin
    pub btn0: u8,
}

impl NamedPins {
    /// Pin of a named peripheral
    pub fn get(&self, which: NamedPeripheral) -> u8 {
        match which {
            NamedPeripheral::Led0 => self.led0,
            NamedPeripheral::Btn0 => self.btn0,
        }
    }
}

/// Static description of a board variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardSpec<'a> {
    /// Board variant identifier
    pub name: &'a str,
    /// Declared peripheral counts
    pub counts: PeripheralCounts,
    /// Pins that can generate PWM (membership, not a range)
    pub pwm_pins: &'a [u8],
    /// Pins wired to an ADC input (membership, not a range)
    pub adc_pins: &'a [u8],
    /// Onboard LED and button pins
    pub named: NamedPins,
}

impl<'a> BoardSpec<'a> {
    /// Capability table of a per-pin role
    ///
    /// Returns `None` for roles that are not validated by membership.
    pub fn capability_table(&self, role: PeripheralRole) -> Option<&'a [u8]> {
        match role {
            PeripheralRole::Pwm => Some(self.pwm_pins),
            PeripheralRole::Adc => Some(self.adc_pins),
            _ => None,
        }
    }

    /// Check if a request for `role` at pin or bus `id` would be accepted
    ///
    /// Per-pin roles test table membership, bus roles test `id < count`,
    /// and GPIO/LED/button accept any pin.
    pub fn is_capable(&self, role: PeripheralRole, id: u8) -> bool {
        if let Some(table) = self.capability_table(role) {
            table.contains(&id)
        } else if role.is_bus() {
            id < self.counts.get(role)
        } else {
            true
        }
    }

    /// Check the tables for internal consistency
    ///
    /// - The name must be non-empty, without `"` or control characters, so
    ///   that it survives the text format
    /// - Capability and named pins must exist (`< gpio` count)
    /// - A capability table must not list a pin twice
    /// - A capability table must not list more pins than its declared count
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_name(self.name) {
            return Err(ConfigError::InvalidName);
        }

        let gpio_count = self.counts.gpio;

        for (role, table) in [
            (PeripheralRole::Pwm, self.pwm_pins),
            (PeripheralRole::Adc, self.adc_pins),
        ] {
            let declared = self.counts.get(role);
            if table.len() > usize::from(declared) {
                return Err(ConfigError::TableTooLarge {
                    role,
                    len: table.len(),
                    declared,
                });
            }
            for (i, &pin) in table.iter().enumerate() {
                if pin >= gpio_count {
                    return Err(ConfigError::PinOutOfRange {
                        role,
                        pin,
                        gpio_count,
                    });
                }
                if table[..i].contains(&pin) {
                    return Err(ConfigError::DuplicatePin { role, pin });
                }
            }
        }

        for (role, pin) in [
            (PeripheralRole::Led, self.named.led0),
            (PeripheralRole::Button, self.named.btn0),
        ] {
            if pin >= gpio_count {
                return Err(ConfigError::PinOutOfRange {
                    role,
                    pin,
                    gpio_count,
                });
            }
        }

        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c == '"' || c.is_control())
}
