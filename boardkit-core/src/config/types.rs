//! Owned board configuration
//!
//! [`BoardConfig`] holds a board description in bounded storage so it can
//! be loaded at runtime. Stored in flash as postcard-serialized binary data
//! when the `serde` feature is enabled.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::board::{BoardSpec, NamedPins, PeripheralCounts};

/// Maximum board name length
pub const MAX_NAME_LEN: usize = 32;

/// Maximum pins per capability table
pub const MAX_CAPABLE_PINS: usize = 32;

/// Board description with owned tables
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Board variant identifier
    pub name: String<MAX_NAME_LEN>,
    /// Declared peripheral counts
    pub counts: PeripheralCounts,
    /// PWM-capable pins
    pub pwm_pins: Vec<u8, MAX_CAPABLE_PINS>,
    /// ADC-capable pins
    pub adc_pins: Vec<u8, MAX_CAPABLE_PINS>,
    /// Onboard LED and button pins
    pub named: NamedPins,
}

impl BoardConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow this configuration as a board spec
    pub fn as_spec(&self) -> BoardSpec<'_> {
        BoardSpec {
            name: self.name.as_str(),
            counts: self.counts,
            pwm_pins: &self.pwm_pins,
            adc_pins: &self.adc_pins,
            named: self.named,
        }
    }

    /// Copy a board spec into owned storage
    pub fn from_spec(spec: &BoardSpec<'_>) -> Result<Self, ConfigError> {
        let mut name = String::new();
        name.push_str(spec.name).map_err(|_| ConfigError::Capacity)?;
        Ok(Self {
            name,
            counts: spec.counts,
            pwm_pins: Vec::from_slice(spec.pwm_pins).map_err(|_| ConfigError::Capacity)?,
            adc_pins: Vec::from_slice(spec.adc_pins).map_err(|_| ConfigError::Capacity)?,
            named: spec.named,
        })
    }

    /// Serialize into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Deserialize and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.as_spec().validate()?;
        Ok(config)
    }
}
