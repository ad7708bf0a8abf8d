//! Simulated ADC channel

use boardkit_hal::AdcChannel;

/// Full scale of the simulated 12-bit converter
pub const SIM_ADC_MAX: u16 = 4095;

/// An ADC channel returning an injected reading
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimAdc {
    pin: u8,
    raw: u16,
}

impl SimAdc {
    pub fn new(pin: u8) -> Self {
        Self { pin, raw: 0 }
    }

    /// Pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Set the value returned by later conversions, saturating at full scale
    pub fn set_raw(&mut self, raw: u16) {
        self.raw = raw.min(SIM_ADC_MAX);
    }
}

impl AdcChannel for SimAdc {
    fn max_raw(&self) -> u16 {
        SIM_ADC_MAX
    }

    fn read_raw(&mut self) -> u16 {
        self.raw
    }
}
