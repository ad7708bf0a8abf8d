//! Simulated GPIO lines and LEDs

use core::convert::Infallible;

use boardkit_hal::{InputPin, Led, OutputPin, PinMode};
use embedded_hal::digital;

/// A GPIO line held in memory
///
/// Outputs read back what was last driven. Inputs read whatever was last
/// applied with [`SimGpio::set_input`], starting from the pull level.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimGpio {
    pin: u8,
    mode: PinMode,
    level: bool,
}

impl SimGpio {
    pub fn new(pin: u8, mode: PinMode) -> Self {
        Self {
            pin,
            mode,
            level: matches!(mode, PinMode::InputPullUp),
        }
    }

    /// Pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Configured mode
    pub fn mode(&self) -> PinMode {
        self.mode
    }

    /// Apply an external level, as a pressed button or a wire would
    pub fn set_input(&mut self, high: bool) {
        self.level = high;
    }

    fn drive(&mut self, high: bool) {
        self.level = high;
    }
}

impl OutputPin for SimGpio {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.level
    }
}

impl InputPin for SimGpio {
    fn is_high(&self) -> bool {
        self.level
    }
}

impl digital::ErrorType for SimGpio {
    type Error = Infallible;
}

impl digital::OutputPin for SimGpio {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

impl digital::StatefulOutputPin for SimGpio {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level)
    }
}

impl digital::InputPin for SimGpio {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level)
    }
}

/// An LED held in memory, starting off
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimLed {
    pin: u8,
    on: bool,
}

impl SimLed {
    pub fn new(pin: u8) -> Self {
        Self { pin, on: false }
    }

    /// Pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl Led for SimLed {
    fn on(&mut self) {
        self.on = true;
    }

    fn off(&mut self) {
        self.on = false;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_sets_idle_level() {
        assert!(InputPin::is_high(&SimGpio::new(0, PinMode::InputPullUp)));
        assert!(InputPin::is_low(&SimGpio::new(0, PinMode::InputPullDown)));
        assert!(InputPin::is_low(&SimGpio::new(0, PinMode::Input)));
    }

    #[test]
    fn test_output_reads_back() {
        let mut pin = SimGpio::new(7, PinMode::Output);
        assert!(pin.mode().is_output());
        OutputPin::set_high(&mut pin);
        assert!(OutputPin::is_set_high(&pin));
        OutputPin::toggle(&mut pin);
        assert!(OutputPin::is_set_low(&pin));
    }

    #[test]
    fn test_embedded_hal_view() {
        let mut pin = SimGpio::new(2, PinMode::Output);
        digital::OutputPin::set_high(&mut pin).unwrap();
        assert_eq!(digital::StatefulOutputPin::is_set_high(&mut pin), Ok(true));
        digital::StatefulOutputPin::toggle(&mut pin).unwrap();
        assert_eq!(digital::InputPin::is_high(&mut pin), Ok(false));
    }

    #[test]
    fn test_external_input() {
        let mut pin = SimGpio::new(21, PinMode::InputPullUp);
        pin.set_input(false);
        assert!(InputPin::is_low(&pin));
    }

    #[test]
    fn test_led() {
        let mut led = SimLed::new(20);
        assert!(!led.is_on());
        led.toggle();
        assert!(led.is_on());
        led.set(false);
        assert!(!led.is_on());
        assert_eq!(led.pin(), 20);
    }
}
