//! Simulated PWM channel

use core::convert::Infallible;

use boardkit_hal::PwmChannel;
use embedded_hal::pwm;

/// Duty resolution exposed through `embedded-hal`
const MAX_DUTY: u16 = u16::MAX;

/// A PWM channel that records its settings
///
/// The channel starts running as soon as it is constructed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimPwm {
    pin: u8,
    frequency: f32,
    duty: f32,
    running: bool,
}

impl SimPwm {
    pub fn new(pin: u8, frequency_hz: f32, duty: f32) -> Self {
        Self {
            pin,
            frequency: frequency_hz,
            duty: clamp_duty(duty),
            running: true,
        }
    }

    /// Pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

/// Clamp to `0.0..=1.0`; NaN passes through
fn clamp_duty(duty: f32) -> f32 {
    duty.clamp(0.0, 1.0)
}

impl PwmChannel for SimPwm {
    fn frequency(&self) -> f32 {
        self.frequency
    }

    fn duty(&self) -> f32 {
        self.duty
    }

    fn set_frequency(&mut self, frequency_hz: f32) {
        self.frequency = frequency_hz;
    }

    fn set_duty(&mut self, duty: f32) {
        self.duty = clamp_duty(duty);
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

impl pwm::ErrorType for SimPwm {
    type Error = Infallible;
}

impl pwm::SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = f32::from(duty) / f32::from(MAX_DUTY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_running() {
        let mut pwm = SimPwm::new(14, 490.0, 1.0);
        assert!(pwm.is_running());
        assert_eq!(pwm.pin(), 14);
        pwm.stop();
        assert!(!pwm.is_running());
    }

    #[test]
    fn test_duty_clamped() {
        let mut pwm = SimPwm::new(1, 1000.0, 2.5);
        assert_eq!(pwm.duty(), 1.0);
        pwm.set_duty(-0.5);
        assert_eq!(pwm.duty(), 0.0);
        pwm.set_frequency(50.0);
        assert_eq!(pwm.frequency(), 50.0);
    }

    #[test]
    fn test_nan_forwarded() {
        let pwm = SimPwm::new(1, f32::NAN, f32::NAN);
        assert!(pwm.frequency().is_nan());
        assert!(pwm.duty().is_nan());
    }

    #[test]
    fn test_embedded_hal_duty() {
        use embedded_hal::pwm::SetDutyCycle;

        let mut pwm = SimPwm::new(2, 490.0, 0.0);
        pwm.set_duty_cycle_fully_on().unwrap();
        assert_eq!(pwm.duty(), 1.0);
        pwm.set_duty_cycle_percent(50).unwrap();
        assert!((0.499..=0.501).contains(&pwm.duty()));
    }
}
