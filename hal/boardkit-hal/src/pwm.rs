//! PWM channel abstraction

/// A PWM output bound to one pin
///
/// Duty cycle is a ratio in `0.0..=1.0`; frequency is in Hz.
pub trait PwmChannel {
    /// Current output frequency in Hz
    fn frequency(&self) -> f32;

    /// Current duty cycle (0.0 - 1.0)
    fn duty(&self) -> f32;

    /// Change the output frequency
    fn set_frequency(&mut self, frequency_hz: f32);

    /// Change the duty cycle
    ///
    /// Values outside `0.0..=1.0` are clamped by the implementation.
    fn set_duty(&mut self, duty: f32);

    /// Start generating the waveform
    fn start(&mut self);

    /// Stop generating the waveform
    fn stop(&mut self);

    /// Check if the waveform is being generated
    fn is_running(&self) -> bool;
}
