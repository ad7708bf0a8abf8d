//! ADC channel abstraction

/// An analog input bound to one pin
pub trait AdcChannel {
    /// Full-scale raw reading (e.g. 4095 for a 12-bit converter)
    fn max_raw(&self) -> u16;

    /// Take a raw conversion
    fn read_raw(&mut self) -> u16;

    /// Take a conversion scaled to `0.0..=1.0`
    fn read(&mut self) -> f32 {
        let max = self.max_raw();
        if max == 0 {
            return 0.0;
        }
        f32::from(self.read_raw()) / f32::from(max)
    }
}
