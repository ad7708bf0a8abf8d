//! LED abstraction

/// An indicator LED
///
/// Implementations own the active level of the wiring; callers only deal
/// with logical on/off.
pub trait Led {
    /// Drive the LED logically on
    fn on(&mut self);

    /// Drive the LED logically off
    fn off(&mut self);

    /// Check the last commanded state
    fn is_on(&self) -> bool;

    /// Set the LED to a specific state
    fn set(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }

    /// Invert the LED state
    fn toggle(&mut self) {
        let on = self.is_on();
        self.set(!on);
    }
}
