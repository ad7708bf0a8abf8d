//! Push-button abstractions

/// Which transition of the input reports an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low-to-high transition
    Rising,
    /// High-to-low transition (pressed, for a pulled-up button)
    #[default]
    Falling,
    /// Any transition
    Change,
}

impl Edge {
    /// Check if a transition to `level` matches this edge
    pub fn matches(self, level: bool) -> bool {
        match self {
            Edge::Rising => level,
            Edge::Falling => !level,
            Edge::Change => true,
        }
    }
}

/// Internal pull resistor of a button input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull resistor (external one fitted)
    None,
    /// Internal pull-up
    #[default]
    Up,
    /// Internal pull-down
    Down,
}

/// A debounced button input
///
/// Buttons are polled: the owner calls [`Button::poll`] from its loop with
/// the current time and gets `true` once per debounced edge.
pub trait Button {
    /// The edge this button reports
    fn edge(&self) -> Edge;

    /// Debounce delay in milliseconds
    fn debounce_ms(&self) -> u32;

    /// Sample the input
    ///
    /// Returns `true` if a debounced transition matching [`Button::edge`]
    /// completed on this poll.
    fn poll(&mut self, now_ms: u64) -> bool;

    /// Last debounced level of the input
    fn is_high(&self) -> bool;
}
