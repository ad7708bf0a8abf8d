//! Debounced button input
//!
//! Buttons are polled from the main loop. Every reading change restarts the
//! debounce window; once the reading has held for the whole window it
//! becomes the new stable level, and the change is reported if it matches
//! the configured edge.

use boardkit_hal::{Button, Edge, InputPin};

/// Debounce delay used when a button is created without one (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Debounce and edge detection state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeWatcher {
    edge: Edge,
    debounce_ms: u32,
    /// Reading at the previous update
    last_reading: bool,
    /// Debounced level
    stable: bool,
    /// Start of the current debounce window
    changed_at: Option<u64>,
}

impl EdgeWatcher {
    /// Create a watcher whose stable level starts at `initial`
    pub fn new(edge: Edge, debounce_ms: u32, initial: bool) -> Self {
        Self {
            edge,
            debounce_ms,
            last_reading: initial,
            stable: initial,
            changed_at: None,
        }
    }

    /// Feed a reading taken at `now_ms`
    ///
    /// Returns `true` if a debounced transition matching the edge completed.
    pub fn update(&mut self, reading: bool, now_ms: u64) -> bool {
        if reading != self.last_reading {
            // Noise or a real press; either way wait for it to settle
            self.changed_at = Some(now_ms);
        }
        self.last_reading = reading;

        let Some(changed_at) = self.changed_at else {
            return false;
        };
        if now_ms.saturating_sub(changed_at) < u64::from(self.debounce_ms) {
            return false;
        }

        self.changed_at = None;
        if reading == self.stable {
            return false;
        }
        self.stable = reading;
        self.edge.matches(reading)
    }

    /// Debounced level
    pub fn stable(&self) -> bool {
        self.stable
    }

    /// Edge being reported
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Debounce window in milliseconds
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }
}

/// A button on any input pin
pub struct DebouncedButton<P> {
    pin: P,
    watcher: EdgeWatcher,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a button, taking the current pin level as the idle level
    pub fn new(pin: P, edge: Edge, debounce_ms: u32) -> Self {
        let initial = pin.is_high();
        Self {
            pin,
            watcher: EdgeWatcher::new(edge, debounce_ms, initial),
        }
    }

    /// The underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// The underlying pin, mutably
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

impl<P: InputPin> Button for DebouncedButton<P> {
    fn edge(&self) -> Edge {
        self.watcher.edge()
    }

    fn debounce_ms(&self) -> u32 {
        self.watcher.debounce_ms()
    }

    fn poll(&mut self, now_ms: u64) -> bool {
        let reading = self.pin.is_high();
        self.watcher.update(reading, now_ms)
    }

    fn is_high(&self) -> bool {
        self.watcher.stable()
    }
}
