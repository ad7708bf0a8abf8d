//! Driver implementations
//!
//! This crate provides implementations of the `boardkit-hal` constructor
//! and handle traits:
//!
//! - Debounced buttons over any input pin
//! - A host-side simulated driver set for tests and bring-up without
//!   hardware

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod sim;

pub use button::{DebouncedButton, EdgeWatcher};
pub use sim::SimDrivers;
