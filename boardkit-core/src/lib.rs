//! Board descriptor for boardkit targets
//!
//! This crate describes what a board can do and hands out peripheral
//! handles on request:
//!
//! - Capability tables (pin counts, PWM/ADC-capable pins, onboard LED/button)
//! - Validated peripheral factory over an injected driver set
//! - Cached onboard LED and button singletons
//! - Board configuration: built-in boards, text format, binary persistence
//! - Lock-guarded sharing of a descriptor
//!
//! # Example
//!
//! ```ignore
//! use boardkit_core::{boards, BoardDescriptor};
//!
//! let mut board = BoardDescriptor::new(boards::KAMELEON_CORE, drivers);
//! let pwm = board.acquire_pwm(14, None, Some(0.5))?;
//! board.named_led().on();
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod config;
pub mod shared;

pub use board::{
    BoardDescriptor, BoardError, BoardSpec, NamedPeripheral, NamedPins, PeripheralCounts,
    PeripheralRole,
};
pub use config::{boards, BoardConfig, ConfigError};
pub use shared::SharedBoard;
