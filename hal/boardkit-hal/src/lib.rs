//! boardkit Hardware Abstraction Layer
//!
//! This crate defines the boundary between a board descriptor and the
//! peripheral drivers that actually touch hardware. A driver set implements
//! one constructor trait per peripheral role; the descriptor validates a
//! request and forwards it to the matching constructor.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  boardkit-core (BoardDescriptor)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  boardkit-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ chip drivers  │       │  sim drivers  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`driver::PeripheralDrivers`] - Constructor for every peripheral role
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`led::Led`], [`button::Button`] - Onboard indicators and inputs
//! - [`pwm::PwmChannel`], [`adc::AdcChannel`] - Per-pin analog peripherals
//! - [`i2c::I2cBus`], [`spi::SpiBus`] - Bus peripherals
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod button;
pub mod driver;
pub mod gpio;
pub mod i2c;
pub mod led;
pub mod pwm;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use button::{Button, Edge, Pull};
pub use driver::{
    AdcDriver, ButtonDriver, GpioDriver, I2cDriver, LedDriver, PeripheralDrivers, PwmDriver,
    SpiDriver, UartDriver,
};
pub use gpio::{InputPin, OutputPin, PinMode};
pub use i2c::{I2cBus, I2cConfig, I2cMode};
pub use led::Led;
pub use pwm::PwmChannel;
pub use spi::{SpiBus, SpiConfig};
pub use uart::{UartConfig, UartRx, UartTx};
