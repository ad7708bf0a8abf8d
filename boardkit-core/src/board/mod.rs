//! Board description and peripheral factory

pub mod descriptor;
pub mod error;
pub mod role;
pub mod spec;

#[cfg(test)]
pub(crate) mod mock;

pub use descriptor::{
    BoardDescriptor, DEFAULT_I2C_MODE, DEFAULT_I2C_MODE_OPTION, DEFAULT_PWM_DUTY,
    DEFAULT_PWM_FREQUENCY_HZ, NAMED_BUTTON_EDGE,
};
pub use error::BoardError;
pub use role::{NamedPeripheral, PeripheralRole};
pub use spec::{BoardSpec, NamedPins, PeripheralCounts};
