//! Peripheral request errors

use core::fmt;

use super::role::PeripheralRole;

/// Why a peripheral request was refused
///
/// Both kinds are raised before any driver is called, so a failed request
/// never constructs anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// Per-pin peripheral requested on a pin missing from its capability table
    NotCapable {
        /// Requested role (PWM or ADC)
        role: PeripheralRole,
        /// Requested pin
        pin: u8,
    },
    /// Bus peripheral requested with an index outside `0..bound`
    OutOfRange {
        /// Requested role (I2C, SPI or UART)
        role: PeripheralRole,
        /// Requested bus or port index
        index: u8,
        /// Declared number of buses of this role
        bound: u8,
    },
}

impl BoardError {
    /// Role of the refused request
    pub fn role(&self) -> PeripheralRole {
        match *self {
            BoardError::NotCapable { role, .. } | BoardError::OutOfRange { role, .. } => role,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::NotCapable { role, pin } => {
                write!(f, "pin {} is not {} capable", pin, role)
            }
            BoardError::OutOfRange { role, index, bound } => {
                write!(f, "unsupported {} bus {} (board has {})", role, index, bound)
            }
        }
    }
}
