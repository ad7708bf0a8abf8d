//! Board configuration
//!
//! Boards are described either as compile-time constants ([`boards`]) or
//! loaded at startup from text ([`toml`]) or postcard binary data
//! ([`BoardConfig::from_bytes`], `serde` feature).

use core::fmt;

use crate::board::PeripheralRole;

pub mod boards;
pub mod toml;
pub mod types;

pub use toml::{parse_board_config, write_board_config, ParseError};
pub use types::{BoardConfig, MAX_CAPABLE_PINS, MAX_NAME_LEN};

/// Errors from loading or checking a board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Board name is empty or has a character the text format cannot hold
    InvalidName,
    /// A capability or named pin does not exist on the board
    PinOutOfRange {
        role: PeripheralRole,
        pin: u8,
        gpio_count: u8,
    },
    /// A capability table lists the same pin twice
    DuplicatePin { role: PeripheralRole, pin: u8 },
    /// A capability table lists more pins than the declared count
    TableTooLarge {
        role: PeripheralRole,
        len: usize,
        declared: u8,
    },
    /// Name or table does not fit the bounded storage
    Capacity,
    /// Text configuration is malformed
    Parse(ParseError),
    /// Binary encoding failed (buffer too small)
    Encode,
    /// Binary data is corrupted or from an incompatible version
    Decode,
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::InvalidName => {
                f.write_str("board name is empty or contains a quote or control character")
            }
            ConfigError::PinOutOfRange {
                role,
                pin,
                gpio_count,
            } => write!(
                f,
                "{} pin {} does not exist (board has {} GPIOs)",
                role, pin, gpio_count
            ),
            ConfigError::DuplicatePin { role, pin } => {
                write!(f, "{} pin {} listed twice", role, pin)
            }
            ConfigError::TableTooLarge {
                role,
                len,
                declared,
            } => write!(
                f,
                "{} table lists {} pins but board declares {}",
                role, len, declared
            ),
            ConfigError::Capacity => f.write_str("configuration exceeds storage capacity"),
            ConfigError::Parse(e) => write!(f, "parse error: {}", e),
            ConfigError::Encode => f.write_str("failed to encode configuration"),
            ConfigError::Decode => f.write_str("failed to decode configuration"),
        }
    }
}
