//! Board configuration text format
//!
//! A minimal parser for the TOML subset used by board files. It does NOT
//! support full TOML.
//!
//! ```toml
//! name = "kameleon-core"
//!
//! [counts]
//! gpio = 22
//! i2c = 2
//!
//! [pins]
//! led0 = 20
//! btn0 = 21
//! pwm = [1, 2, 14, 15, 16]
//! adc = [3, 4, 5, 10, 11, 12]
//! ```
//!
//! Supported features:
//! - Key = value pairs (string, integer, integer array)
//! - `[counts]` and `[pins]` section headers
//! - Comments (# ...), also after a value
//!
//! Counts that are not listed default to zero. A file without a `gpio`
//! count therefore declares no pins at all, and fails validation with
//! [`ConfigError::PinOutOfRange`] on `led0` rather than with
//! [`ParseError::MissingField`].

use core::fmt::{self, Write};

use heapless::{String, Vec};

use super::types::{BoardConfig, MAX_CAPABLE_PINS, MAX_NAME_LEN};
use super::ConfigError;
use crate::board::{BoardSpec, PeripheralRole};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is not `key = value`
    InvalidLine,
    /// Key not known in the current section
    UnknownKey,
    /// Invalid value type or out of range
    InvalidValue,
    /// Too many items (exceeded heapless capacity)
    TooManyItems,
    /// A required key (`name`, `led0`, `btn0`) is absent
    MissingField,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::InvalidSection => "invalid section header",
            ParseError::InvalidLine => "expected key = value",
            ParseError::UnknownKey => "unknown key",
            ParseError::InvalidValue => "invalid value",
            ParseError::TooManyItems => "too many items",
            ParseError::MissingField => "missing required field",
        };
        f.write_str(msg)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Counts,
    Pins,
}

/// Parse and validate a board configuration
pub fn parse_board_config(input: &str) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::new();
    let mut section = Section::Root;

    let mut has_name = false;
    let mut has_led0 = false;
    let mut has_btn0 = false;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = split_key_value(line)?;
        match section {
            Section::Root => match key {
                "name" => {
                    config.name = parse_name(value)?;
                    has_name = true;
                }
                _ => return Err(ParseError::UnknownKey.into()),
            },
            Section::Counts => {
                let role = PeripheralRole::from_name(key).ok_or(ParseError::UnknownKey)?;
                config.counts.set(role, parse_u8(value)?);
            }
            Section::Pins => match key {
                "led0" => {
                    config.named.led0 = parse_u8(value)?;
                    has_led0 = true;
                }
                "btn0" => {
                    config.named.btn0 = parse_u8(value)?;
                    has_btn0 = true;
                }
                "pwm" => config.pwm_pins = parse_pin_list(value)?,
                "adc" => config.adc_pins = parse_pin_list(value)?,
                _ => return Err(ParseError::UnknownKey.into()),
            },
        }
    }

    if !(has_name && has_led0 && has_btn0) {
        return Err(ParseError::MissingField.into());
    }

    config.as_spec().validate()?;
    Ok(config)
}

/// Write a board spec in the format read by [`parse_board_config`]
///
/// Only specs that pass [`BoardSpec::validate`] are read back; the name is
/// written as is, without escaping.
pub fn write_board_config<W: Write>(spec: &BoardSpec<'_>, out: &mut W) -> fmt::Result {
    writeln!(out, "name = \"{}\"", spec.name)?;

    writeln!(out)?;
    writeln!(out, "[counts]")?;
    for role in PeripheralRole::ALL {
        writeln!(out, "{} = {}", role.as_str(), spec.counts.get(role))?;
    }

    writeln!(out)?;
    writeln!(out, "[pins]")?;
    writeln!(out, "led0 = {}", spec.named.led0)?;
    writeln!(out, "btn0 = {}", spec.named.btn0)?;
    write_pin_list(out, "pwm", spec.pwm_pins)?;
    write_pin_list(out, "adc", spec.adc_pins)
}

fn write_pin_list<W: Write>(out: &mut W, key: &str, pins: &[u8]) -> fmt::Result {
    write!(out, "{} = [", key)?;
    for (i, pin) in pins.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", pin)?;
    }
    writeln!(out, "]")
}

/// Cut a trailing `# comment`, ignoring `#` inside strings
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "counts" => Ok(Section::Counts),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

fn split_key_value(line: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = line.split_once('=').ok_or(ParseError::InvalidLine)?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return Err(ParseError::InvalidLine);
    }
    Ok((key, value))
}

fn parse_name(value: &str) -> Result<String<MAX_NAME_LEN>, ParseError> {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)?;
    if inner.is_empty() || inner.contains('"') {
        return Err(ParseError::InvalidValue);
    }
    let mut name = String::new();
    name.push_str(inner).map_err(|_| ParseError::TooManyItems)?;
    Ok(name)
}

fn parse_u8(value: &str) -> Result<u8, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_pin_list(value: &str) -> Result<Vec<u8, MAX_CAPABLE_PINS>, ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut pins = Vec::new();
    for item in inner.split(',') {
        let item = item.trim();
        // Allow a trailing comma
        if item.is_empty() {
            continue;
        }
        pins.push(parse_u8(item)?).map_err(|_| ParseError::TooManyItems)?;
    }
    Ok(pins)
}
