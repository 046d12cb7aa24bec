/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core types for mapper scaffolding.
//!
//! This module provides fundamental types used throughout mapsmith:
//! - [`Direction`]: Inbound or outbound message flow
//! - [`Conversion`]: ISO8583 to UMM or UMM to ISO8583
//! - [`MapperKind`]: The (direction, conversion) pair that selects a directory and template
//! - [`MessageFunction`]: UMM message function code
//! - [`MessageTypeIndicator`]: ISO8583 MTI

use crate::error::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Messages received from the network.
    Inbound,
    /// Messages sent to the network.
    Outbound,
}

impl Direction {
    /// All directions in menu order.
    pub const ALL: [Self; 2] = [Self::Inbound, Self::Outbound];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inbound" => Ok(Self::Inbound),
            "outbound" => Ok(Self::Outbound),
            other => Err(MapError::InvalidArgument(format!(
                "invalid direction: {other:?} (expected inbound or outbound)"
            ))),
        }
    }
}

/// Conversion direction between wire format and UMM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// ISO8583 message to UMM.
    IsoToUmm,
    /// UMM to ISO8583 message.
    UmmToIso,
}

impl Conversion {
    /// Returns the snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IsoToUmm => "iso_to_umm",
            Self::UmmToIso => "umm_to_iso",
        }
    }

    /// Returns a human readable label for menus.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::IsoToUmm => "ISO to UMM",
            Self::UmmToIso => "UMM to ISO",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Conversion {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso_to_umm" | "iso2umm" => Ok(Self::IsoToUmm),
            "umm_to_iso" | "umm2iso" => Ok(Self::UmmToIso),
            other => Err(MapError::InvalidArgument(format!(
                "invalid conversion: {other:?} (expected iso_to_umm or umm_to_iso)"
            ))),
        }
    }
}

/// A (direction, conversion) pair.
///
/// Each kind owns one message mapper directory and one class template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapperKind {
    /// Message flow direction.
    pub direction: Direction,
    /// Conversion direction.
    pub conversion: Conversion,
}

impl MapperKind {
    /// All kinds in scaffolding menu order (keys `1` to `4`).
    pub const MENU: [Self; 4] = [
        Self::new(Direction::Inbound, Conversion::IsoToUmm),
        Self::new(Direction::Inbound, Conversion::UmmToIso),
        Self::new(Direction::Outbound, Conversion::UmmToIso),
        Self::new(Direction::Outbound, Conversion::IsoToUmm),
    ];

    /// Creates a new mapper kind.
    #[must_use]
    pub const fn new(direction: Direction, conversion: Conversion) -> Self {
        Self {
            direction,
            conversion,
        }
    }

    /// Resolves a scaffolding menu key (`"1"` to `"4"`).
    ///
    /// # Returns
    /// `Some(MapperKind)` for a known key, `None` otherwise.
    #[must_use]
    pub fn from_menu_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::MENU[0]),
            "2" => Some(Self::MENU[1]),
            "3" => Some(Self::MENU[2]),
            "4" => Some(Self::MENU[3]),
            _ => None,
        }
    }

    /// Returns the template and file stem for this kind, e.g. `inbound_iso_to_umm`.
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}_{}", self.direction, self.conversion)
    }
}

impl fmt::Display for MapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.direction, self.conversion.label().to_lowercase())
    }
}

/// UMM message function code, e.g. `RVRA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct MessageFunction(String);

impl MessageFunction {
    /// Creates a message function from a code.
    ///
    /// # Returns
    /// `Some(MessageFunction)` if the trimmed code is non-empty and has no whitespace.
    #[must_use]
    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() || code.chars().any(char::is_whitespace) {
            None
        } else {
            Some(Self(code.to_string()))
        }
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageFunction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MessageFunction {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
            .ok_or_else(|| MapError::InvalidArgument(format!("invalid message function: {s:?}")))
    }
}

/// ISO8583 message type indicator, e.g. `1100`.
///
/// The text form is kept verbatim for output; the numeric value orders the
/// lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageTypeIndicator {
    text: String,
    value: u32,
}

impl MessageTypeIndicator {
    /// Returns the indicator as written.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the numeric value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for MessageTypeIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for MessageTypeIndicator {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MapError::InvalidArgument(format!(
                "invalid message type indicator: {s:?}"
            )));
        }
        let value = text
            .parse()
            .map_err(|_| MapError::InvalidArgument(format!("indicator out of range: {s:?}")))?;
        Ok(Self {
            text: text.to_string(),
            value,
        })
    }
}

/// Returns the message mapper class name for a description.
///
/// Spaces are removed and `Mapper` is appended: `"Reversal Advice"` becomes
/// `ReversalAdviceMapper`.
#[must_use]
pub fn mapper_class_name(description: &str) -> String {
    let mut name: String = description.chars().filter(|c| *c != ' ').collect();
    name.push_str("Mapper");
    name
}
