/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field identifiers for ISO8583 data elements.
//!
//! This module provides:
//! - [`FieldNumber`]: Type-safe wrapper for a data element number
//! - [`FieldSelector`]: A single field or the `all` sentinel used by presence checks
//! - [`FieldMapper`]: A `DE<N>_<Name>Mapper.java` source on disk

use crate::error::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// ISO8583 data element number.
///
/// Field numbers order the chained calls of a message mapper builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldNumber(u32);

impl FieldNumber {
    /// Creates a new field number.
    ///
    /// # Arguments
    /// * `number` - The data element number
    #[inline]
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the raw field number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for FieldNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<FieldNumber> for u32 {
    fn from(number: FieldNumber) -> Self {
        number.0
    }
}

impl fmt::Display for FieldNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldNumber {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| MapError::InvalidArgument(format!("not a field number: {s:?}")))
    }
}

/// Which chained fields a presence check should match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    /// Match any chained field.
    All,
    /// Match exactly this field.
    Number(FieldNumber),
}

impl FieldSelector {
    /// Returns true if the selector accepts the given field.
    #[inline]
    #[must_use]
    pub fn matches(self, number: FieldNumber) -> bool {
        match self {
            Self::All => true,
            Self::Number(wanted) => wanted == number,
        }
    }
}

impl From<FieldNumber> for FieldSelector {
    fn from(number: FieldNumber) -> Self {
        Self::Number(number)
    }
}

impl FromStr for FieldSelector {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Number)
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A field mapper source file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapper {
    /// The data element this mapper converts.
    pub number: FieldNumber,
    /// File name, e.g. `DE49_TransactionCurrencyCodeMapper.java`.
    pub file_name: String,
    /// Absolute path of the source file.
    pub path: PathBuf,
}

impl FieldMapper {
    /// Creates a field mapper record.
    #[must_use]
    pub fn new(number: FieldNumber, file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            number,
            file_name: file_name.into(),
            path: path.into(),
        }
    }

    /// Returns the class name, which is the file stem.
    #[must_use]
    pub fn class_name(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }
}

impl fmt::Display for FieldMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name)
    }
}
