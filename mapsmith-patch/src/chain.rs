/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Builder chain location.
//!
//! A message mapper holds one fluent builder expression that starts at a fixed
//! factory call and ends at the first `.build()` after it. The
//! [`ChainLocator`] trait isolates how that region is found so the text
//! matcher can be replaced by a structured parser without touching insertion.

use mapsmith_core::error::PatchError;
use mapsmith_core::field::FieldNumber;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Terminal call of the builder expression.
pub const BUILD_CALL: &str = ".build()";

static CHAINED_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.de(\d+)").expect("chained call pattern is valid"));

/// A field call inside the builder expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainCall {
    /// Field number of the call.
    pub number: FieldNumber,
    /// Byte offset of the call's leading `.` in the whole content.
    pub offset: usize,
}

/// The located builder expression of a message mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderChain {
    /// Byte range from the anchor up to and including `.build()`.
    pub region: Range<usize>,
    /// Byte offset of the terminal `.build()`.
    pub build_offset: usize,
    /// Chained field calls in source order.
    pub calls: Vec<ChainCall>,
}

impl BuilderChain {
    /// Returns the chained field numbers in source order.
    pub fn numbers(&self) -> impl Iterator<Item = FieldNumber> + '_ {
        self.calls.iter().map(|call| call.number)
    }

    /// Returns true if the field is already chained.
    #[must_use]
    pub fn contains(&self, number: FieldNumber) -> bool {
        self.numbers().any(|n| n == number)
    }

    /// Returns the byte offset where a call for `number` keeps the chain ascending.
    ///
    /// This is the first call with a greater number, or the terminal `.build()`.
    #[must_use]
    pub fn insertion_offset(&self, number: FieldNumber) -> usize {
        self.calls
            .iter()
            .find(|call| call.number > number)
            .map_or(self.build_offset, |call| call.offset)
    }
}

/// Finds the builder expression in message mapper source.
pub trait ChainLocator {
    /// Locates the builder chain.
    ///
    /// # Errors
    /// Returns `PatchError::AnchorNotFound` or `PatchError::BuildCallNotFound`
    /// when the expression cannot be delimited.
    fn locate(&self, content: &str) -> Result<BuilderChain, PatchError>;
}

/// Locates the builder chain by a literal start token and the next `.build()`.
#[derive(Debug, Clone)]
pub struct AnchorChainLocator {
    anchor: String,
}

impl AnchorChainLocator {
    /// Creates a locator for the given start token.
    #[must_use]
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }

    /// Returns the start token.
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }
}

impl ChainLocator for AnchorChainLocator {
    fn locate(&self, content: &str) -> Result<BuilderChain, PatchError> {
        let start = content
            .find(&self.anchor)
            .ok_or_else(|| PatchError::AnchorNotFound {
                anchor: self.anchor.clone(),
            })?;
        let build_offset = content[start..]
            .find(BUILD_CALL)
            .map(|rel| start + rel)
            .ok_or(PatchError::BuildCallNotFound)?;
        let end = build_offset + BUILD_CALL.len();

        let calls = CHAINED_CALL
            .captures_iter(&content[start..end])
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let number = caps.get(1)?.as_str().parse().ok()?;
                Some(ChainCall {
                    number: FieldNumber::new(number),
                    offset: start + whole.start(),
                })
            })
            .collect();

        Ok(BuilderChain {
            region: start..end,
            build_offset,
            calls,
        })
    }
}
