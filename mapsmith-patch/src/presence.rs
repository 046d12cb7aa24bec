/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field presence analysis for message mappers.
//!
//! A field is chained into a message mapper when a line contains a delegator
//! call such as `.de2_PrimaryAccountNumberMapper(DE2_PrimaryAccountNumber())`.
//! Only the first call on each line is considered.

use mapsmith_core::field::{FieldNumber, FieldSelector};
use regex::Regex;
use std::sync::LazyLock;

static DELEGATOR_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.de(\d+)_([A-Za-z0-9]+)\(").expect("delegator call pattern is valid")
});

/// A delegator call found on a line of a message mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainedField<'a> {
    /// Zero-based line index.
    pub line: usize,
    /// Field number from the method name.
    pub number: FieldNumber,
    /// Method suffix after `de<N>_`, e.g. `PrimaryAccountNumberMapper`.
    pub mapper_name: &'a str,
}

fn first_call(line_index: usize, line: &str) -> Option<ChainedField<'_>> {
    let caps = DELEGATOR_CALL.captures(line)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    Some(ChainedField {
        line: line_index,
        number: FieldNumber::new(number),
        mapper_name: caps.get(2)?.as_str(),
    })
}

/// Returns the first delegator call of every line that has one.
#[must_use]
pub fn chained_fields(content: &str) -> Vec<ChainedField<'_>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| first_call(index, line))
        .collect()
}

/// Returns true if a line chains a field accepted by the selector.
///
/// Scanning stops at the first accepted call.
#[must_use]
pub fn is_field_chained(content: &str, selector: FieldSelector) -> bool {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| first_call(index, line))
        .any(|call| selector.matches(call.number))
}
