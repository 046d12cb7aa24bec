/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field insertion into a message mapper builder chain.
//!
//! Insertion adds two things to a message mapper:
//! - a delegator call `.de<N>_<Name>Mapper(<factory>())` at the position that
//!   keeps the chain in ascending field order
//! - a static import for the field mapper, placed after the first two lines
//!
//! Either both are applied or the content is left untouched.

use crate::chain::ChainLocator;
use mapsmith_core::error::PatchError;
use mapsmith_core::field::FieldNumber;
use regex::Regex;
use std::sync::LazyLock;

static DE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DE(\d+)_").expect("field number pattern is valid"));

/// Extracts the field number from a field mapper file name.
///
/// # Returns
/// `None` if the name has no `DE<digits>_` part.
#[must_use]
pub fn de_number(file_name: &str) -> Option<FieldNumber> {
    DE_NUMBER
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
        .map(FieldNumber::new)
}

fn class_name(file_name: &str) -> &str {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    base.strip_suffix(".java").unwrap_or(base)
}

/// Returns the delegator method suffix for a field mapper file.
///
/// `DE49_TransactionCurrencyCodeMapper.java` gives `TransactionCurrencyCodeMapper`.
#[must_use]
pub fn delegator_suffix(file_name: &str) -> &str {
    let class = class_name(file_name);
    class.rsplit('_').next().unwrap_or(class)
}

/// Builds the static import line for a field mapper.
///
/// # Arguments
/// * `file_name` - Field mapper file name, e.g. `DE2_PrimaryAccountNumberMapper.java`
/// * `package_path` - Slash separated package of the field mappers
#[must_use]
pub fn static_import_line(file_name: &str, package_path: &str) -> String {
    let package = package_path.replace(['/', '\\'], ".");
    let package = package.trim_matches('.');
    let class = class_name(file_name);
    let field = class.replace("Mapper", "");
    format!("import static {package}.{class}.{field};")
}

/// A prepared field insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInsertion {
    /// Field number of the new call.
    pub number: FieldNumber,
    /// Delegator call text, e.g. `.de49_CurrencyMapper(currency())`.
    pub call: String,
    /// Static import statement.
    pub import_line: String,
}

impl FieldInsertion {
    /// Prepares an insertion for a field mapper.
    ///
    /// # Arguments
    /// * `file_name` - Field mapper file name
    /// * `factory_call` - Expression creating the field mapper, e.g. `currency()`
    /// * `package_path` - Slash separated package of the field mappers
    ///
    /// # Errors
    /// Returns `PatchError::NumberNotFound` if the file name has no `DE<N>_` part.
    pub fn for_mapper(
        file_name: &str,
        factory_call: &str,
        package_path: &str,
    ) -> Result<Self, PatchError> {
        let number = de_number(file_name).ok_or_else(|| PatchError::NumberNotFound {
            file_name: file_name.to_string(),
        })?;
        Ok(Self {
            number,
            call: format!(".de{number}_{}({factory_call})", delegator_suffix(file_name)),
            import_line: static_import_line(file_name, package_path),
        })
    }
}

/// Returns the byte offset just past the second line break, or 0.
fn import_offset(content: &str) -> usize {
    content
        .find('\n')
        .and_then(|first| content[first + 1..].find('\n').map(|rel| first + 1 + rel + 1))
        .unwrap_or(0)
}

fn line_break(content: &str) -> &'static str {
    if content.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Splices a field call and its import into message mapper source.
///
/// The call is placed before the first chained call with a greater field
/// number, or before `.build()`. When that position starts its own line the
/// call gets a line of its own with the same indentation.
///
/// # Errors
/// Returns the locator's error if the chain cannot be found, or
/// `PatchError::FieldAlreadyChained` if the field is already present.
pub fn insert_field<L>(
    content: &str,
    insertion: &FieldInsertion,
    locator: &L,
) -> Result<String, PatchError>
where
    L: ChainLocator + ?Sized,
{
    let chain = locator.locate(content)?;
    if chain.contains(insertion.number) {
        return Err(PatchError::FieldAlreadyChained {
            field: insertion.number.value(),
        });
    }

    let eol = line_break(content);
    let call_at = chain.insertion_offset(insertion.number);
    let line_start = content[..call_at].rfind('\n').map_or(0, |i| i + 1);
    let indent = &content[line_start..call_at];
    let call_text = if indent.chars().all(char::is_whitespace) {
        format!("{}{eol}{indent}", insertion.call)
    } else {
        insertion.call.clone()
    };

    let has_import = content
        .lines()
        .any(|line| line.trim() == insertion.import_line);
    let import = (!has_import).then(|| {
        (
            import_offset(content),
            format!("{}{eol}", insertion.import_line),
        )
    });

    let mut edits = vec![(call_at, call_text)];
    edits.extend(import);
    // Apply from the back so earlier offsets stay valid.
    edits.sort_by(|a, b| b.0.cmp(&a.0));

    let mut out = content.to_string();
    for (offset, text) in edits {
        out.insert_str(offset, &text);
    }
    Ok(out)
}
