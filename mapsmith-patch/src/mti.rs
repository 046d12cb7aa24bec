/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message type indicator table patching.
//!
//! `MessageTypeIndicatorHelper.java` keeps a static block of
//! `map("<indicator>", MessageFunction.<CODE>);` lines in ascending indicator
//! order. Patching adds one entry and never duplicates an existing one.

use mapsmith_core::error::PatchError;
use mapsmith_core::types::{MessageFunction, MessageTypeIndicator};

/// Result of patching the indicator table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtiPatch {
    /// The mapping already exists; the content is unchanged.
    Unchanged,
    /// The mapping was inserted.
    Inserted {
        /// Zero-based line index of the new entry.
        line: usize,
        /// The patched content.
        content: String,
    },
}

/// Returns the table entry for an indicator, without a line break.
#[must_use]
pub fn mapping_line(indicator: &MessageTypeIndicator, function: &MessageFunction) -> String {
    format!("        map(\"{indicator}\", MessageFunction.{function});")
}

/// Reads the indicator of a `map("...")` line, if it has a numeric one.
fn entry_indicator(line: &str) -> Option<i64> {
    let start = line.find('"')? + 1;
    let len = line[start..].find('"')?;
    line[start..start + len].trim().parse().ok()
}

/// Reads the function code of a `map("...", MessageFunction.<CODE>)` line.
fn entry_function(line: &str) -> Option<&str> {
    let start = line.find("MessageFunction.")? + "MessageFunction.".len();
    let rest = &line[start..];
    let len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Finds the line index where an entry for `target` keeps the table ascending.
fn insertion_line(lines: &[&str], target: u32) -> Option<usize> {
    let target = i64::from(target);
    let mut block_found = false;
    for (index, line) in lines.iter().enumerate() {
        if line.contains("map(") {
            let Some(current) = entry_indicator(line) else {
                continue;
            };
            block_found = true;
            if current > target {
                return Some(index);
            }
        }
        if block_found && line.contains('}') {
            return Some(index);
        }
    }
    None
}

/// Adds an indicator mapping to the helper source.
///
/// # Errors
/// Returns `PatchError::IndicatorAlreadyMapped` if the indicator has an entry
/// for another function, and `PatchError::MappingBlockNotFound` if the
/// content has no numeric `map("...")` entries followed by a closing brace.
pub fn patch_mti_table(
    content: &str,
    indicator: &MessageTypeIndicator,
    function: &MessageFunction,
) -> Result<MtiPatch, PatchError> {
    let entry = mapping_line(indicator, function);
    let needle = entry.trim();
    if content.lines().any(|line| line.contains(needle)) {
        return Ok(MtiPatch::Unchanged);
    }

    let target = i64::from(indicator.value());
    if let Some(existing) = content
        .lines()
        .filter(|line| line.contains("map("))
        .find(|line| entry_indicator(line) == Some(target))
    {
        return Err(PatchError::IndicatorAlreadyMapped {
            indicator: indicator.to_string(),
            function: entry_function(existing).unwrap_or_default().to_string(),
        });
    }

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let line = insertion_line(&lines, indicator.value()).ok_or(PatchError::MappingBlockNotFound)?;
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };

    let mut patched = String::with_capacity(content.len() + entry.len() + eol.len());
    for (index, existing) in lines.iter().enumerate() {
        if index == line {
            patched.push_str(&entry);
            patched.push_str(eol);
        }
        patched.push_str(existing);
    }
    Ok(MtiPatch::Inserted {
        line,
        content: patched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELPER: &str = r#"package eu.nets.mapping.components.auth.trg.common.message_function;

public final class MessageTypeIndicatorHelper {

    private static final Map<String, MessageFunction> MAPPING = new HashMap<>();

    static {
        map("1200", MessageFunction.FREQ);
        map("1420", MessageFunction.RVRA);
    }

    private static void map(String mti, MessageFunction function) {
        MAPPING.put(mti, function);
    }
}
"#;

    fn mti(s: &str) -> MessageTypeIndicator {
        s.parse().unwrap()
    }

    fn function(s: &str) -> MessageFunction {
        MessageFunction::new(s).unwrap()
    }

    fn inserted(patch: MtiPatch) -> (usize, String) {
        match patch {
            MtiPatch::Inserted { line, content } => (line, content),
            MtiPatch::Unchanged => panic!("expected an insertion"),
        }
    }

    #[test]
    fn test_insert_before_greater_entry() {
        let (line, content) =
            inserted(patch_mti_table(HELPER, &mti("1100"), &function("AUTQ")).unwrap());
        assert_eq!(line, 7);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[7], "        map(\"1100\", MessageFunction.AUTQ);");
        assert_eq!(lines[8], "        map(\"1200\", MessageFunction.FREQ);");
    }

    #[test]
    fn test_insert_between_entries() {
        let (_, content) =
            inserted(patch_mti_table(HELPER, &mti("1220"), &function("FADV")).unwrap());
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[8], "        map(\"1220\", MessageFunction.FADV);");
        assert_eq!(lines[9], "        map(\"1420\", MessageFunction.RVRA);");
    }

    #[test]
    fn test_insert_before_closing_brace() {
        let (line, content) =
            inserted(patch_mti_table(HELPER, &mti("1688"), &function("ADNO")).unwrap());
        assert_eq!(line, 9);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[9], "        map(\"1688\", MessageFunction.ADNO);");
        assert_eq!(lines[10], "    }");
    }

    #[test]
    fn test_existing_mapping_is_noop() {
        let patch = patch_mti_table(HELPER, &mti("1420"), &function("RVRA")).unwrap();
        assert_eq!(patch, MtiPatch::Unchanged);
    }

    #[test]
    fn test_helper_method_is_not_an_entry() {
        // `map(String mti, ...)` has no quoted indicator and must be skipped.
        let (_, content) =
            inserted(patch_mti_table(HELPER, &mti("1100"), &function("AUTQ")).unwrap());
        assert_eq!(content.matches("AUTQ").count(), 1);
        assert!(content.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_indicator_mapped_to_other_function() {
        let err = patch_mti_table(HELPER, &mti("1200"), &function("AUTQ")).unwrap_err();
        assert_eq!(
            err,
            PatchError::IndicatorAlreadyMapped {
                indicator: "1200".to_string(),
                function: "FREQ".to_string(),
            }
        );
    }

    #[test]
    fn test_entry_function() {
        assert_eq!(
            entry_function("        map(\"1420\", MessageFunction.RVRA);"),
            Some("RVRA")
        );
        assert_eq!(entry_function("    map(String mti, MessageFunction function)"), None);
        assert_eq!(entry_function("}"), None);
    }

    #[test]
    fn test_missing_block() {
        let err = patch_mti_table("class Empty {\n}\n", &mti("1100"), &function("AUTQ"))
            .unwrap_err();
        assert_eq!(err, PatchError::MappingBlockNotFound);
    }

    #[test]
    fn test_crlf_preserved() {
        let content = HELPER.replace('\n', "\r\n");
        let (_, patched) =
            inserted(patch_mti_table(&content, &mti("1100"), &function("AUTQ")).unwrap());
        assert!(patched.contains("        map(\"1100\", MessageFunction.AUTQ);\r\n        map(\"1200\""));
    }
}
