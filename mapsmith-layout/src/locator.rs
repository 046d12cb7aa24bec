/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Mapper source lookup.
//!
//! Field mappers are found by scanning a directory for the
//! `DE<N>_<Name>Mapper.java` naming convention. Message mapper paths are
//! computed from the layout and the message function description.

use crate::config::LayoutConfig;
use mapsmith_core::error::{LookupError, Result};
use mapsmith_core::field::{FieldMapper, FieldNumber};
use mapsmith_core::types::{Conversion, MapperKind, mapper_class_name};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

static FIELD_MAPPER_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^DE(\d+)_\w+Mapper\.java$").expect("field mapper file pattern is valid")
});

/// Parses a field mapper file name.
///
/// # Returns
/// The field number if the name follows `DE<N>_<Name>Mapper.java`, `None` otherwise.
#[must_use]
pub fn parse_field_mapper_file(file_name: &str) -> Option<FieldNumber> {
    FIELD_MAPPER_FILE
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
        .map(FieldNumber::new)
}

/// Lists the field mappers for one field in a directory, sorted by file name.
///
/// # Errors
/// Returns `LookupError::DirectoryUnreadable` if the directory cannot be listed.
pub fn scan_field_mappers(dir: &Path, field: FieldNumber) -> Result<Vec<FieldMapper>> {
    let entries = fs::read_dir(dir).map_err(|_| LookupError::DirectoryUnreadable {
        path: dir.to_path_buf(),
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if parse_field_mapper_file(&file_name) == Some(field) {
            found.push(FieldMapper::new(field, file_name, entry.path()));
        }
    }
    found.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    debug!(field = %field, dir = %dir.display(), count = found.len(), "scanned field mappers");
    Ok(found)
}

/// Finds field mappers and message mapper paths within a project layout.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> Locator<'a> {
    /// Creates a locator over a layout.
    #[must_use]
    pub const fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout this locator reads.
    #[must_use]
    pub const fn layout(&self) -> &'a LayoutConfig {
        self.layout
    }

    /// Returns every field mapper candidate for a field.
    ///
    /// # Errors
    /// Returns `LookupError::FieldMapperNotImplemented` if there is none, or
    /// `LookupError::DirectoryUnreadable` if the directory is missing.
    pub fn field_mappers(
        &self,
        field: FieldNumber,
        conversion: Conversion,
    ) -> Result<Vec<FieldMapper>> {
        let dir = self.layout.field_mapper_dir(conversion);
        let found = scan_field_mappers(&dir, field)?;
        if found.is_empty() {
            return Err(LookupError::FieldMapperNotImplemented {
                field: field.value(),
            }
            .into());
        }
        Ok(found)
    }

    /// Computes the message mapper path for a description.
    ///
    /// # Errors
    /// Returns `LookupError::NoLayoutFor` if the kind has no configured directory.
    pub fn message_mapper_path(&self, kind: MapperKind, description: &str) -> Result<PathBuf> {
        let dir = self.layout.message_mapper_dir(kind)?;
        Ok(dir.join(format!("{}.java", mapper_class_name(description))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapsmith_core::error::MapError;
    use mapsmith_core::types::Direction;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "class X {}").unwrap();
    }

    #[test]
    fn test_parse_field_mapper_file() {
        assert_eq!(
            parse_field_mapper_file("DE49_TransactionCurrencyCodeMapper.java"),
            Some(FieldNumber::new(49))
        );
        assert_eq!(parse_field_mapper_file("DE49_Mapper.java"), None);
        assert_eq!(parse_field_mapper_file("XDE49_CodeMapper.java"), None);
        assert_eq!(parse_field_mapper_file("DE49_CodeMapper.java.bak"), None);
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "DE4_AmountTransactionMapper.java");
        touch(tmp.path(), "DE49_ZetaCodeMapper.java");
        touch(tmp.path(), "DE49_AlphaCodeMapper.java");
        touch(tmp.path(), "DE49_Helper.java");

        let found = scan_field_mappers(tmp.path(), FieldNumber::new(49)).unwrap();
        let names: Vec<_> = found.iter().map(|m| m.file_name.as_str()).collect();
        assert_eq!(names, ["DE49_AlphaCodeMapper.java", "DE49_ZetaCodeMapper.java"]);

        let found = scan_field_mappers(tmp.path(), FieldNumber::new(4)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].class_name(), "DE4_AmountTransactionMapper");
    }

    #[test]
    fn test_missing_field_mapper_is_not_implemented() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = LayoutConfig::default().with_root(tmp.path());
        let dir = layout.field_mapper_dir(Conversion::UmmToIso);
        fs::create_dir_all(&dir).unwrap();
        touch(&dir, "DE2_PrimaryAccountNumberMapper.java");

        let locator = Locator::new(&layout);
        assert_eq!(
            locator
                .field_mappers(FieldNumber::new(2), Conversion::UmmToIso)
                .unwrap()
                .len(),
            1
        );
        let err = locator
            .field_mappers(FieldNumber::new(3), Conversion::UmmToIso)
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::Lookup(LookupError::FieldMapperNotImplemented { field: 3 })
        ));
    }

    #[test]
    fn test_unreadable_directory() {
        let layout = LayoutConfig::default().with_root("/definitely/not/here");
        let err = Locator::new(&layout)
            .field_mappers(FieldNumber::new(2), Conversion::IsoToUmm)
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::Lookup(LookupError::DirectoryUnreadable { .. })
        ));
    }

    #[test]
    fn test_message_mapper_path() {
        let layout = LayoutConfig::default().with_root("/work");
        let path = Locator::new(&layout)
            .message_mapper_path(
                MapperKind::new(Direction::Inbound, Conversion::UmmToIso),
                "Reversal Advice",
            )
            .unwrap();
        assert!(path.ends_with("umm_to_iso8583/message_mappers/ReversalAdviceMapper.java"));
    }
}
