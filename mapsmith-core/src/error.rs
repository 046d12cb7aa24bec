/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the mapsmith toolkit.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across locating, patching, rendering and extraction.

use crate::types::{Conversion, Direction};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MapError`] as the error type.
pub type Result<T> = std::result::Result<T, MapError>;

/// Top-level error type for all mapsmith operations.
#[derive(Debug, Error)]
pub enum MapError {
    /// Error while locating mapper sources.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Error while patching Java source text.
    #[error("patch error: {0}")]
    Patch(#[from] PatchError),

    /// Error while rendering a mapper template.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Error while extracting values from a spreadsheet.
    #[error("sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// A caller-supplied value is not acceptable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Layout configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error from the filesystem or the console.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while locating field or message mappers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No `DE<N>_*Mapper.java` file exists for the field.
    #[error("field mapper for field {field} is not implemented")]
    FieldMapperNotImplemented {
        /// The requested field number.
        field: u32,
    },

    /// The layout has no message mapper directory for the pair.
    #[error("no message mapper directory configured for ({direction}, {conversion})")]
    NoLayoutFor {
        /// Message flow direction.
        direction: Direction,
        /// Conversion direction.
        conversion: Conversion,
    },

    /// A field mapper source has no public static factory method.
    #[error("instance call not found for class {class_name}")]
    FactoryMethodNotFound {
        /// The field mapper class name.
        class_name: String,
    },

    /// The field mapper directory could not be listed.
    #[error("field mapper directory not readable: {}", path.display())]
    DirectoryUnreadable {
        /// The directory that was scanned.
        path: PathBuf,
    },
}

/// Errors raised while editing Java source text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The builder start anchor is missing from the message mapper.
    #[error("builder anchor not found: {anchor}")]
    AnchorNotFound {
        /// The anchor text that was searched for.
        anchor: String,
    },

    /// No `.build()` call follows the builder anchor.
    #[error("no .build() call after the builder anchor")]
    BuildCallNotFound,

    /// The field mapper file name does not follow the `DE<N>_` convention.
    #[error("number not found in field mapper name {file_name}")]
    NumberNotFound {
        /// The offending file name.
        file_name: String,
    },

    /// The field is already chained in the builder expression.
    #[error("field {field} is already chained in the builder")]
    FieldAlreadyChained {
        /// The duplicated field number.
        field: u32,
    },

    /// The lookup table already maps the indicator to another function.
    #[error("message type indicator {indicator} is already mapped to {function}")]
    IndicatorAlreadyMapped {
        /// The indicator being registered.
        indicator: String,
        /// The function it is already mapped to.
        function: String,
    },

    /// No `map("...")` entries were found in the lookup table.
    #[error("message type indicator mapping block not found")]
    MappingBlockNotFound,
}

/// Errors raised while rendering templates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A template file could not be registered.
    #[error("failed to register template {name}: {reason}")]
    Register {
        /// Template name.
        name: String,
        /// Description of the failure.
        reason: String,
    },

    /// A template failed to render.
    #[error("failed to render template {name}: {reason}")]
    Render {
        /// Template name.
        name: String,
        /// Description of the failure.
        reason: String,
    },
}

/// Errors raised while reading spreadsheet inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The workbook could not be opened or parsed.
    #[error("unreadable sheet {}: {reason}", path.display())]
    Unreadable {
        /// Path of the input file.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// The workbook contains no worksheet.
    #[error("workbook has no worksheet")]
    NoWorksheet,

    /// The header row has no cell with the expected text.
    #[error("header not found in first row: {0}")]
    HeaderNotFound(String),

    /// No cell contains the expected label.
    #[error("label not found: {0}")]
    LabelNotFound(String),

    /// A derived cell position lies outside the grid.
    #[error("cell out of range: row {row}, column {col}")]
    CellOutOfRange {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::FieldMapperNotImplemented { field: 49 };
        assert_eq!(
            err.to_string(),
            "field mapper for field 49 is not implemented"
        );
    }

    #[test]
    fn test_map_error_from_patch() {
        let patch_err = PatchError::BuildCallNotFound;
        let map_err: MapError = patch_err.into();
        assert!(matches!(
            map_err,
            MapError::Patch(PatchError::BuildCallNotFound)
        ));
    }

    #[test]
    fn test_no_layout_display() {
        let err = LookupError::NoLayoutFor {
            direction: Direction::Outbound,
            conversion: Conversion::IsoToUmm,
        };
        assert_eq!(
            err.to_string(),
            "no message mapper directory configured for (outbound, iso_to_umm)"
        );
    }

    #[test]
    fn test_sheet_error_display() {
        let err = SheetError::CellOutOfRange { row: 3, col: 7 };
        assert_eq!(err.to_string(), "cell out of range: row 3, column 7");
    }
}
