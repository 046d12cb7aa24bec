/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message variables from a mapping spreadsheet.
//!
//! The mapping sheet carries the UMM message function in an `ISO20022`
//! column and the message type indicator a fixed number of cells to the right
//! of a `Message Type Identifier` label.

use crate::grid::Grid;
use mapsmith_core::error::{Result, SheetError};
use mapsmith_core::types::{MessageFunction, MessageTypeIndicator};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the variables sit in the sheet.
///
/// Loaded from the `[sheet]` table of the layout file; missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Header text in the first row marking the message function column.
    pub function_header: String,
    /// Row holding the message function in that column.
    pub function_row: usize,
    /// Separator before the code in cells like `MessageFunction, value RVRA`.
    pub value_separator: String,
    /// Label of the indicator cell.
    pub indicator_label: String,
    /// Columns from the label to the indicator value.
    pub indicator_offset: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            function_header: "ISO20022".to_string(),
            function_row: 3,
            value_separator: ", value ".to_string(),
            indicator_label: "Message Type Identifier".to_string(),
            indicator_offset: 5,
        }
    }
}

/// Values read from the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetValues {
    /// UMM message function code.
    pub message_function: MessageFunction,
    /// ISO8583 message type indicator.
    pub indicator: MessageTypeIndicator,
}

/// Reads sheet variables using a fixed layout.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Creates an extractor with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with the given layout.
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extracts the message function and indicator.
    ///
    /// # Errors
    /// Returns `SheetError::HeaderNotFound`, `SheetError::LabelNotFound` or
    /// `SheetError::CellOutOfRange` when the sheet does not match the layout,
    /// and `MapError::InvalidArgument` when a value is malformed.
    pub fn extract(&self, grid: &Grid) -> Result<SheetValues> {
        let message_function = self.message_function(grid)?;
        let indicator = self.indicator(grid)?;
        debug!(%message_function, %indicator, "extracted sheet values");
        Ok(SheetValues {
            message_function,
            indicator,
        })
    }

    fn message_function(&self, grid: &Grid) -> Result<MessageFunction> {
        let cfg = &self.config;
        let col = grid
            .row(0)
            .and_then(|header| {
                header
                    .iter()
                    .position(|cell| cell.trim() == cfg.function_header)
            })
            .ok_or_else(|| SheetError::HeaderNotFound(cfg.function_header.clone()))?;
        let raw = grid
            .cell(cfg.function_row, col)
            .ok_or(SheetError::CellOutOfRange {
                row: cfg.function_row,
                col,
            })?;
        let code = raw
            .rsplit_once(cfg.value_separator.as_str())
            .map_or(raw, |(_, code)| code);
        code.parse()
    }

    fn indicator(&self, grid: &Grid) -> Result<MessageTypeIndicator> {
        let cfg = &self.config;
        let (row, label_col) = grid
            .position(|cell| cell.contains(cfg.indicator_label.as_str()))
            .ok_or_else(|| SheetError::LabelNotFound(cfg.indicator_label.clone()))?;
        let col = label_col + cfg.indicator_offset;
        grid.cell(row, col)
            .ok_or(SheetError::CellOutOfRange { row, col })?
            .parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapsmith_core::error::MapError;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    fn sheet() -> Grid {
        Grid::from_rows(vec![
            row(&["Field", "ISO8583", "ISO20022"]),
            row(&["", "", ""]),
            row(&["", "", ""]),
            row(&["Function", "", "MessageFunction, value RVRA"]),
            row(&[
                "Header",
                "Message Type Identifier (MTI)",
                "",
                "",
                "",
                "",
                "1420",
            ]),
        ])
    }

    #[test]
    fn test_extract_values() {
        let values = Extractor::new().extract(&sheet()).unwrap();
        assert_eq!(values.message_function.as_str(), "RVRA");
        assert_eq!(values.indicator.as_str(), "1420");
    }

    #[test]
    fn test_plain_function_cell() {
        let mut rows = vec![
            row(&["ISO20022"]),
            row(&[""]),
            row(&[""]),
            row(&["ADNO"]),
        ];
        rows.push(row(&["Message Type Identifier", "", "", "", "", "1688"]));
        let values = Extractor::new().extract(&Grid::from_rows(rows)).unwrap();
        assert_eq!(values.message_function.as_str(), "ADNO");
        assert_eq!(values.indicator.value(), 1688);
    }

    #[test]
    fn test_missing_header() {
        let grid = Grid::from_rows(vec![row(&["Field", "ISO8583"])]);
        let err = Extractor::new().extract(&grid).unwrap_err();
        assert!(matches!(
            err,
            MapError::Sheet(SheetError::HeaderNotFound(ref h)) if h == "ISO20022"
        ));
    }

    #[test]
    fn test_missing_label() {
        let full = sheet();
        let rows = (0..4).map(|i| full.row(i).unwrap().to_vec()).collect();
        let err = Extractor::new().extract(&Grid::from_rows(rows)).unwrap_err();
        assert!(matches!(err, MapError::Sheet(SheetError::LabelNotFound(_))));
    }

    #[test]
    fn test_value_out_of_range() {
        let grid = Grid::from_rows(vec![
            row(&["ISO20022"]),
            row(&[""]),
            row(&[""]),
            row(&["RVRA"]),
            row(&["Message Type Identifier", "", "1420"]),
        ]);
        let err = Extractor::new().extract(&grid).unwrap_err();
        assert!(matches!(
            err,
            MapError::Sheet(SheetError::CellOutOfRange { row: 4, col: 5 })
        ));
    }

    #[test]
    fn test_custom_layout() {
        let config = ExtractorConfig {
            function_row: 1,
            indicator_offset: 1,
            ..ExtractorConfig::default()
        };
        let grid = Grid::from_rows(vec![
            row(&["ISO20022", "Message Type Identifier", "1100"]),
            row(&["FREQ"]),
        ]);
        let values = Extractor::with_config(config).extract(&grid).unwrap();
        assert_eq!(values.message_function.as_str(), "FREQ");
        assert_eq!(values.indicator.as_str(), "1100");
    }
}
