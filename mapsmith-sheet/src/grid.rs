/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Cell grid loaded from a spreadsheet.
//!
//! Workbooks (`xlsx`, `xlsm`, `xls`, `ods`) are read with `calamine`; `csv`
//! files with the `csv` crate. Either way the first sheet becomes a grid of
//! strings addressed by absolute zero-based (row, column).

use calamine::{Reader, open_workbook_auto};
use mapsmith_core::error::{Result, SheetError};
use std::path::Path;
use tracing::debug;

/// A rectangular-ish table of cell texts. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates a grid from rows of cell texts.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Loads the first sheet of a workbook or a CSV file.
    ///
    /// # Errors
    /// Returns `SheetError::Unreadable` if the file cannot be parsed and
    /// `SheetError::NoWorksheet` if a workbook has no sheet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let grid = if is_csv {
            Self::load_csv(path)?
        } else {
            Self::load_workbook(path)?
        };
        debug!(path = %path.display(), rows = grid.height(), "loaded sheet");
        Ok(grid)
    }

    fn load_csv(path: &Path) -> Result<Self> {
        let unreadable = |e: csv::Error| SheetError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(unreadable)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(unreadable)?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { rows })
    }

    fn load_workbook(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path).map_err(|e| SheetError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SheetError::NoWorksheet)?
            .map_err(|e| SheetError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        // Ranges start at the first used cell; pad so indices stay absolute.
        let (first_row, first_col) = range
            .start()
            .map_or((0, 0), |(r, c)| (r as usize, c as usize));
        let mut rows = vec![Vec::new(); first_row];
        for row in range.rows() {
            let mut cells = vec![String::new(); first_col];
            cells.extend(row.iter().map(ToString::to_string));
            rows.push(cells);
        }
        Ok(Self { rows })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns a row's cells.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns a cell's text.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Finds the first cell, in row-major order, accepted by the predicate.
    pub fn position<F>(&self, mut predicate: F) -> Option<(usize, usize)>
    where
        F: FnMut(&str) -> bool,
    {
        self.rows.iter().enumerate().find_map(|(r, cells)| {
            cells
                .iter()
                .position(|cell| predicate(cell))
                .map(|c| (r, c))
        })
    }
}
