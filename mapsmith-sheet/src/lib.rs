/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Mapsmith Sheet
//!
//! Spreadsheet input for the mapsmith scaffolding flow.
//!
//! This crate provides:
//! - **Grid loading**: First worksheet of an xlsx/xls/ods workbook, or a CSV file
//! - **Variable extraction**: Message function and message type indicator read
//!   from fixed positions relative to a header and a label

pub mod extract;
pub mod grid;

pub use extract::{Extractor, ExtractorConfig, SheetValues};
pub use grid::Grid;
