/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Mapsmith Core
//!
//! Core types and error definitions for the mapsmith mapper scaffolding toolkit.
//!
//! This crate provides the fundamental building blocks used across all mapsmith crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `FieldNumber`, `FieldSelector` and `FieldMapper`
//! - **Core types**: `Direction`, `Conversion`, `MapperKind`, `MessageFunction`,
//!   `MessageTypeIndicator`

pub mod error;
pub mod field;
pub mod types;

pub use error::{LookupError, MapError, PatchError, Result, SheetError, TemplateError};
pub use field::{FieldMapper, FieldNumber, FieldSelector};
pub use types::{
    Conversion, Direction, MapperKind, MessageFunction, MessageTypeIndicator, mapper_class_name,
};
