/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Mapsmith Patch
//!
//! Text-level analysis and patching of generated Java mapper sources.
//!
//! This crate provides pure functions over file content; reading and writing
//! files is left to the caller.
//!
//! ## Features
//!
//! - **Presence analysis**: Detects `.de<N>_<Name>(` delegator calls line by line
//! - **Chain location**: Delimits the builder expression behind the [`ChainLocator`] trait
//! - **Field insertion**: Splices a call and its static import in ascending field order
//! - **Indicator table**: Adds `map("<mti>", MessageFunction.<CODE>)` entries in order

pub mod chain;
pub mod factory;
pub mod insert;
pub mod mti;
pub mod presence;

pub use chain::{AnchorChainLocator, BuilderChain, ChainCall, ChainLocator};
pub use factory::find_factory_call;
pub use insert::{FieldInsertion, de_number, insert_field, static_import_line};
pub use mti::{MtiPatch, mapping_line, patch_mti_table};
pub use presence::{ChainedField, chained_fields, is_field_chained};
