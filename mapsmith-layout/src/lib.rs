/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Mapsmith Layout
//!
//! Project layout configuration and mapper lookup for mapsmith.
//!
//! This crate provides:
//! - **Configuration**: Checkout root, module and package paths loaded from TOML
//! - **Field mapper lookup**: `DE<N>_<Name>Mapper.java` discovery per conversion
//! - **Message mapper paths**: Directory per (direction, conversion) and class naming

pub mod config;
pub mod locator;

pub use config::{DEFAULT_BUILDER_ANCHOR, FieldMapperPackages, LayoutConfig, MessageMapperDir};
pub use locator::{Locator, parse_field_mapper_file, scan_field_mappers};
