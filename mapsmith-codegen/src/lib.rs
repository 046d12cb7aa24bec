/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Mapsmith Codegen
//!
//! Java message mapper class generation for mapsmith.
//!
//! This crate renders message mapper classes from four Handlebars templates,
//! one per (direction, conversion) pair, substituting the message function
//! code and the class name.
//!
//! ## Usage
//!
//! Built-in templates are compiled in; a template directory can replace any
//! of them without rebuilding.

pub mod generator;

pub use generator::{CodeGenerator, Generated, GeneratorConfig, TEMPLATE_EXTENSION};
