/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Mapsmith Engine
//!
//! Operator flows for the mapsmith mapping workbench.
//!
//! This crate provides:
//! - **Field flow**: Locate or generate a message mapper and chain a field mapper into it
//! - **Scaffold flow**: Register a message type indicator and generate message mapper classes
//! - **Prompter trait**: Interface for operator questions and progress messages
//! - **Builder API**: Fluent configuration for workbench setup

pub mod builder;
pub mod prompt;
pub mod workbench;

pub use builder::WorkbenchBuilder;
pub use prompt::{ConsolePrompter, NonInteractive, Prompter, Tone};
pub use workbench::{
    FieldOutcome, FieldRequest, ScaffoldReport, ScaffoldRequest, VariableSource, Workbench,
};
