/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # Mapsmith
//!
//! A code-modification workbench for ISO8583/UMM mapping projects.
//!
//! Mapsmith edits the Java sources of a mapping project: it chains field
//! mappers into message mapper builders, registers message type indicators
//! and generates message mapper classes from templates.
//!
//! ## Features
//!
//! - **Field mapper lookup**: Finds `DE<N>_*Mapper.java` sources by field number
//! - **Builder patching**: Inserts delegator calls in ascending field order
//! - **Indicator table**: Keeps `MessageTypeIndicatorHelper` sorted and free of duplicates
//! - **Scaffolding**: Renders message mapper classes, optionally from a mapping sheet
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mapsmith::prelude::*;
//!
//! let mut workbench = WorkbenchBuilder::new()
//!     .with_root("/Source/mapping-components-auth-trg")
//!     .with_prompter(ConsolePrompter::stdio())
//!     .build()?;
//!
//! let request = FieldRequest::new(MessageFunction::new("RVRA").unwrap(), "Reversal Advice")
//!     .with_direction(Direction::Outbound)
//!     .with_conversion(Conversion::UmmToIso)
//!     .with_field(FieldNumber::new(49));
//! workbench.implement_field(request)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Domain types and error definitions
//! - [`layout`]: Project layout configuration and mapper lookup
//! - [`patch`]: Java source analysis and patching
//! - [`codegen`]: Message mapper class generation
//! - [`sheet`]: Mapping spreadsheet input
//! - [`engine`]: Operator flows

pub mod core {
    //! Domain types and error definitions.
    pub use mapsmith_core::*;
}

pub mod layout {
    //! Project layout configuration and mapper lookup.
    pub use mapsmith_layout::*;
}

pub mod patch {
    //! Java source analysis and patching.
    pub use mapsmith_patch::*;
}

pub mod codegen {
    //! Message mapper class generation.
    pub use mapsmith_codegen::*;
}

pub mod sheet {
    //! Mapping spreadsheet input.
    pub use mapsmith_sheet::*;
}

pub mod engine {
    //! Operator flows.
    pub use mapsmith_engine::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use mapsmith_core::{
        Conversion, Direction, FieldMapper, FieldNumber, FieldSelector, LookupError, MapError,
        MapperKind, MessageFunction, MessageTypeIndicator, PatchError, Result, SheetError,
        TemplateError,
    };

    // Layout
    pub use mapsmith_layout::{LayoutConfig, Locator};

    // Patching
    pub use mapsmith_patch::{AnchorChainLocator, ChainLocator, FieldInsertion, MtiPatch};

    // Generation
    pub use mapsmith_codegen::{CodeGenerator, Generated};

    // Sheet
    pub use mapsmith_sheet::{Extractor, Grid, SheetValues};

    // Engine
    pub use mapsmith_engine::{
        ConsolePrompter, FieldOutcome, FieldRequest, NonInteractive, Prompter, ScaffoldReport,
        ScaffoldRequest, Tone, VariableSource, Workbench, WorkbenchBuilder,
    };
}
