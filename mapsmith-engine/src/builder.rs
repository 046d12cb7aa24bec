/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Workbench builder for fluent configuration.
//!
//! This module provides a builder API for assembling a [`Workbench`].

use crate::prompt::{NonInteractive, Prompter};
use crate::workbench::Workbench;
use mapsmith_codegen::{CodeGenerator, GeneratorConfig};
use mapsmith_core::error::Result;
use mapsmith_layout::LayoutConfig;
use mapsmith_sheet::{Extractor, ExtractorConfig};
use std::path::PathBuf;

/// Builder for configuring a workbench.
#[derive(Debug)]
pub struct WorkbenchBuilder<P: Prompter = NonInteractive> {
    /// Project layout.
    layout: LayoutConfig,
    /// Operator interaction.
    prompter: P,
}

impl Default for WorkbenchBuilder<NonInteractive> {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbenchBuilder<NonInteractive> {
    /// Creates a builder with the default layout and no operator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            prompter: NonInteractive,
        }
    }
}

impl<P: Prompter> WorkbenchBuilder<P> {
    /// Sets the prompter.
    #[must_use]
    pub fn with_prompter<Q: Prompter>(self, prompter: Q) -> WorkbenchBuilder<Q> {
        WorkbenchBuilder {
            layout: self.layout,
            prompter,
        }
    }

    /// Sets the project layout.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Overrides the checkout root of the layout.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.layout.root = root.into();
        self
    }

    /// Sets the spreadsheet layout, replacing the layout's `[sheet]` table.
    #[must_use]
    pub fn with_extractor_config(mut self, config: ExtractorConfig) -> Self {
        self.layout.sheet = config;
        self
    }

    /// Returns the project layout.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Builds the workbench, loading any template overrides.
    ///
    /// # Errors
    /// Returns `MapError::Io` or `TemplateError::Register` if a template
    /// override cannot be loaded.
    pub fn build(self) -> Result<Workbench<P>> {
        let generator_config = GeneratorConfig {
            template_dir: self.layout.template_dir.clone(),
        };
        let generator = CodeGenerator::with_config(&generator_config)?;
        let extractor = Extractor::with_config(self.layout.sheet.clone());
        Ok(Workbench::new(
            self.layout,
            generator,
            extractor,
            self.prompter,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapsmith_core::error::{MapError, TemplateError};
    use std::fs;

    #[test]
    fn test_workbench_builder_default() {
        let builder = WorkbenchBuilder::new();
        assert_eq!(builder.layout(), &LayoutConfig::default());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_workbench_builder_with_root() {
        let workbench = WorkbenchBuilder::new()
            .with_layout(LayoutConfig::default())
            .with_root("/tmp/checkout")
            .build()
            .unwrap();
        assert_eq!(workbench.layout().root, PathBuf::from("/tmp/checkout"));
    }

    #[test]
    fn test_workbench_builder_extractor_config() {
        let config = ExtractorConfig {
            function_row: 1,
            ..ExtractorConfig::default()
        };
        let builder = WorkbenchBuilder::new().with_extractor_config(config.clone());
        assert_eq!(builder.layout().sheet, config);
    }

    #[test]
    fn test_workbench_builder_bad_template_dir() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("inbound_umm_to_iso.java.hbs"), "{{#each}}").unwrap();
        let layout = LayoutConfig::default().with_template_dir(tmp.path());

        let err = WorkbenchBuilder::new().with_layout(layout).build().unwrap_err();
        assert!(matches!(err, MapError::Template(TemplateError::Register { .. })));
    }
}
