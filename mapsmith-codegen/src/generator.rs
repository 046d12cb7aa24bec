/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message mapper class generator.
//!
//! Renders one of four Java class templates, keyed by [`MapperKind`], with the
//! message function code and class name substituted.

use handlebars::Handlebars;
use mapsmith_core::error::{Result, TemplateError};
use mapsmith_core::types::{MapperKind, MessageFunction, mapper_class_name};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const BUILTIN_TEMPLATES: [(&str, &str); 4] = [
    (
        "inbound_iso_to_umm",
        include_str!("../templates/inbound_iso_to_umm.java.hbs"),
    ),
    (
        "inbound_umm_to_iso",
        include_str!("../templates/inbound_umm_to_iso.java.hbs"),
    ),
    (
        "outbound_umm_to_iso",
        include_str!("../templates/outbound_umm_to_iso.java.hbs"),
    ),
    (
        "outbound_iso_to_umm",
        include_str!("../templates/outbound_iso_to_umm.java.hbs"),
    ),
];

/// File extension of template overrides.
pub const TEMPLATE_EXTENSION: &str = "java.hbs";

/// Configuration for the class generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Directory whose `<direction>_<conversion>.java.hbs` files replace the
    /// built-in templates. Kinds without a file there keep the built-in one.
    pub template_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Sets the template override directory.
    #[must_use]
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }
}

#[derive(Serialize)]
struct TemplateVars<'a> {
    message_function: &'a str,
    class_name: &'a str,
}

/// Outcome of generating a message mapper class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// A new file was written.
    Written(PathBuf),
    /// The file already existed and was left alone.
    Skipped(PathBuf),
}

impl Generated {
    /// Returns the target path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Message mapper class generator.
#[derive(Debug)]
pub struct CodeGenerator {
    registry: Handlebars<'static>,
}

impl CodeGenerator {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    /// Returns `TemplateError::Register` if a template does not parse.
    pub fn new() -> Result<Self> {
        Self::with_config(&GeneratorConfig::default())
    }

    /// Creates a generator, applying template overrides from the configuration.
    ///
    /// # Errors
    /// Returns `MapError::Io` if an override exists but cannot be read, or
    /// `TemplateError::Register` if a template does not parse.
    pub fn with_config(config: &GeneratorConfig) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for (name, builtin) in BUILTIN_TEMPLATES {
            let overridden = match &config.template_dir {
                Some(dir) => {
                    let path = dir.join(format!("{name}.{TEMPLATE_EXTENSION}"));
                    if path.is_file() {
                        info!(template = name, path = %path.display(), "using template override");
                        Some(fs::read_to_string(&path)?)
                    } else {
                        None
                    }
                }
                None => None,
            };
            let source = overridden.as_deref().unwrap_or(builtin);
            registry
                .register_template_string(name, source)
                .map_err(|e| TemplateError::Register {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
        }

        Ok(Self { registry })
    }

    /// Renders the class source for a mapper kind.
    ///
    /// # Arguments
    /// * `kind` - Selects the template
    /// * `function` - Message function code substituted as `message_function`
    /// * `class_name` - Class name substituted as `class_name`
    ///
    /// # Errors
    /// Returns `TemplateError::Render` if rendering fails.
    pub fn render(
        &self,
        kind: MapperKind,
        function: &MessageFunction,
        class_name: &str,
    ) -> std::result::Result<String, TemplateError> {
        let name = kind.slug();
        let vars = TemplateVars {
            message_function: function.as_str(),
            class_name,
        };
        self.registry
            .render(&name, &vars)
            .map_err(|e| TemplateError::Render {
                name,
                reason: e.to_string(),
            })
    }

    /// Generates a message mapper class file in `dir`.
    ///
    /// The file is named after the description (spaces removed, `Mapper`
    /// appended). An existing file is never overwritten.
    ///
    /// # Errors
    /// Returns `MapError::Io` if the directory or file cannot be written, or a
    /// template error if rendering fails.
    pub fn generate(
        &self,
        dir: &Path,
        kind: MapperKind,
        description: &str,
        function: &MessageFunction,
    ) -> Result<Generated> {
        let class_name = mapper_class_name(description);
        let path = dir.join(format!("{class_name}.java"));

        if path.exists() {
            warn!(
                path = %path.display(),
                "file already exists, skipping generation to avoid overwriting"
            );
            return Ok(Generated::Skipped(path));
        }

        let source = self.render(kind, function, &class_name)?;
        fs::create_dir_all(dir)?;
        fs::write(&path, source)?;
        info!(kind = %kind, path = %path.display(), "generated message mapper");
        Ok(Generated::Written(path))
    }
}
