/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Project layout configuration.
//!
//! This module describes where the mapping project keeps its field mappers,
//! message mappers and the message type indicator helper. Paths are resolved
//! once from a TOML file (or the built-in defaults) at startup.

use mapsmith_core::error::{LookupError, MapError, Result};
use mapsmith_core::types::{Conversion, Direction, MapperKind};
use mapsmith_sheet::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Builder expression start token in generated message mappers.
pub const DEFAULT_BUILDER_ANCHOR: &str =
    "DataElementMapperDelegator.<UniMessageContext, MappingContext>builder()";

const BASE_PACKAGE: &str = "eu/nets/mapping/components/auth/trg";

/// Returns the platform default project root.
#[must_use]
pub fn default_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:/Source/mapping-components-auth-trg")
    } else {
        PathBuf::from("/Source/mapping-components-auth-trg")
    }
}

/// Package paths of the shared field mappers, per conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapperPackages {
    /// Package path (slash separated) of UMM to ISO8583 field mappers.
    pub umm_to_iso: String,
    /// Package path (slash separated) of ISO8583 to UMM field mappers.
    pub iso_to_umm: String,
}

impl Default for FieldMapperPackages {
    fn default() -> Self {
        Self {
            umm_to_iso: format!("{BASE_PACKAGE}/umm_to_iso8583/field_mappers"),
            iso_to_umm: format!("{BASE_PACKAGE}/iso8583_to_umm/field_mappers"),
        }
    }
}

/// Location of the message mappers for one (direction, conversion) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMapperDir {
    /// Message flow direction.
    pub direction: Direction,
    /// Conversion direction.
    pub conversion: Conversion,
    /// Maven module directory under the root.
    pub module: String,
    /// Package path (slash separated) under the module's source root.
    pub package: String,
}

impl MessageMapperDir {
    /// Returns the mapper kind served by this directory.
    #[must_use]
    pub const fn kind(&self) -> MapperKind {
        MapperKind::new(self.direction, self.conversion)
    }
}

fn default_message_mappers() -> Vec<MessageMapperDir> {
    const INBOUND: &str = "mapping-components-auth-trg-dk-merchant";
    const OUTBOUND: &str = "mapping-components-auth-trg-dk-merchant-nds";
    let entry = |direction, conversion, module: &str, package: &str| MessageMapperDir {
        direction,
        conversion,
        module: module.to_string(),
        package: format!("{BASE_PACKAGE}/{package}/message_mappers"),
    };
    vec![
        entry(
            Direction::Inbound,
            Conversion::IsoToUmm,
            INBOUND,
            "dk/merchant/iso8583_to_umm",
        ),
        entry(
            Direction::Inbound,
            Conversion::UmmToIso,
            INBOUND,
            "dk/merchant/umm_to_iso8583",
        ),
        entry(
            Direction::Outbound,
            Conversion::IsoToUmm,
            OUTBOUND,
            "dk/merchant/nds/iso8583_to_umm",
        ),
        entry(
            Direction::Outbound,
            Conversion::UmmToIso,
            OUTBOUND,
            "dk/merchant/nds/umm_to_iso8583",
        ),
    ]
}

/// Layout of the mapping project on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Checkout root containing all Maven modules.
    pub root: PathBuf,
    /// Java source root inside each module.
    pub source_root: String,
    /// Module holding field mappers and the indicator helper.
    pub common_module: String,
    /// Token that opens the builder expression in message mappers.
    pub builder_anchor: String,
    /// Path of `MessageTypeIndicatorHelper.java` under the common source root.
    pub mti_helper: String,
    /// Directory overriding the built-in class templates.
    pub template_dir: Option<PathBuf>,
    /// Field mapper packages.
    pub field_mappers: FieldMapperPackages,
    /// Message mapper directories.
    pub message_mappers: Vec<MessageMapperDir>,
    /// Cell positions of the mapping spreadsheet.
    pub sheet: ExtractorConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            source_root: "src/main/java".to_string(),
            common_module: "mapping-components-auth-trg".to_string(),
            builder_anchor: DEFAULT_BUILDER_ANCHOR.to_string(),
            mti_helper: format!(
                "{BASE_PACKAGE}/common/message_function/MessageTypeIndicatorHelper.java"
            ),
            template_dir: None,
            field_mappers: FieldMapperPackages::default(),
            message_mappers: default_message_mappers(),
            sheet: ExtractorConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Parses a layout from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `MapError::Config` if the text is not a valid layout.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| MapError::Config(e.to_string()))
    }

    /// Loads a layout from a TOML file.
    ///
    /// # Errors
    /// Returns `MapError::Io` if the file cannot be read and `MapError::Config`
    /// if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| MapError::Config(format!("{}: {e}", path.display())))
    }

    /// Sets the checkout root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the template override directory.
    #[must_use]
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Sets the builder anchor token.
    #[must_use]
    pub fn with_builder_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.builder_anchor = anchor.into();
        self
    }

    /// Returns the slash separated package path of field mappers for a conversion.
    #[must_use]
    pub fn field_mapper_package(&self, conversion: Conversion) -> &str {
        match conversion {
            Conversion::UmmToIso => &self.field_mappers.umm_to_iso,
            Conversion::IsoToUmm => &self.field_mappers.iso_to_umm,
        }
    }

    /// Returns the directory holding field mappers for a conversion.
    #[must_use]
    pub fn field_mapper_dir(&self, conversion: Conversion) -> PathBuf {
        self.common_source_root()
            .join(self.field_mapper_package(conversion))
    }

    /// Returns the directory holding message mappers of the given kind.
    ///
    /// # Errors
    /// Returns `LookupError::NoLayoutFor` if no directory is configured.
    pub fn message_mapper_dir(&self, kind: MapperKind) -> std::result::Result<PathBuf, LookupError> {
        self.message_mappers
            .iter()
            .find(|entry| entry.kind() == kind)
            .map(|entry| {
                self.root
                    .join(&entry.module)
                    .join(&self.source_root)
                    .join(&entry.package)
            })
            .ok_or(LookupError::NoLayoutFor {
                direction: kind.direction,
                conversion: kind.conversion,
            })
    }

    /// Returns the path of the message type indicator helper.
    #[must_use]
    pub fn mti_helper_path(&self) -> PathBuf {
        self.common_source_root().join(&self.mti_helper)
    }

    fn common_source_root(&self) -> PathBuf {
        self.root.join(&self.common_module).join(&self.source_root)
    }
}
