/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Mapping workbench.
//!
//! The workbench ties the layout, the patchers, the generator and the sheet
//! extractor together into the two operator flows:
//!
//! - **Field flow**: make sure a message mapper chains a field mapper
//! - **Scaffold flow**: register a message type indicator and generate the
//!   message mapper classes for a new message
//!
//! Every file change is a whole-file read-modify-write.

use crate::prompt::{Prompter, Tone};
use mapsmith_codegen::{CodeGenerator, Generated};
use mapsmith_core::error::{LookupError, MapError, Result};
use mapsmith_core::field::{FieldMapper, FieldNumber, FieldSelector};
use mapsmith_core::types::{
    Conversion, Direction, MapperKind, MessageFunction, MessageTypeIndicator,
};
use mapsmith_layout::{LayoutConfig, Locator};
use mapsmith_patch::{
    AnchorChainLocator, FieldInsertion, MtiPatch, chained_fields, find_factory_call,
    insert_field, is_field_chained, patch_mti_table,
};
use mapsmith_sheet::{Extractor, Grid, SheetValues};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Inputs of the field flow. Missing values are asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRequest {
    /// Message function code of the message mapper.
    pub function: MessageFunction,
    /// Human description, e.g. `Reversal Advice`.
    pub description: String,
    /// Message direction.
    pub direction: Option<Direction>,
    /// Conversion direction.
    pub conversion: Option<Conversion>,
    /// Field to implement.
    pub field: Option<FieldNumber>,
}

impl FieldRequest {
    /// Creates a request with every optional value left to the prompter.
    #[must_use]
    pub fn new(function: MessageFunction, description: impl Into<String>) -> Self {
        Self {
            function,
            description: description.into(),
            direction: None,
            conversion: None,
            field: None,
        }
    }

    /// Sets the direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the conversion.
    #[must_use]
    pub const fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversion = Some(conversion);
        self
    }

    /// Sets the field.
    #[must_use]
    pub const fn with_field(mut self, field: FieldNumber) -> Self {
        self.field = Some(field);
        self
    }
}

/// Result of the field flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The message mapper already chains the field.
    AlreadyImplemented {
        /// Message mapper path.
        path: PathBuf,
    },
    /// The field mapper was chained into the message mapper.
    Implemented {
        /// Message mapper path.
        path: PathBuf,
        /// The field mapper that was chained.
        mapper: FieldMapper,
    },
}

impl FieldOutcome {
    /// Returns the message mapper path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::AlreadyImplemented { path } | Self::Implemented { path, .. } => path,
        }
    }
}

/// Where the scaffold flow takes the message variables from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableSource {
    /// A mapping spreadsheet.
    Sheet(PathBuf),
    /// Values given directly.
    Explicit(SheetValues),
}

/// Inputs of the scaffold flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Human description, e.g. `Reversal Advice`.
    pub description: String,
    /// Source of the message function and indicator.
    pub source: VariableSource,
    /// Comma separated menu keys; asked for when absent.
    pub kinds: Option<String>,
}

/// Result of the scaffold flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// The variables used.
    pub values: SheetValues,
    /// Whether the indicator table was changed.
    pub indicator_added: bool,
    /// One entry per selected kind.
    pub generated: Vec<Generated>,
}

/// Replaces a file's content as a whole.
///
/// The content goes to a temporary file next to the target which is then
/// renamed over it, so readers never see a partial file. The target keeps
/// its permissions.
fn replace_file(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path)?.permissions();
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|e| MapError::Io(e.error))?;
    Ok(())
}

/// Runs the mapping flows against one project layout.
#[derive(Debug)]
pub struct Workbench<P: Prompter> {
    layout: LayoutConfig,
    generator: CodeGenerator,
    chain_locator: AnchorChainLocator,
    extractor: Extractor,
    prompter: P,
}

impl<P: Prompter> Workbench<P> {
    pub(crate) fn new(
        layout: LayoutConfig,
        generator: CodeGenerator,
        extractor: Extractor,
        prompter: P,
    ) -> Self {
        let chain_locator = AnchorChainLocator::new(layout.builder_anchor.clone());
        Self {
            layout,
            generator,
            chain_locator,
            extractor,
            prompter,
        }
    }

    /// Returns the layout.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the prompter.
    #[must_use]
    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Consumes the workbench and returns the prompter.
    #[must_use]
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Picks the field mapper for a field, asking when there are several.
    ///
    /// # Errors
    /// Returns `LookupError::FieldMapperNotImplemented` if there is none.
    pub fn select_field_mapper(
        &mut self,
        field: FieldNumber,
        conversion: Conversion,
    ) -> Result<FieldMapper> {
        let mut candidates = Locator::new(&self.layout).field_mappers(field, conversion)?;
        if candidates.len() == 1 {
            return Ok(candidates.remove(0));
        }

        let options: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        let question = format!(
            "Found different options for the field mappers for field {field}, please select which one to use:"
        );
        let index = self.prompter.choose(&question, &options)?;
        Ok(candidates.swap_remove(index))
    }

    /// Returns the message mapper path, generating the class if it is missing.
    ///
    /// # Errors
    /// Returns `LookupError::NoLayoutFor` if the kind has no directory, or a
    /// template or I/O error if generation fails.
    pub fn locate_message_mapper(
        &mut self,
        function: &MessageFunction,
        description: &str,
        kind: MapperKind,
    ) -> Result<PathBuf> {
        let path = Locator::new(&self.layout).message_mapper_path(kind, description)?;
        if path.exists() {
            debug!(path = %path.display(), "found message mapper");
            return Ok(path);
        }

        self.prompter.report(
            Tone::Info,
            &format!("Message mapper {} does not exist, generating it.", path.display()),
        )?;
        self.generate_mapper_class(description, function, kind)?;
        Ok(path)
    }

    /// Reports whether a message mapper chains a field accepted by the selector.
    ///
    /// # Errors
    /// Returns `MapError::Io` if the file cannot be read.
    pub fn analyze_message_mapper(&self, path: &Path, selector: FieldSelector) -> Result<bool> {
        let content = fs::read_to_string(path)?;
        let found = is_field_chained(&content, selector);
        debug!(path = %path.display(), %selector, found, "analyzed message mapper");
        Ok(found)
    }

    /// Returns the fields a message mapper chains, in file order.
    ///
    /// # Errors
    /// Returns `MapError::Io` if the file cannot be read.
    pub fn chained_fields(&self, path: &Path) -> Result<Vec<FieldNumber>> {
        let content = fs::read_to_string(path)?;
        Ok(chained_fields(&content)
            .into_iter()
            .map(|call| call.number)
            .collect())
    }

    /// Returns the factory call of a field mapper, e.g. `currency()`.
    ///
    /// # Errors
    /// Returns `LookupError::FactoryMethodNotFound` if the source has no
    /// public static method returning the class.
    pub fn factory_call(&self, mapper: &FieldMapper) -> Result<String> {
        let source = fs::read_to_string(&mapper.path)?;
        find_factory_call(mapper.class_name(), &source).ok_or_else(|| {
            LookupError::FactoryMethodNotFound {
                class_name: mapper.class_name().to_string(),
            }
            .into()
        })
    }

    /// Chains a field mapper into a message mapper and writes the file.
    ///
    /// # Returns
    /// The field mapper that was chained.
    ///
    /// # Errors
    /// Returns a lookup error if no field mapper or factory method is found,
    /// or a patch error if the builder chain cannot be edited. The file is
    /// left untouched on error.
    pub fn modify_message_mapper(
        &mut self,
        path: &Path,
        field: FieldNumber,
        conversion: Conversion,
    ) -> Result<FieldMapper> {
        let mapper = self.select_field_mapper(field, conversion)?;
        let factory = self.factory_call(&mapper)?;
        let insertion = FieldInsertion::for_mapper(
            &mapper.file_name,
            &factory,
            self.layout.field_mapper_package(conversion),
        )?;

        let content = fs::read_to_string(path)?;
        let patched = insert_field(&content, &insertion, &self.chain_locator)?;
        replace_file(path, &patched)?;
        info!(path = %path.display(), call = %insertion.call, "chained field mapper");
        Ok(mapper)
    }

    /// Adds an indicator mapping to the helper class unless it exists.
    ///
    /// # Returns
    /// `true` if the helper file was changed.
    ///
    /// # Errors
    /// Returns `PatchError::MappingBlockNotFound` if the helper has no table,
    /// or `MapError::Io` on file errors.
    pub fn update_message_type_indicator(
        &mut self,
        function: &MessageFunction,
        indicator: &MessageTypeIndicator,
    ) -> Result<bool> {
        let path = self.layout.mti_helper_path();
        let content = fs::read_to_string(&path)?;
        match patch_mti_table(&content, indicator, function)? {
            MtiPatch::Unchanged => {
                self.prompter.report(
                    Tone::Success,
                    &format!(
                        "Mapping for {function} ({indicator}) already exists. No changes needed."
                    ),
                )?;
                Ok(false)
            }
            MtiPatch::Inserted { line, content } => {
                replace_file(&path, &content)?;
                info!(path = %path.display(), line, %indicator, %function, "added indicator mapping");
                self.prompter.report(
                    Tone::Success,
                    &format!("Mapping for {function} ({indicator}) added successfully."),
                )?;
                Ok(true)
            }
        }
    }

    /// Generates the message mapper class for one kind.
    ///
    /// # Errors
    /// Returns `LookupError::NoLayoutFor` if the kind has no directory, or a
    /// template or I/O error.
    pub fn generate_mapper_class(
        &mut self,
        description: &str,
        function: &MessageFunction,
        kind: MapperKind,
    ) -> Result<Generated> {
        let dir = self.layout.message_mapper_dir(kind)?;
        let generated = self.generator.generate(&dir, kind, description, function)?;
        let (tone, message) = match &generated {
            Generated::Written(path) => (Tone::Success, format!("Generated {}", path.display())),
            Generated::Skipped(path) => (
                Tone::Failure,
                format!(
                    "File {} already exists. Skipping generation to avoid overwriting.",
                    path.display()
                ),
            ),
        };
        self.prompter.report(tone, &message)?;
        Ok(generated)
    }

    /// Generates the classes for a comma separated list of menu keys.
    ///
    /// Blank entries are ignored; unknown keys are skipped with a warning.
    ///
    /// # Errors
    /// Returns the first generation error.
    pub fn handle_generation(
        &mut self,
        description: &str,
        function: &MessageFunction,
        keys: &str,
    ) -> Result<Vec<Generated>> {
        let mut generated = Vec::new();
        for key in keys.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            match MapperKind::from_menu_key(key) {
                Some(kind) => generated.push(self.generate_mapper_class(description, function, kind)?),
                None => {
                    warn!(key, "unknown mapper kind, skipping");
                    self.prompter
                        .report(Tone::Failure, &format!("Invalid choice: {key}"))?;
                }
            }
        }
        Ok(generated)
    }

    /// Runs the field flow.
    ///
    /// # Errors
    /// Returns any lookup, patch, template or I/O error met on the way.
    pub fn implement_field(&mut self, request: FieldRequest) -> Result<FieldOutcome> {
        let conversion = match request.conversion {
            Some(conversion) => conversion,
            None => self.ask_conversion()?,
        };
        let direction = match request.direction {
            Some(direction) => direction,
            None => self.ask_direction()?,
        };
        let field = match request.field {
            Some(field) => field,
            None => FieldNumber::new(
                self.prompter
                    .ask_number("Enter the field number to implement: ")?,
            ),
        };

        let kind = MapperKind::new(direction, conversion);
        let path = self.locate_message_mapper(&request.function, &request.description, kind)?;

        if self.analyze_message_mapper(&path, FieldSelector::Number(field))? {
            self.prompter.report(
                Tone::Success,
                &format!("Field {field} is already implemented in the message mapper."),
            )?;
            return Ok(FieldOutcome::AlreadyImplemented { path });
        }

        self.prompter.report(
            Tone::Failure,
            &format!("Field {field} is not implemented in the message mapper."),
        )?;
        let mapper = self.modify_message_mapper(&path, field, conversion)?;
        self.prompter.report(
            Tone::Success,
            &format!("Field {field} has been successfully implemented in the message mapper."),
        )?;
        Ok(FieldOutcome::Implemented { path, mapper })
    }

    /// Runs the scaffold flow.
    ///
    /// # Errors
    /// Returns any sheet, patch, template or I/O error met on the way.
    pub fn scaffold(&mut self, request: ScaffoldRequest) -> Result<ScaffoldReport> {
        let values = match request.source {
            VariableSource::Sheet(path) => self.extractor.extract(&Grid::load(path)?)?,
            VariableSource::Explicit(values) => values,
        };
        self.prompter.report(
            Tone::Info,
            &format!(
                "Message function: {}, message type indicator: {}",
                values.message_function, values.indicator
            ),
        )?;

        let indicator_added =
            self.update_message_type_indicator(&values.message_function, &values.indicator)?;

        let keys = match request.kinds {
            Some(keys) => keys,
            None => self.ask_kinds()?,
        };
        let generated =
            self.handle_generation(&request.description, &values.message_function, &keys)?;

        Ok(ScaffoldReport {
            values,
            indicator_added,
            generated,
        })
    }

    fn ask_conversion(&mut self) -> Result<Conversion> {
        let options = [Conversion::UmmToIso, Conversion::IsoToUmm];
        let labels: Vec<String> = options.iter().map(|c| c.label().to_string()).collect();
        let index = self
            .prompter
            .choose("Which direction do you want to implement?", &labels)?;
        Ok(options[index])
    }

    fn ask_direction(&mut self) -> Result<Direction> {
        let labels: Vec<String> = Direction::ALL
            .iter()
            .map(|d| d.as_str().to_string())
            .collect();
        let index = self
            .prompter
            .choose("Enter the number of the direction to use:", &labels)?;
        Ok(Direction::ALL[index])
    }

    fn ask_kinds(&mut self) -> Result<String> {
        self.prompter
            .report(Tone::Question, "Which message mappers do you want to generate?")?;
        for (i, kind) in MapperKind::MENU.iter().enumerate() {
            self.prompter
                .report(Tone::Question, &format!("{}: {kind}", i + 1))?;
        }
        self.prompter
            .ask_line("Enter the directions needed (e.g., 1,3): ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WorkbenchBuilder;
    use crate::prompt::ConsolePrompter;
    use mapsmith_core::error::{PatchError, SheetError};
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestPrompter = ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>;

    const HELPER: &str = "package x;\n\
        \n\
        public final class MessageTypeIndicatorHelper {\n\
        \x20   static {\n\
        \x20       map(\"1200\", MessageFunction.FREQ);\n\
        \x20       map(\"1420\", MessageFunction.RVRA);\n\
        \x20   }\n\
        }\n";

    fn workbench(tmp: &TempDir, input: &str) -> Workbench<TestPrompter> {
        let layout = LayoutConfig::default().with_root(tmp.path());
        fs::create_dir_all(layout.mti_helper_path().parent().unwrap()).unwrap();
        fs::write(layout.mti_helper_path(), HELPER).unwrap();
        for conversion in [Conversion::UmmToIso, Conversion::IsoToUmm] {
            fs::create_dir_all(layout.field_mapper_dir(conversion)).unwrap();
        }
        WorkbenchBuilder::new()
            .with_layout(layout)
            .with_prompter(ConsolePrompter::new(
                Cursor::new(input.as_bytes().to_vec()),
                Vec::new(),
            ))
            .build()
            .unwrap()
    }

    fn output(bench: Workbench<TestPrompter>) -> String {
        let raw = String::from_utf8(bench.into_prompter().into_output()).unwrap();
        console::strip_ansi_codes(&raw).into_owned()
    }

    fn add_field_mapper(bench: &Workbench<TestPrompter>, conversion: Conversion, file: &str, method: &str) {
        let class = file.trim_end_matches(".java");
        let source = format!(
            "package p;\n\npublic class {class} {{\n    public static {class} {method}() {{\n        return new {class}();\n    }}\n}}\n"
        );
        fs::write(bench.layout().field_mapper_dir(conversion).join(file), source).unwrap();
    }

    fn rvra() -> MessageFunction {
        MessageFunction::new("RVRA").unwrap()
    }

    fn request() -> FieldRequest {
        FieldRequest::new(rvra(), "Reversal Advice")
            .with_direction(Direction::Outbound)
            .with_conversion(Conversion::UmmToIso)
    }

    #[test]
    fn test_field_flow_generates_and_chains() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        add_field_mapper(
            &bench,
            Conversion::UmmToIso,
            "DE49_TransactionCurrencyCodeMapper.java",
            "transactionCurrencyCode",
        );

        let outcome = bench
            .implement_field(request().with_field(FieldNumber::new(49)))
            .unwrap();
        let FieldOutcome::Implemented { path, mapper } = outcome else {
            panic!("expected an implementation");
        };
        assert_eq!(mapper.file_name, "DE49_TransactionCurrencyCodeMapper.java");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(
            ".de49_TransactionCurrencyCodeMapper(transactionCurrencyCode())"
        ));
        assert!(content.contains(
            "import static eu.nets.mapping.components.auth.trg.umm_to_iso8583.field_mappers.DE49_TransactionCurrencyCodeMapper.DE49_TransactionCurrencyCode;"
        ));
        assert_eq!(bench.chained_fields(&path).unwrap(), vec![FieldNumber::new(49)]);
        assert!(output(bench).contains("Field 49 has been successfully implemented"));
    }

    #[test]
    fn test_field_flow_reports_existing_field() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        add_field_mapper(&bench, Conversion::UmmToIso, "DE2_PanMapper.java", "pan");

        let first = bench
            .implement_field(request().with_field(FieldNumber::new(2)))
            .unwrap();
        let before = fs::read_to_string(first.path()).unwrap();

        let second = bench
            .implement_field(request().with_field(FieldNumber::new(2)))
            .unwrap();
        assert!(matches!(second, FieldOutcome::AlreadyImplemented { .. }));
        assert_eq!(fs::read_to_string(second.path()).unwrap(), before);
        assert!(output(bench).contains("Field 2 is already implemented"));
    }

    #[test]
    fn test_field_flow_prompts_for_missing_values() {
        let tmp = tempfile::tempdir().unwrap();
        // conversion: ISO to UMM, direction: inbound, field 3, then candidate 2
        let mut bench = workbench(&tmp, "2\n1\n3\n2\n");
        add_field_mapper(&bench, Conversion::IsoToUmm, "DE3_ProcessingCodeMapper.java", "processingCode");
        add_field_mapper(&bench, Conversion::IsoToUmm, "DE3_AlternativeCodeMapper.java", "alternativeCode");

        let outcome = bench
            .implement_field(FieldRequest::new(rvra(), "Reversal Advice"))
            .unwrap();
        let FieldOutcome::Implemented { path, mapper } = outcome else {
            panic!("expected an implementation");
        };
        // Candidates are listed by file name.
        assert_eq!(mapper.file_name, "DE3_ProcessingCodeMapper.java");
        assert!(path.ends_with("ReversalAdviceMapper.java"));
        assert!(path.to_string_lossy().contains("iso8583_to_umm"));

        let out = output(bench);
        assert!(out.contains("1. UMM to ISO"));
        assert!(out.contains("1. DE3_AlternativeCodeMapper.java"));
    }

    #[test]
    fn test_field_flow_without_field_mapper() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        let err = bench
            .implement_field(request().with_field(FieldNumber::new(55)))
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::Lookup(LookupError::FieldMapperNotImplemented { field: 55 })
        ));
    }

    #[test]
    fn test_missing_factory_method_leaves_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        fs::write(
            bench
                .layout()
                .field_mapper_dir(Conversion::UmmToIso)
                .join("DE4_AmountMapper.java"),
            "public class DE4_AmountMapper {}\n",
        )
        .unwrap();

        let kind = MapperKind::new(Direction::Outbound, Conversion::UmmToIso);
        let path = bench
            .locate_message_mapper(&rvra(), "Reversal Advice", kind)
            .unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = bench
            .modify_message_mapper(&path, FieldNumber::new(4), Conversion::UmmToIso)
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::Lookup(LookupError::FactoryMethodNotFound { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_broken_message_mapper_is_not_written() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        add_field_mapper(&bench, Conversion::UmmToIso, "DE2_PanMapper.java", "pan");
        let kind = MapperKind::new(Direction::Outbound, Conversion::UmmToIso);
        let path = Locator::new(bench.layout())
            .message_mapper_path(kind, "Reversal Advice")
            .unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "public class ReversalAdviceMapper {}\n").unwrap();

        let err = bench
            .modify_message_mapper(&path, FieldNumber::new(2), Conversion::UmmToIso)
            .unwrap_err();
        assert!(matches!(err, MapError::Patch(PatchError::AnchorNotFound { .. })));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "public class ReversalAdviceMapper {}\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_modify_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        add_field_mapper(&bench, Conversion::UmmToIso, "DE2_PanMapper.java", "pan");
        let kind = MapperKind::new(Direction::Outbound, Conversion::UmmToIso);
        let path = bench
            .locate_message_mapper(&rvra(), "Reversal Advice", kind)
            .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        bench
            .modify_message_mapper(&path, FieldNumber::new(2), Conversion::UmmToIso)
            .unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_conflicting_indicator_leaves_helper() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        let err = bench
            .update_message_type_indicator(
                &MessageFunction::new("AUTQ").unwrap(),
                &"1420".parse().unwrap(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::Patch(PatchError::IndicatorAlreadyMapped { ref function, .. }) if function == "RVRA"
        ));
        assert_eq!(
            fs::read_to_string(bench.layout().mti_helper_path()).unwrap(),
            HELPER
        );
    }

    #[test]
    fn test_scaffold_explicit_values() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        let request = ScaffoldRequest {
            description: "Authorization Request".to_string(),
            source: VariableSource::Explicit(SheetValues {
                message_function: MessageFunction::new("AUTQ").unwrap(),
                indicator: "1100".parse().unwrap(),
            }),
            kinds: Some("1, ,3,7".to_string()),
        };

        let report = bench.scaffold(request).unwrap();
        assert!(report.indicator_added);
        assert_eq!(report.generated.len(), 2);
        assert!(report
            .generated
            .iter()
            .all(|g| matches!(g, Generated::Written(_))));

        let helper = fs::read_to_string(bench.layout().mti_helper_path()).unwrap();
        let lines: Vec<&str> = helper.lines().collect();
        assert_eq!(lines[4], "        map(\"1100\", MessageFunction.AUTQ);");
        let out = output(bench);
        assert!(out.contains("Mapping for AUTQ (1100) added successfully."));
        assert!(out.contains("Invalid choice: 7"));
    }

    #[test]
    fn test_scaffold_from_sheet_and_prompted_kinds() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = tmp.path().join("mapping.csv");
        fs::write(
            &sheet,
            "Field,ISO8583,ISO20022\n,,\n,,\nFunction,,\"MessageFunction, value RVRA\"\nHeader,Message Type Identifier (MTI),,,,,1420\n",
        )
        .unwrap();
        let mut bench = workbench(&tmp, "2\n");

        let report = bench
            .scaffold(ScaffoldRequest {
                description: "Reversal Advice".to_string(),
                source: VariableSource::Sheet(sheet),
                kinds: None,
            })
            .unwrap();
        assert!(!report.indicator_added);
        assert_eq!(report.values.indicator.as_str(), "1420");
        assert_eq!(report.generated.len(), 1);
        assert!(report.generated[0]
            .path()
            .to_string_lossy()
            .contains("umm_to_iso8583"));

        // Existing mapping leaves the helper byte-for-byte untouched.
        let helper = fs::read_to_string(bench.layout().mti_helper_path()).unwrap();
        assert_eq!(helper, HELPER);
        assert!(
            output(bench).contains("Mapping for RVRA (1420) already exists. No changes needed.")
        );
    }

    #[test]
    fn test_scaffold_bad_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = tmp.path().join("mapping.csv");
        fs::write(&sheet, "Field,ISO8583\n").unwrap();
        let mut bench = workbench(&tmp, "");

        let err = bench
            .scaffold(ScaffoldRequest {
                description: "Reversal Advice".to_string(),
                source: VariableSource::Sheet(sheet),
                kinds: Some("1".to_string()),
            })
            .unwrap_err();
        assert!(matches!(err, MapError::Sheet(SheetError::HeaderNotFound(_))));
    }

    #[test]
    fn test_generation_skips_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut bench = workbench(&tmp, "");
        let first = bench
            .handle_generation("Reversal Advice", &rvra(), "4")
            .unwrap();
        let second = bench
            .handle_generation("Reversal Advice", &rvra(), "4")
            .unwrap();
        assert!(matches!(first[0], Generated::Written(_)));
        assert!(matches!(second[0], Generated::Skipped(_)));
    }
}
