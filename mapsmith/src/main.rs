/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Command-line interface for mapsmith.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use mapsmith::prelude::*;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Mapsmith - chain field mappers and scaffold message mappers.
#[derive(Parser, Debug)]
#[command(name = "mapsmith")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// Layout configuration file (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Checkout root, overriding the configured one.
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Chain a field mapper into a message mapper.
    Field {
        /// Message function code, e.g. RVRA.
        #[arg(short, long)]
        function: MessageFunction,
        /// Message description, e.g. "Reversal Advice".
        #[arg(short, long)]
        description: String,
        /// Message direction (inbound or outbound). Asked for when absent.
        #[arg(long)]
        direction: Option<Direction>,
        /// Conversion (umm_to_iso or iso_to_umm). Asked for when absent.
        #[arg(long)]
        conversion: Option<Conversion>,
        /// Field number. Asked for when absent.
        #[arg(long)]
        field: Option<FieldNumber>,
    },
    /// Register a message type indicator and generate message mappers.
    Scaffold {
        /// Message description, e.g. "Reversal Advice".
        #[arg(short, long)]
        description: String,
        /// Mapping spreadsheet to read the function and indicator from.
        #[arg(long, conflicts_with_all = ["function", "indicator"])]
        sheet: Option<PathBuf>,
        /// Message function code.
        #[arg(short, long, requires = "indicator")]
        function: Option<MessageFunction>,
        /// Message type indicator, e.g. 1420.
        #[arg(short, long, requires = "function")]
        indicator: Option<MessageTypeIndicator>,
        /// Comma separated kinds to generate (1-4). Asked for when absent.
        #[arg(short, long)]
        kinds: Option<String>,
    },
    /// List the fields a message mapper chains.
    Status {
        /// Message description, e.g. "Reversal Advice".
        #[arg(short, long)]
        description: String,
        /// Message direction (inbound or outbound).
        #[arg(long)]
        direction: Direction,
        /// Conversion (umm_to_iso or iso_to_umm).
        #[arg(long)]
        conversion: Conversion,
    },
}

/// Initializes logging on stderr so prompts on stdout stay readable.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init();
}

fn load_layout(args: &Args) -> Result<LayoutConfig> {
    let layout = match &args.config {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("failed to load layout from {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    Ok(match &args.root {
        Some(root) => layout.with_root(root),
        None => layout,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let layout = load_layout(&args)?;
    tracing::debug!(root = %layout.root.display(), "using layout");
    let mut workbench = WorkbenchBuilder::new()
        .with_layout(layout)
        .with_prompter(ConsolePrompter::stdio())
        .build()
        .context("failed to set up the workbench")?;

    match args.command {
        Command::Field {
            function,
            description,
            direction,
            conversion,
            field,
        } => {
            let request = FieldRequest {
                function,
                description,
                direction,
                conversion,
                field,
            };
            workbench
                .implement_field(request)
                .context("field flow failed")?;
            println!("{}", style("Process completed.").green());
        }
        Command::Scaffold {
            description,
            sheet,
            function,
            indicator,
            kinds,
        } => {
            let source = match (sheet, function, indicator) {
                (Some(path), _, _) => VariableSource::Sheet(path),
                (None, Some(message_function), Some(indicator)) => {
                    VariableSource::Explicit(SheetValues {
                        message_function,
                        indicator,
                    })
                }
                _ => anyhow::bail!("either --sheet or both --function and --indicator are required"),
            };
            let report = workbench
                .scaffold(ScaffoldRequest {
                    description,
                    source,
                    kinds,
                })
                .context("scaffold flow failed")?;
            println!(
                "{}",
                style(format!(
                    "Process completed: {} message mapper(s) handled.",
                    report.generated.len()
                ))
                .green()
            );
        }
        Command::Status {
            description,
            direction,
            conversion,
        } => {
            let kind = MapperKind::new(direction, conversion);
            let path = Locator::new(workbench.layout()).message_mapper_path(kind, &description)?;
            let fields = workbench
                .chained_fields(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            println!("{}", path.display());
            if fields.is_empty() {
                println!("{}", style("No fields chained.").yellow());
            } else {
                let list: Vec<String> = fields.iter().map(ToString::to_string).collect();
                println!("Chained fields: {}", list.join(", "));
            }
        }
    }
    Ok(())
}
