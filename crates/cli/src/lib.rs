mod compose;
mod resolve;
mod scopes;

use clap::{Args, Parser, Subcommand};
use layermap_api::ResolutionTable;
use layermap_core::loader::{self, LoaderConfig};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "layermap",
    version,
    about = "Compose layered specifier-resolution maps",
    long_about = "Layermap folds an ordered list of import-map style tables into one. \
                  Every later map takes priority over the earlier ones, and its targets are \
                  first resolved through the maps beneath it."
)]
pub struct Cli {
    /// Only log to the log file, not to stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Reject invalid entries instead of dropping them with a warning
    #[arg(long)]
    pub strict: bool,
}

impl LoadArgs {
    pub fn config(&self) -> LoaderConfig {
        LoaderConfig {
            strict: self.strict,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose maps and print the resulting map as JSON
    #[command(
        long_about = "Loads every map in order and folds them left to right. The first map has \
                            the lowest precedence."
    )]
    Compose {
        /// Maps to compose, lowest precedence first
        #[arg(value_name = "MAP", required = true)]
        maps: Vec<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the result on a single line
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        load: LoadArgs,
    },
    /// Resolve one specifier against the composed maps
    Resolve {
        /// Maps to compose, lowest precedence first
        #[arg(short, long = "map", value_name = "MAP", required = true)]
        maps: Vec<PathBuf>,

        /// Location of the requesting module, matched against scope prefixes
        #[arg(short, long, value_name = "SCOPE")]
        referrer: Option<String>,

        /// Specifier to resolve
        #[arg(value_name = "SPECIFIER")]
        specifier: String,

        #[command(flatten)]
        load: LoadArgs,
    },
    /// List the scopes of the composed maps, most specific first
    Scopes {
        /// Maps to compose, lowest precedence first
        #[arg(value_name = "MAP", required = true)]
        maps: Vec<PathBuf>,

        #[command(flatten)]
        load: LoadArgs,
    },
}

/// Loads and folds `paths` in order.
pub fn load_and_compose(
    paths: &[PathBuf],
    config: &LoaderConfig,
) -> Result<ResolutionTable, Box<dyn std::error::Error>> {
    let tables = paths
        .iter()
        .map(|path| load_one(path, config))
        .collect::<Result<Vec<_>, _>>()?;
    info!("Composing {} map(s)", tables.len());
    Ok(layermap_core::compose_all(tables)?)
}

fn load_one(
    path: &Path,
    config: &LoaderConfig,
) -> Result<ResolutionTable, Box<dyn std::error::Error>> {
    loader::load_path(path, config).map_err(|e| format!("{}: {}", path.display(), e).into())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = layermap_core::logging::init_logging("cli", !cli.quiet);

    match cli.command {
        Commands::Compose {
            maps,
            output,
            compact,
            load,
        } => compose::run(&maps, output, compact, &load.config()),
        Commands::Resolve {
            maps,
            referrer,
            specifier,
            load,
        } => resolve::run(&maps, referrer.as_deref(), &specifier, &load.config()),
        Commands::Scopes { maps, load } => scopes::run(&maps, &load.config()),
    }
}
