//! CLI Tooling
//!
//! Command-line interface for scanning a folder into an asset tree and
//! printing it as a tree, a table, or summary counts.

use crate::config::{BrowserConfig, ConfigLoader, ScanConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::render::{
    asset_rows, format_asset_table, format_stats_text, format_tree_text, to_json, StatsReport,
};
use crate::tree::{RootNode, ScanProgress, TreeBuilder};
use crate::vfs::{LocalEntry, VfsEntry};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Asset Browser CLI - browse sample folders as categories and assets
#[derive(Parser, Debug)]
#[command(name = "asset-browser")]
#[command(about = "Scan a folder tree into sorted categories and assets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root folder to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Scan options shared by the scanning commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Asset extension in priority order; repeat to add more (replaces configured list)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Treat every file with an extension as an asset
    #[arg(long, conflicts_with = "extensions")]
    pub any_extension: bool,

    /// Include dot-prefixed files and folders
    #[arg(long)]
    pub include_hidden: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the category/asset tree
    Tree {
        #[command(flatten)]
        scan: ScanArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Color category names
        #[arg(long)]
        color: bool,
    },
    /// List every asset with its category path
    List {
        #[command(flatten)]
        scan: ScanArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show category and asset counts
    Stats {
        #[command(flatten)]
        scan: ScanArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Style the section heading
        #[arg(long)]
        color: bool,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tree { .. } => "tree",
        Commands::List { .. } => "list",
        Commands::Stats { .. } => "stats",
        Commands::Config { .. } => "config.show",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::InvalidArgument(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// CLI context: scan root plus loaded configuration.
pub struct CliContext {
    root: PathBuf,
    config: BrowserConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration for `root`.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        if !root.exists() {
            return Err(ApiError::PathNotFound(root.display().to_string()));
        }
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };
        Ok(Self { root, config })
    }

    /// Create a context with an already-built configuration.
    pub fn with_config(root: PathBuf, config: BrowserConfig) -> Self {
        Self { root, config }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Configured scan settings with command-line overrides applied.
    pub fn scan_config(&self, args: &ScanArgs) -> ScanConfig {
        let mut scan = self.config.scan.clone();
        if !args.extensions.is_empty() {
            scan.extensions = args.extensions.clone();
            scan.any_extension = false;
        }
        if args.any_extension {
            scan.any_extension = true;
        }
        if args.include_hidden {
            scan.include_hidden = true;
        }
        scan
    }

    /// Scan the root folder from disk.
    pub fn scan(&self, args: &ScanArgs) -> Result<RootNode, ApiError> {
        let scan = self.scan_config(args);
        let entry = LocalEntry::open(&self.root)
            .map_err(|e| ApiError::PathNotFound(format!("{}: {}", self.root.display(), e)))?
            .include_hidden(scan.include_hidden);
        if !entry.is_folder() {
            return Err(ApiError::InvalidArgument(format!(
                "Scan root is not a folder: {}",
                entry.path()
            )));
        }

        let mut progress = ScanProgress::new();
        let root = TreeBuilder::new(entry, scan.node_factory()).build_with_callback(&mut progress)?;
        Ok(root)
    }

    /// Execute a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Tree {
                scan,
                format,
                color,
            } => {
                let format = parse_format(format)?;
                let root = self.scan(scan)?;
                match format {
                    OutputFormat::Text => Ok(format_tree_text(&root, *color)),
                    OutputFormat::Json => to_json(&root),
                }
            }
            Commands::List { scan, format } => {
                let format = parse_format(format)?;
                let root = self.scan(scan)?;
                let rows = asset_rows(&root);
                match format {
                    OutputFormat::Text => Ok(format_asset_table(&rows)),
                    OutputFormat::Json => to_json(&rows),
                }
            }
            Commands::Stats {
                scan,
                format,
                color,
            } => {
                let format = parse_format(format)?;
                let root = self.scan(scan)?;
                let report = StatsReport {
                    root: self.root.display().to_string(),
                    stats: root.stats(),
                };
                match format {
                    OutputFormat::Text => Ok(format_stats_text(&report, *color)),
                    OutputFormat::Json => to_json(&report),
                }
            }
            Commands::Config {
                command: ConfigCommands::Show,
            } => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::Serialization(e.to_string())),
        }
    }
}
