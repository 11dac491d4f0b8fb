// tradelink CLI - headless lead pipeline operations

mod exit_codes;
mod hub;
mod leads;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use tradelink_model::{Scope, TradeRole};

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "tlink")]
#[command(about = "Trade-lead ingestion and reconciliation (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a spreadsheet of leads into the hub
    #[command(after_help = "\
Examples:
  tlink import leads.xlsx
  tlink import export.csv --json
  tlink import leads.xlsx --keep-existing
  TRADELINK_API_BASE=http://localhost:4800 tlink import leads.xlsx")]
    Import {
        /// Input file (.xlsx, .xls, or delimited text)
        file: PathBuf,

        /// Merge into the hub's existing records instead of replacing them
        #[arg(long)]
        keep_existing: bool,

        /// Print the import summary as JSON
        #[arg(long)]
        json: bool,

        /// Hub API base URL (default: TRADELINK_API_BASE or saved config)
        #[arg(long)]
        api_base: Option<String>,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List the working set, filtered by category tab and search text
    #[command(after_help = "\
Examples:
  tlink list
  tlink list --scope local --role seller
  tlink list --search coffee --json")]
    List {
        /// Keep only one scope partition (category tab)
        #[arg(long)]
        scope: Option<ScopeArg>,

        /// Keep only one market role
        #[arg(long)]
        role: Option<RoleArg>,

        /// Case-insensitive substring match across all columns
        #[arg(long)]
        search: Option<String>,

        /// Print full records as JSON
        #[arg(long)]
        json: bool,

        /// Hub API base URL (default: TRADELINK_API_BASE or saved config)
        #[arg(long)]
        api_base: Option<String>,

        /// Suppress warnings on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Export the working set as canonical 22-column CSV
    #[command(after_help = "\
Examples:
  tlink export --out leads.csv
  tlink export --scope international | head -5")]
    Export {
        /// Output CSV file path (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Keep only one scope partition
        #[arg(long)]
        scope: Option<ScopeArg>,

        /// Keep only one market role
        #[arg(long)]
        role: Option<RoleArg>,

        /// Case-insensitive substring match across all columns
        #[arg(long)]
        search: Option<String>,

        /// Hub API base URL (default: TRADELINK_API_BASE or saved config)
        #[arg(long)]
        api_base: Option<String>,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Add a single lead from a JSON record
    #[command(after_help = "\
Examples:
  tlink add --from lead.json
  echo '{\"Product\": \"Sesame\", \"Role\": \"Buyer\"}' | tlink add")]
    Add {
        /// JSON file with canonical column names (default: stdin)
        #[arg(long)]
        from: Option<PathBuf>,

        /// Hub API base URL (default: TRADELINK_API_BASE or saved config)
        #[arg(long)]
        api_base: Option<String>,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Replace a lead by id with a JSON record
    #[command(after_help = "\
Examples:
  tlink update 42 --from lead.json
  tlink update local:sample-01 --from lead.json")]
    Update {
        /// Record id (`local:<key>` for never-persisted records)
        id: String,

        /// JSON file with canonical column names (default: stdin)
        #[arg(long)]
        from: Option<PathBuf>,

        /// Hub API base URL (default: TRADELINK_API_BASE or saved config)
        #[arg(long)]
        api_base: Option<String>,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Delete a lead by id
    #[command(after_help = "\
Examples:
  tlink delete 42
  tlink delete local:sample-01")]
    Delete {
        /// Record id (`local:<key>` for never-persisted records)
        id: String,

        /// Hub API base URL (default: TRADELINK_API_BASE or saved config)
        #[arg(long)]
        api_base: Option<String>,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Manage the saved hub endpoint
    Hub {
        #[command(subcommand)]
        command: hub::HubCommands,
    },
}

/// Scope partition as a CLI flag value.
#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Local,
    International,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Scope {
        match arg {
            ScopeArg::Local => Scope::Local,
            ScopeArg::International => Scope::International,
        }
    }
}

/// Market role as a CLI flag value.
#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Buyer,
    Seller,
}

impl From<RoleArg> for TradeRole {
    fn from(arg: RoleArg) -> TradeRole {
        match arg {
            RoleArg::Buyer => TradeRole::Buyer,
            RoleArg::Seller => TradeRole::Seller,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import {
            file,
            keep_existing,
            json,
            api_base,
            quiet,
        } => leads::cmd_import(file, keep_existing, json, api_base, quiet),
        Commands::List {
            scope,
            role,
            search,
            json,
            api_base,
            quiet,
        } => leads::cmd_list(
            scope.map(Into::into),
            role.map(Into::into),
            search,
            json,
            api_base,
            quiet,
        ),
        Commands::Export {
            out,
            scope,
            role,
            search,
            api_base,
            quiet,
        } => leads::cmd_export(
            out,
            scope.map(Into::into),
            role.map(Into::into),
            search,
            api_base,
            quiet,
        ),
        Commands::Add {
            from,
            api_base,
            quiet,
        } => leads::cmd_add(from, api_base, quiet),
        Commands::Update {
            id,
            from,
            api_base,
            quiet,
        } => leads::cmd_update(id, from, api_base, quiet),
        Commands::Delete {
            id,
            api_base,
            quiet,
        } => leads::cmd_delete(id, api_base, quiet),
        Commands::Hub { command } => hub::cmd_hub(command),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError {
            code,
            message,
            hint,
        }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: exit_codes::EXIT_ERROR,
            message: msg.into(),
            hint: None,
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
