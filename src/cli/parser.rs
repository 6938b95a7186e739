use crate::models::entry::RawEntry;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorktime
/// CLI application to compute net working time under statutory break rules
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute net working time with statutory breaks and the optimal end of your day",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute net work, deductions, saldo and the optimal end of the day
    Calc {
        /// Attendance entries: HH:MM-HH:MM or HH:MM- (still working).
        /// Entries starting with '-' (e.g. -HH:MM) must follow `--`.
        #[arg(value_name = "ENTRY")]
        entries: Vec<RawEntry>,

        /// Read entries from a YAML or JSON list of {start, end}
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Target net work in hours (default: target_hours from config)
        #[arg(long, short = 't', value_name = "HOURS")]
        target: Option<String>,

        /// Current time HH:MM used to close open entries (default: local clock)
        #[arg(long, value_name = "HH:MM")]
        now: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
