//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diaro")]
#[command(about = "Diary kept in plain files and an optional database", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Database file for the relational backend (default: .diaro/diary.db)
        #[arg(long, value_name = "PATH")]
        database: Option<PathBuf>,

        /// Keep entries in files only
        #[arg(long, conflicts_with = "database")]
        no_database: bool,
    },

    /// Write (or overwrite) the entry for a date
    Write {
        /// Date (YYYY-MM-DD, today, yesterday, tomorrow)
        #[arg(default_value = "today")]
        date: String,

        /// Entry text; read from stdin when omitted
        #[arg(short, long)]
        message: Option<String>,

        /// Replace an existing entry
        #[arg(short, long)]
        force: bool,
    },

    /// Print the entry for a date
    Show {
        /// Date (YYYY-MM-DD, today, yesterday, tomorrow)
        date: String,
    },

    /// Delete the entry for a date from every backend
    Delete {
        /// Date (YYYY-MM-DD, today, yesterday, tomorrow)
        date: String,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List entries per backend, newest first
    List,

    /// Find entries containing a word
    Search {
        /// Text to look for
        term: String,
    },

    /// Show which backends are in use
    Status,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
