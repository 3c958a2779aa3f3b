use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for StudyMetrics
/// CLI application to track study time with SQLite
#[derive(Parser)]
#[command(
    name = "studymetrics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track study sessions, goals and statistics using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Run an interactive timer session (start/stop/reset from stdin)
    Track {
        /// Study subject (General, Math, Science, History, Language)
        #[arg(long, help = "Study subject (default: configured default subject)")]
        subject: Option<String>,

        /// Location note stored with the session
        #[arg(long, help = "Location stored with saved sessions")]
        location: Option<String>,
    },

    /// Log a completed study session directly
    Add {
        /// Duration spec: seconds, or combinations like 45m, 1h30m, 90s
        duration: String,

        #[arg(long, help = "Study subject (default: configured default subject)")]
        subject: Option<String>,

        #[arg(long, help = "Location stored with the session")]
        location: Option<String>,

        #[arg(
            long,
            help = "Weather condition to store (skips the weather lookup)"
        )]
        weather: Option<String>,
    },

    /// List saved sessions, most recent first
    List {
        #[arg(long, short, help = "Limit output to the N most recent sessions")]
        limit: Option<usize>,

        #[arg(long, help = "Only show sessions for this subject")]
        subject: Option<String>,
    },

    /// Show study statistics, trend and goal progress
    Stats {
        #[arg(
            long,
            default_value_t = 7,
            help = "Number of days in the daily trend window"
        )]
        days: u32,
    },

    /// Show or set daily/weekly study goals
    Goals {
        #[arg(long, help = "Daily goal as a duration spec (e.g. 2h, 90m)")]
        daily: Option<String>,

        #[arg(long, help = "Weekly goal as a duration spec (e.g. 10h)")]
        weekly: Option<String>,
    },

    /// Manage stored UI settings (JSON-encoded key/value pairs)
    Settings {
        #[arg(
            long = "set",
            num_args = 2,
            value_names = ["KEY", "VALUE"],
            help = "Store a setting (VALUE parsed as JSON, else kept as string)"
        )]
        set: Option<Vec<String>>,

        #[arg(long = "get", value_name = "KEY", help = "Print a stored setting")]
        get: Option<String>,

        #[arg(long = "list", help = "List all stored settings")]
        list: bool,
    },

    /// Show current weather conditions for the configured city
    Weather,

    /// Export saved sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: timestamped name in the current directory)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
