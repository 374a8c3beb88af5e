use clap::{Parser, Subcommand, ValueEnum};
use pulse_report::config::DEFAULT_CONFIG_FILE;
use pulse_report::{ReportKind, Stream};

#[derive(Parser)]
#[command(name = "pulse")]
#[command(author, version, about = "Team updates, metrics, holidays and risk reports for Ping Pulse")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one report and print its HTML to stdout
    Report {
        /// Report to generate
        #[clap(value_enum)]
        kind: ReportType,

        /// Start of the date range (YYYY-MM-DD, may be empty)
        #[clap(short, long, default_value = "")]
        from: String,

        /// End of the date range (YYYY-MM-DD, may be empty)
        #[clap(short, long, default_value = "")]
        to: String,

        /// Product stream filter (ignored by the holidays report)
        #[clap(short, long, default_value = "All", value_parser = parse_stream)]
        stream: Stream,

        /// Configuration file path
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Override the backend origin from the configuration file
        #[clap(long)]
        base_url: Option<String>,

        /// Also write a dashboard page snapshot to this HTML file
        #[clap(long)]
        page: Option<String>,

        /// Print the equivalent curl command before sending the request
        #[clap(long, default_value_t = false)]
        show_curl: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Open the interactive terminal dashboard
    Dashboard {
        /// Configuration file path
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Override the backend origin from the configuration file
        #[clap(long)]
        base_url: Option<String>,

        /// File written when saving a page snapshot (Ctrl-S)
        #[clap(long, default_value = "pulse.html")]
        snapshot: String,
    },

    /// Write a default configuration file
    Init {
        /// Configuration file path
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Overwrite an existing file without asking
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportType {
    /// Team updates grouped by product stream
    #[value(alias = "newsletter")]
    Updates,

    /// Ticket metrics table per product
    Metrics,

    /// Upcoming holidays
    Holidays,

    /// Risk and delayed features
    Risk,
}

impl From<ReportType> for ReportKind {
    fn from(value: ReportType) -> Self {
        match value {
            ReportType::Updates => ReportKind::Updates,
            ReportType::Metrics => ReportKind::Metrics,
            ReportType::Holidays => ReportKind::Holidays,
            ReportType::Risk => ReportKind::Risk,
        }
    }
}

fn parse_stream(value: &str) -> Result<Stream, String> {
    value.parse::<Stream>().map_err(|e| e.to_string())
}
