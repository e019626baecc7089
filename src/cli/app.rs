//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{policy_cmd, slots};

#[derive(Parser)]
#[command(name = "avail")]
#[command(author, version, about = "Booking availability inspection for service marketplaces")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the slot table for one date
    Slots {
        /// Weekly schedule file (JSON array of schedule days)
        #[arg(long)]
        schedule: PathBuf,

        /// Bookings snapshot file (JSON array of booking records)
        #[arg(long)]
        bookings: PathBuf,

        /// Booking settings file (TOML)
        #[arg(long)]
        settings: PathBuf,

        /// Date to inspect (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Provider IANA timezone
        #[arg(long, env = "AVAIL_TZ", default_value = "UTC")]
        tz: String,

        /// Pin "now" to a provider-local datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        now: Option<String>,
    },

    /// Check whether a date is within the advance-booking window
    CheckDate {
        /// Booking settings file (TOML)
        #[arg(long)]
        settings: PathBuf,

        /// Date to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Provider IANA timezone
        #[arg(long, env = "AVAIL_TZ", default_value = "UTC")]
        tz: String,

        /// Pin "now" to a provider-local datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        now: Option<String>,
    },

    /// Check whether a booking may still be cancelled
    CanCancel {
        /// Bookings snapshot file (JSON array of booking records)
        #[arg(long)]
        bookings: PathBuf,

        /// Booking settings file (TOML)
        #[arg(long)]
        settings: PathBuf,

        /// Index of the booking within the bookings file
        #[arg(long)]
        index: usize,

        /// Provider IANA timezone
        #[arg(long, env = "AVAIL_TZ", default_value = "UTC")]
        tz: String,

        /// Pin "now" to a provider-local datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        now: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Avail CLI starting");

    match cli.command {
        Commands::Slots {
            schedule,
            bookings,
            settings,
            date,
            tz,
            now,
        } => slots::run(
            &output,
            &schedule,
            &bookings,
            &settings,
            &date,
            &tz,
            now.as_deref(),
        ),

        Commands::CheckDate {
            settings,
            date,
            tz,
            now,
        } => policy_cmd::check_date(&output, &settings, &date, &tz, now.as_deref()),

        Commands::CanCancel {
            bookings,
            settings,
            index,
            tz,
            now,
        } => policy_cmd::can_cancel(&output, &bookings, &settings, index, &tz, now.as_deref()),
    }
}
