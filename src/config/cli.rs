use crate::core::listing::OutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "salon-booking")]
#[command(about = "Appointment slots, booking requests and the admin listing for the salon")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the bookable slots for a date
    Slots {
        #[arg(long)]
        date: NaiveDate,
    },

    /// Validate a booking request and simulate its submission
    Book {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        service: String,
        /// Desired date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
        /// Desired time, HH:MM
        #[arg(long, default_value = "")]
        time: String,
        /// Reference date for the past-date check (defaults to the local date)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Accept times that are not in the slot list of the day
        #[arg(long)]
        lenient: bool,
    },

    /// List the services on offer
    Services,

    /// Show the admin appointment listing
    Appointments {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the weekly business hours
    Hours,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_command() {
        let cli = CliConfig::try_parse_from([
            "salon-booking",
            "book",
            "--name",
            "Maria Silva",
            "--service",
            "Consultoria Capilar",
            "--date",
            "2026-10-19",
            "--time",
            "10:00",
            "--today",
            "2026-10-16",
        ])
        .unwrap();

        match cli.command {
            Command::Book {
                name,
                phone,
                today,
                lenient,
                ..
            } => {
                assert_eq!(name, "Maria Silva");
                assert!(phone.is_empty());
                assert_eq!(today, NaiveDate::from_ymd_opt(2026, 10, 16));
                assert!(!lenient);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from([
            "salon-booking",
            "appointments",
            "--format",
            "csv",
            "--verbose",
            "--config",
            "salon.toml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("salon.toml")));
        assert!(matches!(
            cli.command,
            Command::Appointments {
                format: Some(OutputFormat::Csv)
            }
        ));
    }

    #[test]
    fn test_slots_rejects_bad_date() {
        assert!(CliConfig::try_parse_from(["salon-booking", "slots", "--date", "amanhã"]).is_err());
    }
}
