//! innkeep CLI - Command-line interface for hotel, customer and reservation records
//!
//! Usage:
//!   innkeep init [dir]                          - Initialize a data directory
//!   innkeep hotel create <name> <location> <n>  - Add a hotel
//!   innkeep customer get <name>                 - Look up a customer
//!   innkeep reservation cancel <customer> <hotel>
//!   innkeep seed [file]                         - Prime collections from a seed file
//!   innkeep check                               - Report the state of each collection file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{
    resolve_config, CheckCommand, CustomerCommand, HotelCommand, InitCommand,
    ReservationCommand, SeedCommand,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "innkeep")]
#[command(about = "innkeep - Hotel, customer and reservation records in JSON files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (JSON or YAML); defaults to ./innkeep.json when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the collection files; overrides the config
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a data directory
    Init(InitCommand),
    /// Manage hotels
    Hotel(HotelCommand),
    /// Manage customers
    Customer(CustomerCommand),
    /// Manage reservations
    Reservation(ReservationCommand),
    /// Overwrite all collections from a seed file
    Seed(SeedCommand),
    /// Report whether each collection file is ok, missing or corrupt
    Check(CheckCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = || resolve_config(cli.config.as_deref(), cli.data_dir.clone());
    match &cli.command {
        Commands::Init(cmd) => cmd.run(),
        Commands::Hotel(cmd) => cmd.run(&config()?),
        Commands::Customer(cmd) => cmd.run(&config()?),
        Commands::Reservation(cmd) => cmd.run(&config()?),
        Commands::Seed(cmd) => cmd.run(&config()?),
        Commands::Check(cmd) => cmd.run(&config()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::commands::hotel::HotelSubcommand;
    use cli::commands::reservation::ReservationSubcommand;

    #[test]
    fn test_parse_hotel_create() {
        let cli = Cli::try_parse_from([
            "innkeep",
            "--data-dir",
            "/tmp/innkeep",
            "hotel",
            "create",
            "Hotel Pucon",
            "Chile",
            "15",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/innkeep")));
        match cli.command {
            Commands::Hotel(HotelCommand {
                command:
                    HotelSubcommand::Create {
                        name,
                        location,
                        rooms,
                    },
            }) => {
                assert_eq!(name, "Hotel Pucon");
                assert_eq!(location, "Chile");
                assert_eq!(rooms, 15);
            }
            _ => panic!("expected hotel create"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_rooms() {
        assert!(
            Cli::try_parse_from(["innkeep", "hotel", "create", "Hotel Pucon", "Chile", "-3"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_reservation_cancel_with_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "innkeep",
            "reservation",
            "cancel",
            "Pryha Terima",
            "Hotel Ankor Wat",
            "--config",
            "innkeep.yaml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("innkeep.yaml")));
        assert!(matches!(
            cli.command,
            Commands::Reservation(ReservationCommand {
                command: ReservationSubcommand::Cancel { .. }
            })
        ));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
