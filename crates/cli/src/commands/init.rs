//! innkeep init command

use clap::Args;
use innkeep_adapter::record::{CustomerRecord, HotelRecord, ReservationRecord};
use innkeep_adapter::store;
use shared::StoreConfig;
use std::path::{Path, PathBuf};

use super::DEFAULT_CONFIG_FILE;

const SAMPLE_SEED: &str = r#"{
    "hotels": [
        {
            "name": "Hotel Ankor Wat",
            "location": "Cambodia",
            "rooms": 40,
            "available_rooms": 40
        },
        {
            "name": "Hotel Sakura",
            "location": "Japan",
            "rooms": 25,
            "available_rooms": 25
        }
    ],
    "customers": [
        {
            "name": "Pryha Terima",
            "email": "pryha.terima@example.com"
        },
        {
            "name": "Mateo Rios",
            "email": "mateo.rios@example.com"
        }
    ],
    "reservations": [
        {
            "customer": "Pryha Terima",
            "hotel": "Hotel Ankor Wat"
        },
        {
            "customer": "Mateo Rios",
            "hotel": "Hotel Sakura"
        }
    ]
}"#;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Skip the sample seed file
    #[arg(long)]
    pub minimal: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Initializing innkeep data in {:?}", self.directory);
        std::fs::create_dir_all(&self.directory)?;

        // Paths inside the config are relative to the directory itself
        let config = StoreConfig::in_dir(".");
        let config_path = self.directory.join(DEFAULT_CONFIG_FILE);
        if !config_path.exists() {
            std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
        }

        let rooted = StoreConfig::in_dir(&self.directory);
        create_if_missing::<HotelRecord>(&rooted.hotels_path())?;
        create_if_missing::<CustomerRecord>(&rooted.customers_path())?;
        create_if_missing::<ReservationRecord>(&rooted.reservations_path())?;

        if !self.minimal && !rooted.seed_path().exists() {
            std::fs::write(rooted.seed_path(), SAMPLE_SEED)?;
        }

        println!("✓ innkeep data directory initialized");
        Ok(())
    }
}

fn create_if_missing<T: serde::Serialize>(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        store::save::<T>(path, &[])?;
    }
    Ok(())
}
