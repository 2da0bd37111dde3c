//! Storage - The three JSON repositories wired from one `StoreConfig`

use std::path::PathBuf;

use shared::StoreConfig;

use crate::fixture::{self, SeedData};
use crate::repository::json_file::{
    JsonCustomerRepository, JsonHotelRepository, JsonReservationRepository,
};
use crate::store::CollectionHealth;

/// State of one collection file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub collection: &'static str,
    pub path: PathBuf,
    pub health: CollectionHealth,
}

impl CollectionReport {
    pub fn is_corrupt(&self) -> bool {
        matches!(self.health, CollectionHealth::Corrupt { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Storage {
    config: StoreConfig,
    pub hotels: JsonHotelRepository,
    pub customers: JsonCustomerRepository,
    pub reservations: JsonReservationRepository,
}

impl Storage {
    pub fn open(config: StoreConfig) -> Self {
        Self {
            hotels: JsonHotelRepository::from_config(&config),
            customers: JsonCustomerRepository::from_config(&config),
            reservations: JsonReservationRepository::from_config(&config),
            config,
        }
    }

    /// Load the configured seed file and overwrite every collection with it
    pub fn seed_from_file(&self) -> shared::Result<SeedData> {
        let seed = fixture::load_seed(&self.config.seed_path());
        fixture::prime(&self.config, &seed)?;
        Ok(seed)
    }

    /// Probe every collection file without modifying anything
    pub fn health(&self) -> Vec<CollectionReport> {
        vec![
            CollectionReport {
                collection: "hotels",
                path: self.hotels.path().to_path_buf(),
                health: self.hotels.health(),
            },
            CollectionReport {
                collection: "customers",
                path: self.customers.path().to_path_buf(),
                health: self.customers.health(),
            },
            CollectionReport {
                collection: "reservations",
                path: self.reservations.path().to_path_buf(),
                health: self.reservations.health(),
            },
        ]
    }
}
