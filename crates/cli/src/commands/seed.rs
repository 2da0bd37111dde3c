//! innkeep seed command

use clap::Args;
use console::style;
use innkeep_adapter::fixture;
use shared::StoreConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Seed file to load instead of the configured one
    pub file: Option<PathBuf>,
}

impl SeedCommand {
    pub fn run(&self, config: &StoreConfig) -> anyhow::Result<()> {
        let path = self.file.clone().unwrap_or_else(|| config.seed_path());
        let seed = fixture::load_seed(&path);
        if seed.is_empty() {
            println!(
                "{} Seed {} is empty, collections will be cleared",
                style("!").yellow(),
                path.display()
            );
        }

        fixture::prime(config, &seed)?;

        println!(
            "{} Seeded {} hotel(s), {} customer(s), {} reservation(s)",
            style("✓").green(),
            seed.hotels.len(),
            seed.customers.len(),
            seed.reservations.len()
        );
        Ok(())
    }
}
