//! innkeep check command

use clap::Args;
use console::style;
use innkeep_adapter::{CollectionHealth, Storage};
use shared::StoreConfig;

#[derive(Debug, Args)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn run(&self, config: &StoreConfig) -> anyhow::Result<()> {
        let reports = Storage::open(config.clone()).health();

        for report in &reports {
            let status = match &report.health {
                CollectionHealth::Ok { .. } => style(report.health.to_string()).green(),
                CollectionHealth::Missing => style(report.health.to_string()).yellow(),
                CollectionHealth::Corrupt { .. } => style(report.health.to_string()).red(),
            };
            println!(
                "{:<13} {}  {}",
                report.collection,
                status,
                style(report.path.display()).dim()
            );
        }

        let corrupt = reports.iter().filter(|r| r.is_corrupt()).count();
        if corrupt > 0 {
            anyhow::bail!("{} collection file(s) are corrupt", corrupt);
        }
        Ok(())
    }
}
