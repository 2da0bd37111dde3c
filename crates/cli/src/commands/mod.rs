//! CLI Commands

pub mod check;
pub mod customer;
pub mod hotel;
pub mod init;
pub mod reservation;
pub mod seed;

pub use check::CheckCommand;
pub use customer::CustomerCommand;
pub use hotel::HotelCommand;
pub use init::InitCommand;
pub use reservation::ReservationCommand;
pub use seed::SeedCommand;

use std::path::{Path, PathBuf};

use shared::StoreConfig;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "innkeep.json";

/// Build the store configuration from the global options
///
/// An explicit `--config` must exist. Without it, `innkeep.json` in the
/// working directory is used if present, else the defaults. A relative
/// `dataDir` is taken relative to the config file's directory. `--data-dir`
/// overrides whatever directory the config names.
pub fn resolve_config(
    config_path: Option<&Path>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<StoreConfig> {
    let file = match config_path {
        Some(path) => Some(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Some(Path::new(DEFAULT_CONFIG_FILE)),
        None => None,
    };
    let mut config = match file {
        Some(path) => load_relative_to(path)?,
        None => StoreConfig::default(),
    };

    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "resolved store config");
    Ok(config)
}

fn load_relative_to(path: &Path) -> anyhow::Result<StoreConfig> {
    let mut config = StoreConfig::from_file(path)?;
    if config.data_dir.is_relative() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.data_dir = parent.join(&config.data_dir);
        }
    }
    Ok(config)
}

/// Ask before removing more than one record, unless `--yes` was given
pub(crate) fn confirm_delete(what: &str, matches: usize, yes: bool) -> anyhow::Result<bool> {
    if yes || matches <= 1 {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("{} records match {}. Delete all of them?", matches, what))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
