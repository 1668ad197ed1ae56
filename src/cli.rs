// Command-line flags shared by the menu and the API server

use crate::settings::Settings;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct SettingsArgs {
    /// Configuration file (defaults to ./hotel.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV file with the initial rooms, overrides `seed.rooms_csv`
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

impl SettingsArgs {
    /// Load settings from the config file and environment, then apply the flags
    pub fn load(&self) -> Result<Settings> {
        let settings = Settings::load(self.config.as_deref())?;
        Ok(self.apply(settings))
    }

    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(seed) = &self.seed {
            settings.seed.rooms_csv = Some(seed.clone());
        }
        settings
    }
}
