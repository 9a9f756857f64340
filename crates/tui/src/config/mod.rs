use clap::Parser;
use engine::{Currency, Formatter, Locale};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tally.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ledger file; its stem is the storage key.
    pub data_path: String,
    pub currency: String,
    pub locale: String,
    pub log_level: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: "data/transactions.json".to_string(),
            currency: "EUR".to_string(),
            locale: "en-US".to_string(),
            log_level: "info".to_string(),
            log_file: "data/tally.log".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves the configured currency and locale codes.
    pub fn formatter(&self) -> Result<Formatter> {
        let currency = Currency::try_from(self.currency.as_str())?;
        let locale = Locale::try_from(self.locale.as_str())?;
        Ok(Formatter::new(currency, locale))
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "tally", version, about = "Track income and expenses in the terminal")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override the ledger file path.
    #[arg(long)]
    pub data_path: Option<String>,
    /// Override the display currency (EUR, USD, GBP).
    #[arg(long)]
    pub currency: Option<String>,
    /// Override the display locale (en-US, it-IT).
    #[arg(long)]
    pub locale: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    pub log_level: Option<String>,
    /// Override the log file path.
    #[arg(long)]
    pub log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_with(Args::parse())
}

/// Defaults, then the TOML file, then `TALLY_*` variables, then flags.
pub fn load_with(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("TALLY"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(data_path) = args.data_path {
        settings.data_path = data_path;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    Ok(settings)
}
