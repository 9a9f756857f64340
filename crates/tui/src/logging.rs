use std::{fs::OpenOptions, path::Path, sync::Mutex};

use crate::config::AppConfig;

/// Routes `tracing` output to the configured log file.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout or
/// stderr. If the file cannot be opened logging stays off.
pub fn init(config: &AppConfig) {
    let path = Path::new(&config.log_file);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let filter = format!("tally={level},engine={level}", level = config.log_level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    tracing::info!(
        data_path = %config.data_path,
        currency = %config.currency,
        locale = %config.locale,
        "starting tally"
    );
}
