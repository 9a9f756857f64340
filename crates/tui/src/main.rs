mod app;
mod config;
mod error;
mod logging;
mod ui;

use engine::{JsonFileStore, Ledger, LedgerStore};

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    let formatter = config.formatter()?;
    logging::init(&config);

    let store: Box<dyn LedgerStore> = Box::new(JsonFileStore::new(&config.data_path));
    let ledger = Ledger::open(store);

    let mut app = app::App::new(ledger, formatter);
    app.run()
}
