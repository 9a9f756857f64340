//! Core of Tally: the transaction ledger, its totals and its persistence.
//!
//! The [`Ledger`] owns the transaction list and writes it to a [`LedgerStore`]
//! after every change. [`summarize`] derives income, expenses and balance, and
//! a [`Formatter`] renders amounts for display.

pub use currency::Currency;
pub use error::EngineError;
pub use format::{Formatter, Locale};
pub use ledger::Ledger;
pub use money::Money;
pub use store::{JsonFileStore, LedgerStore, MemoryStore};
pub use summary::{Summary, summarize};
pub use transactions::{Draft, Transaction, TransactionId, validate};

mod currency;
mod error;
mod format;
mod ledger;
mod money;
mod store;
mod summary;
mod transactions;

pub type ResultEngine<T> = Result<T, EngineError>;
