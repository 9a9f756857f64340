//! Persistence port for the ledger.
//!
//! A [`LedgerStore`] reads and writes the whole transaction list as one blob.
//! Saves are full snapshots that overwrite whatever was stored before.

use std::{
    cell::{Cell, RefCell},
    fs,
    path::PathBuf,
    rc::Rc,
};

use crate::{EngineError, ResultEngine, Transaction};

pub trait LedgerStore {
    /// Reads the stored ledger. A store that holds nothing yet returns an
    /// empty list; unreadable or malformed content is an error.
    fn load(&self) -> ResultEngine<Vec<Transaction>>;

    /// Overwrites the stored ledger with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> ResultEngine<()>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load(&self) -> ResultEngine<Vec<Transaction>> {
        (**self).load()
    }

    fn save(&self, transactions: &[Transaction]) -> ResultEngine<()> {
        (**self).save(transactions)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn load(&self) -> ResultEngine<Vec<Transaction>> {
        (**self).load()
    }

    fn save(&self, transactions: &[Transaction]) -> ResultEngine<()> {
        (**self).save(transactions)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Rc<S> {
    fn load(&self) -> ResultEngine<Vec<Transaction>> {
        (**self).load()
    }

    fn save(&self, transactions: &[Transaction]) -> ResultEngine<()> {
        (**self).save(transactions)
    }
}

/// Stores the ledger as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The storage key, i.e. the file stem (`transactions` for
    /// `data/transactions.json`).
    pub fn key(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> ResultEngine<Vec<Transaction>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, transactions: &[Transaction]) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(transactions)?;
        // Write then rename so an interrupted save never truncates the ledger.
        let temp = self.temp_path();
        fs::write(&temp, payload)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory key-value slot holding the serialized ledger.
///
/// Behaves like [`JsonFileStore`] without touching the disk: the blob can be
/// seeded with arbitrary content and writes can be made to fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
            fail_writes: Cell::new(false),
        }
    }

    /// The raw stored content, if anything was ever written.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Makes subsequent saves fail, like a full disk or exceeded quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> ResultEngine<Vec<Transaction>> {
        match self.blob.borrow().as_deref() {
            Some(blob) => Ok(serde_json::from_str(blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> ResultEngine<()> {
        if self.fail_writes.get() {
            return Err(EngineError::Storage("quota exceeded".to_string()));
        }
        let payload = serde_json::to_string(transactions)?;
        *self.blob.borrow_mut() = Some(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 2,
                description: "Rent".to_string(),
                amount: Money::new(-40_000),
            },
            Transaction {
                id: 1,
                description: "Salary".to_string(),
                amount: Money::new(100_000),
            },
        ]
    }

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), Vec::new());
        assert_eq!(store.blob(), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
        assert_eq!(
            store.blob().unwrap(),
            r#"[{"id":2,"text":"Rent","amount":-400},{"id":1,"text":"Salary","amount":1000}]"#
        );
    }

    #[test]
    fn memory_store_reports_malformed_blob() {
        assert!(MemoryStore::with_blob("{not json").load().is_err());
        assert!(MemoryStore::with_blob(r#"{"id":1}"#).load().is_err());
        assert!(
            MemoryStore::with_blob(r#"[{"id":1,"text":"x","amount":"ten"}]"#)
                .load()
                .is_err()
        );
    }

    #[test]
    fn memory_store_write_failure_keeps_previous_blob() {
        let store = MemoryStore::with_blob("[]");
        store.set_fail_writes(true);
        assert_eq!(
            store.save(&sample()),
            Err(EngineError::Storage("quota exceeded".to_string()))
        );
        assert_eq!(store.blob().as_deref(), Some("[]"));
    }

    #[test]
    fn shared_store_sees_writes_through_any_handle() {
        let store = Rc::new(MemoryStore::new());
        let handle: Box<dyn LedgerStore> = Box::new(Rc::clone(&store));
        handle.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn file_store_key_is_file_stem() {
        let store = JsonFileStore::new("data/transactions.json");
        assert_eq!(store.key(), "transactions");
        assert_eq!(store.temp_path(), PathBuf::from("data/transactions.json.tmp"));
    }
}
