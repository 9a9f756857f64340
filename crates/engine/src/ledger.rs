use std::collections::HashSet;

use chrono::Utc;

use crate::{
    Draft, LedgerStore, ResultEngine, Summary, Transaction, TransactionId, summarize,
};

/// The in-memory transaction list, newest first, backed by a [`LedgerStore`].
///
/// Every mutation writes a full snapshot to the store before returning. Store
/// failures never surface to the caller: a ledger that cannot be read starts
/// empty and a save that fails is logged and otherwise ignored.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
    transactions: Vec<Transaction>,
    last_id: TransactionId,
}

impl<S: LedgerStore> Ledger<S> {
    /// Loads the ledger from `store`, falling back to an empty one.
    pub fn open(store: S) -> Self {
        let transactions = match store.load() {
            Ok(transactions) => {
                tracing::info!(count = transactions.len(), "ledger loaded");
                transactions
            }
            Err(err) => {
                tracing::warn!("discarding unreadable ledger: {err}");
                Vec::new()
            }
        };
        let last_id = transactions.iter().map(|tx| tx.id).max().unwrap_or(0);

        Self {
            store,
            transactions,
            last_id,
        }
    }

    /// Validates the raw input and prepends a new transaction.
    ///
    /// On error nothing changes, neither in memory nor in the store.
    pub fn add(&mut self, description: &str, amount: &str) -> ResultEngine<&Transaction> {
        let draft = match Draft::parse(description, amount) {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!("rejected transaction input: {err}");
                return Err(err);
            }
        };
        Ok(self.insert(draft))
    }

    /// Prepends an already validated transaction.
    pub fn insert(&mut self, draft: Draft) -> &Transaction {
        let id = self.next_id();
        tracing::debug!(id, amount = %draft.amount, "adding transaction");
        self.transactions.insert(
            0,
            Transaction {
                id,
                description: draft.description,
                amount: draft.amount,
            },
        );
        self.persist();
        &self.transactions[0]
    }

    /// Removes the transaction with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let Some(position) = self.transactions.iter().position(|tx| tx.id == id) else {
            tracing::debug!(id, "remove ignored, no such transaction");
            return None;
        };
        let removed = self.transactions.remove(position);
        tracing::debug!(id, "removed transaction");
        self.persist();
        Some(removed)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Totals for the current contents.
    pub fn summary(&self) -> Summary {
        summarize(&self.transactions)
    }

    /// Wall-clock milliseconds, bumped past every id issued so far.
    ///
    /// Once the id space is exhausted the smallest unused id is handed out.
    fn next_id(&mut self) -> TransactionId {
        let Some(after_last) = self.last_id.checked_add(1) else {
            return self.smallest_free_id();
        };
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(after_last);
        self.last_id = id;
        id
    }

    fn smallest_free_id(&self) -> TransactionId {
        let used: HashSet<TransactionId> = self.transactions.iter().map(|tx| tx.id).collect();
        (1..).find(|id| !used.contains(id)).unwrap_or(0)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.transactions) {
            tracing::warn!("failed to persist ledger: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineError, MemoryStore, Money};

    #[test]
    fn opens_empty_when_store_is_empty() {
        let ledger = Ledger::open(MemoryStore::new());
        assert!(ledger.is_empty());
        assert_eq!(ledger.summary(), Summary::default());
    }

    #[test]
    fn opens_empty_when_blob_is_malformed() {
        let ledger = Ledger::open(MemoryStore::with_blob("]]garbage"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_prepends_and_persists() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store);

        let first = ledger.add("Salary", "1000").unwrap().id;
        let second = ledger.add("Rent", "-400").unwrap().id;

        let ids: Vec<_> = ledger.transactions().iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(store.load().unwrap(), ledger.transactions());
    }

    #[test]
    fn rejected_add_does_not_write() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store);

        assert_eq!(
            ledger.add("", "50").map(|tx| tx.id),
            Err(EngineError::InvalidDescription(
                "description is empty".to_string()
            ))
        );
        assert_eq!(ledger.add("Gift", "0").map(|tx| tx.id), Err(EngineError::ZeroAmount));
        assert!(ledger.add("Gift", "lots").is_err());
        assert!(ledger.is_empty());
        assert_eq!(store.blob(), None);
    }

    #[test]
    fn ids_stay_unique_after_removing_the_newest() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let mut seen = HashSet::new();
        for round in 0..20 {
            let id = ledger.add("Coffee", "-2.5").unwrap().id;
            assert!(seen.insert(id), "id {id} reused");
            if round % 3 == 0 {
                ledger.remove(id);
            }
        }
        let live: HashSet<_> = ledger.transactions().iter().map(|tx| tx.id).collect();
        assert_eq!(live.len(), ledger.len());
    }

    #[test]
    fn ids_continue_after_loaded_ones() {
        let far_future = u64::MAX / 2;
        let blob = format!(r#"[{{"id":{far_future},"text":"Bonus","amount":5}}]"#);
        let mut ledger = Ledger::open(MemoryStore::with_blob(blob));
        let id = ledger.add("Tea", "-1").unwrap().id;
        assert_eq!(id, far_future + 1);
    }

    #[test]
    fn ids_stay_unique_when_id_space_is_exhausted() {
        let blob = format!(r#"[{{"id":{},"text":"Last","amount":1}}]"#, u64::MAX);
        let mut ledger = Ledger::open(MemoryStore::with_blob(blob));

        let first = ledger.add("New", "1").unwrap().id;
        let second = ledger.add("Newer", "2").unwrap().id;
        assert_eq!((first, second), (1, 2));

        ledger.remove(first);
        let third = ledger.add("Newest", "3").unwrap().id;
        assert_eq!(third, 1);

        let ids: HashSet<_> = ledger.transactions().iter().map(|tx| tx.id).collect();
        assert_eq!(ids.len(), ledger.len());
        assert!(ids.contains(&u64::MAX));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store);
        ledger.add("Salary", "1000").unwrap();
        let before = store.blob();

        assert_eq!(ledger.remove(42), None);
        assert_eq!(ledger.len(), 1);
        assert_eq!(store.blob(), before);
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut ledger = Ledger::open(&store);

        let id = ledger.add("Salary", "1000").unwrap().id;
        assert_eq!(ledger.get(id).map(|tx| tx.amount), Some(Money::new(100_000)));
        assert_eq!(store.blob(), None);

        store.set_fail_writes(false);
        ledger.remove(id);
        assert_eq!(store.blob().as_deref(), Some("[]"));
    }
}
