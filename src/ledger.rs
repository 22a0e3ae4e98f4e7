//! Transaction history over the store.
//!
//! Not a real ledger: the first load seeds the same three mock entries the
//! original dashboard ships with, and everything after that is manually
//! entered by the creator. Entries persist under the `transactions` store key
//! in the original's wire format.

use chrono::{Duration, Utc};
use rand::Rng;

use fundmychai_types::ledger::{Transaction, TransactionStatus};

use crate::store::{self, KeyValueStore, StoreError, TRANSACTIONS_KEY};

/// Aggregate dashboard stats derived from the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerStats {
    /// Sum of successful amounts, whole rupees.
    pub total_inr: u64,
    /// Number of successful entries.
    pub supporters: usize,
}

/// The mock entries seeded into an empty history.
pub fn mock_transactions() -> Vec<Transaction> {
    let now = Utc::now();
    vec![
        Transaction {
            id: "t1".to_string(),
            from_name: "Anjali P.".to_string(),
            amount: 500,
            message: "Love your content! Keep it up.".to_string(),
            date: now - Duration::hours(2),
            status: TransactionStatus::Success,
        },
        Transaction {
            id: "t2".to_string(),
            from_name: "Rohan K.".to_string(),
            amount: 150,
            message: "Thanks for the help.".to_string(),
            date: now - Duration::hours(24),
            status: TransactionStatus::Success,
        },
        Transaction {
            id: "t3".to_string(),
            from_name: "Anonymous".to_string(),
            amount: 50,
            message: "Chai money ☕".to_string(),
            date: now - Duration::hours(48),
            status: TransactionStatus::Success,
        },
    ]
}

/// Loads the history, seeding and persisting the mock entries when none is
/// stored yet.
pub fn load(store: &mut dyn KeyValueStore) -> Result<Vec<Transaction>, StoreError> {
    if let Some(transactions) = store::get_json(store, TRANSACTIONS_KEY) {
        return Ok(transactions);
    }
    let seeded = mock_transactions();
    store::set_json(store, TRANSACTIONS_KEY, &seeded)?;
    tracing::debug!(entries = seeded.len(), "seeded mock transaction history");
    Ok(seeded)
}

/// Builds a manual entry dated now, marked successful.
pub fn manual_entry(from_name: &str, amount: u64, message: &str) -> Transaction {
    let from_name = if from_name.is_empty() { "Anonymous" } else { from_name };
    Transaction {
        id: format!("t{:08x}", rand::rng().random::<u32>()),
        from_name: from_name.to_string(),
        amount,
        message: message.to_string(),
        date: Utc::now(),
        status: TransactionStatus::Success,
    }
}

/// Prepends an entry to the history and persists it.
pub fn record(store: &mut dyn KeyValueStore, transaction: Transaction) -> Result<(), StoreError> {
    let mut transactions = load(store)?;
    transactions.insert(0, transaction);
    store::set_json(store, TRANSACTIONS_KEY, &transactions)
}

/// Totals over the successful entries.
pub fn stats(transactions: &[Transaction]) -> LedgerStats {
    let successful = transactions
        .iter()
        .filter(|tx| tx.status == TransactionStatus::Success);
    let mut total_inr = 0;
    let mut supporters = 0;
    for tx in successful {
        total_inr += tx.amount;
        supporters += 1;
    }
    LedgerStats { total_inr, supporters }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_first_load_seeds_mock_history() {
        let mut store = MemoryStore::new();
        let transactions = load(&mut store).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].from_name, "Anjali P.");
        // Seeding persisted: a second load returns the same ids.
        let again = load(&mut store).unwrap();
        assert_eq!(
            again.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["t1", "t2", "t3"]
        );
    }

    #[test]
    fn test_record_prepends_and_persists() {
        let mut store = MemoryStore::new();
        record(&mut store, manual_entry("Dev", 75, "nice work")).unwrap();
        let transactions = load(&mut store).unwrap();
        assert_eq!(transactions.len(), 4);
        assert_eq!(transactions[0].from_name, "Dev");
        assert_eq!(transactions[0].amount, 75);
    }

    #[test]
    fn test_manual_entry_defaults_anonymous() {
        let tx = manual_entry("", 20, "");
        assert_eq!(tx.from_name, "Anonymous");
        assert_eq!(tx.status, TransactionStatus::Success);
    }

    #[test]
    fn test_stats_count_only_successful() {
        let mut transactions = mock_transactions();
        transactions[1].status = TransactionStatus::Pending;
        let stats = stats(&transactions);
        assert_eq!(stats.total_inr, 550);
        assert_eq!(stats.supporters, 2);
    }
}
