use crate::{Money, Transaction};

/// Totals derived from a ledger.
///
/// `expenses` keeps its sign (it is never positive) and
/// `balance == income + expenses` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

/// Computes the totals for a slice of transactions.
///
/// Pure and cheap enough to call after every mutation or on every render.
#[must_use]
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let income: Money = transactions
        .iter()
        .filter(|tx| tx.is_income())
        .map(|tx| tx.amount)
        .sum();
    let expenses: Money = transactions
        .iter()
        .filter(|tx| tx.is_expense())
        .map(|tx| tx.amount)
        .sum();

    Summary {
        income,
        expenses,
        balance: income.saturating_add(expenses),
    }
}
