//! Defines sums and groupings calculated over the ledger.

use std::collections::BTreeMap;

use crate::{
    Error,
    ledger::{Transaction, TransactionType},
};

/// The summed income and expenses of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerTotals {
    /// The sum of all income amounts.
    pub income: i64,
    /// The sum of all expense amounts.
    pub expense: i64,
}

impl LedgerTotals {
    /// Income minus expenses.
    pub fn balance(self) -> i64 {
        self.income - self.expense
    }
}

/// Sums the transaction amounts per transaction type.
///
/// A type with no transactions contributes zero.
pub fn totals_by_type(transactions: &[Transaction]) -> LedgerTotals {
    let mut totals = LedgerTotals::default();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => totals.income += transaction.amount,
            TransactionType::Expense => totals.expense += transaction.amount,
        }
    }

    totals
}

/// Sums the expense amounts per category.
///
/// Income rows are ignored. The result is sorted by category name so callers
/// get the same order on every call.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<(String, i64)> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();

    for transaction in transactions {
        if transaction.transaction_type == TransactionType::Expense {
            *totals.entry(transaction.category.as_str()).or_insert(0) += transaction.amount;
        }
    }

    totals
        .into_iter()
        .map(|(category, amount)| (category.to_owned(), amount))
        .collect()
}

/// The category with the largest summed expenses and that sum.
///
/// When several categories tie for the largest sum, the one that sorts first
/// by name wins. Returns [`Error::NoExpenses`] when the ledger holds no
/// expense rows at all.
pub fn top_expense_category(transactions: &[Transaction]) -> Result<(String, i64), Error> {
    let mut top: Option<(String, i64)> = None;

    for (category, amount) in expense_by_category(transactions) {
        if top
            .as_ref()
            .is_none_or(|(_, top_amount)| amount > *top_amount)
        {
            top = Some((category, amount));
        }
    }

    top.ok_or(Error::NoExpenses)
}
