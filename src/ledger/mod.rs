//! The ledger: transaction records, the CSV file they live in and the figures
//! derived from them.
//!
//! This module defines:
//! - The [`Transaction`] record and its [`TransactionType`].
//! - The [`LedgerFile`] that persists transactions to disk.
//! - Pure aggregation functions for totals and category breakdowns.

mod aggregation;
mod file;
mod transaction;

pub use aggregation::{LedgerTotals, expense_by_category, top_expense_category, totals_by_type};
pub use file::LedgerFile;
pub use transaction::{
    EXPENSE_CATEGORIES, INCOME_CATEGORIES, Transaction, TransactionType, append,
};
