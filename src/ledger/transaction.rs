//! Defines the transaction record and the vocabulary around it.

use serde::{Deserialize, Serialize};
use time::Date;

/// The categories available for expense transactions.
pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "Makan",
    "Transport",
    "Belanja",
    "Tagihan",
    "Hiburan",
    "Lainnya",
];

/// The categories available for income transactions.
pub const INCOME_CATEGORIES: [&str; 4] = ["Gaji", "Bonus", "Freelance", "Lainnya"];

/// Whether a transaction adds money to or removes money from the balance.
///
/// Serializes to the Indonesian labels used in the ledger file. The lowercase
/// English aliases are accepted so the type can also be parsed from form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money coming in, recorded as "Pemasukan".
    #[serde(rename = "Pemasukan", alias = "income")]
    Income,
    /// Money going out, recorded as "Pengeluaran".
    #[serde(rename = "Pengeluaran", alias = "expense")]
    Expense,
}

impl TransactionType {
    /// The categories a transaction of this type may use.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TransactionType::Income => &INCOME_CATEGORIES,
            TransactionType::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// The Indonesian label shown to the user, matching the ledger file.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Pemasukan",
            TransactionType::Expense => "Pengeluaran",
        }
    }

    /// The value used for this type in form data.
    pub fn form_value(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// A single income or expense record in the ledger.
///
/// The serde field names match the column headers of the ledger file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction happened.
    #[serde(rename = "Tanggal")]
    pub date: Date,
    /// The category the transaction belongs to, e.g. "Makan".
    #[serde(rename = "Kategori")]
    pub category: String,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "Tipe")]
    pub transaction_type: TransactionType,
    /// The amount in whole rupiah.
    #[serde(rename = "Nominal")]
    pub amount: i64,
    /// An optional free-form note.
    #[serde(rename = "Keterangan", default)]
    pub note: String,
}

/// Returns a new list with `transaction` added after the existing rows.
///
/// The input list is left untouched, so callers can compare the ledger before
/// and after the append.
pub fn append(transactions: &[Transaction], transaction: Transaction) -> Vec<Transaction> {
    let mut appended = transactions.to_vec();
    appended.push(transaction);
    appended
}
