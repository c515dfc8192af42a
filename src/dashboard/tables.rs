//! Builds the table listing the recorded transactions.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_ROW_STYLE, format_rupiah},
    ledger::{Transaction, TransactionType},
};

const TABLE_HEADER_CELL_STYLE: &str = "px-6 py-3 min-w-[100px]";
const TABLE_DATA_CELL_STYLE: &str = "whitespace-nowrap";
const TABLE_CELL_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const TABLE_CELL_RED_STYLE: &str = "text-red-600 dark:text-red-400";

/// Creates a table of the recorded transactions, newest first.
///
/// Renders nothing when there are no transactions.
pub(super) fn transaction_table(transactions: &[Transaction]) -> Markup {
    if transactions.is_empty() {
        return html! {};
    }

    html! {
        div class="w-full" {
            h3 class="text-xl font-semibold mb-4" { "Riwayat Transaksi" }
            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class="text-xs text-gray-900 uppercase bg-gray-100 dark:bg-gray-700 dark:text-gray-400" {
                        tr {
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Tanggal" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Kategori" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Tipe" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Nominal" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Keterangan" }
                        }
                    }
                    tbody {
                        // The most recently recorded transactions come first.
                        @for transaction in transactions.iter().rev() {
                            (table_row(transaction))
                        }
                    }
                }
            }
        }
    }
}

fn table_row(transaction: &Transaction) -> Markup {
    let amount_style = match transaction.transaction_type {
        TransactionType::Income => TABLE_CELL_GREEN_STYLE,
        TransactionType::Expense => TABLE_CELL_RED_STYLE,
    };

    html! {
        tr class=(TABLE_ROW_STYLE) {
            th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 whitespace-nowrap dark:text-white"} {
                (transaction.date)
            }
            td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)} { (transaction.category) }
            td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)} {
                (transaction.transaction_type.label())
            }
            td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE) " " (amount_style)} {
                (format_rupiah(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE) { (transaction.note) }
        }
    }
}
