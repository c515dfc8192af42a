//! Builds the cards summarising the ledger totals.

use maud::{Markup, html};

use crate::{html::format_rupiah, ledger::LedgerTotals};

/// Styling for a summary card.
const CARD_STYLE: &str = "p-4 bg-white rounded-lg shadow dark:bg-gray-800";

/// Styling for the label of a summary card.
const CARD_LABEL_STYLE: &str = "text-sm font-medium text-gray-500 dark:text-gray-400";

const CARD_VALUE_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const CARD_VALUE_RED_STYLE: &str = "text-red-600 dark:text-red-400";
const CARD_VALUE_NEUTRAL_STYLE: &str = "text-gray-900 dark:text-white";

/// Gets the CSS class for coloring an amount (green for positive, red for
/// negative).
fn amount_color_class(amount: i64) -> &'static str {
    if amount > 0 {
        CARD_VALUE_GREEN_STYLE
    } else if amount < 0 {
        CARD_VALUE_RED_STYLE
    } else {
        CARD_VALUE_NEUTRAL_STYLE
    }
}

/// Creates the row of cards showing income, expenses and the balance.
pub(super) fn summary_cards(totals: LedgerTotals) -> Markup {
    html! {
        div class="grid grid-cols-1 gap-4 sm:grid-cols-3 w-full mb-6" {
            (card("Pemasukan", totals.income, CARD_VALUE_GREEN_STYLE))
            (card("Pengeluaran", totals.expense, CARD_VALUE_RED_STYLE))
            (card("Saldo", totals.balance(), amount_color_class(totals.balance())))
        }
    }
}

fn card(label: &str, amount: i64, value_style: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            p class=(CARD_LABEL_STYLE) { (label) }
            p class={"text-2xl font-semibold " (value_style)} { (format_rupiah(amount)) }
        }
    }
}
