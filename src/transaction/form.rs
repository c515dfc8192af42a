use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    ledger::TransactionType,
};

use super::category_options::category_options;

/// The initial values for the new transaction form fields.
pub struct TransactionFormDefaults {
    /// The transaction type to preselect.
    pub transaction_type: TransactionType,
    /// The date to prefill, usually today.
    pub date: Date,
}

/// Creates the input fields for the new transaction form.
///
/// Selecting a transaction type swaps the matching category options into the
/// category select.
pub fn transaction_form_fields(defaults: &TransactionFormDefaults) -> Markup {
    let is_expense = matches!(defaults.transaction_type, TransactionType::Expense);

    html! {
        fieldset class="space-y-2" {
            legend class=(FORM_LABEL_STYLE) { "Tipe" }
            div class=(FORM_RADIO_GROUP_STYLE) {
                div class="flex items-center gap-3" {
                    input
                        name="transaction_type"
                        id="transaction-type-expense"
                        type="radio"
                        value=(TransactionType::Expense.form_value())
                        checked[is_expense]
                        required
                        tabindex="0"
                        hx-get=(endpoints::CATEGORY_OPTIONS_API)
                        hx-target="#category-select"
                        class=(FORM_RADIO_INPUT_STYLE);
                    label for="transaction-type-expense" class=(FORM_RADIO_LABEL_STYLE) {
                        (TransactionType::Expense.label())
                    }
                }
                div class="flex items-center gap-3" {
                    input
                        name="transaction_type"
                        id="transaction-type-income"
                        type="radio"
                        value=(TransactionType::Income.form_value())
                        checked[!is_expense]
                        required
                        tabindex="0"
                        hx-get=(endpoints::CATEGORY_OPTIONS_API)
                        hx-target="#category-select"
                        class=(FORM_RADIO_INPUT_STYLE);
                    label for="transaction-type-income" class=(FORM_RADIO_LABEL_STYLE) {
                        (TransactionType::Income.label())
                    }
                }
            }
        }

        div {
            label for="category-select" class=(FORM_LABEL_STYLE) { "Kategori" }
            select
                name="category"
                id="category-select"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                (category_options(defaults.transaction_type))
            }
        }

        div {
            label for="date" class=(FORM_LABEL_STYLE) { "Tanggal" }
            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div {
            label for="amount" class=(FORM_LABEL_STYLE) { "Nominal" }
            div class="input-wrapper w-full" {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    min="0"
                    step="1"
                    placeholder="50000"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div {
            label for="note" class=(FORM_LABEL_STYLE) { "Keterangan (opsional)" }
            input
                name="note"
                id="note"
                type="text"
                placeholder="Makan siang"
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
