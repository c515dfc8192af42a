//! Defines the endpoint serving the category options for a transaction type.

use axum::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::ledger::TransactionType;

/// The query parameters for the category options endpoint.
#[derive(Debug, Deserialize)]
pub struct CategoryOptionsQuery {
    /// The transaction type to list the categories of.
    pub transaction_type: TransactionType,
}

/// Creates the option elements for the categories of the given transaction
/// type.
pub fn category_options(transaction_type: TransactionType) -> Markup {
    html! {
        @for category in transaction_type.categories() {
            option value=(category) { (category) }
        }
    }
}

/// Route handler serving the category options for a transaction type.
///
/// The new transaction form swaps these options into its category select when
/// the transaction type changes.
pub async fn get_category_options(Query(query): Query<CategoryOptionsQuery>) -> Markup {
    category_options(query.transaction_type)
}
