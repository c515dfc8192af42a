//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    endpoints,
    ledger::{LedgerFile, Transaction, TransactionType, append},
};

/// The state needed for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The ledger file that stores all transactions.
    pub ledger_file: Arc<Mutex<LedgerFile>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger_file: state.ledger_file.clone(),
        }
    }
}

/// The data submitted from the new transaction form.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// When the transaction happened.
    pub date: Date,
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// The category the transaction belongs to.
    pub category: String,
    /// The amount in whole rupiah.
    pub amount: i64,
    /// An optional free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Route handler that validates the submitted form and appends the
/// transaction to the ledger.
///
/// Validation failures and save failures both respond with an alert. The
/// redirect to the dashboard is only sent once the ledger file has been
/// written.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    if form.amount < 0 {
        return Error::NegativeAmount(form.amount).into_alert_response();
    }

    if !form
        .transaction_type
        .categories()
        .contains(&form.category.as_str())
    {
        return Error::InvalidCategory(form.category).into_alert_response();
    }

    let transaction = Transaction {
        date: form.date,
        category: form.category,
        transaction_type: form.transaction_type,
        amount: form.amount,
        note: form.note.unwrap_or_default(),
    };

    let ledger_file = match state.ledger_file.lock() {
        Ok(ledger_file) => ledger_file,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    let (transactions, load_error) = ledger_file.load_or_empty();

    if let Some(error) = load_error {
        // The new transaction is still recorded, the rewritten file starts over
        // from the rows that could be read.
        tracing::warn!("appending to an empty ledger, the file could not be read: {error}");
    }

    let transactions = append(&transactions, transaction);

    if let Err(error) = ledger_file.save(&transactions) {
        tracing::error!("could not save the ledger: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
