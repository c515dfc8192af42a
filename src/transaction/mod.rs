//! The new transaction flow.
//!
//! This module defines:
//! - The page with the form for recording a new transaction.
//! - The endpoint that validates and saves submitted transactions.
//! - The endpoint serving the category options for a transaction type.

mod category_options;
mod create_endpoint;
mod create_page;
mod form;

pub use category_options::get_category_options;
pub use create_endpoint::{CreateTransactionState, create_transaction_endpoint};
pub use create_page::{NewTransactionPageState, get_new_transaction_page};
