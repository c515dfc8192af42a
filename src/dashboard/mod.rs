//! The dashboard page.
//!
//! Summarises the ledger with income, expense and balance figures and lists
//! the recorded transactions, newest first.

mod cards;
mod handlers;
mod tables;

pub use handlers::{DashboardState, get_dashboard_page};
