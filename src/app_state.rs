//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::ledger::LedgerFile;

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ledger file that stores all transactions.
    ///
    /// The mutex serializes read-modify-write cycles so concurrent requests
    /// cannot interleave their writes to the file.
    pub ledger_file: Arc<Mutex<LedgerFile>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl AppState {
    /// Creates the application state for the server.
    pub fn new(ledger_file: LedgerFile, local_timezone: String) -> Self {
        Self {
            ledger_file: Arc::new(Mutex::new(ledger_file)),
            local_timezone,
        }
    }
}
