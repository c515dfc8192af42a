//! Defines the CSV file that stores the ledger and how it is read and written.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, ledger::Transaction};

/// The column headers of the ledger file, in the order they are written.
const LEDGER_COLUMNS: [&str; 5] = ["Tanggal", "Kategori", "Tipe", "Nominal", "Keterangan"];

/// The CSV file that stores all transactions.
///
/// The file holds one header row followed by one row per transaction, oldest
/// first. Reads and writes always cover the whole file.
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Creates a handle for the ledger file at `path`.
    ///
    /// The file itself is not touched until [`LedgerFile::load`] or
    /// [`LedgerFile::save`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all transactions from the ledger file in file order.
    ///
    /// A missing file is not an error, it yields an empty list. A file that
    /// exists but cannot be read or parsed yields [`Error::UnreadableLedger`].
    pub fn load(&self) -> Result<Vec<Transaction>, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                tracing::error!("could not read {}: {error}", self.path.display());
                return Err(Error::UnreadableLedger(error.to_string()));
            }
        };

        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        let mut transactions = Vec::new();

        for record in reader.deserialize() {
            let transaction = record.map_err(|error| {
                tracing::error!("could not parse {}: {error}", self.path.display());
                Error::UnreadableLedger(error.to_string())
            })?;

            transactions.push(transaction);
        }

        Ok(transactions)
    }

    /// Reads all transactions, falling back to an empty list if the file
    /// cannot be read.
    ///
    /// The error, if any, is returned alongside the empty list so callers can
    /// tell the user while still rendering something.
    pub fn load_or_empty(&self) -> (Vec<Transaction>, Option<Error>) {
        match self.load() {
            Ok(transactions) => (transactions, None),
            Err(error) => (Vec::new(), Some(error)),
        }
    }

    /// Writes `transactions` to the ledger file, replacing its contents.
    ///
    /// The rows are serialized before the file is opened, so a serialization
    /// failure leaves an existing file untouched.
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(LEDGER_COLUMNS)
            .map_err(|error| Error::UnwritableLedger(error.to_string()))?;

        for transaction in transactions {
            writer
                .serialize(transaction)
                .map_err(|error| Error::UnwritableLedger(error.to_string()))?;
        }

        let buffer = writer
            .into_inner()
            .map_err(|error| Error::UnwritableLedger(error.to_string()))?;

        fs::write(&self.path, buffer).map_err(|error| {
            tracing::error!("could not write {}: {error}", self.path.display());
            Error::UnwritableLedger(error.to_string())
        })
    }
}
