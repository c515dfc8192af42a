//! Defines the app level error type and conversions to rendered HTML pages and alerts.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The ledger file exists but could not be read or parsed.
    #[error("could not read the ledger file: {0}")]
    UnreadableLedger(String),

    /// The ledger file could not be written.
    #[error("could not write the ledger file: {0}")]
    UnwritableLedger(String),

    /// The ledger holds no expense rows to aggregate.
    #[error("the ledger contains no expenses")]
    NoExpenses,

    /// The submitted category is not in the list for the transaction type.
    #[error("\"{0}\" is not an allowed category")]
    InvalidCategory(String),

    /// A negative amount was submitted for a new transaction.
    #[error("transaction amounts cannot be negative, got {0}")]
    NegativeAmount(i64),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the ledger lock.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UnreadableLedger(_) => InternalServerError {
                description: "File keuangan tidak bisa dibaca.",
                fix: "Perbaiki atau pindahkan file keuangan lalu muat ulang halaman ini.",
            }
            .into_response(),
            Error::UnwritableLedger(_) => InternalServerError {
                description: "File keuangan tidak bisa ditulis.",
                fix: "Periksa izin berkas pada file keuangan lalu coba lagi.",
            }
            .into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Pengaturan zona waktu tidak valid.",
                fix: &format!(
                    "Zona waktu \"{timezone}\" tidak dikenal. Jalankan ulang server dengan nama \
                    zona waktu kanonis, misalnya \"Asia/Jakarta\"."
                ),
            }
            .into_response(),
            Error::LedgerLockError => InternalServerError::default().into_response(),
            error => {
                // Any errors that are not handled above are not intended to be shown to the client.
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::NegativeAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Nominal tidak valid".to_owned(),
                    details: format!(
                        "Nominal {amount} kurang dari nol. Masukkan nominal 0 atau lebih."
                    ),
                },
            ),
            Error::InvalidCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Kategori tidak valid".to_owned(),
                    details: format!(
                        "\"{category}\" bukan kategori untuk tipe transaksi yang dipilih. \
                        Pilih kategori dari daftar."
                    ),
                },
            ),
            Error::UnreadableLedger(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Gagal membaca file keuangan".to_owned(),
                    details: "File keuangan tidak bisa dibaca. Perbaiki atau pindahkan file itu \
                        lalu coba lagi."
                        .to_owned(),
                },
            ),
            Error::UnwritableLedger(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Gagal menyimpan transaksi".to_owned(),
                    details: "File keuangan tidak bisa ditulis. Tutup program lain yang sedang \
                        membuka file itu lalu coba lagi."
                        .to_owned(),
                },
            ),
            Error::LedgerLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::ErrorSimple {
                    message: "Tidak dapat mengakses catatan keuangan. Coba lagi.".to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Terjadi kesalahan".to_owned(),
                        details: "Kesalahan tak terduga. Periksa log server untuk detailnya."
                            .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;

    use super::Error;

    #[test]
    fn validation_errors_become_bad_request_alerts() {
        let response = Error::NegativeAmount(-5).into_alert_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::InvalidCategory("Makan".to_owned()).into_alert_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn ledger_errors_become_server_error_alerts() {
        let response = Error::UnwritableLedger("disk penuh".to_owned()).into_alert_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::LedgerLockError.into_alert_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
