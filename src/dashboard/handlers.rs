//! Defines the route handler for the dashboard page, which summarises the
//! ledger and lists the recorded transactions.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, link},
    ledger::{LedgerFile, Transaction, totals_by_type},
    navigation::NavBar,
};

use super::{cards::summary_cards, tables::transaction_table};

/// The state needed for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The ledger file that stores all transactions.
    pub ledger_file: Arc<Mutex<LedgerFile>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger_file: state.ledger_file.clone(),
        }
    }
}

/// Renders the dashboard page.
///
/// A ledger file that cannot be read is reported on the page while the
/// summary renders from an empty ledger.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let (transactions, load_error) = state
        .ledger_file
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?
        .load_or_empty();

    let load_alert = load_error.map(|error| {
        tracing::error!("could not load the ledger: {error}");
        Alert::Error {
            message: "Gagal membaca file keuangan".to_owned(),
            details: "Data di bawah mungkin kosong atau tidak lengkap. Perbaiki atau pindahkan \
                file keuangan lalu muat ulang halaman ini."
                .to_owned(),
        }
        .into_html()
    });

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if transactions.is_empty() && load_alert.is_none() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    Ok(dashboard_view(nav_bar, &transactions, load_alert).into_response())
}

fn dashboard_view(
    nav_bar: NavBar,
    transactions: &[Transaction],
    load_alert: Option<Markup>,
) -> Markup {
    let totals = totals_by_type(transactions);

    let content = html! {
        (nav_bar.into_html())
        div class=(PAGE_CONTAINER_STYLE) {
            div class="w-full max-w-4xl" {
                @if let Some(alert) = load_alert {
                    div class="w-full mb-4" { (alert) }
                }
                h2 class="text-xl font-bold mb-4" { "Ringkasan" }
                (summary_cards(totals))
                (transaction_table(transactions))
            }
        }
    };

    base("Dashboard", &[], &content)
}

fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let content = html! {
        (nav_bar.into_html())
        div class=(PAGE_CONTAINER_STYLE) {
            h2 class="text-xl font-bold" { "Belum ada transaksi" }
            p {
                "Catat transaksi pertama lewat halaman "
                (link(endpoints::NEW_TRANSACTION_VIEW, "Tambah Transaksi"))
                "."
            }
        }
    };

    base("Dashboard", &[], &content)
}

#[cfg(test)]
mod dashboard_handler_tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::Response, http::StatusCode};
    use scraper::{Html, Selector};
    use tempfile::TempDir;
    use time::macros::date;

    use crate::ledger::{LedgerFile, Transaction, TransactionType};

    use super::{DashboardState, get_dashboard_page};

    fn new_test_state(directory: &TempDir) -> DashboardState {
        DashboardState {
            ledger_file: Arc::new(Mutex::new(LedgerFile::new(
                directory.path().join("keuanganku.csv"),
            ))),
        }
    }

    fn create_test_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                date: date!(2024 - 01 - 05),
                category: "Gaji".to_owned(),
                transaction_type: TransactionType::Income,
                amount: 100_000,
                note: String::new(),
            },
            Transaction {
                date: date!(2024 - 01 - 10),
                category: "Makan".to_owned(),
                transaction_type: TransactionType::Expense,
                amount: 25_000,
                note: "Makan siang".to_owned(),
            },
        ]
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let directory = TempDir::new().unwrap();
        let state = new_test_state(&directory);
        state
            .ledger_file
            .lock()
            .unwrap()
            .save(&create_test_transactions())
            .unwrap();

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        assert_valid_html(&html);
        assert_table_exists(&html);
    }

    #[tokio::test]
    async fn dashboard_page_shows_totals_and_balance() {
        let directory = TempDir::new().unwrap();
        let state = new_test_state(&directory);
        state
            .ledger_file
            .lock()
            .unwrap()
            .save(&create_test_transactions())
            .unwrap();

        let response = get_dashboard_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Rp100,000"), "got {text}");
        assert!(text.contains("Rp25,000"), "got {text}");
        // The balance card shows income minus expenses.
        assert!(text.contains("Rp75,000"), "got {text}");
    }

    #[tokio::test]
    async fn displays_prompt_text_on_no_data() {
        let directory = TempDir::new().unwrap();
        let state = new_test_state(&directory);

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Belum ada transaksi"), "got {text}");
    }

    #[tokio::test]
    async fn displays_error_and_zeroed_summary_when_ledger_is_unreadable() {
        let directory = TempDir::new().unwrap();
        let state = new_test_state(&directory);
        let path = state.ledger_file.lock().unwrap().path().to_path_buf();
        std::fs::write(path, "bukan,file,keuangan\n1,2,3\n").unwrap();

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Gagal membaca file keuangan"), "got {text}");
        assert!(text.contains("Rp0"), "got {text}");
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(html.errors.is_empty(), "Got HTML parsing errors: {:?}", html.errors);
    }

    #[track_caller]
    fn assert_table_exists(html: &Html) {
        let table_selector = Selector::parse("table").unwrap();
        assert_eq!(html.select(&table_selector).count(), 1);
    }
}
