//! Defines the route handler for the expense chart page.

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
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, format_rupiah, link},
    ledger::{LedgerFile, expense_by_category, top_expense_category},
    navigation::NavBar,
};

use super::charts::{charts_script, expense_breakdown_chart};

/// The state needed for the expense chart page.
#[derive(Debug, Clone)]
pub struct ChartState {
    /// The ledger file that stores all transactions.
    pub ledger_file: Arc<Mutex<LedgerFile>>,
}

impl FromRef<AppState> for ChartState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger_file: state.ledger_file.clone(),
        }
    }
}

/// Renders the page with the expense breakdown chart.
///
/// A ledger without expense rows gets a prompt instead of an empty chart.
pub async fn get_chart_page(State(state): State<ChartState>) -> Result<Response, Error> {
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
            details: "Grafik mungkin kosong atau tidak lengkap. Perbaiki atau pindahkan file \
                keuangan lalu muat ulang halaman ini."
                .to_owned(),
        }
        .into_html()
    });

    let nav_bar = NavBar::new(endpoints::CHART_VIEW);

    match top_expense_category(&transactions) {
        Ok((top_category, top_amount)) => {
            let expense_totals = expense_by_category(&transactions);

            Ok(
                chart_view(nav_bar, &expense_totals, &top_category, top_amount, load_alert)
                    .into_response(),
            )
        }
        Err(Error::NoExpenses) => Ok(chart_no_data_view(nav_bar, load_alert).into_response()),
        Err(error) => Err(error),
    }
}

fn chart_view(
    nav_bar: NavBar,
    expense_totals: &[(String, i64)],
    top_category: &str,
    top_amount: i64,
    load_alert: Option<Markup>,
) -> Markup {
    let charts = [expense_breakdown_chart(expense_totals)];
    let scripts = [
        HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js".to_owned(),
        ),
        charts_script(&charts),
    ];

    let content = html! {
        (nav_bar.into_html())
        div class=(PAGE_CONTAINER_STYLE) {
            div class="w-full max-w-2xl" {
                @if let Some(alert) = load_alert {
                    div class="w-full mb-4" { (alert) }
                }
                div id=(charts[0].id) class="w-full h-80" {}
                p class="mt-4 text-lg text-center" {
                    "Pengeluaran terbesar: "
                    span class="font-semibold" { (top_category) }
                    " (" (format_rupiah(top_amount)) ")"
                }
            }
        }
    };

    base("Grafik Pengeluaran", &scripts, &content)
}

fn chart_no_data_view(nav_bar: NavBar, load_alert: Option<Markup>) -> Markup {
    let content = html! {
        (nav_bar.into_html())
        div class=(PAGE_CONTAINER_STYLE) {
            @if let Some(alert) = load_alert {
                div class="w-full max-w-md mb-4" { (alert) }
            }
            h2 class="text-xl font-bold" { "Belum ada pengeluaran" }
            p {
                "Grafik muncul setelah ada pengeluaran yang dicatat lewat halaman "
                (link(endpoints::NEW_TRANSACTION_VIEW, "Tambah Transaksi"))
                "."
            }
        }
    };

    base("Grafik Pengeluaran", &[], &content)
}

#[cfg(test)]
mod chart_handler_tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::Response, http::StatusCode};
    use scraper::{Html, Selector};
    use tempfile::TempDir;
    use time::macros::date;

    use crate::ledger::{LedgerFile, Transaction, TransactionType};

    use super::{ChartState, get_chart_page};

    fn new_test_state(directory: &TempDir) -> ChartState {
        ChartState {
            ledger_file: Arc::new(Mutex::new(LedgerFile::new(
                directory.path().join("keuanganku.csv"),
            ))),
        }
    }

    fn create_test_transaction(
        transaction_type: TransactionType,
        category: &str,
        amount: i64,
    ) -> Transaction {
        Transaction {
            date: date!(2024 - 01 - 10),
            category: category.to_owned(),
            transaction_type,
            amount,
            note: String::new(),
        }
    }

    #[tokio::test]
    async fn chart_page_shows_breakdown_and_top_category() {
        let directory = TempDir::new().unwrap();
        let state = new_test_state(&directory);
        state
            .ledger_file
            .lock()
            .unwrap()
            .save(&[
                create_test_transaction(TransactionType::Expense, "Makan", 50_000),
                create_test_transaction(TransactionType::Expense, "Transport", 30_000),
            ])
            .unwrap();

        let response = get_chart_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        assert_valid_html(&html);
        assert_chart_exists(&html, "expense-breakdown-chart");

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Pengeluaran terbesar"), "got {text}");
        assert!(text.contains("Makan"), "got {text}");
        assert!(text.contains("Rp50,000"), "got {text}");
    }

    #[tokio::test]
    async fn chart_page_shows_prompt_when_there_are_no_expenses() {
        let directory = TempDir::new().unwrap();
        let state = new_test_state(&directory);
        state
            .ledger_file
            .lock()
            .unwrap()
            .save(&[create_test_transaction(
                TransactionType::Income,
                "Gaji",
                7_500_000,
            )])
            .unwrap();

        let response = get_chart_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Belum ada pengeluaran"), "got {text}");

        let chart_selector = Selector::parse("#expense-breakdown-chart").unwrap();
        assert_eq!(html.select(&chart_selector).count(), 0);
    }

    #[tokio::test]
    async fn chart_page_reports_unreadable_ledger() {
        let directory = TempDir::new().unwrap();
        let state = new_test_state(&directory);
        let path = state.ledger_file.lock().unwrap().path().to_path_buf();
        std::fs::write(path, "bukan,file,keuangan\n1,2,3\n").unwrap();

        let response = get_chart_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Gagal membaca file keuangan"), "got {text}");
        assert!(text.contains("Belum ada pengeluaran"), "got {text}");
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
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let chart_selector = Selector::parse(&format!("#{chart_id}")).unwrap();
        assert_eq!(html.select(&chart_selector).count(), 1, "expected chart {chart_id}");
    }
}
