//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};

use crate::{
    AppState,
    chart::get_chart_page,
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, get_category_options, get_new_transaction_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_page))
        .route(endpoints::CHART_VIEW, get(get_chart_page))
        .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
        .route(endpoints::CATEGORY_OPTIONS_API, get(get_category_options))
        .route(endpoints::COFFEE, get(get_coffee))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use serde::Serialize;
    use tempfile::TempDir;

    use crate::{AppState, endpoints, ledger::LedgerFile, routing::build_router};

    fn new_test_server(directory: &TempDir) -> TestServer {
        let state = AppState::new(
            LedgerFile::new(directory.path().join("keuanganku.csv")),
            "Asia/Jakarta".to_owned(),
        );

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let directory = TempDir::new().unwrap();
        let server = new_test_server(&directory);

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_see_other();
        assert_eq!(
            response.header("location"),
            endpoints::DASHBOARD_VIEW,
            "expected a redirect to the dashboard"
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found_page() {
        let directory = TempDir::new().unwrap();
        let server = new_test_server(&directory);

        let response = server.get("/does-not-exist").await;

        response.assert_status_not_found();
        assert!(response.text().contains("404"));
    }

    #[tokio::test]
    async fn coffee_route_returns_teapot() {
        let directory = TempDir::new().unwrap();
        let server = new_test_server(&directory);

        let response = server.get(endpoints::COFFEE).await;

        assert_eq!(response.status_code(), 418);
        assert_eq!(response.text(), "I'm a teapot");
    }

    #[tokio::test]
    async fn dashboard_renders_without_a_ledger_file() {
        let directory = TempDir::new().unwrap();
        let server = new_test_server(&directory);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Belum ada transaksi"));
    }

    #[tokio::test]
    async fn category_options_follow_the_transaction_type() {
        let directory = TempDir::new().unwrap();
        let server = new_test_server(&directory);

        let response = server
            .get(endpoints::CATEGORY_OPTIONS_API)
            .add_query_param("transaction_type", "income")
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Gaji"));
    }

    #[derive(Serialize)]
    struct NewTransactionForm<'a> {
        date: &'a str,
        transaction_type: &'a str,
        category: &'a str,
        amount: i64,
        note: &'a str,
    }

    #[tokio::test]
    async fn created_transaction_shows_up_on_the_dashboard() {
        let directory = TempDir::new().unwrap();
        let server = new_test_server(&directory);

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&NewTransactionForm {
                date: "2024-01-10",
                transaction_type: "expense",
                category: "Makan",
                amount: 50_000,
                note: "Makan siang",
            })
            .await;

        response.assert_status_see_other();

        let dashboard = server.get(endpoints::DASHBOARD_VIEW).await.text();
        assert!(dashboard.contains("Makan siang"), "got {dashboard}");
        assert!(dashboard.contains("-Rp50,000"), "got {dashboard}");
    }
}
