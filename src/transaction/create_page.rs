//! Defines the page with the form for recording a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, loading_spinner, rupiah_input_styles,
    },
    ledger::TransactionType,
    navigation::NavBar,
    timezone::today_in,
};

use super::form::{TransactionFormDefaults, transaction_form_fields};

/// The state needed for the new transaction page.
#[derive(Debug, Clone)]
pub struct NewTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page with the form for recording a new transaction.
///
/// The form defaults to an expense on today's date in the configured
/// timezone.
pub async fn get_new_transaction_page(
    State(state): State<NewTransactionPageState>,
) -> Result<Response, Error> {
    let Some(today) = today_in(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Err(Error::InvalidTimezoneError(state.local_timezone));
    };

    let defaults = TransactionFormDefaults {
        transaction_type: TransactionType::Expense,
        date: today,
    };
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW);

    Ok(new_transaction_view(nav_bar, &defaults).into_response())
}

fn new_transaction_view(nav_bar: NavBar, defaults: &TransactionFormDefaults) -> Markup {
    let content = html! {
        (nav_bar.into_html())
        div class=(FORM_CONTAINER_STYLE) {
            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Tambah Transaksi" }
                (transaction_form_fields(defaults))
                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE) {
                    span id="indicator" class="inline htmx-indicator" { (loading_spinner()) }
                    " Simpan"
                }
            }
        }
    };

    base("Tambah Transaksi", &[rupiah_input_styles()], &content)
}

#[cfg(test)]
mod new_transaction_page_tests {
    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
    };
    use scraper::{ElementRef, Html, Selector};

    use crate::{Error, endpoints};

    use super::{NewTransactionPageState, get_new_transaction_page};

    fn new_test_state() -> NewTransactionPageState {
        NewTransactionPageState {
            local_timezone: "Asia/Jakarta".to_owned(),
        }
    }

    #[tokio::test]
    async fn page_displays_form() {
        let response = get_new_transaction_page(State(new_test_state()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        assert_valid_html(&html);

        let form = assert_correct_form(&html);
        assert_correct_inputs(&form);
        assert_has_submit_button(&form);
    }

    #[tokio::test]
    async fn page_reports_invalid_timezone() {
        let state = NewTransactionPageState {
            local_timezone: "Not/AZone".to_owned(),
        };

        let result = get_new_transaction_page(State(state)).await;

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
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
    fn assert_correct_form(html: &Html) -> ElementRef<'_> {
        let form_selector = Selector::parse("form").unwrap();
        let forms: Vec<_> = html.select(&form_selector).collect();
        assert_eq!(forms.len(), 1, "expected exactly one form");

        let form = forms[0];
        assert_eq!(form.attr("hx-post"), Some(endpoints::TRANSACTIONS_API));

        form
    }

    #[track_caller]
    fn assert_correct_inputs(form: &ElementRef<'_>) {
        let expected_input_types = vec![("amount", "number"), ("date", "date"), ("note", "text")];

        for (name, element_type) in expected_input_types {
            let selector = Selector::parse(&format!("input[type={element_type}]")).unwrap();
            let inputs: Vec<_> = form.select(&selector).collect();
            assert_eq!(inputs.len(), 1, "expected one input of type {element_type}");
            assert_eq!(inputs[0].attr("name"), Some(name));
        }

        let radio_selector = Selector::parse("input[type=radio]").unwrap();
        assert_eq!(form.select(&radio_selector).count(), 2, "expected two radio inputs");

        let select_selector = Selector::parse("select[name=category]").unwrap();
        assert_eq!(form.select(&select_selector).count(), 1, "expected a category select");
    }

    #[track_caller]
    fn assert_has_submit_button(form: &ElementRef<'_>) {
        let button_selector = Selector::parse("button").unwrap();
        let buttons: Vec<_> = form.select(&button_selector).collect();
        assert_eq!(buttons.len(), 1, "expected exactly one button");
        assert_eq!(buttons[0].attr("type"), Some("submit"));
    }
}
