//! Defines the alert messages shown after an action fails or degrades.

use maud::{Markup, html};

/// Styling for the box of an error alert.
const ALERT_ERROR_STYLE: &str = "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
    dark:bg-gray-800 dark:text-red-400";

/// A message for the user about the outcome of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something went wrong, with details on what the user can do about it.
    Error {
        /// A short description of what went wrong.
        message: String,
        /// What happened and what the user can do about it.
        details: String,
    },
    /// Something went wrong, in situations where one line says it all.
    ErrorSimple {
        /// A short description of what went wrong.
        message: String,
    },
}

impl Alert {
    /// Renders the alert.
    ///
    /// The markup can be swapped into the alert container by htmx or embedded
    /// directly in a page.
    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/alerts/
        match self {
            Alert::Error { message, details } => html! {
                div class=(ALERT_ERROR_STYLE) role="alert" {
                    p class="font-medium" { (message) }
                    p { (details) }
                }
            },
            Alert::ErrorSimple { message } => html! {
                div class=(ALERT_ERROR_STYLE) role="alert" {
                    p class="font-medium" { (message) }
                }
            },
        }
    }
}

#[cfg(test)]
mod alert_tests {
    use super::Alert;

    #[test]
    fn error_alert_renders_message_and_details() {
        let alert = Alert::Error {
            message: "Gagal menyimpan transaksi".to_owned(),
            details: "Coba lagi nanti.".to_owned(),
        };

        let html = alert.into_html().into_string();

        assert!(html.contains("Gagal menyimpan transaksi"), "got {html}");
        assert!(html.contains("Coba lagi nanti."), "got {html}");
        assert!(html.contains("role=\"alert\""), "got {html}");
    }

    #[test]
    fn simple_error_alert_renders_message() {
        let alert = Alert::ErrorSimple {
            message: "Coba lagi.".to_owned(),
        };

        let html = alert.into_html().into_string();

        assert!(html.contains("Coba lagi."), "got {html}");
    }
}
