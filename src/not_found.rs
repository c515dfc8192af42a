//! Defines the template and route handler for the 404 not found page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The page shown when the requested resource does not exist.
pub struct NotFoundError;

impl NotFoundError {
    /// Renders the error page to HTML.
    pub fn into_html(self) -> Html<String> {
        Html(
            error_view(
                "Halaman Tidak Ditemukan",
                "404",
                "Halaman tidak ditemukan.",
                "Periksa kembali alamat yang dimasukkan atau kembali ke beranda.",
            )
            .into_string(),
        )
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.into_html()).into_response()
    }
}

/// Route handler for paths that do not match any other route.
pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
