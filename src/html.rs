//! Defines the base HTML template, shared styling and formatting helpers.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

/// Styling for links.
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 dark:text-blue-500 \
    dark:hover:text-blue-400 underline";

/// Styling for the primary button of a form.
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 dark:bg-blue-600 \
    disabled:bg-blue-700 hover:enabled:bg-blue-600 hover:enabled:dark:bg-blue-700 text-white \
    rounded";

/// Styling for the container of a form.
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 mx-auto lg:py-0 \
    max-w-md text-gray-900 dark:text-white";

/// Styling for form labels.
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

/// Styling for text, number, date and select inputs.
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm text-gray-900 \
    dark:text-white disabled:text-gray-500 bg-gray-50 dark:bg-gray-700 border border-gray-300 \
    dark:border-gray-600 dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

/// Styling for the container of a radio button group.
pub const FORM_RADIO_GROUP_STYLE: &str = "flex flex-col gap-2";

/// Styling for radio inputs.
pub const FORM_RADIO_INPUT_STYLE: &str = "peer h-4 w-4 border-gray-300 text-blue-600 \
    focus:ring-blue-600 dark:border-gray-600 dark:bg-gray-700";

/// Styling for the label of a radio input.
pub const FORM_RADIO_LABEL_STYLE: &str = "flex-1 rounded border border-gray-300 px-3 py-2 \
    text-sm text-gray-900 dark:text-white dark:border-gray-600 peer-checked:border-blue-600 \
    peer-checked:text-blue-600 peer-checked:dark:text-blue-500";

/// Styling for table rows.
pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

/// Styling for table cells.
pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

/// Styling for the container of a page.
pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 \
    text-gray-900 dark:text-white";

/// An element to add to the head of an HTML page.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
    /// CSS source code.
    Style(PreEscaped<String>),
}

/// Creates a base HTML template with the given title and content.
///
/// `head_elements` are added to the head of the page after the shared scripts
/// and styles.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Keuanganku" }
                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script
                    src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js"
                    integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz"
                    crossorigin="anonymous" {}
                script
                    src="https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4/dist/response-targets.min.js"
                    integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg"
                    crossorigin="anonymous" {}
                style {
                    r#"
                    #indicator.htmx-indicator { display: none; }
                    #indicator.htmx-request.htmx-indicator { display: inline; }
                    /* Keep chart tooltips below the fixed bottom nav, but above page content. */
                    .echarts-tooltip { z-index: 30 !important; }
                    "#
                }
                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptSource(text) => script { (text) },
                        HeadElement::ScriptLink(path) => script src=(path) {},
                        HeadElement::Style(text) => style { (text) },
                    }
                }
            }
            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 pb-[calc(5rem+env(safe-area-inset-bottom))] lg:pb-0"
            {
                (content)
                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;" {}
            }
        }
    }
}

/// Creates an error page with a large header, a description of the error and
/// a suggested fix.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html! {
        section class="bg-white dark:bg-gray-900" {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6" {
                div class="mx-auto max-w-screen-sm text-center" {
                    h1 class="mb-4 text-7xl tracking-tight font-extrabold lg:text-9xl text-blue-600 dark:text-blue-500" {
                        (header)
                    }
                    p class="mb-4 text-3xl tracking-tight font-bold text-gray-900 md:text-4xl dark:text-white" {
                        (description)
                    }
                    p class="mb-4 text-lg font-light text-gray-500 dark:text-gray-400" {
                        (fix)
                    }
                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:focus:ring-blue-900 font-medium rounded-lg text-sm px-5 py-2.5 text-center my-4"
                    {
                        "Kembali ke Beranda"
                    }
                }
            }
        }
    };

    base(title, &[], &content)
}

/// Creates a loading spinner to show while a request is in flight.
pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            class="inline w-4 h-4 text-gray-200 animate-spin dark:text-gray-600 fill-white"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="currentColor" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentFill" {}
        }
    }
}

/// Creates the styles for displaying "Rp" before a numeric input field.
///
/// The input element should be wrapped in a container with the class
/// `input-wrapper`.
pub fn rupiah_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
            display: inline-block;
        }

        .input-wrapper input[type="number"] {
            padding-left: 2.2rem;
        }

        .input-wrapper::before {
            content: 'Rp';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

/// Formats an amount in whole rupiah with a thousands separator, e.g.
/// "Rp50,000".
pub fn format_rupiah(amount: i64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("Rp")
            .unwrap()
            .precision(Precision::Decimals(0))
    });
    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-Rp")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    if amount < 0 {
        negative_fmt.fmt_string(amount.unsigned_abs())
    } else if amount > 0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "Rp0".to_owned()
    }
}

/// Creates a link with the default link styling.
pub fn link(url: &str, text: &str) -> Markup {
    html! {
        a href=(url) class=(LINK_STYLE) { (text) }
    }
}

#[cfg(test)]
mod format_rupiah_tests {
    use super::format_rupiah;

    #[test]
    fn formats_thousands_with_separator() {
        assert_eq!(format_rupiah(50_000), "Rp50,000");
        assert_eq!(format_rupiah(7_500_000), "Rp7,500,000");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_rupiah(0), "Rp0");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_rupiah(-50_000), "-Rp50,000");
    }
}
