//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar.
#[derive(Clone)]
struct Link<'a> {
    /// The URL the link navigates to.
    url: &'a str,
    /// The text shown for the link.
    title: &'a str,
    /// Whether the link points to the page being rendered.
    is_current: bool,
}

impl Link<'_> {
    fn into_desktop_html(self) -> Markup {
        let class = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100 lg:hover:bg-transparent lg:hover:text-blue-700 lg:p-0 dark:text-white dark:hover:bg-gray-700 dark:hover:text-white lg:dark:hover:text-blue-500 lg:dark:hover:bg-transparent"
        };

        html! {
            a href=(self.url) class=(class) aria-current=[self.is_current.then_some("page")] {
                (self.title)
            }
        }
    }
}

/// The navigation bar of the application.
pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Creates the navigation bar, marking `active_endpoint` as the current
    /// page.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::DASHBOARD_VIEW,
                title: "Dashboard",
                is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
            },
            Link {
                url: endpoints::NEW_TRANSACTION_VIEW,
                title: "Tambah Transaksi",
                is_current: active_endpoint == endpoints::NEW_TRANSACTION_VIEW,
            },
            Link {
                url: endpoints::CHART_VIEW,
                title: "Grafik Pengeluaran",
                is_current: active_endpoint == endpoints::CHART_VIEW,
            },
        ];

        NavBar { links }
    }

    /// Renders the navigation bar.
    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        let bottom_link_class = |is_current: bool| {
            if is_current {
                "flex flex-col items-center justify-center gap-1 rounded-lg py-2 text-xs font-medium text-blue-600 dark:text-blue-500"
            } else {
                "flex flex-col items-center justify-center gap-1 rounded-lg py-2 text-xs font-medium text-gray-500 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-500"
            }
        };

        html! {
            nav class="bg-white border-gray-200 dark:bg-gray-900" {
                div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4" {
                    a href=(endpoints::DASHBOARD_VIEW) class="flex items-center space-x-3" {
                        span class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white" {
                            "Keuanganku"
                        }
                    }
                    div class="hidden w-full lg:block lg:w-auto" {
                        ul class="font-medium flex flex-col p-4 lg:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 lg:flex-row lg:space-x-8 lg:mt-0 lg:border-0 lg:bg-white dark:bg-gray-800 lg:dark:bg-gray-900 dark:border-gray-700" {
                            @for link in self.links.clone() {
                                li { (link.into_desktop_html()) }
                            }
                        }
                    }
                }
            }
            // Bottom navigation for small screens.
            nav class="fixed inset-x-0 bottom-0 z-40 lg:hidden" {
                div class="mx-3 mb-3 rounded-xl border border-gray-200 bg-white/90 shadow-lg backdrop-blur dark:border-gray-700 dark:bg-gray-800/90" {
                    ul class="grid grid-cols-3 gap-2 p-2" aria-label="Primary" {
                        @for link in self.links {
                            li {
                                a
                                    href=(link.url)
                                    class=(bottom_link_class(link.is_current))
                                    aria-current=[link.is_current.then_some("page")]
                                {
                                    span class="truncate" { (link.title) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
