//! The API endpoints URIs.

/// The root path, redirects to the dashboard page.
pub const ROOT: &str = "/";

/// The dashboard page summarising the ledger.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// The page with the form for recording a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";

/// The page with the expense breakdown chart.
pub const CHART_VIEW: &str = "/chart";

/// The endpoint for creating a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";

/// The endpoint serving the category options for a transaction type.
pub const CATEGORY_OPTIONS_API: &str = "/api/category-options";

/// The endpoint for brewing coffee.
pub const COFFEE: &str = "/coffee";
