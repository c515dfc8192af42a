//! Defines the expense chart page:
//! - a pie chart breaking down expenses by category,
//! - a callout naming the category with the largest total expense.

mod charts;
mod handlers;

pub use handlers::{ChartState, get_chart_page};
