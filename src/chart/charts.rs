//! Builds the expense breakdown chart.

use charming::{
    Chart,
    component::Title,
    element::{JsFunction, Label, Tooltip, Trigger},
    series::Pie,
};
use maud::PreEscaped;

use crate::html::HeadElement;

/// A chart along with the HTML element ID to render it into.
pub(super) struct ExpenseChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Creates a pie chart showing the share of expenses per category.
pub(super) fn expense_breakdown_chart(expense_totals: &[(String, i64)]) -> ExpenseChart {
    let data: Vec<(f64, &str)> = expense_totals
        .iter()
        .map(|(category, amount)| (*amount as f64, category.as_str()))
        .collect();

    let chart = Chart::new()
        .title(Title::new().text("Pengeluaran per Kategori").left("center"))
        .tooltip(rupiah_tooltip())
        .series(
            Pie::new()
                .name("Pengeluaran")
                .radius("55%")
                .data(data)
                .label(Label::new().formatter("{b}: {d}%")),
        );

    ExpenseChart {
        id: "expense-breakdown-chart",
        options: chart.to_string(),
    }
}

/// Creates the script that renders the given charts once the page has loaded.
pub(super) fn charts_script(charts: &[ExpenseChart]) -> HeadElement {
    let script = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);
                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{script}\n}});"
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

#[inline]
fn rupiah_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('id-ID', { style: 'currency', \
        currency: 'IDR', maximumFractionDigits: 0 }); \
        return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

fn rupiah_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Item)
        .value_formatter(rupiah_formatter())
}
