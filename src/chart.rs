//! Builds and displays the monthly spending chart.
//!
//! One line series tracks the overall monthly totals and one series per
//! configured category tracks that category's totals, all sharing a
//! month-labelled x-axis. The chart is written out as a self-contained HTML
//! page; nothing flows back into the engine from here.

use std::{fs, path::Path};

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, Tooltip, Trigger},
    series::Line,
};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{Error, category::CategorySet, statistics::MonthStatistic};

/// Build the spending chart for the given months.
///
/// `statistics` provides both the x-axis (one label per month, in input
/// order) and the series values; `categories` determines which per-category
/// series appear and in which order.
pub fn spending_chart(categories: &CategorySet, statistics: &[MonthStatistic]) -> Chart {
    let labels: Vec<String> = statistics
        .iter()
        .map(|statistic| statistic.month.to_string())
        .collect();
    let totals: Vec<f64> = statistics
        .iter()
        .map(|statistic| chart_value(statistic.total))
        .collect();

    let mut chart = Chart::new()
        .title(Title::new().text("Monthly spending"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().top(30))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Line::new().name("Total").data(totals));

    for (index, category) in categories.iter().enumerate() {
        let values: Vec<f64> = statistics
            .iter()
            .map(|statistic| chart_value(statistic.category_totals[index].1))
            .collect();

        chart = chart.series(Line::new().name(category.as_ref()).data(values));
    }

    chart
}

/// Write `chart` to a self-contained HTML page at `path`.
///
/// Fire-and-forget from the engine's point of view: nothing is returned
/// beyond success or failure of the write itself.
pub fn show_chart(chart: &Chart, path: &Path) -> Result<(), Error> {
    fs::write(path, chart_page(chart))?;
    tracing::info!("saved the spending chart to {}", path.display());

    Ok(())
}

// Chart values are display-only, so the loss-free decimal arithmetic of the
// statistics engine does not need to survive the conversion.
fn chart_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

fn chart_page(chart: &Chart) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Monthly spending</title>
    <script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>
</head>
<body>
    <div id="chart" style="width: 900px; height: 600px;"></div>
    <script>
        const chart = echarts.init(document.getElementById("chart"));
        chart.setOption({});
        window.addEventListener('resize', chart.resize);
    </script>
</body>
</html>
"#,
        chart.to_string()
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal::Decimal;
    use time::macros::date;

    use super::{show_chart, spending_chart};
    use crate::{
        category::{CategoryName, CategorySet},
        statistics::compute_statistics,
        transaction::Transaction,
    };

    fn test_categories() -> CategorySet {
        CategorySet::new(&["baby", "regular groceries", "game", "car related", "taxi"]).unwrap()
    }

    fn two_month_statistics() -> Vec<crate::statistics::MonthStatistic> {
        let ledger = vec![
            Transaction::new(
                date!(2020 - 09 - 13),
                Decimal::from(23),
                CategoryName::new_unchecked("game"),
                "test 123",
            ),
            Transaction::new(
                date!(2020 - 10 - 16),
                Decimal::from(120),
                CategoryName::new_unchecked("taxi"),
                "test 126",
            ),
        ];

        compute_statistics(
            &ledger,
            &test_categories(),
            &["09/20".parse().unwrap(), "10/20".parse().unwrap()],
        )
    }

    #[test]
    fn chart_has_one_series_per_category_plus_the_total() {
        let options = spending_chart(&test_categories(), &two_month_statistics()).to_string();

        assert!(options.contains("09/20"));
        assert!(options.contains("10/20"));
        assert!(options.contains("Total"));
        for category in test_categories().iter() {
            assert!(options.contains(category.as_ref()), "{category}");
        }
    }

    #[test]
    fn show_chart_writes_an_html_page() {
        let path = std::env::temp_dir().join(format!(
            "spendtrack_chart_{}.html",
            std::process::id()
        ));
        let chart = spending_chart(&test_categories(), &two_month_statistics());

        show_chart(&chart, &path).unwrap();

        let page = fs::read_to_string(&path).unwrap();
        assert!(page.contains("echarts.init"));
        assert!(page.contains("Monthly spending"));
        fs::remove_file(&path).unwrap();
    }
}
