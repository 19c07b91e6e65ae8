use contracts::dashboards::d410_global_overview::{
    DatasetInfo, GlobalOverviewResponse, WeekdaySeasonality,
};
use contracts::shared::analytics::{
    AggregateQuery, GroupAggregate, GroupField, GroupKey, Metric, MetricMode, Reducer, SortOrder,
};
use contracts::shared::indicators::Indicator;
use contracts::shared::panel::Panel;

use crate::dashboards::rows_panel;
use crate::domain::a030_sales_record::SalesTable;
use crate::shared::analytics::distribution::histogram;
use crate::shared::analytics::{aggregate, top_n};
use crate::shared::config::DashboardSettings;

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const WEEKDAYS_ES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

const NO_DATA: &str = "Нет данных о продажах";

/// Общие сведения о загруженном наборе данных
pub fn dataset_info(table: &SalesTable) -> DatasetInfo {
    DatasetInfo {
        row_count: table.len(),
        store_count: table.stores().len(),
        family_count: table.families().len(),
        state_count: table.states().len(),
        years: table.years(),
    }
}

/// Вкладка «Общий обзор»
pub fn render(
    table: &SalesTable,
    metric_mode: MetricMode,
    settings: &DashboardSettings,
) -> GlobalOverviewResponse {
    let reducer = metric_mode.reducer();

    let top_families = top_n(
        table.iter(),
        GroupField::Family,
        Metric::Sales,
        reducer,
        settings.top_n,
    );

    let store_sales = aggregate(
        table.iter(),
        &AggregateQuery::new(GroupField::Store, Metric::Sales, reducer),
    );
    let store_values: Vec<f64> = store_sales.iter().map(|g| g.value).collect();
    let bins = histogram(&store_values, settings.histogram_max_bins);

    let promoted = table.select(|r| r.is_promoted());
    let top_promoted = top_n(
        promoted.iter(),
        GroupField::Store,
        Metric::Sales,
        reducer,
        settings.top_n,
    );

    let calendar_mean = |field: GroupField| {
        aggregate(
            table.iter(),
            &AggregateQuery::new(field, Metric::Sales, Reducer::Mean).ordered(SortOrder::KeyAsc),
        )
    };

    GlobalOverviewResponse {
        metric_mode,
        indicators: indicators(table),
        top_families: rows_panel("top_families", top_families.rows, NO_DATA),
        store_sales: rows_panel("store_sales", store_sales, NO_DATA),
        store_sales_histogram: if bins.is_empty() {
            Panel::empty("store_sales_histogram", NO_DATA)
        } else {
            Panel::Ready(bins)
        },
        top_promoted_stores: rows_panel(
            "top_promoted_stores",
            top_promoted.rows,
            "Нет продаж с промо",
        ),
        seasonality: seasonality(table),
        weekly_mean_sales: rows_panel("weekly_mean_sales", calendar_mean(GroupField::Week), NO_DATA),
        monthly_mean_sales: rows_panel(
            "monthly_mean_sales",
            calendar_mean(GroupField::Month),
            NO_DATA,
        ),
    }
}

fn indicators(table: &SalesTable) -> Vec<Indicator> {
    vec![
        Indicator::count("stores", "Магазины", table.stores().len()),
        Indicator::count("families", "Категории товаров", table.families().len()),
        Indicator::count("states", "Штаты", table.states().len()),
        Indicator::count("months", "Месяцев данных", table.month_count()),
    ]
}

fn seasonality(table: &SalesTable) -> Panel<WeekdaySeasonality> {
    let daily = aggregate(
        table.iter(),
        &AggregateQuery::new(GroupField::DayOfWeek, Metric::Sales, Reducer::Mean),
    );
    if daily.is_empty() {
        return Panel::empty("seasonality", NO_DATA);
    }

    let global_mean = daily.iter().map(|g| g.value).sum::<f64>() / daily.len() as f64;
    Panel::Ready(WeekdaySeasonality {
        days: order_weekdays(daily),
        global_mean,
    })
}

/// Порядок Пн..Вс.
///
/// Испанские названия используются, если в данных есть все семь, иначе
/// английские. Неизвестные подписи идут в конце в лексическом порядке.
pub fn order_weekdays(days: Vec<GroupAggregate>) -> Vec<GroupAggregate> {
    let label = |g: &GroupAggregate| g.key.as_text().unwrap_or_default().to_string();

    let spanish = WEEKDAYS_ES
        .iter()
        .all(|day| days.iter().any(|g| label(g) == *day));
    let order: &[&str] = if spanish { &WEEKDAYS_ES } else { &WEEKDAYS_EN };

    let mut days = days;
    days.sort_by(|a, b| {
        let rank = |g: &GroupAggregate| {
            let name = label(g);
            let position = order.iter().position(|d| *d == name).unwrap_or(order.len());
            (position, GroupKey::Text(name))
        };
        rank(a).cmp(&rank(b))
    });
    days
}
