use serde::{Deserialize, Serialize};

use crate::shared::analytics::{GroupAggregate, HistogramBin, MetricMode};
use crate::shared::indicators::Indicator;
use crate::shared::panel::Panel;

/// Request for the global overview tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalOverviewRequest {
    #[serde(default)]
    pub metric_mode: MetricMode,
}

/// General facts about the loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub row_count: usize,
    pub store_count: usize,
    pub family_count: usize,
    pub state_count: usize,
    /// Distinct years, ascending
    pub years: Vec<i32>,
}

/// Response for the global overview tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalOverviewResponse {
    pub metric_mode: MetricMode,
    /// Stores, families, states, months
    pub indicators: Vec<Indicator>,
    /// Top 10 product families by sales
    pub top_families: Panel<Vec<GroupAggregate>>,
    /// Every store, descending
    pub store_sales: Panel<Vec<GroupAggregate>>,
    /// Distribution of `store_sales` values
    pub store_sales_histogram: Panel<Vec<HistogramBin>>,
    /// Top 10 stores by sales on promoted rows
    pub top_promoted_stores: Panel<Vec<GroupAggregate>>,
    pub seasonality: Panel<WeekdaySeasonality>,
    /// Mean sales per week of year, week ascending
    pub weekly_mean_sales: Panel<Vec<GroupAggregate>>,
    /// Mean sales per month, month ascending
    pub monthly_mean_sales: Panel<Vec<GroupAggregate>>,
}

/// Mean sales by day of week with the reference line value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySeasonality {
    /// Ordered Monday..Sunday in the dataset's language
    pub days: Vec<GroupAggregate>,
    /// Mean of the daily means
    pub global_mean: f64,
}
