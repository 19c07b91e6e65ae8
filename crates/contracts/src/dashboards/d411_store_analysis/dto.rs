use serde::{Deserialize, Serialize};

use crate::shared::analytics::GroupAggregate;
use crate::shared::panel::Panel;
use crate::shared::query::blank_as_none;

/// Request for the store analysis tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreAnalysisRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub store: Option<i64>,
}

/// Response for the store analysis tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreAnalysisResponse {
    /// Store options for the selector, ascending
    pub stores: Vec<i64>,
    pub selected_store: Option<i64>,
    /// Total sales per year, year ascending
    pub yearly_sales: Panel<Vec<GroupAggregate>>,
    pub units: Panel<StoreUnits>,
    /// Total sales per `YYYY-MM`, chronological
    pub monthly_sales: Panel<Vec<GroupAggregate>>,
}

/// Units sold by the store, rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreUnits {
    pub total_units: i64,
    pub promoted_units: i64,
}
