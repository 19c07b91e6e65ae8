use serde::{Deserialize, Serialize};

use crate::shared::analytics::GroupAggregate;
use crate::shared::panel::Panel;
use crate::shared::query::blank_as_none;

/// Request for the state analysis tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateAnalysisRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub state: Option<String>,
    /// Store inside the state; defaults to the state's leading store
    #[serde(default, deserialize_with = "blank_as_none")]
    pub store: Option<i64>,
}

/// Response for the state analysis tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateAnalysisResponse {
    /// State options for the selector, ascending
    pub states: Vec<String>,
    pub selected_state: Option<String>,
    /// Total transactions per year, year ascending
    pub yearly_transactions: Panel<Vec<GroupAggregate>>,
    pub store_ranking: Panel<StoreRanking>,
    pub leading_product: Panel<LeadingProduct>,
}

/// Top stores of the state. `shown = min(requested, stores in state)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRanking {
    pub requested: usize,
    pub shown: usize,
    pub rows: Vec<GroupAggregate>,
}

/// Best-selling product family of the store chosen inside the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadingProduct {
    /// Store selector options, ascending
    pub store_options: Vec<i64>,
    /// Top-grossing store of the state (selector default)
    pub leading_store: i64,
    pub selected_store: i64,
    pub family: String,
    pub family_sales: f64,
    /// Top 10 families of the selected store
    pub top_families: Vec<GroupAggregate>,
}
