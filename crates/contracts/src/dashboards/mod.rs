pub mod d410_global_overview;
pub mod d411_store_analysis;
pub mod d412_state_analysis;
pub mod d413_advanced_insights;
pub mod selection;

use serde::{Deserialize, Serialize};

/// Полная модель представления дашборда (все вкладки за одно обращение)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub dataset: d410_global_overview::DatasetInfo,
    pub global_overview: d410_global_overview::GlobalOverviewResponse,
    pub store_analysis: d411_store_analysis::StoreAnalysisResponse,
    pub state_analysis: d412_state_analysis::StateAnalysisResponse,
    pub advanced_insights: d413_advanced_insights::AdvancedInsightsResponse,
}
