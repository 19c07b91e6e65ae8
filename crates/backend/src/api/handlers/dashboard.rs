use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d410_global_overview::DatasetInfo;
use contracts::dashboards::selection::DashboardSelection;
use contracts::dashboards::DashboardView;
use contracts::shared::chart_theme::{ChartTheme, CLEAN_THEME};

use crate::api::AppState;
use crate::dashboards;

/// GET /api/dashboard?metric_mode&store&state&state_store&pareto_dimension
///
/// Все вкладки за один запрос.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(selection): Query<DashboardSelection>,
) -> Json<DashboardView> {
    tracing::info!("Dashboard: Rendering full view for {:?}", selection);
    Json(dashboards::render(&selection, &state.table, &state.settings))
}

/// GET /api/dataset/info
pub async fn get_dataset_info(State(state): State<AppState>) -> Json<DatasetInfo> {
    Json(dashboards::d410_global_overview::service::dataset_info(
        &state.table,
    ))
}

/// GET /api/chart_theme
pub async fn get_chart_theme() -> Json<&'static ChartTheme> {
    Json(&CLEAN_THEME)
}
