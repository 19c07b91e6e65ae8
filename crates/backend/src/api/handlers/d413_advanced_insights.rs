use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d413_advanced_insights::{
    AdvancedInsightsRequest, AdvancedInsightsResponse,
};

use crate::api::AppState;
use crate::dashboards::d413_advanced_insights::service;

/// GET /api/d413/advanced_insights?pareto_dimension=stores|families
pub async fn get_advanced_insights(
    State(state): State<AppState>,
    Query(request): Query<AdvancedInsightsRequest>,
) -> Json<AdvancedInsightsResponse> {
    tracing::info!(
        "D413 Dashboard: Getting advanced insights (pareto by {:?})",
        request.pareto_dimension
    );

    let response = service::render(&state.table, request.pareto_dimension, &state.settings);

    if let Some(concentration) = response.concentration.ready() {
        tracing::info!(
            "D413 Dashboard: {} of {} contributors reach {}%",
            concentration.n_for_threshold,
            concentration.population,
            concentration.threshold_pct
        );
    }
    Json(response)
}
