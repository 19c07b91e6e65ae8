use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d410_global_overview::{GlobalOverviewRequest, GlobalOverviewResponse};

use crate::api::AppState;
use crate::dashboards::d410_global_overview::service;

/// GET /api/d410/global_overview?metric_mode=mean|total
pub async fn get_global_overview(
    State(state): State<AppState>,
    Query(request): Query<GlobalOverviewRequest>,
) -> Json<GlobalOverviewResponse> {
    tracing::info!(
        "D410 Dashboard: Getting global overview ({:?})",
        request.metric_mode
    );

    let response = service::render(&state.table, request.metric_mode, &state.settings);

    tracing::info!(
        "D410 Dashboard: Returning {} indicators",
        response.indicators.len()
    );
    Json(response)
}
