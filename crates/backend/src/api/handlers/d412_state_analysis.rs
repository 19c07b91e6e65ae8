use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d412_state_analysis::{StateAnalysisRequest, StateAnalysisResponse};

use crate::api::AppState;
use crate::dashboards::d412_state_analysis::service;

/// GET /api/d412/state_analysis?state=Pichincha&store=44
pub async fn get_state_analysis(
    State(state): State<AppState>,
    Query(request): Query<StateAnalysisRequest>,
) -> Json<StateAnalysisResponse> {
    tracing::info!(
        "D412 Dashboard: Getting state analysis for {:?} (store {:?})",
        request.state,
        request.store
    );

    let response = service::render(
        &state.table,
        request.state.as_deref(),
        request.store,
        &state.settings,
    );

    if let Some(ranking) = response.store_ranking.ready() {
        tracing::info!(
            "D412 Dashboard: Returning top {} of {} requested stores",
            ranking.shown,
            ranking.requested
        );
    }
    Json(response)
}
