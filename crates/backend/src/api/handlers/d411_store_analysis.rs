use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d411_store_analysis::{StoreAnalysisRequest, StoreAnalysisResponse};

use crate::api::AppState;
use crate::dashboards::d411_store_analysis::service;

/// GET /api/d411/store_analysis?store=44
pub async fn get_store_analysis(
    State(state): State<AppState>,
    Query(request): Query<StoreAnalysisRequest>,
) -> Json<StoreAnalysisResponse> {
    tracing::info!("D411 Dashboard: Getting store analysis for {:?}", request.store);

    let response = service::render(&state.table, request.store);

    if response.units.is_empty() {
        tracing::info!(
            "D411 Dashboard: No rows for store {:?}",
            response.selected_store
        );
    }
    Json(response)
}
