use axum::{routing::get, Router};

use crate::api::{handlers, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Full dashboard and dataset facts
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/dataset/info", get(handlers::dashboard::get_dataset_info))
        .route("/api/chart_theme", get(handlers::dashboard::get_chart_theme))
        // D410 Global overview
        .route(
            "/api/d410/global_overview",
            get(handlers::d410_global_overview::get_global_overview),
        )
        // D411 Store analysis
        .route(
            "/api/d411/store_analysis",
            get(handlers::d411_store_analysis::get_store_analysis),
        )
        // D412 State analysis
        .route(
            "/api/d412/state_analysis",
            get(handlers::d412_state_analysis::get_state_analysis),
        )
        // D413 Advanced insights
        .route(
            "/api/d413/advanced_insights",
            get(handlers::d413_advanced_insights::get_advanced_insights),
        )
        .with_state(state)
}
