// Dashboard handlers (d410-d413)
pub mod d410_global_overview;
pub mod d411_store_analysis;
pub mod d412_state_analysis;
pub mod d413_advanced_insights;

// Full view, dataset info, chart theme
pub mod dashboard;
