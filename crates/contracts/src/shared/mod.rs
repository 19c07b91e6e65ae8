pub mod analytics;
pub mod chart_theme;
pub mod indicators;
pub mod panel;
pub mod query;
