pub mod handlers;

use std::sync::Arc;

use crate::domain::a030_sales_record::SalesTable;
use crate::shared::config::DashboardSettings;

/// Общее состояние обработчиков: таблица загружается один раз при старте
/// и дальше только читается.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<SalesTable>,
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    pub fn new(table: SalesTable, settings: DashboardSettings) -> Self {
        Self {
            table: Arc::new(table),
            settings: Arc::new(settings),
        }
    }
}
