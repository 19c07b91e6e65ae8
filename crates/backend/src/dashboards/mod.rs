pub mod d410_global_overview;
pub mod d411_store_analysis;
pub mod d412_state_analysis;
pub mod d413_advanced_insights;

use contracts::dashboards::selection::DashboardSelection;
use contracts::dashboards::DashboardView;
use contracts::shared::analytics::GroupAggregate;
use contracts::shared::panel::Panel;

use crate::domain::a030_sales_record::SalesTable;
use crate::shared::config::DashboardSettings;

/// Все вкладки дашборда за один вызов.
///
/// Каждая вкладка считается независимо по одной и той же таблице.
pub fn render(
    selection: &DashboardSelection,
    table: &SalesTable,
    settings: &DashboardSettings,
) -> DashboardView {
    DashboardView {
        dataset: d410_global_overview::service::dataset_info(table),
        global_overview: d410_global_overview::service::render(
            table,
            selection.metric_mode,
            settings,
        ),
        store_analysis: d411_store_analysis::service::render(table, selection.store),
        state_analysis: d412_state_analysis::service::render(
            table,
            selection.state.as_deref(),
            selection.state_store,
            settings,
        ),
        advanced_insights: d413_advanced_insights::service::render(
            table,
            selection.pareto_dimension,
            settings,
        ),
    }
}

/// Строки графика или предупреждение о пустой выборке.
pub(crate) fn rows_panel(
    panel: &str,
    rows: Vec<GroupAggregate>,
    message: &str,
) -> Panel<Vec<GroupAggregate>> {
    if rows.is_empty() {
        Panel::empty(panel, message)
    } else {
        Panel::Ready(rows)
    }
}
