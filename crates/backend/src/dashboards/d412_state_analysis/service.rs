use contracts::dashboards::d412_state_analysis::{
    LeadingProduct, StateAnalysisResponse, StoreRanking,
};
use contracts::shared::analytics::{AggregateQuery, GroupField, Metric, Reducer, SortOrder};
use contracts::shared::panel::Panel;

use crate::dashboards::rows_panel;
use crate::domain::a030_sales_record::{SalesSelection, SalesTable};
use crate::shared::analytics::{aggregate, top_n, TopN};
use crate::shared::config::DashboardSettings;

/// Вкладка «Анализ по штату».
///
/// `state` по умолчанию первый штат в лексическом порядке, `store` по
/// умолчанию самый продающий магазин штата.
pub fn render(
    table: &SalesTable,
    state: Option<&str>,
    store: Option<i64>,
    settings: &DashboardSettings,
) -> StateAnalysisResponse {
    let states = table.states();
    let selected_state = state
        .map(str::to_string)
        .or_else(|| states.first().cloned());

    let rows = match selected_state.as_deref() {
        Some(name) => table.filter_by_state(name),
        None => SalesSelection::default(),
    };

    if rows.is_empty() {
        let message = match selected_state.as_deref() {
            Some(name) => format!("Нет данных о продажах для штата {}", name),
            None => "Нет данных о продажах".to_string(),
        };
        tracing::debug!("D412 Dashboard: {}", message);
        return StateAnalysisResponse {
            states,
            selected_state,
            yearly_transactions: Panel::empty("yearly_transactions", message.clone()),
            store_ranking: Panel::empty("store_ranking", message.clone()),
            leading_product: Panel::empty("leading_product", message),
        };
    }

    let yearly_transactions = aggregate(
        rows.iter(),
        &AggregateQuery::new(GroupField::Year, Metric::Transactions, Reducer::Sum)
            .ordered(SortOrder::KeyAsc),
    );

    let ranking = top_n(
        rows.iter(),
        GroupField::Store,
        Metric::Sales,
        Reducer::Sum,
        settings.top_n,
    );

    StateAnalysisResponse {
        yearly_transactions: rows_panel("yearly_transactions", yearly_transactions, ""),
        leading_product: leading_product(&rows, &ranking, store, settings.top_n),
        store_ranking: Panel::Ready(StoreRanking {
            requested: ranking.requested,
            shown: ranking.shown,
            rows: ranking.rows,
        }),
        states,
        selected_state,
    }
}

/// Ведущий товар выбранного магазина штата.
fn leading_product(
    rows: &SalesSelection<'_>,
    ranking: &TopN,
    store: Option<i64>,
    top: usize,
) -> Panel<LeadingProduct> {
    let store_options = rows.stores();
    let Some(leading_store) = ranking.rows.first().and_then(|g| g.key.as_integer()) else {
        return Panel::empty("leading_product", "Нет магазинов в штате");
    };

    let selected_store = match store {
        Some(id) if store_options.contains(&id) => id,
        Some(id) => {
            tracing::warn!(
                "D412 Dashboard: store {} is not in the selected state, using leader {}",
                id,
                leading_store
            );
            leading_store
        }
        None => leading_store,
    };

    let store_rows = rows.filter_by_store(selected_store);
    let families = top_n(
        store_rows.iter(),
        GroupField::Family,
        Metric::Sales,
        Reducer::Sum,
        top,
    );

    let Some(best) = families.rows.first() else {
        return Panel::empty(
            "leading_product",
            format!("Нет продаж в магазине {}", selected_store),
        );
    };

    Panel::Ready(LeadingProduct {
        family: best.key.to_string(),
        family_sales: best.value,
        store_options,
        leading_store,
        selected_store,
        top_families: families.rows,
    })
}
