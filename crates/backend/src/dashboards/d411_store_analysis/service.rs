use contracts::dashboards::d411_store_analysis::{StoreAnalysisResponse, StoreUnits};
use contracts::shared::analytics::{AggregateQuery, GroupField, Metric, Reducer, SortOrder};
use contracts::shared::panel::Panel;

use crate::dashboards::rows_panel;
use crate::domain::a030_sales_record::{SalesSelection, SalesTable};
use crate::shared::analytics::{aggregate, sum_metric};

/// Вкладка «Анализ магазина».
///
/// Без явного выбора берётся магазин с наименьшим номером.
pub fn render(table: &SalesTable, store: Option<i64>) -> StoreAnalysisResponse {
    let stores = table.stores();
    let selected_store = store.or_else(|| stores.first().copied());

    let rows = match selected_store {
        Some(id) => table.filter_by_store(id),
        None => SalesSelection::default(),
    };

    if rows.is_empty() {
        let message = match selected_store {
            Some(id) => format!("Нет данных о продажах для магазина {}", id),
            None => "Нет данных о продажах".to_string(),
        };
        tracing::debug!("D411 Dashboard: {}", message);
        return StoreAnalysisResponse {
            stores,
            selected_store,
            yearly_sales: Panel::empty("yearly_sales", message.clone()),
            units: Panel::empty("units", message.clone()),
            monthly_sales: Panel::empty("monthly_sales", message),
        };
    }

    let chronological = |field: GroupField| {
        aggregate(
            rows.iter(),
            &AggregateQuery::new(field, Metric::Sales, Reducer::Sum).ordered(SortOrder::KeyAsc),
        )
    };

    StoreAnalysisResponse {
        yearly_sales: rows_panel("yearly_sales", chronological(GroupField::Year), ""),
        units: Panel::Ready(store_units(&rows)),
        monthly_sales: rows_panel("monthly_sales", chronological(GroupField::YearMonth), ""),
        stores,
        selected_store,
    }
}

/// Продано единиц: сумма продаж, округлённая до целого (половина к чётному).
fn store_units(rows: &SalesSelection<'_>) -> StoreUnits {
    let promoted: f64 = rows
        .iter()
        .filter(|r| r.is_promoted())
        .map(|r| r.sales)
        .sum();

    StoreUnits {
        total_units: sum_metric(rows.iter(), Metric::Sales).round_ties_even() as i64,
        promoted_units: promoted.round_ties_even() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a030_sales_record::fixtures::{record, scenario_table};
    use chrono::NaiveDate;
    use contracts::domain::a030_sales_record::SalesRecord;
    use contracts::shared::analytics::GroupKey;

    fn dated(year: i32, month: u32, sales: f64, promo: u64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            year,
            month,
            ..record(5, "A", sales, promo)
        }
    }

    #[test]
    fn test_defaults_to_smallest_store() {
        let response = render(&scenario_table(), None);
        assert_eq!(response.stores, vec![1, 2]);
        assert_eq!(response.selected_store, Some(1));

        let units = response.units.ready().unwrap();
        assert_eq!(units.total_units, 40);
        assert_eq!(units.promoted_units, 30);
    }

    #[test]
    fn test_yearly_and_monthly_series_are_chronological() {
        let table = SalesTable::new(vec![
            dated(2017, 2, 5.0, 0),
            dated(2016, 11, 1.0, 0),
            dated(2016, 2, 2.0, 0),
            dated(2017, 2, 5.0, 0),
        ]);
        let response = render(&table, Some(5));

        let years = response.yearly_sales.ready().unwrap();
        assert_eq!(years[0].key, GroupKey::Integer(2016));
        assert_eq!(years[0].value, 3.0);
        assert_eq!(years[1].value, 10.0);

        let months: Vec<String> = response
            .monthly_sales
            .ready()
            .unwrap()
            .iter()
            .map(|g| g.key.to_string())
            .collect();
        assert_eq!(months, vec!["2016-02", "2016-11", "2017-02"]);
    }

    #[test]
    fn test_units_round_half_to_even() {
        let table = SalesTable::new(vec![dated(2016, 1, 2.25, 0), dated(2016, 1, 0.25, 1)]);
        let units = render(&table, Some(5)).units.ready().copied().unwrap();
        // 2.5 -> 2, 0.25 -> 0
        assert_eq!(units.total_units, 2);
        assert_eq!(units.promoted_units, 0);
    }

    #[test]
    fn test_unknown_store_empties_every_panel() {
        let response = render(&scenario_table(), Some(42));
        assert_eq!(response.selected_store, Some(42));
        assert!(response.yearly_sales.is_empty());
        assert!(response.units.is_empty());
        assert!(response.monthly_sales.is_empty());
    }
}
