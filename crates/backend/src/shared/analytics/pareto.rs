use contracts::domain::a030_sales_record::SalesRecord;
use contracts::shared::analytics::{
    AggregateQuery, GroupAggregate, GroupField, Metric, ParetoRow, Reducer, SortOrder,
};

use super::aggregation::{aggregate, sort_aggregates};

/// Кумулятивный ряд Парето по полному набору групп.
///
/// Усечение для отображения (`display`) не влияет на `n_for_threshold`:
/// порог всегда считается по всему ряду.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoSeries {
    rows: Vec<ParetoRow>,
    grand_total: f64,
}

impl ParetoSeries {
    /// Суммирует `metric` по `group_by` и строит накопительный ряд.
    pub fn build<'a, I>(rows: I, group_by: GroupField, metric: Metric) -> Self
    where
        I: IntoIterator<Item = &'a SalesRecord>,
    {
        let query = AggregateQuery::new(group_by, metric, Reducer::Sum);
        Self::from_aggregates(aggregate(rows, &query))
    }

    pub fn from_aggregates(mut groups: Vec<GroupAggregate>) -> Self {
        sort_aggregates(&mut groups, SortOrder::ValueDesc);

        let grand_total: f64 = groups.iter().map(|g| g.value).sum();
        let mut cumulative = 0.0;

        let rows = groups
            .into_iter()
            .enumerate()
            .map(|(i, g)| {
                cumulative += g.value;
                let cumulative_pct = if grand_total == 0.0 {
                    0.0
                } else {
                    cumulative * 100.0 / grand_total
                };
                ParetoRow {
                    rank: i + 1,
                    key: g.key,
                    value: g.value,
                    cumulative_pct,
                }
            })
            .collect();

        Self { rows, grand_total }
    }

    pub fn rows(&self) -> &[ParetoRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Число лидеров, чья накопленная доля `<= threshold_pct`.
    pub fn n_for_threshold(&self, threshold_pct: f64) -> usize {
        n_for_threshold(&self.rows, threshold_pct)
    }

    /// Первые `limit` строк для графиков.
    pub fn display(&self, limit: usize) -> &[ParetoRow] {
        &self.rows[..limit.min(self.rows.len())]
    }
}

/// Число первых строк с `cumulative_pct <= threshold_pct`; строка ровно на пороге учитывается.
pub fn n_for_threshold(rows: &[ParetoRow], threshold_pct: f64) -> usize {
    rows.iter()
        .take_while(|r| r.cumulative_pct <= threshold_pct)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a030_sales_record::fixtures::record;
    use crate::domain::a030_sales_record::SalesTable;
    use contracts::shared::analytics::GroupKey;

    fn rows_with_cumulative(pcts: &[f64]) -> Vec<ParetoRow> {
        pcts.iter()
            .enumerate()
            .map(|(i, pct)| ParetoRow {
                rank: i + 1,
                key: GroupKey::Integer(i as i64),
                value: 0.0,
                cumulative_pct: *pct,
            })
            .collect()
    }

    #[test]
    fn test_threshold_includes_row_exactly_at_threshold() {
        let rows = rows_with_cumulative(&[30.0, 55.0, 78.0, 80.0, 92.0, 100.0]);
        assert_eq!(n_for_threshold(&rows, 80.0), 4);
        assert_eq!(n_for_threshold(&rows, 79.9), 3);
        assert_eq!(n_for_threshold(&rows, 100.0), 6);
        assert_eq!(n_for_threshold(&rows, 10.0), 0);
    }

    #[test]
    fn test_series_is_ranked_and_monotonic() {
        let table = SalesTable::new(vec![
            record(1, "A", 50.0, 0),
            record(2, "A", 20.0, 0),
            record(3, "A", 20.0, 0),
            record(4, "A", 10.0, 0),
            record(1, "B", 0.0, 0),
        ]);
        let series = ParetoSeries::build(table.iter(), GroupField::Store, Metric::Sales);

        let ranks: Vec<usize> = series.rows().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(series.rows()[0].key, GroupKey::Integer(1));
        // tie on 20 resolved by store id
        assert_eq!(series.rows()[1].key, GroupKey::Integer(2));

        let pcts: Vec<f64> = series.rows().iter().map(|r| r.cumulative_pct).collect();
        assert_eq!(pcts, vec![50.0, 70.0, 90.0, 100.0]);
        assert!(pcts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(series.grand_total(), 100.0);
        assert_eq!(series.n_for_threshold(80.0), 2);
    }

    #[test]
    fn test_display_truncation_does_not_change_threshold() {
        let table = SalesTable::new((1..=60).map(|store| record(store, "A", 1.0, 0)).collect());
        let series = ParetoSeries::build(table.iter(), GroupField::Store, Metric::Sales);

        assert_eq!(series.len(), 60);
        assert_eq!(series.display(50).len(), 50);
        assert_eq!(series.display(100).len(), 60);
        assert_eq!(series.n_for_threshold(80.0), 48);

        let last = series.rows().last().unwrap();
        assert!((last.cumulative_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let table = SalesTable::new(vec![record(1, "A", 0.0, 0), record(2, "B", 0.0, 0)]);
        let series = ParetoSeries::build(table.iter(), GroupField::Family, Metric::Sales);

        assert!(series.rows().iter().all(|r| r.cumulative_pct == 0.0));
        // every contributor sits at 0% <= 80%
        assert_eq!(series.n_for_threshold(80.0), 2);
    }
}
