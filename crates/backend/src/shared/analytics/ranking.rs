use contracts::domain::a030_sales_record::SalesRecord;
use contracts::shared::analytics::{AggregateQuery, GroupAggregate, GroupField, Metric, Reducer};

use super::aggregation::aggregate;

/// Top-N ranking together with the number of rows actually available.
///
/// Labels must use `shown`, which is `min(requested, population)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TopN {
    pub requested: usize,
    pub shown: usize,
    pub rows: Vec<GroupAggregate>,
}

/// Highest `n` groups by the reduced metric, descending, natural-key tie-break.
pub fn top_n<'a, I>(rows: I, group_by: GroupField, metric: Metric, reducer: Reducer, n: usize) -> TopN
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let query = AggregateQuery::new(group_by, metric, reducer).top(n);
    let rows = aggregate(rows, &query);
    TopN {
        requested: n,
        shown: rows.len(),
        rows,
    }
}
