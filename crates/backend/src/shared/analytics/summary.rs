use contracts::dashboards::d413_advanced_insights::YearlyTotal;
use contracts::domain::a030_sales_record::SalesRecord;
use contracts::shared::analytics::{
    AggregateQuery, GroupAggregate, GroupField, GroupKey, Metric, Reducer, SortOrder,
};

use super::aggregation::{aggregate, metric_value};

/// `numerator / denominator` или 0 при нулевом знаменателе.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Изменение в процентах `(current / previous - 1) * 100`, 0 при `previous == 0`.
pub fn growth_pct(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current / previous - 1.0) * 100.0
    }
}

/// Средний чек: продажи / транзакции
pub fn average_ticket<'a, I>(rows: I) -> f64
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let (sales, transactions) = rows.into_iter().fold((0.0, 0.0), |(s, t), r| {
        (s + r.sales, t + metric_value(r, Metric::Transactions))
    });
    safe_ratio(sales, transactions)
}

/// Доля продаж с промо в общих продажах, дробь в `0..=1`.
pub fn promotion_share<'a, I>(rows: I) -> f64
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let (promoted, total) = rows.into_iter().fold((0.0, 0.0), |(p, t), r| {
        let promoted = if r.is_promoted() { r.sales } else { 0.0 };
        (p + promoted, t + r.sales)
    });
    safe_ratio(promoted, total)
}

/// Группа с максимальными средними продажами.
///
/// При равенстве выигрывает наименьший ключ в естественном порядке.
pub fn best_by_mean<'a, I>(rows: I, group_by: GroupField) -> Option<GroupAggregate>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let query = AggregateQuery::new(group_by, Metric::Sales, Reducer::Mean).ordered(SortOrder::KeyAsc);
    aggregate(rows, &query)
        .into_iter()
        .reduce(|best, g| if g.value > best.value { g } else { best })
}

/// Группа с наибольшей суммой и её доля в общем итоге.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub key: GroupKey,
    pub value: f64,
    pub share_pct: f64,
}

pub fn top_contributor<'a, I>(rows: I, group_by: GroupField) -> Option<Contribution>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let query = AggregateQuery::new(group_by, Metric::Sales, Reducer::Sum);
    let groups = aggregate(rows, &query);
    let total: f64 = groups.iter().map(|g| g.value).sum();

    groups.into_iter().next().map(|top| Contribution {
        share_pct: safe_ratio(top.value, total) * 100.0,
        key: top.key,
        value: top.value,
    })
}

/// Продажи по годам (по возрастанию) с изменением к предыдущему году.
pub fn yearly_totals<'a, I>(rows: I) -> Vec<YearlyTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let query =
        AggregateQuery::new(GroupField::Year, Metric::Sales, Reducer::Sum).ordered(SortOrder::KeyAsc);
    let groups = aggregate(rows, &query);

    let mut previous: Option<f64> = None;
    groups
        .into_iter()
        .filter_map(|g| {
            let year = i32::try_from(g.key.as_integer()?).ok()?;
            let yoy_pct = previous.map(|prev| growth_pct(g.value, prev));
            previous = Some(g.value);
            Some(YearlyTotal {
                year,
                total_sales: g.value,
                yoy_pct,
            })
        })
        .collect()
}

/// Рост последнего года к предыдущему; `None`, если лет меньше двух.
pub fn latest_yoy_growth(years: &[YearlyTotal]) -> Option<f64> {
    match years {
        [.., previous, latest] => Some(growth_pct(latest.total_sales, previous.total_sales)),
        _ => None,
    }
}
