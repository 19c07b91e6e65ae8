use contracts::domain::a030_sales_record::SalesRecord;
use contracts::shared::analytics::{
    AggregateQuery, GroupAggregate, GroupField, GroupKey, Metric, Reducer, SortOrder,
};
use std::collections::BTreeMap;

/// Ключ группировки строки; `None`, если строка не входит ни в одну группу
/// (пустой тип праздника).
pub fn group_key(record: &SalesRecord, field: GroupField) -> Option<GroupKey> {
    let key = match field {
        GroupField::Store => GroupKey::Integer(record.store_id),
        GroupField::Family => GroupKey::Text(record.family.clone()),
        GroupField::State => GroupKey::Text(record.state.clone()),
        GroupField::DayOfWeek => GroupKey::Text(record.day_of_week.clone()),
        GroupField::Week => GroupKey::Integer(i64::from(record.week)),
        GroupField::Month => GroupKey::Integer(i64::from(record.month)),
        GroupField::Year => GroupKey::Integer(i64::from(record.year)),
        GroupField::HolidayType => GroupKey::Text(record.holiday_type.clone()?),
        GroupField::YearMonth => GroupKey::Text(record.year_month()),
        GroupField::Promoted => GroupKey::Flag(record.is_promoted()),
    };
    Some(key)
}

pub fn metric_value(record: &SalesRecord, metric: Metric) -> f64 {
    match metric {
        Metric::Sales => record.sales,
        Metric::Transactions => record.transactions as f64,
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn reduce(self, reducer: Reducer) -> f64 {
        match reducer {
            Reducer::Sum => self.sum,
            // a group only exists with at least one row
            Reducer::Mean => self.sum / self.count as f64,
        }
    }
}

/// Группировка + свёртка + сортировка + усечение до top-N.
///
/// Суммирование идёт в порядке строк таблицы, поэтому повторный расчёт
/// по тем же данным даёт побитово одинаковый результат.
pub fn aggregate<'a, I>(rows: I, query: &AggregateQuery) -> Vec<GroupAggregate>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut groups: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();

    for record in rows {
        let Some(key) = group_key(record, query.group_by) else {
            continue;
        };
        let acc = groups.entry(key).or_default();
        acc.sum += metric_value(record, query.metric);
        acc.count += 1;
    }

    let mut result: Vec<GroupAggregate> = groups
        .into_iter()
        .map(|(key, acc)| GroupAggregate {
            key,
            value: acc.reduce(query.reducer),
        })
        .collect();

    sort_aggregates(&mut result, query.order);

    if let Some(n) = query.top_n {
        result.truncate(n);
    }

    result
}

/// Сортировка на месте; при равных значениях порядок по естественному ключу.
pub fn sort_aggregates(rows: &mut [GroupAggregate], order: SortOrder) {
    match order {
        SortOrder::ValueDesc => rows.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.key.cmp(&b.key))
        }),
        SortOrder::ValueAsc => rows.sort_by(|a, b| {
            a.value
                .total_cmp(&b.value)
                .then_with(|| a.key.cmp(&b.key))
        }),
        SortOrder::KeyAsc => rows.sort_by(|a, b| a.key.cmp(&b.key)),
    }
}

pub fn sum_metric<'a, I>(rows: I, metric: Metric) -> f64
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    rows.into_iter().map(|r| metric_value(r, metric)).sum()
}

/// Среднее по строкам, 0 для пустого набора.
pub fn mean_metric<'a, I>(rows: I, metric: Metric) -> f64
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let (sum, count) = rows
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + metric_value(r, metric), count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
