use contracts::domain::a030_sales_record::SalesRecord;
use contracts::shared::analytics::{GroupField, GroupKey, LiftResult};
use std::collections::BTreeMap;

use super::aggregation::group_key;

/// `promoted / non_promoted - 1`; ровно 0 при `non_promoted == 0`.
pub fn lift_ratio(promoted_mean: f64, non_promoted_mean: f64) -> f64 {
    if non_promoted_mean == 0.0 {
        0.0
    } else {
        promoted_mean / non_promoted_mean - 1.0
    }
}

/// Накопленные суммы продаж с промо и без.
#[derive(Debug, Clone, Copy, Default)]
struct PromoSplit {
    promoted_sum: f64,
    promoted_count: usize,
    regular_sum: f64,
    regular_count: usize,
}

impl PromoSplit {
    fn push(&mut self, record: &SalesRecord) {
        if record.is_promoted() {
            self.promoted_sum += record.sales;
            self.promoted_count += 1;
        } else {
            self.regular_sum += record.sales;
            self.regular_count += 1;
        }
    }

    fn mean(sum: f64, count: usize) -> f64 {
        // an absent side counts as mean 0
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    fn into_result(self, group_key: Option<GroupKey>) -> LiftResult {
        let mean_promoted = Self::mean(self.promoted_sum, self.promoted_count);
        let mean_non_promoted = Self::mean(self.regular_sum, self.regular_count);
        LiftResult {
            group_key,
            mean_promoted,
            mean_non_promoted,
            lift_ratio: lift_ratio(mean_promoted, mean_non_promoted),
        }
    }
}

/// Лифт средних продаж с промо относительно продаж без промо по всем строкам.
pub fn global_lift<'a, I>(rows: I) -> LiftResult
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut split = PromoSplit::default();
    for record in rows {
        split.push(record);
    }
    split.into_result(None)
}

/// Лифт промо по каждой группе.
///
/// Группа без промо-строк (или без обычных строк) не отбрасывается:
/// отсутствующая сторона считается со средним 0. Сортировка по лифту по убыванию,
/// при равенстве по ключу.
pub fn lift_by<'a, I>(rows: I, group_by: GroupField) -> Vec<LiftResult>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut groups: BTreeMap<GroupKey, PromoSplit> = BTreeMap::new();
    for record in rows {
        let Some(key) = group_key(record, group_by) else {
            continue;
        };
        groups.entry(key).or_default().push(record);
    }

    let mut results: Vec<LiftResult> = groups
        .into_iter()
        .map(|(key, split)| split.into_result(Some(key)))
        .collect();

    results.sort_by(|a, b| {
        b.lift_ratio
            .total_cmp(&a.lift_ratio)
            .then_with(|| a.group_key.cmp(&b.group_key))
    });

    results
}

pub fn top_lift_by<'a, I>(rows: I, group_by: GroupField, n: usize) -> Vec<LiftResult>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut results = lift_by(rows, group_by);
    results.truncate(n);
    results
}
