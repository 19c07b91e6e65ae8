use contracts::domain::a030_sales_record::SalesRecord;
use std::collections::BTreeSet;

/// Таблица продаж в памяти.
///
/// Загружается один раз при старте и дальше только читается: фильтры
/// возвращают заимствованные выборки и никогда не изменяют саму таблицу.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// Строки, удовлетворяющие предикату
    pub fn select(&self, predicate: impl Fn(&SalesRecord) -> bool) -> SalesSelection<'_> {
        SalesSelection {
            rows: self.records.iter().filter(|r| predicate(r)).collect(),
        }
    }

    pub fn filter_by_store(&self, store_id: i64) -> SalesSelection<'_> {
        self.select(|r| r.store_id == store_id)
    }

    pub fn filter_by_state(&self, state: &str) -> SalesSelection<'_> {
        self.select(|r| r.state == state)
    }

    /// Номера магазинов без повторов, по возрастанию
    pub fn stores(&self) -> Vec<i64> {
        distinct_stores(self.iter())
    }

    /// Штаты без повторов, по возрастанию
    pub fn states(&self) -> Vec<String> {
        self.iter()
            .map(|r| r.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Семейства товаров без повторов, по возрастанию
    pub fn families(&self) -> Vec<String> {
        self.iter()
            .map(|r| r.family.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Годы без повторов, по возрастанию
    pub fn years(&self) -> Vec<i32> {
        self.iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Число различных календарных месяцев (`YYYY-MM`) по полю `date`
    pub fn month_count(&self) -> usize {
        self.iter()
            .map(|r| r.year_month())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Заимствованное подмножество [`SalesTable`] после фильтра по точному равенству.
#[derive(Debug, Clone, Default)]
pub struct SalesSelection<'a> {
    rows: Vec<&'a SalesRecord>,
}

impl<'a> SalesSelection<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn filter_by_store(&self, store_id: i64) -> SalesSelection<'a> {
        SalesSelection {
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|r| r.store_id == store_id)
                .collect(),
        }
    }

    /// Номера магазинов выборки, по возрастанию
    pub fn stores(&self) -> Vec<i64> {
        distinct_stores(self.iter())
    }
}

fn distinct_stores<'a>(rows: impl Iterator<Item = &'a SalesRecord>) -> Vec<i64> {
    rows.map(|r| r.store_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
