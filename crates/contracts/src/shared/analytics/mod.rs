use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Query vocabulary
// ---------------------------------------------------------------------------

/// Категориальное поле группировки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    Store,
    Family,
    State,
    DayOfWeek,
    Week,
    Month,
    Year,
    HolidayType,
    /// Календарный месяц даты строки, `YYYY-MM`
    YearMonth,
    Promoted,
}

/// Числовая колонка для свёртки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Sales,
    Transactions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    Sum,
    Mean,
}

/// Порядок строк агрегата. При равных значениях порядок по естественному ключу.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    ValueDesc,
    ValueAsc,
    KeyAsc,
}

/// Параметры одного запроса группировки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateQuery {
    pub group_by: GroupField,
    pub metric: Metric,
    pub reducer: Reducer,
    /// Оставить первые N строк после сортировки
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub order: SortOrder,
}

impl AggregateQuery {
    pub fn new(group_by: GroupField, metric: Metric, reducer: Reducer) -> Self {
        Self {
            group_by,
            metric,
            reducer,
            top_n: None,
            order: SortOrder::ValueDesc,
        }
    }

    pub fn top(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    pub fn ordered(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

// ---------------------------------------------------------------------------
// Selection toggles
// ---------------------------------------------------------------------------

/// Переключатель «Средние продажи / Итого продаж»
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricMode {
    #[default]
    Mean,
    Total,
}

impl MetricMode {
    pub fn reducer(self) -> Reducer {
        match self {
            MetricMode::Mean => Reducer::Mean,
            MetricMode::Total => Reducer::Sum,
        }
    }
}

/// Измерение анализа концентрации продаж.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParetoDimension {
    #[default]
    Stores,
    Families,
}

impl ParetoDimension {
    pub fn group_field(self) -> GroupField {
        match self {
            ParetoDimension::Stores => GroupField::Store,
            ParetoDimension::Families => GroupField::Family,
        }
    }
}

// ---------------------------------------------------------------------------
// Result rows
// ---------------------------------------------------------------------------

/// Значение ключа группировки.
///
/// Порядок естественный: числа по возрастанию, строки лексикографически,
/// `false < true`. Внутри одной группировки все ключи одного варианта.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Integer(i64),
    Flag(bool),
    Text(String),
}

impl GroupKey {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            GroupKey::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            GroupKey::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Integer(v) => write!(f, "{v}"),
            GroupKey::Flag(v) => write!(f, "{v}"),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for GroupKey {
    fn from(v: i64) -> Self {
        GroupKey::Integer(v)
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        GroupKey::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub key: GroupKey,
    pub value: f64,
}

/// Строка ряда Парето. Ранг 1 у наибольшего значения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoRow {
    pub rank: usize,
    pub key: GroupKey,
    pub value: f64,
    pub cumulative_pct: f64,
}

/// Средние продажи с промо и без, глобально (`group_key == None`) или по группе.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftResult {
    pub group_key: Option<GroupKey>,
    pub mean_promoted: f64,
    pub mean_non_promoted: f64,
    /// `mean_promoted / mean_non_promoted - 1`, ровно 0 при нулевом знаменателе
    pub lift_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}
