use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Одна строка набора данных: магазин × семейство товаров × день
///
/// Числовые поля после загрузки всегда определены (пропуски заполняются нулём),
/// текстовые поля `state`, `family`, `day_of_week` уже очищены от пробелов по краям.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub store_id: i64,
    pub family: String,
    pub sales: f64,
    pub transactions: u64,
    pub on_promotion: u64,
    pub state: String,
    pub day_of_week: String,
    pub week: u32,
    pub month: u32,
    pub year: i32,
    /// `None`, если ячейка была пустой
    pub holiday_type: Option<String>,
}

impl SalesRecord {
    /// Строка считается «в промо», если хотя бы один товар участвует в акции
    pub fn is_promoted(&self) -> bool {
        self.on_promotion > 0
    }

    /// Календарный месяц `date` в виде `YYYY-MM`.
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
