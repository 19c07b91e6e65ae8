//! Row builders shared by unit tests.

use chrono::NaiveDate;
use contracts::domain::a030_sales_record::SalesRecord;

use super::SalesTable;

/// A Monday in week 1 of 2016; override other fields with struct update syntax.
pub fn record(store_id: i64, family: &str, sales: f64, on_promotion: u64) -> SalesRecord {
    SalesRecord {
        date: NaiveDate::from_ymd_opt(2016, 1, 4).unwrap(),
        store_id,
        family: family.to_string(),
        sales,
        transactions: 0,
        on_promotion,
        state: "Pichincha".to_string(),
        day_of_week: "Monday".to_string(),
        week: 1,
        month: 1,
        year: 2016,
        holiday_type: Some("Work Day".to_string()),
    }
}

/// The three-row table used by the end-to-end scenarios.
pub fn scenario_table() -> SalesTable {
    SalesTable::new(vec![
        record(1, "A", 10.0, 0),
        record(1, "B", 30.0, 1),
        record(2, "A", 20.0, 0),
    ])
}
