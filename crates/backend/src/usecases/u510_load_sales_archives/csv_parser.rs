use super::error::DataLoadError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use contracts::domain::a030_sales_record::SalesRecord;
use std::io::Read;

/// Колонки, без которых файл не принимается.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "date",
    "store_nbr",
    "family",
    "sales",
    "transactions",
    "onpromotion",
    "state",
    "day_of_week",
    "week",
    "month",
    "year",
    "holiday_type",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Позиции обязательных колонок в конкретном файле.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    store_nbr: usize,
    family: usize,
    sales: usize,
    transactions: usize,
    onpromotion: usize,
    state: usize,
    day_of_week: usize,
    week: usize,
    month: usize,
    year: usize,
    holiday_type: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord, file: &str) -> Result<Self, DataLoadError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let position = |column: &str| names.iter().position(|n| n == column);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| position(**c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataLoadError::MissingColumns {
                file: file.to_string(),
                columns: missing,
            });
        }

        let extra: Vec<&String> = names
            .iter()
            .filter(|n| !REQUIRED_COLUMNS.iter().any(|c| *c == n.as_str()))
            .collect();
        if !extra.is_empty() {
            tracing::debug!("{}: ignoring extra columns {:?}", file, extra);
        }

        let at = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            date: at("date"),
            store_nbr: at("store_nbr"),
            family: at("family"),
            sales: at("sales"),
            transactions: at("transactions"),
            onpromotion: at("onpromotion"),
            state: at("state"),
            day_of_week: at("day_of_week"),
            week: at("week"),
            month: at("month"),
            year: at("year"),
            holiday_type: at("holiday_type"),
        })
    }
}

/// Контекст одной строки для сообщений об ошибках.
struct RowCursor<'a> {
    file: &'a str,
    line: u64,
    record: &'a csv::StringRecord,
}

impl RowCursor<'_> {
    fn text(&self, index: usize) -> &str {
        self.record.get(index).unwrap_or("").trim()
    }

    fn invalid(&self, column: &str, value: &str) -> DataLoadError {
        DataLoadError::InvalidValue {
            file: self.file.to_string(),
            line: self.line,
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Пустое значение и `nan` считаются пропуском и заполняются нулём.
    fn is_missing(value: &str) -> bool {
        value.is_empty() || value.eq_ignore_ascii_case("nan") || value.eq_ignore_ascii_case("null")
    }

    fn non_negative_f64(&self, index: usize, column: &str) -> Result<f64, DataLoadError> {
        let raw = self.text(index);
        if Self::is_missing(raw) {
            return Ok(0.0);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(self.invalid(column, raw)),
        }
    }

    /// Целое неотрицательное; допускается запись вида `2111.0`.
    fn non_negative_count(&self, index: usize, column: &str) -> Result<u64, DataLoadError> {
        let raw = self.text(index);
        if Self::is_missing(raw) {
            return Ok(0);
        }
        if let Ok(v) = raw.parse::<u64>() {
            return Ok(v);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
                Ok(v as u64)
            }
            _ => Err(self.invalid(column, raw)),
        }
    }

    fn integer(&self, index: usize, column: &str) -> Result<i64, DataLoadError> {
        let raw = self.text(index);
        if let Ok(v) = raw.parse::<i64>() {
            return Ok(v);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
            _ => Err(self.invalid(column, raw)),
        }
    }

    /// Календарное поле; пустая ячейка вычисляется из даты строки.
    fn calendar<T: TryFrom<i64>>(
        &self,
        index: usize,
        column: &str,
        derived: T,
    ) -> Result<T, DataLoadError> {
        let raw = self.text(index);
        if Self::is_missing(raw) {
            return Ok(derived);
        }
        let value = self.integer(index, column)?;
        T::try_from(value).map_err(|_| self.invalid(column, raw))
    }

    fn date(&self, index: usize) -> Result<NaiveDate, DataLoadError> {
        let raw = self.text(index);
        parse_date(raw).ok_or_else(|| self.invalid("date", raw))
    }
}

/// Форматы `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` и `DD/MM/YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

fn english_weekday(date: NaiveDate) -> String {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
    .to_string()
}

fn parse_row(cols: &ColumnIndex, row: &RowCursor<'_>) -> Result<SalesRecord, DataLoadError> {
    let date = row.date(cols.date)?;

    let day_of_week = match row.text(cols.day_of_week) {
        "" => english_weekday(date),
        day => day.to_string(),
    };
    let holiday_type = match row.text(cols.holiday_type) {
        value if RowCursor::is_missing(value) => None,
        value => Some(value.to_string()),
    };

    Ok(SalesRecord {
        date,
        store_id: row.integer(cols.store_nbr, "store_nbr")?,
        family: row.text(cols.family).to_string(),
        sales: row.non_negative_f64(cols.sales, "sales")?,
        transactions: row.non_negative_count(cols.transactions, "transactions")?,
        on_promotion: row.non_negative_count(cols.onpromotion, "onpromotion")?,
        state: row.text(cols.state).to_string(),
        day_of_week,
        week: row.calendar(cols.week, "week", date.iso_week().week())?,
        month: row.calendar(cols.month, "month", date.month())?,
        year: row.calendar(cols.year, "year", date.year())?,
        holiday_type,
    })
}

/// Разобрать CSV с продажами.
///
/// Заголовок проверяется до разбора первой строки; `file` используется
/// только в сообщениях об ошибках.
pub fn parse_sales_csv<R: Read>(reader: R, file: &str) -> Result<Vec<SalesRecord>, DataLoadError> {
    let csv_err = |source: csv::Error| DataLoadError::Csv {
        file: file.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let cols = ColumnIndex::from_headers(&headers, file)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row = RowCursor {
            file,
            line,
            record: &record,
        };
        records.push(parse_row(&cols, &row)?);
    }

    Ok(records)
}
