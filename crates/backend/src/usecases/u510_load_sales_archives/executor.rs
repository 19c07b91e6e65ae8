use super::archive::read_single_csv;
use super::csv_parser::parse_sales_csv;
use super::error::DataLoadError;
use crate::domain::a030_sales_record::SalesTable;
use contracts::domain::a030_sales_record::SalesRecord;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

/// Загрузить все архивы в одну таблицу.
///
/// Строки склеиваются в порядке конфигурации. Вызывается один раз при старте.
pub fn load_sales_table(archives: &[PathBuf]) -> Result<SalesTable, DataLoadError> {
    if archives.is_empty() {
        return Err(DataLoadError::NoArchivesConfigured);
    }

    let mut records = Vec::new();
    for path in archives {
        let mut part = load_archive(path)?;
        records.append(&mut part);
    }

    let table = SalesTable::new(records);
    tracing::info!(
        "Sales table loaded: {} rows from {} archive(s), {} stores, {} families",
        table.len(),
        archives.len(),
        table.stores().len(),
        table.families().len()
    );
    Ok(table)
}

/// Чтение одного архива с диска.
pub fn load_archive(path: &Path) -> Result<Vec<SalesRecord>, DataLoadError> {
    if !path.is_file() {
        return Err(DataLoadError::ArchiveMissing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_archive_from_reader(BufReader::new(file), &path.display().to_string())
}

/// Распаковка и разбор архива из `reader`; `label` используется в логах и ошибках.
pub fn load_archive_from_reader<R: Read + Seek>(
    reader: R,
    label: &str,
) -> Result<Vec<SalesRecord>, DataLoadError> {
    tracing::info!("Loading archive {}", label);

    let entry = read_single_csv(reader, label)?;
    tracing::debug!("{}: entry {} ({} bytes)", label, entry.name, entry.bytes.len());

    let file = format!("{}!{}", label, entry.name);
    let records = parse_sales_csv(entry.bytes.as_slice(), &file)?;

    tracing::info!("{}: {} rows parsed", file, records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::aggregate;
    use crate::usecases::u510_load_sales_archives::fixtures::{
        sales_csv, write_archive, zip_bytes,
    };
    use contracts::shared::analytics::{AggregateQuery, GroupField, Metric, Reducer};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn part_one() -> String {
        sales_csv(&[
            "2016-01-04,1,A,10,5,0,Pichincha,Monday,1,1,2016,Work Day",
            "2016-01-04,1,B,30,5,2,Pichincha,Monday,1,1,2016,Work Day",
        ])
    }

    fn part_two() -> String {
        sales_csv(&[
            "2016-01-05,2,A,20,,,Guayas,Tuesday,1,1,2016,",
            "2016-01-05,2,B,,3,1,Guayas,Tuesday,1,1,2016,",
        ])
    }

    #[test]
    fn test_concatenates_archives_in_order() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let first = write_archive(&temp, "parte_1.csv.zip", &[("parte_1.csv", part_one().as_str())]);
        let second = write_archive(&temp, "parte_2.csv.zip", &[("parte_2.csv", part_two().as_str())]);

        let table = load_sales_table(&[first, second]).unwrap();

        assert_eq!(table.len(), 4);
        let stores: Vec<i64> = table.iter().map(|r| r.store_id).collect();
        assert_eq!(stores, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_loading_twice_gives_identical_aggregates() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = write_archive(&temp, "parte_1.csv.zip", &[("parte_1.csv", part_one().as_str())]);
        let query = AggregateQuery::new(GroupField::Family, Metric::Sales, Reducer::Mean);

        let first = load_sales_table(&[path.clone()]).unwrap();
        let second = load_sales_table(&[path]).unwrap();

        assert_eq!(first.records(), second.records());
        assert_eq!(aggregate(first.iter(), &query), aggregate(second.iter(), &query));
    }

    #[test]
    fn test_temp_archives_are_removed_on_drop() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dir = temp.path().to_path_buf();
        let path = write_archive(&temp, "parte_1.csv.zip", &[("parte_1.csv", part_one().as_str())]);
        assert_eq!(load_sales_table(&[path.clone()]).unwrap().len(), 2);

        drop(temp);
        assert!(!dir.exists());
        assert!(matches!(
            load_sales_table(&[path]).unwrap_err(),
            DataLoadError::ArchiveMissing { .. }
        ));
    }

    #[test]
    fn test_null_fill_leaves_no_negative_or_missing_values() {
        let bytes = zip_bytes(&[("parte_2.csv", part_two().as_str())]);
        let records = load_archive_from_reader(Cursor::new(bytes), "parte_2.csv.zip").unwrap();

        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| r.sales >= 0.0 && r.sales.is_finite()));
        assert_eq!(records[0].transactions, 0);
        assert_eq!(records[0].on_promotion, 0);
        assert_eq!(records[1].sales, 0.0);
        assert!(records.iter().all(|r| r.holiday_type.is_none()));
    }

    #[test]
    fn test_missing_archive() {
        let missing = PathBuf::from("definitely/not/here.zip");
        match load_sales_table(&[missing.clone()]).unwrap_err() {
            DataLoadError::ArchiveMissing { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            load_sales_table(&[]).unwrap_err(),
            DataLoadError::NoArchivesConfigured
        ));
    }

    #[test]
    fn test_archive_without_required_columns() {
        let bytes = zip_bytes(&[("bad.csv", "date,store_nbr\n2016-01-04,1\n")]);
        let err = load_archive_from_reader(Cursor::new(bytes), "bad.zip").unwrap_err();
        match err {
            DataLoadError::MissingColumns { file, columns } => {
                assert_eq!(file, "bad.zip!bad.csv");
                assert_eq!(columns.len(), 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_macos_metadata_is_skipped() {
        let bytes = zip_bytes(&[
            ("__MACOSX/._parte_1.csv", "\u{0}\u{5}binary"),
            ("parte_1.csv", part_one().as_str()),
        ]);
        let records = load_archive_from_reader(Cursor::new(bytes), "parte_1.csv.zip").unwrap();
        assert_eq!(records.len(), 2);
    }
}
