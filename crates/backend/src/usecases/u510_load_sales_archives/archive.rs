use super::error::DataLoadError;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Табличный файл внутри архива: `.csv` (без учёта регистра), не каталог,
/// не служебные файлы macOS.
pub fn is_tabular_entry(name: &str, is_dir: bool) -> bool {
    !is_dir && !name.contains("__MACOSX") && name.to_ascii_lowercase().ends_with(".csv")
}

/// Извлечённый CSV: имя внутри архива и содержимое.
#[derive(Debug, Clone)]
pub struct TabularEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Читает единственный подходящий CSV из архива.
///
/// Если подходящих файлов нет или их несколько, это ошибка.
pub fn read_single_csv<R: Read + Seek>(
    reader: R,
    archive_label: &str,
) -> Result<TabularEntry, DataLoadError> {
    let zip_err = |source: zip::result::ZipError| DataLoadError::Zip {
        archive: archive_label.to_string(),
        source,
    };

    let mut archive = ZipArchive::new(reader).map_err(zip_err)?;

    let mut candidates = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(zip_err)?;
        if is_tabular_entry(entry.name(), entry.is_dir()) {
            candidates.push(entry.name().to_string());
        } else {
            tracing::debug!("{}: skipping entry {}", archive_label, entry.name());
        }
    }

    let name = match candidates.len() {
        0 => {
            return Err(DataLoadError::NoTabularFile {
                archive: archive_label.to_string(),
            })
        }
        1 => candidates.remove(0),
        _ => {
            return Err(DataLoadError::MultipleTabularFiles {
                archive: archive_label.to_string(),
                entries: candidates,
            })
        }
    };

    let mut entry = archive.by_name(&name).map_err(zip_err)?;
    let mut bytes = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| zip_err(zip::result::ZipError::Io(e)))?;

    Ok(TabularEntry { name, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u510_load_sales_archives::fixtures::zip_bytes;
    use std::io::Cursor;

    #[test]
    fn test_entry_eligibility() {
        assert!(is_tabular_entry("parte_1.csv", false));
        assert!(is_tabular_entry("data/PARTE_2.CSV", false));
        assert!(!is_tabular_entry("__MACOSX/._parte_1.csv", false));
        assert!(!is_tabular_entry("readme.txt", false));
        assert!(!is_tabular_entry("folder.csv/", true));
    }

    #[test]
    fn test_reads_the_only_csv_and_skips_macos_metadata() {
        let bytes = zip_bytes(&[
            ("__MACOSX/._sales.csv", "junk"),
            ("sales.csv", "a,b\n1,2\n"),
            ("notes.txt", "hello"),
        ]);
        let entry = read_single_csv(Cursor::new(bytes), "test.zip").unwrap();
        assert_eq!(entry.name, "sales.csv");
        assert_eq!(entry.bytes, b"a,b\n1,2\n");
    }

    #[test]
    fn test_no_csv_is_an_error() {
        let bytes = zip_bytes(&[("notes.txt", "hello")]);
        let err = read_single_csv(Cursor::new(bytes), "test.zip").unwrap_err();
        assert!(matches!(err, DataLoadError::NoTabularFile { .. }));
    }

    #[test]
    fn test_multiple_csv_is_an_error() {
        let bytes = zip_bytes(&[("a.csv", "x\n"), ("b.csv", "y\n")]);
        let err = read_single_csv(Cursor::new(bytes), "test.zip").unwrap_err();
        match err {
            DataLoadError::MultipleTabularFiles { entries, .. } => {
                assert_eq!(entries, vec!["a.csv".to_string(), "b.csv".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_garbage_is_a_zip_error() {
        let err = read_single_csv(Cursor::new(b"not a zip".to_vec()), "broken.zip").unwrap_err();
        assert!(matches!(err, DataLoadError::Zip { .. }));
    }
}
