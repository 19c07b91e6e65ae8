use std::io::{Cursor, Write};
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const HEADER: &str =
    "date,store_nbr,family,sales,transactions,onpromotion,state,day_of_week,week,month,year,holiday_type";

/// Zip-архив в памяти из пар `(имя файла, содержимое)`.
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Тело CSV со стандартным заголовком.
pub fn sales_csv(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

/// Записывает архив в `dir`; каталог удаляется вместе с `TempDir`.
pub fn write_archive(dir: &TempDir, file_name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, zip_bytes(entries)).unwrap();
    path
}
