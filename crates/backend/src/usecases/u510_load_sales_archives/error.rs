use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки архивов с продажами. Любая из них фатальна при старте.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Archive not found: {}", path.display())]
    ArchiveMissing { path: PathBuf },

    #[error("No dataset archives configured ([dataset] archives is empty)")]
    NoArchivesConfigured,

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid zip archive {archive}: {source}")]
    Zip {
        archive: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Archive {archive} contains no .csv file")]
    NoTabularFile { archive: String },

    #[error("Archive {archive} contains more than one .csv file: {}", entries.join(", "))]
    MultipleTabularFiles {
        archive: String,
        entries: Vec<String>,
    },

    #[error("File {file} is missing required columns: {}", columns.join(", "))]
    MissingColumns { file: String, columns: Vec<String> },

    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid value {value:?} in column '{column}' of {file}, line {line}")]
    InvalidValue {
        file: String,
        line: u64,
        column: String,
        value: String,
    },
}
