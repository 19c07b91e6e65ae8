use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Архивы с CSV, склеиваются в указанном порядке
    pub archives: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Параметры отображения дашборда
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    /// Размер всех рейтингов top-N
    pub top_n: usize,
    pub pareto_threshold_pct: f64,
    /// Строк ряда Парето для графиков
    pub pareto_display_limit: usize,
    pub histogram_max_bins: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            pareto_threshold_pct: 80.0,
            pareto_display_limit: 50,
            histogram_max_bins: 30,
        }
    }
}

/// Конфигурация по умолчанию, встроенная в бинарник
const DEFAULT_CONFIG: &str = r#"
[dataset]
archives = ["parte_1.csv.zip", "parte_2.csv.zip"]

[server]
host = "127.0.0.1"
port = 3000

[dashboard]
top_n = 10
pareto_threshold_pct = 80.0
pareto_display_limit = 50
histogram_max_bins = 30
"#;

/// Загрузка конфигурации из config.toml
///
/// Порядок поиска:
/// 1. Рядом с исполняемым файлом (туда его копирует build.rs)
/// 2. Иначе встроенная конфигурация по умолчанию
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Пути к архивам из конфигурации.
///
/// Относительный путь ищется сначала в рабочем каталоге, затем рядом с
/// исполняемым файлом. Если файл не найден, путь возвращается как есть, а
/// загрузчик сообщит об отсутствии архива.
pub fn resolve_archive_paths(config: &Config) -> Vec<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    config
        .dataset
        .archives
        .iter()
        .map(|archive| resolve_path(Path::new(archive), exe_dir.as_deref()))
        .collect()
}

fn resolve_path(path: &Path, exe_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }

    if let Some(dir) = exe_dir {
        let candidate = dir.join(path);
        if candidate.exists() {
            return candidate;
        }
    }

    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(
            config.dataset.archives,
            vec!["parte_1.csv.zip".to_string(), "parte_2.csv.zip".to_string()]
        );
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.dashboard, DashboardSettings::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            archives = ["one.zip"]

            [dashboard]
            top_n = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.top_n, 5);
        assert_eq!(config.dashboard.pareto_display_limit, 50);
    }

    #[test]
    fn test_unresolvable_path_is_kept_as_given() {
        let path = Path::new("no/such/archive.zip");
        assert_eq!(resolve_path(path, Some(Path::new("/tmp"))), path.to_path_buf());

        let absolute = std::env::temp_dir().join("x.zip");
        assert_eq!(resolve_path(&absolute, None), absolute);
    }
}
