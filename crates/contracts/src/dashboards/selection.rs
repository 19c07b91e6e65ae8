use serde::{Deserialize, Serialize};

use crate::shared::analytics::{MetricMode, ParetoDimension};
use crate::shared::query::blank_as_none;

/// Состояние пользовательских переключателей.
///
/// Передаётся явно в каждый вызов `render`; `None` означает значение по умолчанию
/// (первый магазин, первый штат, ведущий магазин штата).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSelection {
    #[serde(default)]
    pub metric_mode: MetricMode,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub store: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub state: Option<String>,
    /// Магазин внутри выбранного штата
    #[serde(default, deserialize_with = "blank_as_none")]
    pub state_store: Option<i64>,
    #[serde(default)]
    pub pareto_dimension: ParetoDimension,
}
