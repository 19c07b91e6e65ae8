use serde::{Deserialize, Serialize};

use crate::shared::analytics::{GroupAggregate, LiftResult, ParetoDimension, ParetoRow};
use crate::shared::indicators::Indicator;
use crate::shared::panel::Panel;

/// Запрос вкладки «Дополнительный анализ»
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvancedInsightsRequest {
    #[serde(default)]
    pub pareto_dimension: ParetoDimension,
}

/// Ответ вкладки «Дополнительный анализ»
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedInsightsResponse {
    /// Ключевые показатели вкладки
    pub summary: Panel<Vec<Indicator>>,
    pub promotion: Panel<PromotionImpact>,
    /// Топ-10 штатов по лифту промо
    pub state_lift: Panel<Vec<LiftResult>>,
    /// Средние продажи по типу праздника, по убыванию
    pub holiday_sales: Panel<Vec<GroupAggregate>>,
    pub year_over_year: Panel<YearOverYear>,
    pub concentration: Panel<Concentration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionImpact {
    pub lift: LiftResult,
    /// Продажи с промо / все продажи, 0..1
    pub promotion_share: f64,
    /// Средние продажи по флагу промо (`false`, `true`)
    pub mean_by_flag: Vec<GroupAggregate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTotal {
    pub year: i32,
    pub total_sales: f64,
    /// Изменение к предыдущему году в процентах; `None` для первого года
    pub yoy_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearOverYear {
    pub years: Vec<YearlyTotal>,
    /// Продажи последнего года или всех данных, если лет меньше двух
    pub headline_sales: f64,
    /// `None` отображается как "N/A"
    pub latest_growth_pct: Option<f64>,
    /// Карточки «Продажи» и «Рост год к году»
    pub cards: Vec<Indicator>,
}

/// Результат анализа концентрации продаж (правило Парето)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concentration {
    pub dimension: ParetoDimension,
    pub threshold_pct: f64,
    /// Сколько участников нужно для достижения порога (по полному ряду)
    pub n_for_threshold: usize,
    pub population: usize,
    /// Только первые строки, обрезанные для отображения
    pub rows: Vec<ParetoRow>,
}
