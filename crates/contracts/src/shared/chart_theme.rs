use serde::Serialize;

/// Оформление осей, общее для всех графиков.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisStyle {
    pub grid: bool,
    pub label_font_size: u8,
    pub title_font_size: u8,
    pub ticks: bool,
    pub domain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendStyle {
    pub label_font_size: u8,
    pub title_font_size: u8,
}

/// Цвета серий графиков
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPalette {
    pub sales: &'static str,
    pub promotion: &'static str,
    pub transactions: &'static str,
    pub holiday: &'static str,
    pub state: &'static str,
    pub reference: &'static str,
}

/// Статическая конфигурация графиков для фронтенда.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartTheme {
    pub name: &'static str,
    pub view_stroke: Option<&'static str>,
    pub axis: AxisStyle,
    pub legend: LegendStyle,
    pub palette: SeriesPalette,
    /// Штрих опорных линий (например, общего среднего)
    pub reference_dash: [u8; 2],
}

pub const CLEAN_THEME: ChartTheme = ChartTheme {
    name: "clean_theme",
    view_stroke: None,
    axis: AxisStyle {
        grid: true,
        label_font_size: 12,
        title_font_size: 13,
        ticks: false,
        domain: false,
    },
    legend: LegendStyle {
        label_font_size: 12,
        title_font_size: 12,
    },
    palette: SeriesPalette {
        sales: "#1f77b4",
        promotion: "#ff7f0e",
        transactions: "#2ca02c",
        holiday: "#9467bd",
        state: "#17becf",
        reference: "#444444",
    },
    reference_dash: [6, 6],
};
