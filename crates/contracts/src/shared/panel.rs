use serde::{Deserialize, Serialize};

/// Предупреждение о пустой выборке: панель показывает сообщение вместо графика
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptySelectionWarning {
    pub panel: String,
    pub message: String,
}

/// Состояние одной панели. Панели считаются независимо: пустая выборка
/// в одной панели не блокирует остальные.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    Empty(EmptySelectionWarning),
}

impl<T> Panel<T> {
    pub fn empty(panel: &str, message: impl Into<String>) -> Self {
        Panel::Empty(EmptySelectionWarning {
            panel: panel.to_string(),
            message: message.into(),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Panel::Empty(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(data) => Some(data),
            Panel::Empty(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_json_shape() {
        let ready: Panel<u32> = Panel::Ready(3);
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            serde_json::json!({"status": "ready", "data": 3})
        );

        let empty: Panel<u32> = Panel::empty("top_products", "Нет данных");
        assert!(empty.is_empty());
        assert_eq!(empty.ready(), None);
    }
}
