//! Чистые функции аналитики над строками таблицы продаж.
//!
//! Все функции принимают любой итератор по `&SalesRecord` (вся таблица или
//! отфильтрованная выборка) и ничего не кэшируют.

pub mod aggregation;
pub mod distribution;
pub mod lift;
pub mod pareto;
pub mod ranking;
pub mod summary;

pub use aggregation::{aggregate, mean_metric, sum_metric};
pub use pareto::ParetoSeries;
pub use ranking::{top_n, TopN};
