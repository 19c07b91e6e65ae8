use contracts::dashboards::d413_advanced_insights::{
    AdvancedInsightsResponse, Concentration, PromotionImpact, YearOverYear,
};
use contracts::shared::analytics::{
    AggregateQuery, GroupField, LiftResult, Metric, ParetoDimension, Reducer, SortOrder,
};
use contracts::shared::indicators::{Indicator, ValueFormat};
use contracts::shared::panel::Panel;

use crate::dashboards::rows_panel;
use crate::domain::a030_sales_record::SalesTable;
use crate::shared::analytics::lift::{global_lift, top_lift_by};
use crate::shared::analytics::summary::{
    average_ticket, best_by_mean, latest_yoy_growth, promotion_share, top_contributor,
    yearly_totals,
};
use crate::shared::analytics::{aggregate, sum_metric, ParetoSeries};
use crate::shared::config::DashboardSettings;

const NO_DATA: &str = "Нет данных о продажах";

/// Вкладка «Дополнительный анализ»
pub fn render(
    table: &SalesTable,
    dimension: ParetoDimension,
    settings: &DashboardSettings,
) -> AdvancedInsightsResponse {
    AdvancedInsightsResponse {
        summary: summary(table),
        promotion: promotion(table),
        state_lift: state_lift(table, settings.top_n),
        holiday_sales: rows_panel(
            "holiday_sales",
            aggregate(
                table.iter(),
                &AggregateQuery::new(GroupField::HolidayType, Metric::Sales, Reducer::Mean),
            ),
            "Нет данных о праздниках",
        ),
        year_over_year: year_over_year(table),
        concentration: concentration(table, dimension, settings),
    }
}

fn summary(table: &SalesTable) -> Panel<Vec<Indicator>> {
    let (Some(best_day), Some(best_month), Some(top_state)) = (
        best_by_mean(table.iter(), GroupField::DayOfWeek),
        best_by_mean(table.iter(), GroupField::Month),
        top_contributor(table.iter(), GroupField::State),
    ) else {
        return Panel::empty("summary", NO_DATA);
    };

    Panel::Ready(vec![
        Indicator::text("best_day", "Лучший день (среднее)", best_day.key.to_string()),
        Indicator::text("best_month", "Лучший месяц (среднее)", best_month.key.to_string()),
        Indicator::text("top_state", "Лучший штат", top_state.key.to_string()),
        Indicator::percent("top_state_share", "Доля продаж штата", Some(top_state.share_pct)),
        Indicator::percent(
            "promotion_share",
            "Продажи с промо",
            Some(promotion_share(table.iter()) * 100.0),
        ),
        Indicator::number(
            "average_ticket",
            "Средний чек",
            ValueFormat::Number { decimals: 2 },
            average_ticket(table.iter()),
        ),
    ])
}

fn promotion(table: &SalesTable) -> Panel<PromotionImpact> {
    if table.is_empty() {
        return Panel::empty("promotion", NO_DATA);
    }

    let mean_by_flag = aggregate(
        table.iter(),
        &AggregateQuery::new(GroupField::Promoted, Metric::Sales, Reducer::Mean)
            .ordered(SortOrder::KeyAsc),
    );

    Panel::Ready(PromotionImpact {
        lift: global_lift(table.iter()),
        promotion_share: promotion_share(table.iter()),
        mean_by_flag,
    })
}

fn state_lift(table: &SalesTable, top: usize) -> Panel<Vec<LiftResult>> {
    let rows = top_lift_by(table.iter(), GroupField::State, top);
    if rows.is_empty() {
        Panel::empty("state_lift", NO_DATA)
    } else {
        Panel::Ready(rows)
    }
}

/// С одним годом данных рост недоступен, а заголовком служит сумма продаж.
fn year_over_year(table: &SalesTable) -> Panel<YearOverYear> {
    let years = yearly_totals(table.iter());
    if years.is_empty() {
        return Panel::empty("year_over_year", NO_DATA);
    }

    let latest_growth_pct = latest_yoy_growth(&years);
    let headline_sales = match (latest_growth_pct, years.last()) {
        (Some(_), Some(latest)) => latest.total_sales,
        _ => sum_metric(table.iter(), Metric::Sales),
    };

    let cards = vec![
        Indicator::number(
            "headline_sales",
            "Продажи",
            ValueFormat::Number { decimals: 2 },
            headline_sales,
        ),
        Indicator::percent("yoy_growth", "Рост год к году", latest_growth_pct),
    ];

    Panel::Ready(YearOverYear {
        years,
        headline_sales,
        latest_growth_pct,
        cards,
    })
}

fn concentration(
    table: &SalesTable,
    dimension: ParetoDimension,
    settings: &DashboardSettings,
) -> Panel<Concentration> {
    let series = ParetoSeries::build(table.iter(), dimension.group_field(), Metric::Sales);
    if series.is_empty() {
        return Panel::empty("concentration", NO_DATA);
    }

    let n_for_threshold = series.n_for_threshold(settings.pareto_threshold_pct);
    tracing::debug!(
        "D413 Dashboard: {} of {} {:?} reach {}% of sales",
        n_for_threshold,
        series.len(),
        dimension,
        settings.pareto_threshold_pct
    );

    Panel::Ready(Concentration {
        dimension,
        threshold_pct: settings.pareto_threshold_pct,
        n_for_threshold,
        population: series.len(),
        rows: series.display(settings.pareto_display_limit).to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a030_sales_record::fixtures::{record, scenario_table};
    use contracts::domain::a030_sales_record::SalesRecord;
    use contracts::shared::analytics::GroupKey;
    use contracts::shared::indicators::IndicatorValue;

    fn value_of<'a>(cards: &'a [Indicator], id: &str) -> &'a IndicatorValue {
        &cards.iter().find(|c| c.id.0 == id).unwrap().value
    }

    #[test]
    fn test_summary_on_scenario() {
        let response = render(&scenario_table(), ParetoDimension::Stores, &DashboardSettings::default());
        let cards = response.summary.ready().unwrap();

        assert_eq!(value_of(cards, "best_day"), &IndicatorValue::Text("Monday".into()));
        assert_eq!(value_of(cards, "best_month"), &IndicatorValue::Text("1".into()));
        assert_eq!(value_of(cards, "top_state"), &IndicatorValue::Text("Pichincha".into()));
        assert_eq!(value_of(cards, "top_state_share"), &IndicatorValue::Number(100.0));
        assert_eq!(value_of(cards, "promotion_share"), &IndicatorValue::Number(50.0));
        assert_eq!(value_of(cards, "average_ticket"), &IndicatorValue::Number(0.0));
    }

    #[test]
    fn test_promotion_panel() {
        let response = render(&scenario_table(), ParetoDimension::Stores, &DashboardSettings::default());
        let promo = response.promotion.ready().unwrap();

        assert_eq!(promo.lift.lift_ratio, 1.0);
        assert_eq!(promo.promotion_share, 0.5);
        assert_eq!(promo.mean_by_flag[0].key, GroupKey::Flag(false));
        assert_eq!(promo.mean_by_flag[0].value, 15.0);
        assert_eq!(promo.mean_by_flag[1].value, 30.0);

        let lifts = response.state_lift.ready().unwrap();
        assert_eq!(lifts.len(), 1);
    }

    #[test]
    fn test_single_year_has_no_growth() {
        let response = render(&scenario_table(), ParetoDimension::Stores, &DashboardSettings::default());
        let yoy = response.year_over_year.ready().unwrap();
        assert_eq!(yoy.latest_growth_pct, None);
        assert_eq!(yoy.headline_sales, 60.0);
        assert_eq!(value_of(&yoy.cards, "yoy_growth"), &IndicatorValue::NotAvailable);
        assert_eq!(value_of(&yoy.cards, "headline_sales"), &IndicatorValue::Number(60.0));
    }

    #[test]
    fn test_growth_uses_latest_two_years() {
        let table = SalesTable::new(vec![
            SalesRecord { year: 2016, ..record(1, "A", 100.0, 0) },
            SalesRecord { year: 2017, ..record(1, "A", 80.0, 0) },
        ]);
        let response = render(&table, ParetoDimension::Stores, &DashboardSettings::default());
        let yoy = response.year_over_year.ready().unwrap();
        assert_eq!(yoy.headline_sales, 80.0);
        let growth = yoy.latest_growth_pct.unwrap();
        assert!((growth + 20.0).abs() < 1e-9);
        assert!(matches!(
            value_of(&yoy.cards, "yoy_growth"),
            IndicatorValue::Number(g) if (g + 20.0).abs() < 1e-9
        ));
    }

    #[test]
    fn test_holiday_rows_without_type_are_skipped() {
        let table = SalesTable::new(vec![
            record(1, "A", 10.0, 0),
            SalesRecord { holiday_type: Some("Holiday".into()), ..record(1, "A", 40.0, 0) },
            SalesRecord { holiday_type: None, ..record(1, "A", 1000.0, 0) },
        ]);
        let response = render(&table, ParetoDimension::Stores, &DashboardSettings::default());
        let holidays = response.holiday_sales.ready().unwrap();

        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].key, GroupKey::from("Holiday"));
        assert_eq!(holidays[0].value, 40.0);
    }

    #[test]
    fn test_concentration_by_families() {
        let settings = DashboardSettings {
            pareto_display_limit: 1,
            ..Default::default()
        };
        let response = render(&scenario_table(), ParetoDimension::Families, &settings);
        let concentration = response.concentration.ready().unwrap();

        assert_eq!(concentration.dimension, ParetoDimension::Families);
        assert_eq!(concentration.population, 2);
        assert_eq!(concentration.rows.len(), 1);
        // A and B tie at 30, A first; 50% then 100%
        assert_eq!(concentration.rows[0].key, GroupKey::from("A"));
        assert_eq!(concentration.n_for_threshold, 1);
    }

    #[test]
    fn test_empty_table_gives_empty_panels() {
        let response = render(&SalesTable::default(), ParetoDimension::Stores, &DashboardSettings::default());
        assert!(response.summary.is_empty());
        assert!(response.promotion.is_empty());
        assert!(response.state_lift.is_empty());
        assert!(response.holiday_sales.is_empty());
        assert!(response.year_over_year.is_empty());
        assert!(response.concentration.is_empty());
    }
}
