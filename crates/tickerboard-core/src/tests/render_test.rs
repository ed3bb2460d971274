//! Unit tests for the renderers
//!
//! Tests cover:
//! - Price and returns charts
//! - Stat panel fields and sign styling
//! - Comparison cards and rounding
//! - Top movers lists
//! - Company directory filtering

use super::fixtures::*;
use crate::format::{StyledValue, Tone};
use crate::models::{TopGainers, TopLosers, VolatilityUnit};
use crate::settings::DisplaySettings;
use crate::view::*;

// ============================================================================
// CHART TESTS
// ============================================================================

#[test]
fn test_price_chart_has_one_point_per_element() {
    for len in [0, 1, 7, 30, 365] {
        let data = series(len.min(31));
        let chart = PriceChart::from_series(&data);
        assert_eq!(chart.len(), data.len());
        assert_eq!(chart.close.values.len(), data.len());
        assert_eq!(chart.moving_average.values.len(), data.len());
    }
}

#[test]
fn test_price_chart_layout() {
    let chart = PriceChart::from_series(&series(10));
    assert_eq!(chart.title, "Price Trend");
    assert_eq!(chart.x_title, "Date");
    assert_eq!(chart.y_title, "Price");
    assert_eq!(chart.hover, HoverMode::XUnified);
    assert_eq!(chart.close.name, "Close Price");
    assert_eq!(chart.close.style, LineStyle::Solid);
    assert_eq!(chart.moving_average.name, "7-Day MA");
    assert_eq!(chart.moving_average.style, LineStyle::Dashed);
}

#[test]
fn test_missing_moving_average_leaves_gaps() {
    let chart = PriceChart::from_series(&series(10));
    assert!(chart.moving_average.values[..6].iter().all(Option::is_none));
    assert!(chart.moving_average.values[6..].iter().all(Option::is_some));

    let plotted = chart.plot(&chart.moving_average);
    assert_eq!(plotted.len(), 10);
    assert!(plotted[0].is_none());
    assert!(plotted[9].is_some());
}

#[test]
fn test_price_chart_keeps_input_order() {
    let mut data = series(5);
    data.reverse();
    let chart = PriceChart::from_series(&data);
    let dates: Vec<_> = data.iter().map(|p| p.date).collect();
    assert_eq!(chart.dates, dates);
}

#[test]
fn test_plot_spans_unit_square() {
    let chart = PriceChart::from_series(&series(5));
    let plotted = chart.plot(&chart.close);
    let first = plotted[0].unwrap();
    let last = plotted[4].unwrap();
    assert_eq!(first, (0.0, 0.0));
    assert_eq!(last, (1.0, 1.0));
}

#[test]
fn test_price_hover_lists_both_series() {
    let chart = PriceChart::from_series(&series(8));
    let label = chart.hover_label(0).unwrap();
    assert!(label.starts_with("2024-03-01"));
    assert!(label.contains("Close Price: 101.00"));
    assert!(label.contains("7-Day MA: -"));
    assert!(chart.hover_label(8).is_none());
}

#[test]
fn test_missing_daily_return_renders_as_zero_bar() {
    let data = vec![point(1, 100.0, None, None), point(2, 101.0, None, Some(-0.4))];
    let chart = ReturnsChart::from_series(&data);
    assert_eq!(chart.len(), 2);
    assert_eq!(chart.bars[0].value, 0.0);
    assert_eq!(chart.bars[0].tone, Tone::Positive);
    assert_eq!(chart.bars[1].tone, Tone::Negative);
}

#[test]
fn test_returns_chart_layout() {
    let chart = ReturnsChart::from_series(&series(3));
    assert_eq!(chart.title, "Daily Returns");
    assert_eq!(chart.y_title, "Return %");
    assert_eq!(chart.series_name, "Daily Returns %");
    assert_eq!(chart.max_magnitude(), 1.0);
    assert_eq!(chart.bar_extent(1), 1.0);
    assert_eq!(chart.bar_extent(2), 0.5);
    assert_eq!(chart.bar_extent(99), 0.0);
}

#[test]
fn test_rerender_is_idempotent() {
    let data = series(12);
    assert_eq!(PriceChart::from_series(&data), PriceChart::from_series(&data));
    assert_eq!(ReturnsChart::from_series(&data), ReturnsChart::from_series(&data));
}

// ============================================================================
// STAT PANEL TESTS
// ============================================================================

#[test]
fn test_stat_panel_field_order_and_values() {
    let panel = render_stat_panel(&summary("INFY", "Infosys", 4.0), &DisplaySettings::default());
    let labels: Vec<_> = panel.fields.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        ["Current Price", "52-Week High", "52-Week Low", "7-Day MA", "Daily Return", "Volatility"]
    );
    assert_eq!(panel.field("Current Price").unwrap().value.text, "₹1520.5");
    assert_eq!(panel.field("52-Week Low").unwrap().value.text, "₹1300.25");
    assert_eq!(panel.field("Daily Return").unwrap().value, StyledValue::toned("+0.5%", Tone::Positive));
    assert_eq!(panel.field("Volatility").unwrap().value.text, "1.84%");
}

#[test]
fn test_stat_panel_uses_configured_currency() {
    let display = DisplaySettings {
        currency_symbol: "$".to_string(),
        ..DisplaySettings::default()
    };
    let panel = render_stat_panel(&summary("AAPL", "Apple", 1.0), &display);
    assert_eq!(panel.field("52-Week High").unwrap().value.text, "$1700");
}

#[test]
fn test_sign_styling_is_idempotent() {
    let display = DisplaySettings::default();
    for daily in [2.5, 0.0, -1.5] {
        let mut stock = summary("X", "X", 0.0);
        stock.daily_return = daily;
        let first = render_stat_panel(&stock, &display);
        let second = render_stat_panel(&stock, &display);
        assert_eq!(first, second);
    }
}

#[test]
fn test_zero_return_is_styled_negative_without_plus() {
    let mut stock = summary("X", "X", 0.0);
    stock.daily_return = 0.0;
    let panel = render_stat_panel(&stock, &DisplaySettings::default());
    let value = &panel.field("Daily Return").unwrap().value;
    assert_eq!(value.text, "0%");
    assert_eq!(value.tone, Some(Tone::Negative));
    assert_eq!(value.tone.unwrap().class_name(), "return-negative");
}

#[test]
fn test_negative_return_styling() {
    let mut stock = summary("X", "X", 0.0);
    stock.daily_return = -1.5;
    let panel = render_stat_panel(&stock, &DisplaySettings::default());
    assert_eq!(
        panel.field("Daily Return").unwrap().value,
        StyledValue::toned("-1.5%", Tone::Negative)
    );
}

#[test]
fn test_volatility_panel() {
    let panel = render_volatility_panel(&volatility("INFY"));
    assert_eq!(panel.field("Daily Volatility").unwrap().value.text, "1.23%");
    assert_eq!(panel.field("Annualized Volatility").unwrap().value.text, "19.60%");
    assert_eq!(panel.field("Trend").unwrap().value.text, "Increasing");
    assert_eq!(panel.field("High-Volatility Days").unwrap().value.text, "3");
}

// ============================================================================
// COMPARISON TESTS
// ============================================================================

#[test]
fn test_correlation_rounds_to_four_decimals() {
    let cards = render_comparison("INFY", "TCS", &comparison(), &DisplaySettings::default());
    let analysis = &cards.cards[2];
    assert_eq!(analysis.title, "Correlation Analysis");
    assert_eq!(analysis.stat("Correlation").unwrap().value.text, "0.1235");
    assert_eq!(analysis.stat("Volatility Ratio").unwrap().value.text, "1.5000");
    assert_eq!(
        analysis.stat("Return Difference").unwrap().value,
        StyledValue::toned("+5.75%", Tone::Positive)
    );
}

#[test]
fn test_comparison_volatility_scaled_to_two_decimals() {
    let mut result = comparison();
    result.stock1.volatility = 0.018456;
    result.stock2.volatility = 0.02;
    let cards = render_comparison("INFY", "TCS", &result, &DisplaySettings::default());
    assert_eq!(cards.cards[0].stat("Volatility").unwrap().value.text, "1.85%");
    assert_eq!(cards.cards[1].stat("Volatility").unwrap().value.text, "2.00%");
}

#[test]
fn test_comparison_volatility_in_percent_is_not_scaled() {
    let display = DisplaySettings {
        comparison_volatility_unit: VolatilityUnit::Percent,
        ..DisplaySettings::default()
    };
    let cards = render_comparison("INFY", "TCS", &comparison(), &display);
    assert_eq!(cards.cards[0].stat("Volatility").unwrap().value.text, "1.84%");
}

#[test]
fn test_comparison_stock_cards() {
    let cards = render_comparison("INFY", "TCS", &comparison(), &DisplaySettings::default());
    assert_eq!(cards.subtitle.as_deref(), Some("over 90 days"));
    assert_eq!(cards.cards[0].title, "INFY");
    assert_eq!(cards.cards[1].title, "TCS");
    assert_eq!(cards.cards[0].stat("Current Price").unwrap().value.text, "₹1520.5");
    assert_eq!(
        cards.cards[1].stat("Return").unwrap().value,
        StyledValue::toned("-1.25%", Tone::Negative)
    );
}

#[test]
fn test_comparison_without_period_has_no_subtitle() {
    let mut result = comparison();
    result.period_days = None;
    let cards = render_comparison("A", "B", &result, &DisplaySettings::default());
    assert!(cards.subtitle.is_none());
}

// ============================================================================
// TOP MOVERS TESTS
// ============================================================================

#[test]
fn test_dashboard_gainer_item() {
    let movers = TopMovers::new(
        TopGainers {
            gainers: vec![summary("AAA", "Alpha", 5.2)],
        },
        TopLosers { losers: vec![] },
    );
    let items = render_mover_list(&movers.gainers);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].ticker, "AAA");
    assert_eq!(items[0].name, "Alpha");
    assert_eq!(items[0].change.text, "+5.2%");
    assert_eq!(items[0].change.tone, Some(Tone::Positive));
}

#[test]
fn test_loser_item_is_negative() {
    let items = render_mover_list(&[summary("ZZZ", "Zeta", -3.1)]);
    assert_eq!(items[0].change, StyledValue::toned("-3.1%", Tone::Negative));
}

#[test]
fn test_empty_mover_list() {
    assert!(render_mover_list(&[]).is_empty());
}

// ============================================================================
// COMPANY DIRECTORY TESTS
// ============================================================================

#[test]
fn test_filter_matches_ticker_or_name_case_insensitive() {
    let mut directory = CompanyDirectory::new(companies());

    directory.apply_filter("infy");
    let visible: Vec<_> = directory.visible().map(|c| c.company.ticker.as_str()).collect();
    assert_eq!(visible, ["INFY"]);

    directory.apply_filter("BANK");
    let visible: Vec<_> = directory.visible().map(|c| c.company.ticker.as_str()).collect();
    assert_eq!(visible, ["HDFCBANK"]);

    directory.apply_filter("tata");
    assert_eq!(directory.visible_count(), 1);
    assert!(directory.cards().iter().any(|c| c.company.ticker == "TCS" && c.visible));
}

#[test]
fn test_clearing_filter_restores_all_cards() {
    let mut directory = CompanyDirectory::new(companies());
    for term in ["zzz", "in", "RELIANCE", ""] {
        directory.apply_filter(term);
        assert_eq!(directory.len(), 4);
    }
    assert_eq!(directory.visible_count(), 4);
}

#[test]
fn test_filter_survives_reload() {
    let mut directory = CompanyDirectory::new(companies());
    directory.apply_filter("tcs");
    directory.replace(companies());
    assert_eq!(directory.filter(), "tcs");
    assert_eq!(directory.visible_count(), 1);
}

#[test]
fn test_lookup_by_ticker() {
    let directory = CompanyDirectory::new(companies());
    assert_eq!(directory.get("HDFCBANK").unwrap().name, "HDFC Bank");
    assert!(directory.get("NOPE").is_none());
}
