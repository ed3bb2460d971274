//! Stat panel for the analysis section

use crate::format::{format_currency, format_number, format_percent_fixed, format_signed_percent, StyledValue};
use crate::models::{StockSummary, VolatilityMetrics, VolatilityUnit};
use crate::settings::DisplaySettings;

/// Unit of the summary endpoint's `volatility` (std. dev. of percent returns)
pub const SUMMARY_VOLATILITY_UNIT: VolatilityUnit = VolatilityUnit::Percent;

#[derive(Debug, Clone, PartialEq)]
pub struct StatField {
    pub label: &'static str,
    pub value: StyledValue,
}

impl StatField {
    fn new(label: &'static str, value: StyledValue) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatPanel {
    pub fields: Vec<StatField>,
}

impl StatPanel {
    pub fn field(&self, label: &str) -> Option<&StatField> {
        self.fields.iter().find(|f| f.label == label)
    }
}

/// The six fixed fields, in display order
pub fn render_stat_panel(summary: &StockSummary, display: &DisplaySettings) -> StatPanel {
    let currency = |v: f64| StyledValue::plain(format_currency(&display.currency_symbol, v));
    let volatility = SUMMARY_VOLATILITY_UNIT.to_percent(summary.volatility);

    StatPanel {
        fields: vec![
            StatField::new("Current Price", currency(summary.current_price)),
            StatField::new("52-Week High", currency(summary.high_52week)),
            StatField::new("52-Week Low", currency(summary.low_52week)),
            StatField::new("7-Day MA", currency(summary.moving_avg_7)),
            StatField::new("Daily Return", format_signed_percent(summary.daily_return)),
            StatField::new("Volatility", StyledValue::plain(format_percent_fixed(volatility, 2))),
        ],
    }
}

/// Extra breakdown from the volatility endpoint
pub fn render_volatility_panel(metrics: &VolatilityMetrics) -> StatPanel {
    StatPanel {
        fields: vec![
            StatField::new(
                "Daily Volatility",
                StyledValue::plain(format_percent_fixed(metrics.daily_volatility, 2)),
            ),
            StatField::new(
                "Annualized Volatility",
                StyledValue::plain(format_percent_fixed(metrics.annualized_volatility, 2)),
            ),
            StatField::new("Trend", StyledValue::plain(metrics.volatility_trend.clone())),
            StatField::new(
                "High-Volatility Days",
                StyledValue::plain(metrics.high_volatility_days.to_string()),
            ),
            StatField::new(
                "Mean Daily Return",
                format_signed_percent(metrics.volatility_mean),
            ),
            StatField::new(
                "Return Std. Dev.",
                StyledValue::plain(format_number(metrics.volatility_std)),
            ),
        ],
    }
}
