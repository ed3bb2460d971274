//! Side-by-side comparison cards

use crate::format::{format_currency, format_fixed, format_percent_fixed, format_signed_percent, StyledValue};
use crate::models::{ComparisonResult, StockSummary};
use crate::settings::DisplaySettings;
use crate::view::stats::StatField;

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCard {
    pub title: String,
    pub stats: Vec<StatField>,
}

impl ComparisonCard {
    pub fn stat(&self, label: &str) -> Option<&StatField> {
        self.stats.iter().find(|f| f.label == label)
    }
}

/// Stock 1, stock 2, then the correlation analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCards {
    pub subtitle: Option<String>,
    pub cards: [ComparisonCard; 3],
}

pub fn render_comparison(
    ticker1: &str,
    ticker2: &str,
    comparison: &ComparisonResult,
    display: &DisplaySettings,
) -> ComparisonCards {
    ComparisonCards {
        subtitle: comparison.period_days.map(|d| format!("over {} days", d)),
        cards: [
            stock_card(ticker1, &comparison.stock1, display),
            stock_card(ticker2, &comparison.stock2, display),
            ComparisonCard {
                title: "Correlation Analysis".to_string(),
                stats: vec![
                    StatField {
                        label: "Correlation",
                        value: StyledValue::plain(format_fixed(comparison.correlation, 4)),
                    },
                    StatField {
                        label: "Volatility Ratio",
                        value: StyledValue::plain(format_fixed(comparison.volatility_ratio, 4)),
                    },
                    StatField {
                        label: "Return Difference",
                        value: format_signed_percent(comparison.return_difference),
                    },
                ],
            },
        ],
    }
}

fn stock_card(ticker: &str, stock: &StockSummary, display: &DisplaySettings) -> ComparisonCard {
    let volatility = display.comparison_volatility_unit.to_percent(stock.volatility);

    ComparisonCard {
        title: ticker.to_string(),
        stats: vec![
            StatField {
                label: "Current Price",
                value: StyledValue::plain(format_currency(&display.currency_symbol, stock.current_price)),
            },
            StatField {
                label: "Return",
                value: format_signed_percent(stock.return_percent),
            },
            StatField {
                label: "Volatility",
                value: StyledValue::plain(format_percent_fixed(volatility, 2)),
            },
        ],
    }
}
