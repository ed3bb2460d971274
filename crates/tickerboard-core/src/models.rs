//! Wire types returned by the market-data backend
//!
//! Every entity here is transient: it is decoded from a response, held by the
//! view state for as long as the view shows it, and dropped on the next load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary statistics for one stock.
///
/// Several endpoints return a subset of these fields (the top-movers lists
/// carry `price` instead of `current_price`, the comparison payload carries
/// period highs/lows), so every field decodes with a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockSummary {
    pub ticker: String,
    pub name: String,
    pub return_percent: f64,
    pub volatility: f64,
    #[serde(alias = "price")]
    pub current_price: f64,
    pub high_52week: f64,
    pub low_52week: f64,
    pub moving_avg_7: f64,
    pub daily_return: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_avg_30: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_data_points: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_price: Option<f64>,
}

/// Directory entry for a listed company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub ticker: String,
    pub name: String,
    pub sector: String,
}

/// One trading day of a price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub close_price: f64,
    /// Absent while the trailing window is still filling.
    #[serde(default)]
    pub moving_avg_7: Option<f64>,
    /// Percent change from the previous close; absent on the first day.
    #[serde(default)]
    pub daily_return: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl SeriesPoint {
    /// Daily return with the missing value treated as a flat day
    pub fn daily_return_or_zero(&self) -> f64 {
        self.daily_return.unwrap_or(0.0)
    }
}

/// Two-stock comparison over a common window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub stock1: StockSummary,
    pub stock2: StockSummary,
    pub correlation: f64,
    pub volatility_ratio: f64,
    pub return_difference: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopGainers {
    pub gainers: Vec<StockSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLosers {
    pub losers: Vec<StockSummary>,
}

/// Volatility breakdown served by `/volatility/{ticker}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityMetrics {
    pub ticker: String,
    pub daily_volatility: f64,
    pub annualized_volatility: f64,
    pub volatility_trend: String,
    pub high_volatility_days: u32,
    pub volatility_mean: f64,
    pub volatility_std: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub data_points: u64,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// How a volatility figure is turned into the percentage on screen.
///
/// Both endpoints report the standard deviation of percent returns. The
/// summary figure is shown as is. Comparison cards scale by 100 by default,
/// which keeps them in line with the figures the dashboard has always shown
/// there; setting the comparison unit to `percent` shows the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityUnit {
    /// Scaled by 100
    #[default]
    Fraction,
    /// Shown unchanged
    Percent,
}

impl VolatilityUnit {
    pub fn to_percent(self, value: f64) -> f64 {
        match self {
            VolatilityUnit::Fraction => value * 100.0,
            VolatilityUnit::Percent => value,
        }
    }
}
