//! Price and returns chart models
//!
//! Both charts are built straight from the series as the backend ordered it
//! (date ascending); points are never re-sorted. A chart is a pure function
//! of its input, so re-rendering for a new ticker replaces it wholesale.

use crate::format::{format_fixed, format_number, Tone};
use crate::models::SeriesPoint;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// How hovering reports values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMode {
    /// One label listing every series at the hovered date
    XUnified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: &'static str,
    pub style: LineStyle,
    /// One entry per date; `None` leaves a gap in the line.
    pub values: Vec<Option<f64>>,
}

/// Close price overlaid with its 7-day moving average
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub hover: HoverMode,
    pub dates: Vec<NaiveDate>,
    pub close: LineSeries,
    pub moving_average: LineSeries,
}

impl PriceChart {
    pub fn from_series(series: &[SeriesPoint]) -> Self {
        Self {
            title: "Price Trend",
            x_title: "Date",
            y_title: "Price",
            hover: HoverMode::XUnified,
            dates: series.iter().map(|p| p.date).collect(),
            close: LineSeries {
                name: "Close Price",
                style: LineStyle::Solid,
                values: series.iter().map(|p| Some(p.close_price)).collect(),
            },
            moving_average: LineSeries {
                name: "7-Day MA",
                style: LineStyle::Dashed,
                values: series.iter().map(|p| p.moving_avg_7).collect(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn series(&self) -> [&LineSeries; 2] {
        [&self.close, &self.moving_average]
    }

    /// Lowest and highest value across both lines
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series()
            .iter()
            .flat_map(|s| s.values.iter().flatten().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Plot coordinates in the unit square (x left to right, y bottom to top)
    /// for one line. Gaps stay `None`.
    pub fn plot(&self, line: &LineSeries) -> Vec<Option<(f32, f32)>> {
        let Some((lo, hi)) = self.value_range() else {
            return vec![None; line.values.len()];
        };
        let n = line.values.len();
        line.values
            .iter()
            .enumerate()
            .map(|(i, v)| v.map(|v| (x_position(i, n), normalize(v, lo, hi))))
            .collect()
    }

    /// Unified hover text for the point at `index`
    pub fn hover_label(&self, index: usize) -> Option<String> {
        let date = self.dates.get(index)?;
        let parts: Vec<String> = self
            .series()
            .iter()
            .map(|s| match s.values.get(index).copied().flatten() {
                Some(v) => format!("{}: {}", s.name, format_fixed(v, 2)),
                None => format!("{}: -", s.name),
            })
            .collect();
        Some(format!("{}  {}", date, parts.join("  ")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnBar {
    pub date: NaiveDate,
    pub value: f64,
    pub tone: Tone,
}

/// Daily returns as bars colored by sign
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnsChart {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub series_name: &'static str,
    pub hover: HoverMode,
    pub bars: Vec<ReturnBar>,
}

impl ReturnsChart {
    pub fn from_series(series: &[SeriesPoint]) -> Self {
        Self {
            title: "Daily Returns",
            x_title: "Date",
            y_title: "Return %",
            series_name: "Daily Returns %",
            hover: HoverMode::XUnified,
            bars: series
                .iter()
                .map(|p| {
                    let value = p.daily_return_or_zero();
                    ReturnBar {
                        date: p.date,
                        value,
                        tone: Tone::of_bar(value),
                    }
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest absolute return, used to scale both halves of the chart
    pub fn max_magnitude(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| b.value.abs())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Bar length as a fraction of the half-height, in [0, 1]
    pub fn bar_extent(&self, index: usize) -> f32 {
        let max = self.max_magnitude();
        match self.bars.get(index) {
            Some(bar) if max > 0.0 && bar.value.is_finite() => (bar.value.abs() / max) as f32,
            _ => 0.0,
        }
    }

    pub fn hover_label(&self, index: usize) -> Option<String> {
        let bar = self.bars.get(index)?;
        Some(format!("{}  {}: {}%", bar.date, self.series_name, format_number(bar.value)))
    }
}

fn x_position(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.5
    } else {
        index as f32 / (count - 1) as f32
    }
}

fn normalize(value: f64, lo: f64, hi: f64) -> f32 {
    if hi - lo <= f64::EPSILON {
        0.5
    } else {
        ((value - lo) / (hi - lo)) as f32
    }
}
