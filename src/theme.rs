//! Theme configuration for the Tickerboard window
//!
//! A single dark palette tuned for market data, plus the mapping from value
//! tones to colors.

use gpui::*;
use tickerboard_core::format::Tone;

/// Theme colors for the application
#[derive(Clone)]
pub struct Theme {
    // Backgrounds - layered for visual hierarchy
    pub background: Hsla,
    pub sidebar_bg: Hsla,
    pub card_bg: Hsla,
    pub card_bg_elevated: Hsla,
    pub hover_bg: Hsla,

    // Text
    pub text: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_dimmed: Hsla,

    // Borders
    pub border: Hsla,
    pub border_subtle: Hsla,

    // Accent colors
    pub accent: Hsla,
    pub accent_hover: Hsla,
    pub accent_subtle: Hsla,
    pub accent_glow: Hsla,

    // Semantic colors
    pub positive: Hsla,
    pub positive_subtle: Hsla,
    pub negative: Hsla,
    pub negative_subtle: Hsla,
    pub warning: Hsla,

    // Chart series
    pub series_primary: Hsla,
    pub series_secondary: Hsla,

    // Navigation
    pub nav_active_indicator: Hsla,
    pub nav_hover: Hsla,
}

impl Theme {
    /// Dark theme optimized for financial data display
    pub fn dark() -> Self {
        Self {
            background: hsla(222.0 / 360.0, 0.15, 0.08, 1.0),
            sidebar_bg: hsla(222.0 / 360.0, 0.18, 0.06, 1.0),
            card_bg: hsla(222.0 / 360.0, 0.14, 0.12, 1.0),
            card_bg_elevated: hsla(222.0 / 360.0, 0.14, 0.14, 1.0),
            hover_bg: hsla(222.0 / 360.0, 0.16, 0.16, 1.0),

            text: hsla(0.0, 0.0, 0.97, 1.0),
            text_secondary: hsla(220.0 / 360.0, 0.08, 0.82, 1.0),
            text_muted: hsla(220.0 / 360.0, 0.12, 0.60, 1.0),
            text_dimmed: hsla(220.0 / 360.0, 0.10, 0.45, 1.0),

            border: hsla(222.0 / 360.0, 0.14, 0.20, 1.0),
            border_subtle: hsla(222.0 / 360.0, 0.12, 0.15, 1.0),

            accent: hsla(210.0 / 360.0, 0.92, 0.58, 1.0),
            accent_hover: hsla(210.0 / 360.0, 0.95, 0.65, 1.0),
            accent_subtle: hsla(210.0 / 360.0, 0.80, 0.55, 0.18),
            accent_glow: hsla(210.0 / 360.0, 0.90, 0.60, 0.08),

            positive: hsla(152.0 / 360.0, 0.72, 0.48, 1.0),
            positive_subtle: hsla(152.0 / 360.0, 0.65, 0.45, 0.18),
            negative: hsla(4.0 / 360.0, 0.75, 0.55, 1.0),
            negative_subtle: hsla(4.0 / 360.0, 0.70, 0.50, 0.18),
            warning: hsla(40.0 / 360.0, 0.92, 0.52, 1.0),

            // Close price in accent blue, moving average in amber
            series_primary: hsla(210.0 / 360.0, 0.92, 0.58, 1.0),
            series_secondary: hsla(40.0 / 360.0, 0.92, 0.52, 1.0),

            nav_active_indicator: hsla(210.0 / 360.0, 0.92, 0.58, 1.0),
            nav_hover: hsla(222.0 / 360.0, 0.20, 0.14, 1.0),
        }
    }

    /// Text color for a styled value; untoned values use the primary text color
    pub fn tone_color(&self, tone: Option<Tone>) -> Hsla {
        match tone {
            Some(Tone::Positive) => self.positive,
            Some(Tone::Negative) => self.negative,
            None => self.text,
        }
    }
}
