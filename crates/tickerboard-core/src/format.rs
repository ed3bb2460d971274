//! Formatting helpers shared by the renderers

/// Styling class for a signed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Tone for signed text values: only strictly positive values are
    /// positive, zero is styled with the negatives.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    /// Tone for chart bars, where a flat day is drawn with the gains.
    pub fn of_bar(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Tone::Positive => "return-positive",
            Tone::Negative => "return-negative",
        }
    }
}

/// A rendered value together with its styling
#[derive(Debug, Clone, PartialEq)]
pub struct StyledValue {
    pub text: String,
    pub tone: Option<Tone>,
}

impl StyledValue {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }
}

/// Shortest decimal form of a value, as the backend sent it ("5.2", "150").
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_number(value))
}

/// Signed percentage with explicit `+` on strictly positive values.
pub fn format_signed_percent(value: f64) -> StyledValue {
    let tone = Tone::of(value);
    let prefix = if tone == Tone::Positive { "+" } else { "" };
    StyledValue::toned(format!("{}{}%", prefix, format_number(value)), tone)
}

pub fn format_percent_fixed(value: f64, decimals: usize) -> String {
    format!("{}%", format_fixed(value, decimals))
}
