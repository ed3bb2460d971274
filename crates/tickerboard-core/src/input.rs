//! Text fields and input validation
//!
//! Fields are plain buffers edited one keystroke at a time by the shell; the
//! controller validates their contents before a user action issues a request.

use thiserror::Error;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 365;

/// Every text field on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    CompanyFilter,
    AnalysisTicker,
    AnalysisDays,
    CompareTicker1,
    CompareTicker2,
    CompareDays,
}

impl FieldId {
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::CompanyFilter => "Search by ticker or name...",
            FieldId::AnalysisTicker => "Ticker (e.g. INFY)",
            FieldId::AnalysisDays | FieldId::CompareDays => "Days",
            FieldId::CompareTicker1 => "First ticker",
            FieldId::CompareTicker2 => "Second ticker",
        }
    }
}

/// Characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accept {
    #[default]
    Any,
    Digits,
}

/// Text input field state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    value: String,
    accept: Accept,
    max_length: Option<usize>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digits() -> Self {
        Self {
            accept: Accept::Digits,
            max_length: Some(3),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set(value);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole value, keeping only accepted characters
    pub fn set(&mut self, value: impl Into<String>) {
        self.value.clear();
        self.insert(&value.into());
    }

    /// Append typed text. Returns whether the value changed.
    pub fn insert(&mut self, text: &str) -> bool {
        let before = self.value.len();
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            if self.accept == Accept::Digits && !ch.is_ascii_digit() {
                continue;
            }
            if let Some(max) = self.max_length {
                if self.value.chars().count() >= max {
                    break;
                }
            }
            self.value.push(ch);
        }
        self.value.len() != before
    }

    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.value.is_empty();
        self.value.clear();
        changed
    }
}

// =============================================================================
// Validation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a ticker symbol")]
    MissingTicker,

    #[error("Please enter both ticker symbols")]
    MissingTickerPair,

    #[error("Invalid ticker symbol: {0}")]
    InvalidTicker(String),

    #[error("Days must be between 1 and 365, got {0:?}")]
    DaysOutOfRange(String),
}

/// Trim and upper-case a ticker. `None` for blank input.
pub fn normalize_ticker(raw: &str) -> Result<Option<String>, ValidationError> {
    let ticker = raw.trim().to_uppercase();
    if ticker.is_empty() {
        return Ok(None);
    }
    let valid = ticker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '&' | '_'));
    if !valid {
        return Err(ValidationError::InvalidTicker(raw.trim().to_string()));
    }
    Ok(Some(ticker))
}

/// Parse a day count, falling back to `default` when blank
pub fn parse_days(raw: &str, default: u32) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    match raw.parse::<u32>() {
        Ok(days) if (MIN_DAYS..=MAX_DAYS).contains(&days) => Ok(days),
        _ => Err(ValidationError::DaysOutOfRange(raw.to_string())),
    }
}
