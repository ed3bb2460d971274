//! Section navigation and load bookkeeping
//!
//! Provides:
//! - The fixed set of dashboard sections and their selector metadata
//! - Load tokens that let a finished request prove it is still wanted
//!
//! Every section activation starts a new navigation generation. A token issued
//! under an older generation, or superseded by a newer load of the same kind,
//! is stale and its result must be dropped.

use std::collections::HashMap;

// =============================================================================
// Sections
// =============================================================================

/// Dashboard sections; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Companies,
    Analysis,
    Compare,
}

impl Section {
    /// Get the display name for the section
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Companies => "Companies",
            Section::Analysis => "Analysis",
            Section::Compare => "Compare",
        }
    }

    /// Keyboard shortcut that activates the section
    pub fn shortcut(&self) -> char {
        match self {
            Section::Dashboard => '1',
            Section::Companies => '2',
            Section::Analysis => '3',
            Section::Compare => '4',
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "D",
            Section::Companies => "C",
            Section::Analysis => "A",
            Section::Compare => "V",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Companies,
            Section::Analysis,
            Section::Compare,
        ]
    }

    pub fn from_shortcut(key: &str) -> Option<Section> {
        Section::all()
            .iter()
            .copied()
            .find(|s| key.len() == 1 && key.starts_with(s.shortcut()))
    }

    /// Load triggered by activating this section, if any
    pub fn activation_load(&self) -> Option<LoadKind> {
        match self {
            Section::Dashboard => Some(LoadKind::TopMovers),
            Section::Companies => Some(LoadKind::Companies),
            Section::Analysis | Section::Compare => None,
        }
    }
}

// =============================================================================
// Load tokens
// =============================================================================

/// Kinds of data load. Loads of the same kind supersede each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKind {
    TopMovers,
    Companies,
    /// Series + summary for the analysis section, from a card click or the
    /// analyze button.
    StockDetail,
    Volatility,
    Comparison,
    Health,
}

impl LoadKind {
    /// Whether navigating away invalidates loads of this kind
    pub fn is_view_bound(&self) -> bool {
        !matches!(self, LoadKind::Health)
    }
}

/// Proof of which load a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    pub kind: LoadKind,
    generation: u64,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct LoadTracker {
    generation: u64,
    next_seq: u64,
    latest: HashMap<LoadKind, u64>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidate every outstanding view-bound load
    pub fn advance(&mut self) {
        self.generation += 1;
    }

    /// Issue a token for a new load, superseding earlier loads of the same kind
    pub fn issue(&mut self, kind: LoadKind) -> LoadToken {
        self.next_seq += 1;
        self.latest.insert(kind, self.next_seq);
        LoadToken {
            kind,
            generation: self.generation,
            seq: self.next_seq,
        }
    }

    pub fn is_current(&self, token: &LoadToken) -> bool {
        let latest = self.latest.get(&token.kind) == Some(&token.seq);
        if token.kind.is_view_bound() {
            latest && token.generation == self.generation
        } else {
            latest
        }
    }
}
