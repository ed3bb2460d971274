//! Company directory grid and its search filter
//!
//! The directory is an in-memory list indexed by ticker. Filtering toggles a
//! per-card visibility flag and never drops cards, so clearing the filter
//! always brings every card back.

use crate::models::Company;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyCard {
    pub company: Company,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyDirectory {
    cards: Vec<CompanyCard>,
    by_ticker: HashMap<String, usize>,
    filter: String,
}

impl CompanyDirectory {
    pub fn new(companies: Vec<Company>) -> Self {
        let mut directory = Self::default();
        directory.replace(companies);
        directory
    }

    /// Swap in a freshly loaded list, keeping the current filter applied
    pub fn replace(&mut self, companies: Vec<Company>) {
        self.by_ticker = companies
            .iter()
            .enumerate()
            .map(|(i, c)| (c.ticker.clone(), i))
            .collect();
        self.cards = companies
            .into_iter()
            .map(|company| CompanyCard {
                company,
                visible: true,
            })
            .collect();
        let filter = std::mem::take(&mut self.filter);
        self.apply_filter(&filter);
    }

    /// Case-insensitive substring match against ticker and name
    pub fn apply_filter(&mut self, term: &str) {
        self.filter = term.to_string();
        let needle = term.to_lowercase();
        for card in &mut self.cards {
            card.visible = matches_filter(&card.company, &needle);
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn cards(&self) -> &[CompanyCard] {
        &self.cards
    }

    pub fn visible(&self) -> impl Iterator<Item = &CompanyCard> {
        self.cards.iter().filter(|c| c.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, ticker: &str) -> Option<&Company> {
        self.by_ticker.get(ticker).map(|&i| &self.cards[i].company)
    }
}

/// `needle` must already be lower-cased
fn matches_filter(company: &Company, needle: &str) -> bool {
    needle.is_empty()
        || company.ticker.to_lowercase().contains(needle)
        || company.name.to_lowercase().contains(needle)
}
