//! Top gainers and losers lists for the dashboard section

use crate::format::{format_signed_percent, StyledValue};
use crate::models::{StockSummary, TopGainers, TopLosers};

#[derive(Debug, Clone, PartialEq)]
pub struct MoverItem {
    pub ticker: String,
    pub name: String,
    pub change: StyledValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopMovers {
    pub gainers: Vec<StockSummary>,
    pub losers: Vec<StockSummary>,
}

impl TopMovers {
    pub fn new(gainers: TopGainers, losers: TopLosers) -> Self {
        Self {
            gainers: gainers.gainers,
            losers: losers.losers,
        }
    }
}

pub fn render_mover_list(stocks: &[StockSummary]) -> Vec<MoverItem> {
    stocks
        .iter()
        .map(|stock| MoverItem {
            ticker: stock.ticker.clone(),
            name: stock.name.clone(),
            change: format_signed_percent(stock.return_percent),
        })
        .collect()
}
