//! Tickerboard core
//!
//! Everything behind the dashboard window: the market-data API client, the
//! data model, settings, section navigation, the renderers that turn fetched
//! data into view models, and the controller that ties loads to view state.
//! No part of this crate depends on the GUI toolkit.

pub mod api;
pub mod controller;
pub mod format;
pub mod input;
pub mod models;
pub mod navigation;
pub mod settings;
pub mod view;

#[cfg(test)]
mod tests;

pub use api::{ApiError, MarketData, TickerboardClient, DEFAULT_BASE_URL};
pub use controller::{
    execute, DashboardController, LoadRequest, LoadResult, LoadState, Notice, Origin, PendingLoad, ViewState,
};
pub use navigation::{LoadKind, LoadToken, Section};
pub use settings::Settings;
