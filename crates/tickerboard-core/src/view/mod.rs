//! Renderers: pure functions from fetched data to view models
//!
//! The shell draws these models; nothing here touches the window, so every
//! rendering rule can be checked without one.

pub mod charts;
pub mod companies;
pub mod comparison;
pub mod movers;
pub mod stats;

pub use charts::{HoverMode, LineSeries, LineStyle, PriceChart, ReturnBar, ReturnsChart};
pub use companies::{CompanyCard, CompanyDirectory};
pub use comparison::{render_comparison, ComparisonCard, ComparisonCards};
pub use movers::{render_mover_list, MoverItem, TopMovers};
pub use stats::{render_stat_panel, render_volatility_panel, StatField, StatPanel};
