//! Reusable UI components for the Tickerboard window
//!
//! Each component draws one of the core view models.

pub mod cards;
pub mod charts;
pub mod forms;
pub mod modals;
pub mod tables;
