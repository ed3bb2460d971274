//! Form components for the Tickerboard window

mod text_input;

pub use text_input::*;
