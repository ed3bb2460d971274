//! Test modules for the tickerboard core
//!
//! ## Test Categories
//!
//! - **Unit Tests**: Individual module functionality
//!   - `api_test` - HTTP client against a throwaway local server
//!   - `render_test` - Charts, stat panel, comparison, movers, company filter
//!   - `navigation_test` - Section activation and stale-load handling
//!   - `controller_test` - Load orchestration, validation, failure reporting
//!
//! - **Integration Tests**: Cross-module functionality
//!   - `integration_test` - Controller driving the real client end to end
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run specific test module
//! cargo test render_test
//! ```

#[cfg(test)]
pub mod fixtures;


#[cfg(test)]
pub mod render_test;
