//! Renders a GitHub profile as a terminal login screen in SVG.
//!
//! One run fetches the account, star total, repositories and per-repository
//! commit counts ([`stats::StatsAggregator`]), then lays the numbers out in a
//! fixed template ([`svg::build_document`]).

pub mod ascii;
pub mod config;
pub mod error;
pub mod github;
pub mod stats;
pub mod svg;

pub use config::Config;
pub use error::{Error, Result};
pub use stats::Stats;
