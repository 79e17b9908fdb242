pub mod apis;
pub mod app;
pub mod common;
pub mod config;
pub mod infra;
pub mod logging;
pub mod pipeline;
pub mod tasks;

pub use common::error::{Result, StatsError};
pub use common::types::{Season, StandingsRow, TeamRecord};
