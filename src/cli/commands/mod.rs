//! CLI command implementations

pub mod demo;
pub mod rates;
