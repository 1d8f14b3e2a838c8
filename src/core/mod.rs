//! Core module - rate tables, errors, configuration and logging

pub mod config;
pub mod error;
pub mod logging;
pub mod rates;

pub use config::{Config, ConfigError, ConfigLayer};
pub use error::ModelError;
pub use rates::{PaintingRate, PipeRates, ShopRates};
