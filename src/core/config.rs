//! Configuration management with layered hierarchy
//!
//! Rate tables and quote pricing are merged from, lowest priority first:
//!
//! 1. built-in defaults
//! 2. the global config file (`<config dir>/tubesc/config.yaml`)
//! 3. a file passed with `--config` / `TUBESC_CONFIG`
//! 4. `TUBESC_VAT` and `TUBESC_MINIMUM_CUTTING` environment variables
//!
//! Every layer is partial; only the keys it sets override earlier layers.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::error::ModelError;
use crate::core::rates::{PaintingRate, ShopRates};
use crate::entities::quote::Pricing;

/// Errors raised while loading configuration
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    #[diagnostic(code(tubesc::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] ConfigSyntaxError),

    #[error("environment variable {name} is not a number: {value:?}")]
    #[diagnostic(code(tubesc::config::env))]
    Env { name: &'static str, value: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),
}

/// YAML error in a config file, pointing at the offending location
#[derive(Debug, Error, Diagnostic)]
#[error("invalid config file: {message}")]
#[diagnostic(code(tubesc::config::syntax))]
pub struct ConfigSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl ConfigSyntaxError {
    fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let offset = err
            .location()
            .map(|loc| line_col_to_offset(source, loc.line(), loc.column()))
            .unwrap_or(0);
        let message = err.to_string();
        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help: suggest(&message),
            message,
        }
    }
}

/// Byte offset of a 1-based line/column position
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

fn suggest(message: &str) -> Option<String> {
    let msg = message.to_lowercase();
    if msg.contains("unknown field") {
        Some("known sections are `shop` and `pricing`; check the key spelling".to_string())
    } else if msg.contains("unknown variant") {
        Some("painting is either `none` or `per_area: { work: .., paint: .. }`".to_string())
    } else if msg.contains("invalid type") {
        Some("rates and multipliers are plain numbers, e.g. `cleaning: 0.001`".to_string())
    } else if msg.contains("tab") {
        Some("YAML requires spaces for indentation, not tabs".to_string())
    } else {
        None
    }
}

/// Partial shop rates as read from one config layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopLayer {
    pub welding: Option<f64>,
    pub sundry: Option<f64>,
    pub cleaning: Option<f64>,
    pub weld_cleaning: Option<f64>,
    pub painting: Option<PaintingRate>,
}

/// Partial pricing as read from one config layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingLayer {
    pub work: Option<f64>,
    pub materials: Option<f64>,
    pub manager: Option<f64>,
    pub vat: Option<f64>,
    pub minimum_cutting: Option<f64>,
}

/// One config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub shop: ShopLayer,
    pub pricing: PricingLayer,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn parse(contents: &str, filename: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(contents)
            .map_err(|e| ConfigSyntaxError::from_serde_error(&e, contents, filename).into())
    }
}

/// Effective configuration
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub shop: ShopRates,
    pub pricing: Pricing,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                match ConfigLayer::from_file(&global_path) {
                    Ok(layer) => {
                        debug!(path = %global_path.display(), "loaded global config");
                        config.merge(layer);
                    }
                    Err(e) => warn!(path = %global_path.display(), error = %e, "ignoring global config"),
                }
            }
        }

        if let Some(path) = explicit {
            config.merge(ConfigLayer::from_file(path)?);
            debug!(path = %path.display(), "loaded config");
        }

        if let Some(vat) = env_number("TUBESC_VAT")? {
            config.pricing.vat = vat;
        }
        if let Some(minimum) = env_number("TUBESC_MINIMUM_CUTTING")? {
            config.pricing.minimum_cutting = minimum;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tubesc")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge a layer into this config (layer takes precedence)
    pub fn merge(&mut self, layer: ConfigLayer) {
        let shop = layer.shop;
        if let Some(v) = shop.welding {
            self.shop.welding = v;
        }
        if let Some(v) = shop.sundry {
            self.shop.sundry = v;
        }
        if let Some(v) = shop.cleaning {
            self.shop.cleaning = v;
        }
        if let Some(v) = shop.weld_cleaning {
            self.shop.weld_cleaning = v;
        }
        if let Some(v) = shop.painting {
            self.shop.painting = v;
        }

        let pricing = layer.pricing;
        if let Some(v) = pricing.work {
            self.pricing.work = v;
        }
        if let Some(v) = pricing.materials {
            self.pricing.materials = v;
        }
        if let Some(v) = pricing.manager {
            self.pricing.manager = v;
        }
        if let Some(v) = pricing.vat {
            self.pricing.vat = v;
        }
        if let Some(v) = pricing.minimum_cutting {
            self.pricing.minimum_cutting = v;
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        self.shop.validate()?;
        self.pricing.validate()
    }
}

fn env_number(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::Env { name, value }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_line_col_to_offset() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 6);
        assert_eq!(line_col_to_offset(source, 3, 2), 13);
        assert_eq!(line_col_to_offset(source, 9, 9), source.len());
    }

    #[test]
    fn test_partial_layer_merges() {
        let layer = ConfigLayer::parse("shop:\n  cleaning: 0.5\npricing:\n  vat: 1.2\n", "test.yaml")
            .unwrap();
        let mut config = Config::default();
        config.merge(layer);
        assert_eq!(config.shop.cleaning, 0.5);
        assert_eq!(config.shop.sundry, ShopRates::default().sundry);
        assert_eq!(config.pricing.vat, 1.2);
        assert_eq!(config.pricing.work, 1.0);
    }

    #[test]
    fn test_painting_layer() {
        let layer = ConfigLayer::parse("shop:\n  painting: none\n", "test.yaml").unwrap();
        let mut config = Config::default();
        config.merge(layer);
        assert_eq!(config.shop.painting, PaintingRate::None);
    }

    #[test]
    fn test_empty_file_is_empty_layer() {
        let layer = ConfigLayer::parse("  \n", "empty.yaml").unwrap();
        let mut config = Config::default();
        config.merge(layer);
        assert_eq!(config.shop, ShopRates::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConfigLayer::parse("shop:\n  weldng: 1.0\n", "typo.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ConfigLayer::from_file(Path::new("/nonexistent/tubesc.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_file_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pricing:\n  work: 2.0\n  materials: 1.3").unwrap();
        let layer = ConfigLayer::from_file(file.path()).unwrap();
        assert_eq!(layer.pricing.work, Some(2.0));
        assert_eq!(layer.pricing.materials, Some(1.3));
        assert_eq!(layer.pricing.vat, None);
    }

    #[test]
    fn test_negative_rate_fails_validation() {
        let layer = ConfigLayer::parse("shop:\n  welding: -1\n", "neg.yaml").unwrap();
        let mut config = Config::default();
        config.merge(layer);
        assert!(config.validate().is_err());
    }
}
