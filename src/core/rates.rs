//! Rate tables - immutable per-unit cost coefficients
//!
//! Two tables feed the cost rollup:
//!
//! - [`ShopRates`] - global shop rates, one per order
//! - [`PipeRates`] - per pipe stock rates, shared by every segment cut from it
//!
//! Lengths are millimetres, so length-scaled rates are money per mm and
//! area-scaled rates are money per mm².

use serde::{Deserialize, Serialize};

use crate::core::error::{non_negative, ModelError};

/// How a painted line item is surcharged
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintingRate {
    /// Painting is not charged
    #[default]
    None,
    /// Labour and paint, both charged per mm² of painted surface
    PerArea { work: f64, paint: f64 },
}

impl PaintingRate {
    /// Labour part of the surcharge for the given surface
    pub fn work_cost(&self, area: f64) -> f64 {
        match self {
            PaintingRate::None => 0.0,
            PaintingRate::PerArea { work, .. } => work * area,
        }
    }

    /// Material (paint) part of the surcharge for the given surface
    pub fn paint_cost(&self, area: f64) -> f64 {
        match self {
            PaintingRate::None => 0.0,
            PaintingRate::PerArea { paint, .. } => paint * area,
        }
    }

    /// Full surcharge for the given surface
    pub fn surcharge(&self, area: f64) -> f64 {
        self.work_cost(area) + self.paint_cost(area)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if let PaintingRate::PerArea { work, paint } = self {
            non_negative("painting.work", *work)?;
            non_negative("painting.paint", *paint)?;
        }
        Ok(())
    }
}

/// Global shop rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShopRates {
    /// Welding, per mm of weld
    pub welding: f64,

    /// Flat cost per sundry part
    pub sundry: f64,

    /// Surface cleaning, per mm²
    pub cleaning: f64,

    /// Weld seam cleaning, per mm of tube
    pub weld_cleaning: f64,

    /// Painting surcharge policy
    #[serde(default)]
    pub painting: PaintingRate,
}

impl ShopRates {
    pub fn new(
        welding: f64,
        sundry: f64,
        cleaning: f64,
        weld_cleaning: f64,
    ) -> Result<Self, ModelError> {
        let rates = Self {
            welding,
            sundry,
            cleaning,
            weld_cleaning,
            painting: PaintingRate::None,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Replace the painting policy
    pub fn with_painting(mut self, painting: PaintingRate) -> Result<Self, ModelError> {
        painting.validate()?;
        self.painting = painting;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        non_negative("welding", self.welding)?;
        non_negative("sundry", self.sundry)?;
        non_negative("cleaning", self.cleaning)?;
        non_negative("weld_cleaning", self.weld_cleaning)?;
        self.painting.validate()
    }
}

impl Default for ShopRates {
    fn default() -> Self {
        Self {
            welding: 0.6,
            sundry: 5.0,
            cleaning: 0.001,
            weld_cleaning: 0.09,
            painting: PaintingRate::PerArea {
                work: 260.0 / 1_000_000.0,
                paint: 280.0 / 1_000_000.0,
            },
        }
    }
}

/// Rates for one pipe stock definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeRates {
    /// Raw pipe, per mm of length
    pub pipe: f64,

    /// Piercing before each cut outline
    #[serde(alias = "incut")]
    pub incision: f64,

    /// Cutting, per mm of cut edge
    pub cutting: f64,

    /// Flat handling fee per segment
    pub carrying: f64,
}

impl PipeRates {
    pub fn new(pipe: f64, incision: f64, cutting: f64, carrying: f64) -> Result<Self, ModelError> {
        let rates = Self {
            pipe,
            incision,
            cutting,
            carrying,
        };
        rates.validate()?;
        Ok(rates)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        non_negative("pipe", self.pipe)?;
        non_negative("incision", self.incision)?;
        non_negative("cutting", self.cutting)?;
        non_negative("carrying", self.carrying)?;
        Ok(())
    }
}
