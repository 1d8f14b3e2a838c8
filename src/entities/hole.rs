//! Hole shapes and hole features cut into tube segments

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::core::error::{positive, ModelError};
use crate::core::rates::PipeRates;

/// Outline of a single hole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleShape {
    Round { diameter: f64 },
    Rectangular { width: f64, height: f64 },
    /// Arbitrary outline given by its total cut length
    Custom { length: f64 },
}

impl HoleShape {
    pub fn round(diameter: f64) -> Result<Self, ModelError> {
        Ok(HoleShape::Round {
            diameter: positive("hole diameter", diameter)?,
        })
    }

    pub fn rectangular(width: f64, height: f64) -> Result<Self, ModelError> {
        Ok(HoleShape::Rectangular {
            width: positive("hole width", width)?,
            height: positive("hole height", height)?,
        })
    }

    pub fn custom(length: f64) -> Result<Self, ModelError> {
        Ok(HoleShape::Custom {
            length: positive("hole cut length", length)?,
        })
    }

    /// Length of cut edge for one occurrence of the hole
    pub fn cut_length_per_instance(&self) -> f64 {
        match self {
            HoleShape::Round { diameter } => diameter * PI,
            HoleShape::Rectangular { width, height } => 2.0 * (width + height),
            HoleShape::Custom { length } => *length,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match *self {
            HoleShape::Round { diameter } => {
                positive("hole diameter", diameter)?;
            }
            HoleShape::Rectangular { width, height } => {
                positive("hole width", width)?;
                positive("hole height", height)?;
            }
            HoleShape::Custom { length } => {
                positive("hole cut length", length)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for HoleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleShape::Round { diameter } => write!(f, "ф{}", diameter),
            HoleShape::Rectangular { width, height } => write!(f, "{}x{}", width, height),
            HoleShape::Custom { length } => write!(f, "L{}", length),
        }
    }
}

/// A hole (or a group of identical holes) on a tube segment
///
/// Created only through [`TubeSegment`](crate::entities::tube::TubeSegment)
/// factories; carries a copy of the segment's pipe rates.
/// Largest hole count whose through-hole doubling still fits in `u32`
pub const MAX_HOLE_COUNT: u32 = u32::MAX / 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoleFeature {
    shape: HoleShape,
    count: u32,
    through: bool,
    #[serde(skip)]
    rates: PipeRates,
}

impl HoleFeature {
    pub(crate) fn new(
        shape: HoleShape,
        count: u32,
        through: bool,
        rates: PipeRates,
    ) -> Result<Self, ModelError> {
        shape.validate()?;
        if count < 1 {
            return Err(ModelError::configuration(format!(
                "hole count must be at least 1, got {}",
                count
            )));
        }
        if count > MAX_HOLE_COUNT {
            return Err(ModelError::configuration(format!(
                "hole count must be at most {}, got {}",
                MAX_HOLE_COUNT, count
            )));
        }
        Ok(Self {
            shape,
            count,
            through,
            rates,
        })
    }

    pub fn shape(&self) -> &HoleShape {
        &self.shape
    }

    /// Nominal count as ordered
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_through(&self) -> bool {
        self.through
    }

    pub fn cut_length_per_instance(&self) -> f64 {
        self.shape.cut_length_per_instance()
    }

    /// Number of physical cuts; a through hole is cut on both walls
    pub fn effective_count(&self) -> u32 {
        self.count * if self.through { 2 } else { 1 }
    }

    pub fn total_cut_length(&self) -> f64 {
        self.cut_length_per_instance() * self.effective_count() as f64
    }

    /// Piercing plus outline cutting, per occurrence, times occurrences
    pub fn cost(&self) -> f64 {
        (self.rates.incision + self.rates.cutting * self.cut_length_per_instance())
            * self.effective_count() as f64
    }

    /// Human-readable label, e.g. `Hole. through. ф8 - 3 pcs`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HoleFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hole. ")?;
        if self.through {
            write!(f, "through. ")?;
        }
        write!(f, "{}", self.shape)?;
        if self.count > 1 {
            write!(f, " - {} pcs", self.count)?;
        }
        Ok(())
    }
}
