//! Pipe cross-sections and pipe stock definitions

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::core::error::{positive, ModelError};
use crate::core::rates::PipeRates;

/// 2D profile of a pipe wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossSection {
    /// Round pipe of outer diameter `diameter`
    Round { diameter: f64 },
    /// Rectangular (or square) profile pipe
    Rectangular { width: f64, height: f64 },
}

impl CrossSection {
    pub fn round(diameter: f64) -> Result<Self, ModelError> {
        Ok(CrossSection::Round {
            diameter: positive("diameter", diameter)?,
        })
    }

    pub fn rectangular(width: f64, height: f64) -> Result<Self, ModelError> {
        Ok(CrossSection::Rectangular {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    /// Outer perimeter of the profile
    pub fn perimeter(&self) -> f64 {
        match self {
            CrossSection::Round { diameter } => diameter * PI,
            CrossSection::Rectangular { width, height } => 2.0 * (width + height),
        }
    }

    /// Re-check parameters of a section built directly from its variant
    pub fn validate(&self) -> Result<(), ModelError> {
        match *self {
            CrossSection::Round { diameter } => {
                positive("diameter", diameter)?;
            }
            CrossSection::Rectangular { width, height } => {
                positive("width", width)?;
                positive("height", height)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossSection::Round { diameter } => write!(f, "ф{}", diameter),
            CrossSection::Rectangular { width, height } => write!(f, "{}x{}", width, height),
        }
    }
}

/// A stock pipe: profile, wall thickness and its rate table
///
/// One `PipeStock` is shared (behind an `Arc`) by every segment cut from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeStock {
    section: CrossSection,

    /// Wall thickness; kept for material weight, not used in cost
    thickness: f64,

    rates: PipeRates,
}

impl PipeStock {
    pub fn new(section: CrossSection, thickness: f64, rates: PipeRates) -> Result<Self, ModelError> {
        section.validate()?;
        rates.validate()?;
        Ok(Self {
            section,
            thickness: positive("thickness", thickness)?,
            rates,
        })
    }

    pub fn round(diameter: f64, thickness: f64, rates: PipeRates) -> Result<Self, ModelError> {
        Self::new(CrossSection::round(diameter)?, thickness, rates)
    }

    pub fn rectangular(
        width: f64,
        height: f64,
        thickness: f64,
        rates: PipeRates,
    ) -> Result<Self, ModelError> {
        Self::new(CrossSection::rectangular(width, height)?, thickness, rates)
    }

    pub fn perimeter(&self) -> f64 {
        self.section.perimeter()
    }

    pub fn section(&self) -> &CrossSection {
        &self.section
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn rates(&self) -> &PipeRates {
        &self.rates
    }
}

impl fmt::Display for PipeStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.section, self.thickness)
    }
}
