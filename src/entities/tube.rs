//! Tube segment - one cut of pipe stock with its holes

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{positive, ModelError};
use crate::core::rates::{PipeRates, ShopRates};
use crate::entities::breakdown::CostBreakdown;
use crate::entities::hole::{HoleFeature, HoleShape};
use crate::entities::section::PipeStock;

/// End cuts made when a segment is cut from stock
pub const END_CUTS: u32 = 2;

/// A single physical length cut from a [`PipeStock`]
#[derive(Debug, Clone, Serialize)]
pub struct TubeSegment {
    pipe: Arc<PipeStock>,
    length: f64,
    cleaned: bool,
    weld_cleaned: bool,
    holes: Vec<HoleFeature>,
    #[serde(skip)]
    rates: PipeRates,
    #[serde(skip)]
    shop: Arc<ShopRates>,
}

impl TubeSegment {
    pub(crate) fn new(
        pipe: Arc<PipeStock>,
        length: f64,
        shop: Arc<ShopRates>,
    ) -> Result<Self, ModelError> {
        let length = positive("tube length", length)?;
        Ok(Self {
            rates: *pipe.rates(),
            pipe,
            length,
            cleaned: false,
            weld_cleaned: false,
            holes: Vec::new(),
            shop,
        })
    }

    pub fn pipe(&self) -> &PipeStock {
        &self.pipe
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn holes(&self) -> &[HoleFeature] {
        &self.holes
    }

    pub fn is_cleaned(&self) -> bool {
        self.cleaned
    }

    pub fn is_weld_cleaned(&self) -> bool {
        self.weld_cleaned
    }

    /// Charge surface cleaning over the whole outer surface
    pub fn set_cleaned(&mut self, cleaned: bool) -> &mut Self {
        self.cleaned = cleaned;
        self
    }

    /// Charge weld seam cleaning along the length
    pub fn set_weld_cleaned(&mut self, weld_cleaned: bool) -> &mut Self {
        self.weld_cleaned = weld_cleaned;
        self
    }

    /// Register a hole; a failed hole leaves existing holes untouched
    pub fn add_hole(&mut self, shape: HoleShape, count: u32, through: bool) -> Result<(), ModelError> {
        let hole = HoleFeature::new(shape, count, through, self.rates)?;
        debug!(hole = %hole, length = self.length, "registered hole");
        self.holes.push(hole);
        Ok(())
    }

    pub fn add_round_hole(&mut self, diameter: f64, count: u32, through: bool) -> Result<(), ModelError> {
        self.add_hole(HoleShape::round(diameter)?, count, through)
    }

    pub fn add_rect_hole(
        &mut self,
        width: f64,
        height: f64,
        count: u32,
        through: bool,
    ) -> Result<(), ModelError> {
        self.add_hole(HoleShape::rectangular(width, height)?, count, through)
    }

    /// Outer surface, perimeter times length
    pub fn area(&self) -> f64 {
        self.pipe.perimeter() * self.length
    }

    pub fn material_cost(&self) -> f64 {
        self.rates.pipe * self.length
    }

    pub fn end_cutting_cost(&self) -> f64 {
        self.rates.cutting * self.pipe.perimeter() * END_CUTS as f64
    }

    pub fn carrying_cost(&self) -> f64 {
        self.rates.carrying
    }

    pub fn cleaning_cost(&self) -> f64 {
        let mut cost = 0.0;
        if self.cleaned {
            cost += self.shop.cleaning * self.area();
        }
        if self.weld_cleaned {
            cost += self.shop.weld_cleaning * self.length;
        }
        cost
    }

    /// Segment's own contribution, without holes
    pub fn own_cost(&self) -> f64 {
        self.material_cost() + self.end_cutting_cost() + self.carrying_cost() + self.cleaning_cost()
    }

    pub fn holes_cost(&self) -> f64 {
        self.holes.iter().map(HoleFeature::cost).sum()
    }

    pub fn cost(&self) -> f64 {
        self.own_cost() + self.holes_cost()
    }

    /// End cuts plus every hole outline
    pub fn cut_length(&self) -> f64 {
        self.pipe.perimeter() * END_CUTS as f64
            + self
                .holes
                .iter()
                .map(HoleFeature::total_cut_length)
                .sum::<f64>()
    }

    /// Number of piercings needed for the holes
    pub fn incision_count(&self) -> u64 {
        self.holes
            .iter()
            .map(|hole| u64::from(hole.effective_count()))
            .sum()
    }

    pub fn breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            material: self.material_cost(),
            end_cutting: self.end_cutting_cost(),
            holes: self.holes_cost(),
            carrying: self.carrying_cost(),
            cleaning: self.cleaning_cost(),
            ..Default::default()
        }
    }
}
