//! Order line items
//!
//! [`LineItem`] is a closed set of item kinds. Only tube-based items exist
//! today; other kinds (sheet parts, bought-in hardware) slot in as new
//! variants without touching the order rollup.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::core::error::{non_negative, ModelError};
use crate::core::rates::ShopRates;
use crate::entities::breakdown::CostBreakdown;
use crate::entities::section::PipeStock;
use crate::entities::tube::TubeSegment;

/// One line of an order
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineItem {
    Tube(TubeItem),
}

impl LineItem {
    pub fn name(&self) -> &str {
        match self {
            LineItem::Tube(item) => item.name(),
        }
    }

    pub fn is_painted(&self) -> bool {
        match self {
            LineItem::Tube(item) => item.is_painted(),
        }
    }

    pub fn cost(&self) -> f64 {
        match self {
            LineItem::Tube(item) => item.cost(),
        }
    }

    pub fn paintable_area(&self) -> f64 {
        match self {
            LineItem::Tube(item) => item.paintable_area(),
        }
    }

    pub fn cut_length(&self) -> f64 {
        match self {
            LineItem::Tube(item) => item.cut_length(),
        }
    }

    pub fn incision_count(&self) -> u64 {
        match self {
            LineItem::Tube(item) => item.incision_count(),
        }
    }

    pub fn cutting_cost(&self) -> f64 {
        match self {
            LineItem::Tube(item) => item.cutting_cost(),
        }
    }

    pub fn breakdown(&self) -> CostBreakdown {
        match self {
            LineItem::Tube(item) => item.breakdown(),
        }
    }
}

/// Weld length charged for attaching one sundry part, in mm
pub const SUNDRY_WELD_LENGTH: f64 = 10.0;

/// A named item welded up from tube segments
#[derive(Debug, Clone, Serialize)]
pub struct TubeItem {
    name: String,
    painted: bool,
    welding_length: f64,
    sundry_welds: u32,
    sundries: u32,
    tubes: Vec<TubeSegment>,
    #[serde(skip)]
    shop: Arc<ShopRates>,
}

impl TubeItem {
    pub(crate) fn new(name: impl Into<String>, shop: Arc<ShopRates>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::configuration("line item name must not be empty"));
        }
        Ok(Self {
            name,
            painted: false,
            welding_length: 0.0,
            sundry_welds: 0,
            sundries: 0,
            tubes: Vec::new(),
            shop,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_painted(&self) -> bool {
        self.painted
    }

    pub fn set_painted(&mut self, painted: bool) -> &mut Self {
        self.painted = painted;
        self
    }

    pub fn welding_length(&self) -> f64 {
        self.welding_length
    }

    /// Total seam length welded while assembling the item, in mm
    pub fn set_welding_length(&mut self, length: f64) -> Result<&mut Self, ModelError> {
        self.welding_length = non_negative("welding length", length)?;
        Ok(self)
    }

    pub fn sundry_welds(&self) -> u32 {
        self.sundry_welds
    }

    /// Small parts welded on, each charged as [`SUNDRY_WELD_LENGTH`] of seam
    pub fn set_sundry_welds(&mut self, count: u32) -> &mut Self {
        self.sundry_welds = count;
        self
    }

    pub fn sundries(&self) -> u32 {
        self.sundries
    }

    /// Bought-in sundry parts (bolts, plugs, brackets)
    pub fn set_sundries(&mut self, count: u32) -> &mut Self {
        self.sundries = count;
        self
    }

    pub fn tubes(&self) -> &[TubeSegment] {
        &self.tubes
    }

    /// Cut a new segment from `pipe` and return it for further setup
    pub fn add_tube(&mut self, pipe: &Arc<PipeStock>, length: f64) -> Result<&mut TubeSegment, ModelError> {
        let tube = TubeSegment::new(Arc::clone(pipe), length, Arc::clone(&self.shop))?;
        debug!(item = %self.name, pipe = %pipe, length, "registered tube");
        let index = self.tubes.len();
        self.tubes.push(tube);
        Ok(&mut self.tubes[index])
    }

    /// Outer surface of every segment, painted or not
    pub fn paintable_area(&self) -> f64 {
        self.tubes.iter().map(TubeSegment::area).sum()
    }

    pub fn welding_cost(&self) -> f64 {
        let seam = self.welding_length + f64::from(self.sundry_welds) * SUNDRY_WELD_LENGTH;
        seam * self.shop.welding
    }

    pub fn sundry_cost(&self) -> f64 {
        f64::from(self.sundries) * self.shop.sundry
    }

    pub fn painting_work_cost(&self) -> f64 {
        if self.painted {
            self.shop.painting.work_cost(self.paintable_area())
        } else {
            0.0
        }
    }

    pub fn paint_cost(&self) -> f64 {
        if self.painted {
            self.shop.painting.paint_cost(self.paintable_area())
        } else {
            0.0
        }
    }

    pub fn painting_cost(&self) -> f64 {
        self.painting_work_cost() + self.paint_cost()
    }

    pub fn cost(&self) -> f64 {
        let tubes: f64 = self.tubes.iter().map(TubeSegment::cost).sum();
        let cost = tubes + self.welding_cost() + self.sundry_cost() + self.painting_cost();
        trace!(item = %self.name, cost, "item cost");
        cost
    }

    pub fn cut_length(&self) -> f64 {
        self.tubes.iter().map(TubeSegment::cut_length).sum()
    }

    pub fn incision_count(&self) -> u64 {
        self.tubes.iter().map(TubeSegment::incision_count).sum()
    }

    /// End cuts and holes of every segment
    pub fn cutting_cost(&self) -> f64 {
        self.tubes
            .iter()
            .map(|tube| tube.end_cutting_cost() + tube.holes_cost())
            .sum()
    }

    pub fn breakdown(&self) -> CostBreakdown {
        let mut breakdown: CostBreakdown = self.tubes.iter().map(TubeSegment::breakdown).sum();
        breakdown.welding = self.welding_cost();
        breakdown.sundries = self.sundry_cost();
        breakdown.painting_work = self.painting_work_cost();
        breakdown.paint = self.paint_cost();
        breakdown
    }
}
