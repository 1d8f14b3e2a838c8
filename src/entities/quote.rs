//! Customer quote - prices derived from an order's cost rollup
//!
//! Costs split into work and materials, each scaled by its own multiplier,
//! then by the manager margin and VAT:
//!
//! ```text
//! final = (work * pricing.work + materials * pricing.materials) * manager * vat
//! ```
//!
//! Orders whose cutting is cheaper than `minimum_cutting` are topped up to
//! the minimum. The top-up is spread over items by their share of cutting.
//! None of this changes [`Order::total_cost`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{non_negative, ModelError};
use crate::entities::item::LineItem;
use crate::entities::order::Order;

/// Multipliers and minimums applied on top of shop cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// Multiplier on shop labour
    pub work: f64,
    /// Multiplier on purchased materials
    pub materials: f64,
    /// Manager margin
    pub manager: f64,
    pub vat: f64,
    /// Smallest cutting charge accepted for an order
    pub minimum_cutting: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            work: 1.0,
            materials: 1.0,
            manager: 1.0,
            vat: 1.0,
            minimum_cutting: 0.0,
        }
    }
}

impl Pricing {
    pub fn validate(&self) -> Result<(), ModelError> {
        for (name, value) in [
            ("work", self.work),
            ("materials", self.materials),
            ("manager", self.manager),
            ("vat", self.vat),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ModelError::configuration(format!(
                    "{} multiplier must be a positive number, got {}",
                    name, value
                )));
            }
        }
        non_negative("minimum_cutting", self.minimum_cutting)?;
        Ok(())
    }

    fn apply(&self, work: f64, materials: f64) -> Price {
        Price {
            cost: work + materials,
            final_price: (work * self.work + materials * self.materials) * self.manager * self.vat,
        }
    }
}

/// Shop cost and the price offered to the customer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Price {
    pub cost: f64,
    #[serde(rename = "final")]
    pub final_price: f64,
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            cost: self.cost + rhs.cost,
            final_price: self.final_price + rhs.final_price,
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} -> {:.2}", self.cost, self.final_price)
    }
}

/// One priced line of a quote
#[derive(Debug, Clone, Serialize)]
pub struct QuoteLine {
    pub name: String,
    pub painted: bool,
    pub work: f64,
    pub materials: f64,
    /// Share of the minimum cutting top-up charged to this line
    pub cutting_surcharge: f64,
    pub price: Price,
}

/// Priced order, ready for presentation
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub order_number: u32,
    pub order_name: String,
    pub issued: DateTime<Utc>,
    pub pricing: Pricing,
    pub lines: Vec<QuoteLine>,
    pub total: Price,
}

impl Quote {
    pub fn new(order: &Order, pricing: &Pricing) -> Result<Self, ModelError> {
        pricing.validate()?;

        let cutting = order.cutting_cost();
        let top_up = if cutting > 0.0 && cutting < pricing.minimum_cutting {
            pricing.minimum_cutting - cutting
        } else {
            0.0
        };

        let lines: Vec<QuoteLine> = order
            .items()
            .iter()
            .map(|item| Self::line(item, pricing, cutting, top_up))
            .collect();
        let total = lines
            .iter()
            .map(|line| line.price)
            .fold(Price::default(), |acc, p| acc + p);

        Ok(Self {
            order_number: order.number(),
            order_name: order.name().to_string(),
            issued: Utc::now(),
            pricing: *pricing,
            lines,
            total,
        })
    }

    fn line(item: &LineItem, pricing: &Pricing, order_cutting: f64, top_up: f64) -> QuoteLine {
        let breakdown = item.breakdown();
        let cutting_surcharge = if top_up > 0.0 {
            top_up * breakdown.cutting() / order_cutting
        } else {
            0.0
        };
        let work = breakdown.work() + cutting_surcharge;
        let materials = breakdown.materials();
        QuoteLine {
            name: item.name().to_string(),
            painted: item.is_painted(),
            work,
            materials,
            cutting_surcharge,
            price: pricing.apply(work, materials),
        }
    }
}
