//! Cost model entities
//!
//! The order tree, leaf to root:
//!
//! - [`CrossSection`] / [`PipeStock`] - pipe profile and stock definition
//! - [`HoleShape`] / [`HoleFeature`] - holes cut into a segment
//! - [`TubeSegment`] - one cut of stock with its holes
//! - [`LineItem`] / [`TubeItem`] - a named order line
//! - [`Order`] - the root, owning items and shop rates
//!
//! Costs are computed on demand by walking the tree; nothing is cached.
//! [`Quote`] turns an order's [`CostBreakdown`] into customer prices.

pub mod breakdown;
pub mod hole;
pub mod item;
pub mod order;
pub mod quote;
pub mod section;
pub mod tube;

pub use breakdown::CostBreakdown;
pub use hole::{HoleFeature, HoleShape, MAX_HOLE_COUNT};
pub use item::{LineItem, TubeItem};
pub use order::Order;
pub use quote::{Price, Pricing, Quote, QuoteLine};
pub use section::{CrossSection, PipeStock};
pub use tube::TubeSegment;
