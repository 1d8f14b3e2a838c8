//! Order - root of the cost tree

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::core::error::ModelError;
use crate::core::rates::ShopRates;
use crate::entities::breakdown::CostBreakdown;
use crate::entities::item::{LineItem, TubeItem};

/// A customer order; owns its line items and the shop rate table
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    number: u32,
    name: String,
    shop: Arc<ShopRates>,
    items: Vec<LineItem>,
}

impl Order {
    /// Create an order. Uniqueness of `number` is up to the caller.
    pub fn new(number: u32, name: impl Into<String>, shop: ShopRates) -> Result<Self, ModelError> {
        shop.validate()?;
        Ok(Self {
            number,
            name: name.into(),
            shop: Arc::new(shop),
            items: Vec::new(),
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shop_rates(&self) -> &ShopRates {
        &self.shop
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Register a tube item and return it for further setup
    pub fn add_tube_item(&mut self, name: impl Into<String>) -> Result<&mut TubeItem, ModelError> {
        let item = TubeItem::new(name, Arc::clone(&self.shop))?;
        debug!(order = self.number, item = %item.name(), "registered tube item");
        let index = self.items.len();
        self.items.push(LineItem::Tube(item));
        match &mut self.items[index] {
            LineItem::Tube(item) => Ok(item),
        }
    }

    pub fn total_cost(&self) -> f64 {
        let total: f64 = self.items.iter().map(LineItem::cost).sum();
        trace!(order = self.number, total, "order total");
        total
    }

    pub fn cutting_cost(&self) -> f64 {
        self.items.iter().map(LineItem::cutting_cost).sum()
    }

    pub fn cut_length(&self) -> f64 {
        self.items.iter().map(LineItem::cut_length).sum()
    }

    pub fn incision_count(&self) -> u64 {
        self.items.iter().map(LineItem::incision_count).sum()
    }

    pub fn paintable_area(&self) -> f64 {
        self.items.iter().map(LineItem::paintable_area).sum()
    }

    pub fn breakdown(&self) -> CostBreakdown {
        self.items.iter().map(LineItem::breakdown).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::PipeRates;
    use crate::entities::section::PipeStock;

    fn order() -> Order {
        Order::new(1, "My order", ShopRates::new(1.0, 5.0, 0.09, 1000.0).unwrap()).unwrap()
    }

    fn pipe() -> Arc<PipeStock> {
        let rates = PipeRates::new(30.0, 5.0, 34.0, 75.0).unwrap();
        Arc::new(PipeStock::round(30.0, 3.5, rates).unwrap())
    }

    #[test]
    fn test_empty_order_costs_nothing() {
        let order = order();
        assert_eq!(order.total_cost(), 0.0);
        assert_eq!(order.incision_count(), 0);
    }

    #[test]
    fn test_total_is_sum_of_items() {
        crate::core::logging::init_test();
        let mut order = order();
        let pipe = pipe();
        order
            .add_tube_item("Tube")
            .unwrap()
            .add_tube(&pipe, 1200.0)
            .unwrap()
            .add_round_hole(10.0, 2, false)
            .unwrap();
        let post = order.add_tube_item("Post").unwrap();
        post.set_painted(true);
        post.add_tube(&pipe, 400.0).unwrap();

        let expected: f64 = order.items().iter().map(LineItem::cost).sum();
        assert_eq!(order.total_cost(), expected);
        assert_eq!(order.items().len(), 2);
        assert!((order.breakdown().total() - order.total_cost()).abs() < 1e-9);
    }

    #[test]
    fn test_rejected_item_not_registered() {
        let mut order = order();
        order.add_tube_item("Tube").unwrap();
        assert!(order.add_tube_item("").is_err());
        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn test_invalid_shop_rates_rejected() {
        let mut shop = ShopRates::new(1.0, 5.0, 0.09, 1000.0).unwrap();
        shop.cleaning = -1.0;
        assert!(Order::new(2, "Bad", shop).is_err());
    }
}
