//! Property-based tests for the cost rollup.
//!
//! Uses proptest to check geometry formulas and additivity of costs over
//! arbitrary trees.

use proptest::prelude::*;
use std::f64::consts::PI;
use std::sync::Arc;
use tubesc::core::{PipeRates, ShopRates};
use tubesc::entities::{CrossSection, HoleShape, LineItem, Order, PipeStock, TubeSegment};

fn shop() -> ShopRates {
    ShopRates::new(1.0, 5.0, 90.0 / 1000.0, 1000.0).unwrap()
}

fn pipe_rates() -> PipeRates {
    PipeRates::new(30.0, 5.0, 34.0, 75.0).unwrap()
}

fn round_pipe() -> Arc<PipeStock> {
    Arc::new(PipeStock::round(30.0, 3.5, pipe_rates()).unwrap())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// (diameter, count, through)
fn hole_strategy() -> impl Strategy<Value = (f64, u32, bool)> {
    (0.5f64..200.0, 1u32..10, any::<bool>())
}

fn own_contribution(tube: &TubeSegment) -> f64 {
    let rates = tube.pipe().rates();
    rates.pipe * tube.length() + rates.cutting * tube.pipe().perimeter() * 2.0 + rates.carrying
}

// =============================================================================
// Geometry
// =============================================================================

proptest! {
    #[test]
    fn prop_round_perimeter(d in 0.001f64..1.0e4) {
        prop_assert_eq!(CrossSection::round(d).unwrap().perimeter(), d * PI);
    }

    #[test]
    fn prop_rectangular_perimeter(w in 0.001f64..1.0e4, h in 0.001f64..1.0e4) {
        prop_assert_eq!(CrossSection::rectangular(w, h).unwrap().perimeter(), 2.0 * (w + h));
    }

    #[test]
    fn prop_round_hole_cut_length(d in 0.001f64..1.0e3) {
        prop_assert_eq!(HoleShape::round(d).unwrap().cut_length_per_instance(), d * PI);
    }

    #[test]
    fn prop_non_positive_geometry_rejected(v in -1.0e4f64..=0.0) {
        prop_assert!(CrossSection::round(v).is_err());
        prop_assert!(CrossSection::rectangular(10.0, v).is_err());
        prop_assert!(HoleShape::round(v).is_err());
        prop_assert!(PipeStock::round(30.0, v, pipe_rates()).is_err());
    }
}

// =============================================================================
// Holes
// =============================================================================

proptest! {
    #[test]
    fn prop_effective_count((d, n, through) in hole_strategy()) {
        let mut order = Order::new(1, "p", shop()).unwrap();
        let tube = order.add_tube_item("i").unwrap().add_tube(&round_pipe(), 100.0).unwrap();
        tube.add_round_hole(d, n, through).unwrap();
        let hole = &tube.holes()[0];
        let expected = if through { 2 * n } else { n };
        prop_assert_eq!(hole.effective_count(), expected);
        prop_assert!(close(hole.total_cut_length(), d * PI * expected as f64));
    }
}

// =============================================================================
// Additivity
// =============================================================================

proptest! {
    #[test]
    fn prop_segment_cost_is_own_plus_holes(
        length in 1.0f64..10_000.0,
        holes in prop::collection::vec(hole_strategy(), 0..8),
    ) {
        let mut order = Order::new(1, "p", shop()).unwrap();
        let tube = order.add_tube_item("i").unwrap().add_tube(&round_pipe(), length).unwrap();
        for (d, n, through) in &holes {
            tube.add_round_hole(*d, *n, *through).unwrap();
        }
        let holes_sum: f64 = tube.holes().iter().map(|h| h.cost()).sum();
        prop_assert!(close(tube.cost(), own_contribution(tube) + holes_sum));
        if holes.is_empty() {
            prop_assert!(close(tube.cost(), own_contribution(tube)));
        }
    }

    #[test]
    fn prop_hole_order_irrelevant(
        length in 1.0f64..10_000.0,
        holes in prop::collection::vec(hole_strategy(), 1..8),
    ) {
        let pipe = round_pipe();
        let mut order = Order::new(1, "p", shop()).unwrap();
        let item = order.add_tube_item("i").unwrap();

        let forward = item.add_tube(&pipe, length).unwrap();
        for (d, n, through) in &holes {
            forward.add_round_hole(*d, *n, *through).unwrap();
        }
        let reversed = item.add_tube(&pipe, length).unwrap();
        for (d, n, through) in holes.iter().rev() {
            reversed.add_round_hole(*d, *n, *through).unwrap();
        }

        let tubes = item.tubes();
        prop_assert!(close(tubes[0].cost(), tubes[1].cost()));
    }

    #[test]
    fn prop_unpainted_item_is_sum_of_segments(
        lengths in prop::collection::vec(1.0f64..5_000.0, 0..6),
    ) {
        let pipe = round_pipe();
        let mut order = Order::new(1, "p", shop()).unwrap();
        let item = order.add_tube_item("i").unwrap();
        for length in &lengths {
            item.add_tube(&pipe, *length).unwrap().add_round_hole(8.0, 1, false).unwrap();
        }
        let sum: f64 = item.tubes().iter().map(TubeSegment::cost).sum();
        prop_assert!(close(item.cost(), sum));
    }

    #[test]
    fn prop_order_total_is_sum_of_items(
        items in prop::collection::vec((1.0f64..5_000.0, any::<bool>()), 0..6),
    ) {
        let pipe = round_pipe();
        let mut order = Order::new(1, "p", shop()).unwrap();
        for (i, (length, painted)) in items.iter().enumerate() {
            let item = order.add_tube_item(format!("item {}", i)).unwrap();
            item.set_painted(*painted);
            item.add_tube(&pipe, *length).unwrap();
        }
        let sum: f64 = order.items().iter().map(LineItem::cost).sum();
        prop_assert!(close(order.total_cost(), sum));
        prop_assert!(close(order.breakdown().total(), order.total_cost()));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_reference_hole_cost() {
    let mut order = Order::new(1, "My order", shop()).unwrap();
    let tube = order
        .add_tube_item("Tube")
        .unwrap()
        .add_tube(&round_pipe(), 1000.0)
        .unwrap();
    tube.add_round_hole(10.0, 2, false).unwrap();

    let hole = &tube.holes()[0];
    assert_eq!(hole.cost(), (5.0 + 34.0 * (10.0 * PI)) * 2.0);
}

#[test]
fn test_reference_label() {
    let mut order = Order::new(1, "My order", shop()).unwrap();
    let tube = order
        .add_tube_item("Tube")
        .unwrap()
        .add_tube(&round_pipe(), 1000.0)
        .unwrap();
    tube.add_round_hole(8.0, 3, true).unwrap();
    assert_eq!(tube.holes()[0].describe(), "Hole. through. ф8 - 3 pcs");
}

#[test]
fn test_order_tree_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Order>();
}
