//! Per-category cost rollup

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Cost split by where it comes from
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Raw pipe
    pub material: f64,
    /// Cutting segment ends off stock
    pub end_cutting: f64,
    /// Piercing and cutting holes
    pub holes: f64,
    pub carrying: f64,
    /// Surface and weld seam cleaning
    pub cleaning: f64,
    /// Assembly welds, sundry attachments included
    pub welding: f64,
    /// Bought-in sundry parts
    pub sundries: f64,
    pub painting_work: f64,
    pub paint: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.material
            + self.end_cutting
            + self.holes
            + self.carrying
            + self.cleaning
            + self.welding
            + self.sundries
            + self.painting_work
            + self.paint
    }

    /// Purchased materials: pipe, sundries and paint
    pub fn materials(&self) -> f64 {
        self.material + self.sundries + self.paint
    }

    /// Shop labour: everything that is not a purchased material
    pub fn work(&self) -> f64 {
        self.end_cutting
            + self.holes
            + self.carrying
            + self.cleaning
            + self.welding
            + self.painting_work
    }

    /// Laser/saw time: end cuts and holes
    pub fn cutting(&self) -> f64 {
        self.end_cutting + self.holes
    }
}

impl Add for CostBreakdown {
    type Output = CostBreakdown;

    fn add(mut self, rhs: CostBreakdown) -> CostBreakdown {
        self += rhs;
        self
    }
}

impl AddAssign for CostBreakdown {
    fn add_assign(&mut self, rhs: CostBreakdown) {
        self.material += rhs.material;
        self.end_cutting += rhs.end_cutting;
        self.holes += rhs.holes;
        self.carrying += rhs.carrying;
        self.cleaning += rhs.cleaning;
        self.welding += rhs.welding;
        self.sundries += rhs.sundries;
        self.painting_work += rhs.painting_work;
        self.paint += rhs.paint;
    }
}

impl Sum for CostBreakdown {
    fn sum<I: Iterator<Item = CostBreakdown>>(iter: I) -> Self {
        iter.fold(CostBreakdown::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_and_materials_partition_total() {
        let b = CostBreakdown {
            material: 1.0,
            end_cutting: 2.0,
            holes: 3.0,
            carrying: 4.0,
            cleaning: 5.0,
            welding: 6.0,
            sundries: 7.0,
            painting_work: 8.0,
            paint: 9.0,
        };
        assert_eq!(b.total(), 45.0);
        assert_eq!(b.materials(), 17.0);
        assert_eq!(b.work(), 28.0);
        assert_eq!(b.cutting(), 5.0);
    }

    #[test]
    fn test_sum() {
        let one = CostBreakdown {
            material: 1.0,
            holes: 2.0,
            ..Default::default()
        };
        let total: CostBreakdown = vec![one, one, one].into_iter().sum();
        assert_eq!(total.material, 3.0);
        assert_eq!(total.holes, 6.0);
        assert_eq!(total.total(), 9.0);
    }
}
