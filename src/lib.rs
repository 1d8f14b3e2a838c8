//! tubesc: tube shop cost estimator
//!
//! Bottom-up manufacturing cost of welded pipe/tube assemblies: pipe
//! geometry and hole cutting combined with shop and pipe rate tables.

pub mod cli;
pub mod core;
pub mod entities;
