//! `tubesc demo` command - price the sample order
//!
//! The sample is a painted frame tube cut from 100x100x4 rectangular stock:
//! two segments, each cleaned and weld-cleaned, each with one 98x398 window
//! and four ф8 holes, joined by one seam and fitted with four sundry parts.

use miette::Result;
use std::sync::Arc;
use tracing::info;

use crate::cli::{output, GlobalOpts};
use crate::core::error::ModelError;
use crate::core::rates::{PipeRates, ShopRates};
use crate::core::Config;
use crate::entities::order::Order;
use crate::entities::quote::Quote;
use crate::entities::section::PipeStock;

#[derive(clap::Args, Debug)]
pub struct DemoArgs {
    /// Order number
    #[arg(long, short = 'n', default_value_t = 1)]
    pub number: u32,

    /// Order name
    #[arg(long, default_value = "Sample order")]
    pub name: String,

    /// Leave the item unpainted
    #[arg(long)]
    pub no_paint: bool,
}

/// Segment lengths of the sample frame tube, in mm
const SAMPLE_LENGTHS: [f64; 2] = [4500.0, 647.0];

const SAMPLE_SUNDRIES: u32 = 4;

/// Build the sample order on the given shop rates
pub fn sample_order(
    number: u32,
    name: &str,
    shop: ShopRates,
    painted: bool,
) -> Result<Order, ModelError> {
    let rates = PipeRates::new(1018.0 / 1000.0, 5.0, 34.0 / 1000.0, 75.0 / 1000.0)?;
    let pipe = Arc::new(PipeStock::rectangular(100.0, 100.0, 4.0, rates)?);

    let mut order = Order::new(number, name, shop)?;
    let item = order.add_tube_item("Tube 4500")?;
    item.set_painted(painted).set_sundries(SAMPLE_SUNDRIES);
    item.set_welding_length(pipe.perimeter())?;
    for length in SAMPLE_LENGTHS {
        let tube = item.add_tube(&pipe, length)?;
        tube.set_cleaned(true).set_weld_cleaned(true);
        tube.add_rect_hole(98.0, 398.0, 1, false)?;
        tube.add_round_hole(8.0, 4, false)?;
    }
    Ok(order)
}

pub fn run(args: DemoArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load(global.config.as_deref())?;
    let order = sample_order(args.number, &args.name, config.shop, !args.no_paint)?;
    let quote = Quote::new(&order, &config.pricing)?;
    info!(
        order = order.number(),
        total = order.total_cost(),
        "priced sample order"
    );

    let rendered = output::render_quote(&order, &quote, global.format)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
