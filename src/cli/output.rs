//! Quote rendering for the supported output formats

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::entities::item::LineItem;
use crate::entities::order::Order;
use crate::entities::quote::Quote;

const QUOTE_HEADER: [&str; 7] = [
    "Item",
    "Painted",
    "Work",
    "Materials",
    "Min. cutting",
    "Cost",
    "Final",
];

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}

fn finish(builder: Builder, markdown: bool) -> String {
    let mut table = builder.build();
    if markdown {
        table.with(Style::markdown());
    } else {
        table.with(Style::modern());
    }
    table.to_string()
}

/// Render a quote, with per-segment detail for table formats
pub fn render_quote(order: &Order, quote: &Quote, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(quote).into_diagnostic(),
        OutputFormat::Yaml => serde_yml::to_string(quote).into_diagnostic(),
        OutputFormat::Csv => quote_csv(quote),
        OutputFormat::Md => Ok(quote_text(order, quote, true)),
        OutputFormat::Auto | OutputFormat::Table => Ok(quote_text(order, quote, false)),
    }
}

fn quote_text(order: &Order, quote: &Quote, markdown: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}\n\n",
        style(format!("Quote for order #{}: {}", quote.order_number, quote.order_name)).bold()
    ));

    let mut segments = Builder::default();
    segments.push_record(["Item", "Segment", "Feature", "Cost"]);
    for item in order.items() {
        match item {
            LineItem::Tube(tube_item) => {
                for tube in tube_item.tubes() {
                    segments.push_record([
                        tube_item.name().to_string(),
                        format!("{} x {}", tube.pipe(), tube.length()),
                        "tube".to_string(),
                        money(tube.own_cost()),
                    ]);
                    for hole in tube.holes() {
                        segments.push_record([
                            String::new(),
                            String::new(),
                            hole.describe(),
                            money(hole.cost()),
                        ]);
                    }
                }
                if tube_item.is_painted() {
                    segments.push_record([
                        tube_item.name().to_string(),
                        format!("{:.0} mm²", tube_item.paintable_area()),
                        "painting".to_string(),
                        money(tube_item.painting_cost()),
                    ]);
                }
            }
        }
    }
    output.push_str(&finish(segments, markdown));
    output.push_str("\n\n");

    let mut lines = Builder::default();
    lines.push_record(QUOTE_HEADER);
    for line in &quote.lines {
        lines.push_record([
            line.name.clone(),
            yes_no(line.painted),
            money(line.work),
            money(line.materials),
            money(line.cutting_surcharge),
            money(line.price.cost),
            money(line.price.final_price),
        ]);
    }
    output.push_str(&finish(lines, markdown));
    output.push_str("\n\n");

    output.push_str(&format!(
        "Cut length: {:.0} mm, incisions: {}\n",
        order.cut_length(),
        order.incision_count()
    ));
    output.push_str(&format!("Total cost:  {}\n", money(quote.total.cost)));
    output.push_str(&format!(
        "Total price: {}\n",
        style(money(quote.total.final_price)).green().bold()
    ));
    output
}

fn quote_csv(quote: &Quote) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(QUOTE_HEADER).into_diagnostic()?;
    for line in &quote.lines {
        writer
            .write_record([
                line.name.clone(),
                yes_no(line.painted),
                money(line.work),
                money(line.materials),
                money(line.cutting_surcharge),
                money(line.price.cost),
                money(line.price.final_price),
            ])
            .into_diagnostic()?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| miette::miette!("cannot write csv: {}", e))?;
    String::from_utf8(bytes).into_diagnostic()
}
