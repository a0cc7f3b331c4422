use crate::OutputFormat;
use anyhow::Result;
use mavfast_core::pricing::{self, MockPriceSource, QuoteSummary};
use mavfast_core::quote::QuoteReader;
use std::path::Path;

/// Read a quote file and price it with the placeholder price source
pub fn price_quote_file(file: &Path) -> Result<(String, QuoteSummary)> {
    let quote = QuoteReader::from_file(file)?;
    quote.validate()?;

    let summary = pricing::aggregate(&quote.parts_requested, &MockPriceSource)?;
    Ok((quote.quote_id, summary))
}

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    tracing::info!("Pricing quote file: {}", file.display());
    tracing::debug!("Output format: {}", format.as_str());

    let (quote_id, summary) = price_quote_file(file)?;

    match format {
        OutputFormat::Json => output_json(&quote_id, &summary)?,
        OutputFormat::Pretty => output_pretty(&quote_id, &summary),
    }

    Ok(())
}

fn output_json(quote_id: &str, summary: &QuoteSummary) -> Result<()> {
    let mut value = serde_json::to_value(summary)?;
    if let Some(map) = value.as_object_mut() {
        map.insert("quote_id".to_string(), quote_id.into());
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn output_pretty(quote_id: &str, summary: &QuoteSummary) {
    use console::style;

    println!("\n{}", style(format!("Quote {}", quote_id)).bold().cyan());
    println!("{}", style("=".repeat(quote_id.len() + 6)).cyan());

    println!("\n{}", style("Parts:").bold());
    for part in &summary.pricing_data {
        println!(
            "  {:<16} x{:<8} @ {:>10.4}  = {:>12.4}  {}",
            part.part_number,
            part.quantity,
            part.unit_price,
            part.total_price,
            part.warehouse_location
        );
    }

    println!("\n{}", style("Totals:").bold());
    println!("  Parts Processed:    {}", summary.parts_processed);
    println!("  Material Cost:      {:.4}", summary.total_material_cost);
    println!("  Freight:            {:.2}", summary.total_freight);
    println!(
        "  Quote Value:        {}",
        style(format!("{:.4}", summary.total_quote_value)).green()
    );
    println!("  Availability:       {:.1}%", summary.availability_rate);
    println!(
        "  Dallas Stock:       {} ({:.1}%)",
        summary.dallas_items, summary.dallas_percentage
    );
    println!();
}
