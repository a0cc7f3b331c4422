use super::{PriceSource, PricedPart, QuoteSummary};
use crate::quote::RequestedPart;
use crate::{Error, Result};

/// Price every requested part and roll the lines up into a quote summary.
///
/// Lines keep the order of `parts`. Freight is a flat charge per line that
/// is not Dallas stock, so quantity does not affect it.
pub fn aggregate(parts: &[RequestedPart], source: &dyn PriceSource) -> Result<QuoteSummary> {
    if parts.is_empty() {
        return Err(Error::EmptyQuote);
    }

    tracing::debug!("Pricing {} parts", parts.len());

    let mut pricing_data = Vec::with_capacity(parts.len());
    for part in parts {
        let line = source.price(part)?;
        let total_price = f64::from(part.quantity) * line.unit_price;

        tracing::trace!(
            "{} x{} @ {} from {}",
            part.part_number,
            part.quantity,
            line.unit_price,
            line.warehouse_location
        );

        pricing_data.push(PricedPart {
            part_number: part.part_number.clone(),
            quantity: part.quantity,
            unit_price: line.unit_price,
            total_price,
            description: line.description,
            availability: line.availability,
            warehouse_location: line.warehouse_location,
            is_dallas_stock: line.is_dallas_stock,
        });
    }

    let parts_processed = pricing_data.len();
    let total_material_cost: f64 = pricing_data.iter().map(|p| p.total_price).sum();
    let total_freight: f64 = pricing_data.iter().map(PricedPart::freight).sum();
    let dallas_items = pricing_data.iter().filter(|p| p.is_dallas_stock).count();
    let available = pricing_data
        .iter()
        .filter(|p| p.availability.is_available())
        .count();

    let summary = QuoteSummary {
        parts_processed,
        total_material_cost,
        total_freight,
        total_quote_value: total_material_cost + total_freight,
        availability_rate: percentage(available, parts_processed),
        dallas_items,
        dallas_percentage: percentage(dallas_items, parts_processed),
        pricing_data,
    };

    tracing::info!(
        "Priced {} parts: material {:.4}, freight {:.2}, total {:.4}",
        summary.parts_processed,
        summary.total_material_cost,
        summary.total_freight,
        summary.total_quote_value
    );

    Ok(summary)
}

fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}
