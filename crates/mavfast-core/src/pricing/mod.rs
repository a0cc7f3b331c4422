mod aggregator;
mod mock;

pub use aggregator::aggregate;
pub use mock::MockPriceSource;

use crate::Result;
use crate::quote::RequestedPart;
use serde::{Deserialize, Serialize};

/// Flat freight charged per priced part shipped from outside Dallas
pub const NON_DALLAS_FREIGHT: f64 = 20.0;

/// Warehouse whose stock ships without freight
pub const DALLAS_WAREHOUSE: &str = "DALLAS";

/// Stock status reported by the supplier for one part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::InStock)
    }
}

/// What a price source knows about a single part
#[derive(Debug, Clone, PartialEq)]
pub struct LineQuote {
    pub unit_price: f64,
    pub description: String,
    pub availability: Availability,
    pub warehouse_location: String,
    pub is_dallas_stock: bool,
}

/// A requested part with its price and stock location attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedPart {
    pub part_number: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub description: String,
    pub availability: Availability,
    pub warehouse_location: String,
    pub is_dallas_stock: bool,
}

impl PricedPart {
    /// Freight this line contributes to the quote
    pub fn freight(&self) -> f64 {
        if self.is_dallas_stock {
            0.0
        } else {
            NON_DALLAS_FREIGHT
        }
    }
}

/// Aggregate pricing for a whole quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub parts_processed: usize,
    pub pricing_data: Vec<PricedPart>,
    pub total_material_cost: f64,
    pub total_freight: f64,
    pub total_quote_value: f64,
    pub availability_rate: f64,
    pub dallas_items: usize,
    pub dallas_percentage: f64,
}

/// Supplies unit price and stock location for requested parts.
///
/// The live implementation will read these off the supplier's quote page;
/// [`MockPriceSource`] stands in until then.
pub trait PriceSource: Send + Sync {
    fn price(&self, part: &RequestedPart) -> Result<LineQuote>;
}
