use super::{Availability, DALLAS_WAREHOUSE, LineQuote, PriceSource};
use crate::Result;
use crate::quote::RequestedPart;

/// Unit price returned for every part by the placeholder source
pub const MOCK_UNIT_PRICE: f64 = 0.5529;

/// Placeholder pricing: every part is in stock in Dallas at a fixed price
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPriceSource;

impl PriceSource for MockPriceSource {
    fn price(&self, part: &RequestedPart) -> Result<LineQuote> {
        Ok(LineQuote {
            unit_price: MOCK_UNIT_PRICE,
            description: format!("Mock description for {}", part.part_number),
            availability: Availability::InStock,
            warehouse_location: DALLAS_WAREHOUSE.to_string(),
            is_dallas_stock: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_prices_from_dallas() {
        let line = MockPriceSource.price(&RequestedPart::new("455432", 225)).unwrap();

        assert_eq!(line.unit_price, MOCK_UNIT_PRICE);
        assert_eq!(line.warehouse_location, "DALLAS");
        assert!(line.is_dallas_stock);
        assert_eq!(line.description, "Mock description for 455432");
        assert!(line.availability.is_available());
    }
}
