use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Quote id reported when the caller did not supply one
pub const UNKNOWN_QUOTE_ID: &str = "UNKNOWN";

fn unknown_quote_id() -> String {
    UNKNOWN_QUOTE_ID.to_string()
}

// `null` arrives from workflow tools when the part list is blank
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<RequestedPart>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RequestedPart>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A customer request for pricing and availability on a set of parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default = "unknown_quote_id")]
    pub quote_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parts_requested: Vec<RequestedPart>,
    /// Fields we carry through untouched (customer_info and friends)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single line of a quote request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestedPart {
    pub part_number: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_index: Option<u32>,
}

impl RequestedPart {
    pub fn new(part_number: impl Into<String>, quantity: u32) -> Self {
        Self {
            part_number: part_number.into(),
            quantity,
            part_index: None,
        }
    }
}

impl QuoteRequest {
    pub fn new(quote_id: impl Into<String>, parts_requested: Vec<RequestedPart>) -> Self {
        Self {
            quote_id: quote_id.into(),
            parts_requested,
            extra: Map::new(),
        }
    }

    /// Check the request can be priced.
    ///
    /// An empty part list is reported as [`Error::EmptyQuote`]; a blank part
    /// number or zero quantity as [`Error::InvalidPart`].
    pub fn validate(&self) -> Result<()> {
        if self.parts_requested.is_empty() {
            return Err(Error::EmptyQuote);
        }

        for (idx, part) in self.parts_requested.iter().enumerate() {
            if part.part_number.trim().is_empty() {
                return Err(Error::InvalidPart(format!(
                    "part {} has an empty part number",
                    idx
                )));
            }
            if part.quantity == 0 {
                return Err(Error::InvalidPart(format!(
                    "part {} ({}) has zero quantity",
                    idx, part.part_number
                )));
            }
        }

        Ok(())
    }
}
