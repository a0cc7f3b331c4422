use super::types::QuoteRequest;
use crate::Result;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct QuoteReader;

impl QuoteReader {
    /// Read and parse a quote document from the given path
    pub fn from_file(path: &Path) -> Result<QuoteRequest> {
        tracing::debug!("Reading quote file from: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let value: Value = serde_json::from_reader(reader)?;
        let quote = Self::from_value(value)?;

        tracing::info!(
            "Parsed quote {} with {} parts",
            quote.quote_id,
            quote.parts_requested.len()
        );

        Ok(quote)
    }

    /// Parse a quote document from a JSON string
    pub fn from_str(content: &str) -> Result<QuoteRequest> {
        tracing::debug!("Parsing quote from string");

        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Accepts both the request envelope (`{"quote_data": {...}}`) and a bare quote
    pub fn from_value(value: Value) -> Result<QuoteRequest> {
        let inner = match value {
            Value::Object(mut map) if map.contains_key("quote_data") => {
                map.remove("quote_data").unwrap_or(Value::Null)
            }
            other => other,
        };

        Ok(serde_json::from_value(inner)?)
    }
}
