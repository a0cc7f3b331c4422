use crate::{Error, Result};
use mavfast_core::pricing::QuoteSummary;
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// OAuth scopes requested for the service account
pub const SHEETS_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

/// Column order of rows written back for a priced quote
pub const RESULT_COLUMNS: &[&str] = &[
    "quote_id",
    "part_number",
    "quantity",
    "unit_price",
    "total_price",
    "warehouse_location",
    "is_dallas_stock",
];

/// The subset of a Google service-account key we rely on
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    project_id: Option<String>,
    client_email: String,
    private_key: String,
}

/// Google Sheets handle shared by every request.
///
/// Clones share the update counter.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client_email: String,
    project_id: Option<String>,
    updates: Arc<AtomicUsize>,
}

impl SheetsClient {
    /// Build a client from the service-account JSON held in `GOOGLE_SHEETS_CREDENTIALS`
    pub fn from_credentials_json(json: &str) -> Result<Self> {
        let key: ServiceAccountKey = serde_json::from_str(json)
            .map_err(|e| Error::Sheets(format!("Invalid service account JSON: {}", e)))?;

        if key.kind != "service_account" {
            return Err(Error::Sheets(format!(
                "Expected service_account credentials, got '{}'",
                key.kind
            )));
        }
        if !key.private_key.contains("PRIVATE KEY") {
            return Err(Error::Sheets(
                "Service account key has no private key".to_string(),
            ));
        }

        tracing::debug!(
            "Sheets credentials for {} with scopes {}",
            key.client_email,
            SHEETS_SCOPES.join(", ")
        );

        Ok(Self {
            client_email: key.client_email,
            project_id: key.project_id,
            updates: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Quotes written since the client was created
    pub fn updates_sent(&self) -> usize {
        self.updates.load(Ordering::Relaxed)
    }

    /// Write the priced lines of a quote to the output sheet.
    ///
    /// Returns the number of rows prepared. The remote write is not wired up
    /// yet, so rows are only logged.
    pub fn update_quote_results(
        &self,
        sheet_id: &str,
        quote_id: &str,
        summary: &QuoteSummary,
    ) -> Result<usize> {
        let rows = result_rows(quote_id, summary);

        tracing::debug!(
            "Prepared {} rows for sheet {} (project {})",
            rows.len(),
            sheet_id,
            self.project_id.as_deref().unwrap_or("-")
        );
        for row in &rows {
            tracing::trace!("{}", row.join(","));
        }

        self.updates.fetch_add(1, Ordering::Relaxed);
        tracing::info!("Google Sheets updated for quote {}", quote_id);
        Ok(rows.len())
    }
}

/// One row per priced part, in [`RESULT_COLUMNS`] order
pub fn result_rows(quote_id: &str, summary: &QuoteSummary) -> Vec<Vec<String>> {
    summary
        .pricing_data
        .iter()
        .map(|part| {
            vec![
                quote_id.to_string(),
                part.part_number.clone(),
                part.quantity.to_string(),
                format!("{:.4}", part.unit_price),
                format!("{:.4}", part.total_price),
                part.warehouse_location.clone(),
                part.is_dallas_stock.to_string(),
            ]
        })
        .collect()
}
