use crate::sheets::SheetsClient;
use crate::{Config, Error, Result};
use mavfast_browser::{ChromeSessionFactory, SessionFactory, SupplierSession};
use mavfast_core::pricing::{self, PriceSource, QuoteSummary};
use mavfast_core::quote::QuoteRequest;
use serde::Serialize;
use std::time::Instant;
use url::Url;

pub const API_VERSION: &str = "1.0";

/// Progress flags reported back to the workflow tool
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionInfo {
    pub login_successful: bool,
    pub quote_submitted: bool,
    pub data_extracted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutomationSuccess {
    pub success: bool,
    pub quote_id: String,
    #[serde(flatten)]
    pub summary: QuoteSummary,
    pub processing_notes: String,
    pub brighton_session_info: SessionInfo,
    pub processing_time_seconds: f64,
    pub processed_at: String,
    pub api_version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutomationFailure {
    pub success: bool,
    pub error: String,
    pub quote_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
}

impl AutomationFailure {
    fn new(quote_id: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            quote_id: quote_id.to_string(),
            processing_time_seconds: None,
            processed_at: None,
        }
    }

    fn timed(mut self, started: Instant) -> Self {
        self.processing_time_seconds = Some(started.elapsed().as_secs_f64());
        self.processed_at = Some(chrono::Utc::now().to_rfc3339());
        self
    }
}

/// Result of one automation run, serialized as-is into the HTTP response
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AutomationOutcome {
    Completed(Box<AutomationSuccess>),
    Failed(AutomationFailure),
}

impl AutomationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AutomationOutcome::Completed(_))
    }
}

/// Runs the supplier workflow for a quote, one browser session per call
pub struct AutomationHandler {
    sessions: Box<dyn SessionFactory>,
    prices: Box<dyn PriceSource>,
    sheets: Option<SheetsClient>,
    output_sheet_id: Option<String>,
    login_url: Url,
}

impl AutomationHandler {
    pub fn new(
        sessions: Box<dyn SessionFactory>,
        prices: Box<dyn PriceSource>,
        login_url: Url,
    ) -> Self {
        Self {
            sessions,
            prices,
            sheets: None,
            output_sheet_id: None,
            login_url,
        }
    }

    /// Handler backed by a local Chrome and, when configured, Google Sheets
    pub fn from_config(config: &Config, prices: Box<dyn PriceSource>) -> Result<Self> {
        let sessions = ChromeSessionFactory::new(config.chrome_bin.clone());
        let mut handler = Self::new(Box::new(sessions), prices, config.login_url()?);

        match config.sheets_credentials.as_deref() {
            Some(json) => match SheetsClient::from_credentials_json(json) {
                Ok(client) => {
                    tracing::info!("Google Sheets client initialized for {}", client.client_email());
                    handler = handler.with_sheets(client, config.output_sheet_id.clone());
                }
                Err(e) => tracing::error!("Google Sheets setup failed: {}", e),
            },
            None => tracing::warn!("No Google Sheets credentials provided"),
        }

        Ok(handler)
    }

    pub fn with_sheets(mut self, client: SheetsClient, output_sheet_id: Option<String>) -> Self {
        self.sheets = Some(client);
        self.output_sheet_id = output_sheet_id;
        self
    }

    pub fn has_sheets_client(&self) -> bool {
        self.sheets.is_some()
    }

    /// Price a quote through a fresh supplier session.
    ///
    /// Never fails outright: every error becomes an [`AutomationOutcome::Failed`].
    pub async fn process(&self, quote: &QuoteRequest) -> AutomationOutcome {
        let started = Instant::now();
        let quote_id = quote.quote_id.as_str();

        tracing::info!("Starting Brighton Best automation for quote: {}", quote_id);

        if quote.parts_requested.is_empty() {
            tracing::warn!("Quote {} has no parts", quote_id);
            return AutomationOutcome::Failed(AutomationFailure::new(
                quote_id,
                "No parts provided for processing",
            ));
        }

        let mut session = match self.sessions.open().await {
            Ok(session) => session,
            Err(e) => {
                if e.is_launch_failure() {
                    tracing::error!("Chrome WebDriver setup failed: {}", e);
                } else {
                    tracing::error!("Chrome started but the session is unusable: {}", e);
                }
                return AutomationOutcome::Failed(AutomationFailure::new(
                    quote_id,
                    "Failed to initialize Chrome WebDriver",
                ));
            }
        };

        let workflow = self
            .run_workflow(session.as_mut(), quote)
            .await
            .map_err(|e| Error::Workflow(e.to_string()));

        // Released whatever the workflow returned
        match session.close().await {
            Ok(()) => tracing::info!("Browser session closed"),
            Err(e) => tracing::warn!("Failed to close browser session: {}", e),
        }

        let summary = match workflow {
            Ok(summary) => summary,
            Err(e) => {
                let message = format!("Brighton Best automation failed: {}", e);
                tracing::error!("{}", message);
                return AutomationOutcome::Failed(
                    AutomationFailure::new(quote_id, message).timed(started),
                );
            }
        };

        if let (Some(sheets), Some(sheet_id)) = (&self.sheets, &self.output_sheet_id)
            && let Err(e) = sheets.update_quote_results(sheet_id, quote_id, &summary)
        {
            tracing::error!("Failed to update Google Sheets: {}", e);
        }

        tracing::info!("Brighton Best automation completed for {}", quote_id);

        AutomationOutcome::Completed(Box::new(AutomationSuccess {
            success: true,
            quote_id: quote_id.to_string(),
            summary,
            processing_notes: "Mock processing completed successfully".to_string(),
            brighton_session_info: SessionInfo {
                login_successful: true,
                quote_submitted: true,
                data_extracted: true,
            },
            processing_time_seconds: started.elapsed().as_secs_f64(),
            processed_at: chrono::Utc::now().to_rfc3339(),
            api_version: API_VERSION,
        }))
    }

    async fn run_workflow(
        &self,
        session: &mut dyn SupplierSession,
        quote: &QuoteRequest,
    ) -> Result<QuoteSummary> {
        tracing::info!(
            "Processing {} parts for quote {}",
            quote.parts_requested.len(),
            quote.quote_id
        );

        session.open_login(self.login_url.as_str()).await?;

        // TODO: drive login, quote creation and bulk part paste on the supplier
        // page, then read prices from it instead of the configured price source.
        let summary = pricing::aggregate(&quote.parts_requested, self.prices.as_ref())?;

        Ok(summary)
    }
}
