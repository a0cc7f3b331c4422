use crate::{ChromeFinder, Error, LaunchOptions, ProfileManager, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use tokio::task::JoinHandle;

/// One browser bound to one quote request.
///
/// Callers must `close` the session once the workflow finishes, whether it
/// succeeded or not.
#[async_trait]
pub trait SupplierSession: Send {
    /// Navigate to the supplier login page
    async fn open_login(&mut self, url: &str) -> Result<()>;

    /// Shut the browser down and release its profile
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Opens a fresh [`SupplierSession`] per request
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn open(&self) -> Result<Box<dyn SupplierSession>>;
}

/// Launches a local headless Chrome over CDP
pub struct ChromeSessionFactory {
    chrome_path: Option<PathBuf>,
    options: LaunchOptions,
}

impl ChromeSessionFactory {
    pub fn new(chrome_path: Option<PathBuf>) -> Self {
        Self {
            chrome_path,
            options: LaunchOptions::default(),
        }
    }

    fn browser_config(&self, chrome: PathBuf, profile: &ProfileManager) -> Result<BrowserConfig> {
        // with_head() stops chromiumoxide adding its own headless flag; ours is in args()
        BrowserConfig::builder()
            .chrome_executable(chrome)
            .user_data_dir(profile.path())
            .with_head()
            .args(self.options.args())
            .build()
            .map_err(Error::Launch)
    }
}

#[async_trait]
impl SessionFactory for ChromeSessionFactory {
    async fn open(&self) -> Result<Box<dyn SupplierSession>> {
        let chrome = ChromeFinder::new(self.chrome_path.clone()).find()?;
        let profile = ProfileManager::temporary()?;
        let config = self.browser_config(chrome.clone(), &profile)?;

        tracing::info!("Launching Chrome from {}", chrome.display());

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::Launch(e.to_string()))?;

        // The handler stream drives CDP; commands stall unless it is polled
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        tracing::info!("Chrome session started");

        Ok(Box::new(ChromeSession {
            browser,
            handler_task,
            page: None,
            _profile: profile,
        }))
    }
}

/// A running Chrome process plus the task pumping its CDP connection
pub struct ChromeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Option<Page>,
    _profile: ProfileManager,
}

#[async_trait]
impl SupplierSession for ChromeSession {
    async fn open_login(&mut self, url: &str) -> Result<()> {
        tracing::debug!("Opening supplier login page {}", url);

        let navigation = |e: chromiumoxide::error::CdpError| Error::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let page = self.browser.new_page(url).await.map_err(navigation)?;
        let landed = page.url().await.map_err(navigation)?.unwrap_or_default();
        tracing::info!("Supplier page loaded: {}", landed);

        self.page = Some(page);
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let mut session = self;
        session.page = None;
        session.browser.close().await?;
        if let Err(e) = session.browser.wait().await {
            tracing::debug!("Chrome did not report exit status: {}", e);
        }
        session.handler_task.abort();

        tracing::info!("Chrome session closed");
        Ok(())
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}
