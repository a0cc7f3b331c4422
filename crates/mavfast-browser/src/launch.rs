/// User agent presented to the supplier site
pub const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Chrome flags for running inside a small cloud container
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub headless: bool,
    pub window_size: (u32, u32),
    pub user_agent: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            user_agent: DESKTOP_USER_AGENT.to_string(),
        }
    }
}

impl LaunchOptions {
    /// Build Chrome command-line arguments
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.headless {
            args.push("--headless".to_string());
        }

        args.extend(
            [
                "--no-sandbox",
                "--disable-dev-shm-usage",
                "--disable-gpu",
                "--disable-extensions",
                "--disable-plugins",
                "--disable-images",
                "--disable-javascript",
            ]
            .iter()
            .map(|a| a.to_string()),
        );

        let (width, height) = self.window_size;
        args.push(format!("--window-size={},{}", width, height));
        args.push(format!("--user-agent={}", self.user_agent));

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_are_container_friendly() {
        let args = LaunchOptions::default().args();

        assert!(args.contains(&"--headless".to_string()));
        assert!(args.contains(&"--no-sandbox".to_string()));
        assert!(args.contains(&"--disable-dev-shm-usage".to_string()));
        assert!(args.contains(&"--disable-gpu".to_string()));
        assert!(args.contains(&"--disable-javascript".to_string()));
        assert!(args.contains(&"--window-size=1920,1080".to_string()));
        assert!(args.iter().any(|a| a.starts_with("--user-agent=Mozilla/5.0")));
    }

    #[test]
    fn test_headed_mode_drops_headless_flag() {
        let options = LaunchOptions {
            headless: false,
            ..LaunchOptions::default()
        };

        assert!(!options.args().iter().any(|a| a == "--headless"));
    }
}
