use crate::{Error, Result};
use std::path::Path;
use tempfile::TempDir;

/// Throwaway Chrome user-data directory, removed on drop
pub struct ProfileManager {
    dir: TempDir,
}

impl ProfileManager {
    pub fn temporary() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("mavfast-chrome-")
            .tempdir()
            .map_err(Error::Profile)?;
        tracing::debug!("Created Chrome profile at {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_profile_creates_and_cleans_up() {
        let profile = ProfileManager::temporary().unwrap();
        let path = profile.path().to_path_buf();

        assert!(path.is_dir());

        drop(profile);

        assert!(!path.exists());
    }
}
