//! Profile persistence
//!
//! Locates the profile file in the platform configuration directory and
//! handles the missing-file case: no profile on disk means catalog defaults,
//! never an error.

use crate::profile::ContractorProfile;
use bidkit_core::{ProfileError, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Directory name under the platform config root.
const APP_DIR: &str = "bidkit";
/// Profile file name.
const PROFILE_FILE: &str = "profile.json";

/// Manages where the contractor profile lives on disk.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore;

impl ProfileStore {
    /// Platform config directory for the application.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR))
            .ok_or_else(|| ProfileError::NoConfigDir.into())
    }

    /// Full path of the profile file.
    pub fn profile_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(PROFILE_FILE))
    }

    /// Create the config directory if it does not exist.
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir).map_err(|e| ProfileError::WriteFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(dir)
    }

    /// Load the stored profile, falling back to defaults when no file
    /// exists yet. A file that exists but fails to parse is an error.
    pub fn load_or_default() -> Result<ContractorProfile> {
        let path = Self::profile_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no profile on disk, using defaults");
            return Ok(ContractorProfile::default());
        }
        let profile = ContractorProfile::load_from_file(&path)?;
        info!(path = %path.display(), "loaded contractor profile");
        Ok(profile)
    }

    /// Save the profile to its standard location.
    pub fn save(profile: &ContractorProfile) -> Result<()> {
        Self::ensure_config_dir()?;
        let path = Self::profile_path()?;
        profile.save_to_file(&path)?;
        info!(path = %path.display(), "saved contractor profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let mut profile = ContractorProfile::default();
        profile.company.name = "Acme Drywall".to_string();
        profile.rates.painting.hourly_rate = 62.5;
        profile.save_to_file(&path).unwrap();

        let loaded = ContractorProfile::load_from_file(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_round_trip_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");

        let mut profile = ContractorProfile::default();
        profile.company.license_number = "C-12345".to_string();
        profile.save_to_file(&path).unwrap();

        let loaded = ContractorProfile::load_from_file(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.yaml");
        let profile = ContractorProfile::default();
        assert!(profile.save_to_file(&path).is_err());
        assert!(ContractorProfile::load_from_file(&path).is_err());
    }

    #[test]
    fn test_garbage_file_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ContractorProfile::load_from_file(&path).is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"company": {"name": "Acme"}}"#).unwrap();

        let loaded = ContractorProfile::load_from_file(&path).unwrap();
        assert_eq!(loaded.company.name, "Acme");
        assert_eq!(loaded.rates, bidkit_core::RateBook::default());
        assert_eq!(
            loaded.estimate_validity_days,
            bidkit_core::DEFAULT_VALIDITY_DAYS
        );
    }
}
