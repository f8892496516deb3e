//! Contractor profile
//!
//! Business identity and rate defaults, stored per machine. The profile is
//! optional everywhere: a project built without one prices from the catalog
//! defaults in the rate book.

use bidkit_core::{Error, ProfileError, RateBook, Result, DEFAULT_VALIDITY_DAYS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Business identity shown on estimates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// Company name as printed on estimates
    pub name: String,
    /// Contact person
    pub contact: String,
    /// Phone number, free-form
    pub phone: String,
    /// Email address, free-form
    pub email: String,
    /// Street address lines
    pub address: String,
    /// Contractor license number, when licensed
    pub license_number: String,
}

/// Complete contractor profile
///
/// Aggregates company identity and the rate book, and provides file I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractorProfile {
    /// Business identity
    pub company: CompanyInfo,
    /// Rate defaults the pricing engines draw from
    pub rates: RateBook,
    /// How many days estimates stay valid
    pub estimate_validity_days: i64,
}

impl Default for ContractorProfile {
    fn default() -> Self {
        Self {
            company: CompanyInfo::default(),
            rates: RateBook::default(),
            estimate_validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

impl ContractorProfile {
    /// Create a profile with catalog defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a profile from file (JSON or TOML, by extension).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ProfileError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let profile: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ProfileError::InvalidFormat {
                reason: e.to_string(),
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| ProfileError::InvalidFormat {
                reason: e.to_string(),
            })?
        } else {
            return Err(Error::from(ProfileError::InvalidFormat {
                reason: "profile file must be .json or .toml".to_string(),
            }));
        };

        profile.validate()?;
        Ok(profile)
    }

    /// Save the profile to file (JSON or TOML, by extension).
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self).map_err(|e| ProfileError::InvalidFormat {
                reason: e.to_string(),
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| ProfileError::InvalidFormat {
                reason: e.to_string(),
            })?
        } else {
            return Err(Error::from(ProfileError::InvalidFormat {
                reason: "profile file must be .json or .toml".to_string(),
            }));
        };

        std::fs::write(path, content).map_err(|e| ProfileError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Validate the profile's numeric fields.
    pub fn validate(&self) -> Result<()> {
        if self.estimate_validity_days <= 0 {
            return Err(Error::other("Estimate validity must be > 0 days"));
        }
        if self.rates.hanging.waste_factor < 0.0 {
            return Err(Error::other("Waste factor must be >= 0"));
        }
        for (rate, name) in [
            (self.rates.hanging.hourly_rate, "hanging"),
            (self.rates.finishing.hourly_rate, "finishing"),
            (self.rates.painting.hourly_rate, "painting"),
        ] {
            if rate < 0.0 {
                return Err(Error::other(format!("{} hourly rate must be >= 0", name)));
            }
        }
        Ok(())
    }
}
