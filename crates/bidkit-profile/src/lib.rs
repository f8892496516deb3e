//! # BidKit Profile
//!
//! Contractor profile for BidKit: company identity, rate defaults, and
//! estimate validity, persisted as JSON or TOML in the platform
//! configuration directory.

pub mod persistence;
pub mod profile;

pub use persistence::ProfileStore;
pub use profile::{CompanyInfo, ContractorProfile};
