//! Error handling for BidKit
//!
//! Two concerns produce errors:
//! - Project errors (identity lookups against rooms, openings, lines)
//! - Profile errors (loading/saving the contractor profile)
//!
//! Invalid numeric input is not an error at this level: mutation boundaries
//! reject it and keep the previous value. All error types use `thiserror`.

use crate::types::{AddonId, EntryId, OpeningId, RoomId};
use thiserror::Error;

/// Project error type
///
/// Identity lookups that miss. The engines themselves never fail: a missing
/// rate falls back to a hardcoded default and a missing engine contributes
/// zero to the combined total.
#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    /// Room id not present in the project
    #[error("Room not found: {id}")]
    RoomNotFound {
        /// The room id that was not found.
        id: RoomId,
    },

    /// Opening id not present in the room
    #[error("Opening not found: {id}")]
    OpeningNotFound {
        /// The opening id that was not found.
        id: OpeningId,
    },

    /// Addon id not present in the trade's addon list
    #[error("Addon not found: {id}")]
    AddonNotFound {
        /// The addon id that was not found.
        id: AddonId,
    },

    /// Priced entry (finish line, material selection) not present
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// The entry id that was not found.
        id: EntryId,
    },

    /// Sheet type not present in the hanging configuration
    #[error("Sheet type not configured: {kind}")]
    SheetNotConfigured {
        /// Display name of the sheet type.
        kind: String,
    },
}

/// Profile error type
///
/// Errors loading or saving the contractor profile. Computation never
/// depends on these: a missing profile falls back to catalog defaults.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No platform config directory available
    #[error("No configuration directory available")]
    NoConfigDir,

    /// Profile file could not be read
    #[error("Failed to read profile {path}: {reason}")]
    ReadFailed {
        /// The path that failed to read.
        path: String,
        /// The underlying reason.
        reason: String,
    },

    /// Profile file could not be written
    #[error("Failed to write profile {path}: {reason}")]
    WriteFailed {
        /// The path that failed to write.
        path: String,
        /// The underlying reason.
        reason: String,
    },

    /// Profile file is not valid JSON/TOML
    #[error("Invalid profile format: {reason}")]
    InvalidFormat {
        /// The parse failure.
        reason: String,
    },
}

/// Main error type for BidKit
#[derive(Error, Debug)]
pub enum Error {
    /// Project error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Profile error
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
