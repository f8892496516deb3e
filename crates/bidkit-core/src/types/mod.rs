//! Identity and trade types shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identity of a room within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Generate a fresh room id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a door or window within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningId(pub Uuid);

impl OpeningId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OpeningId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OpeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a priced entry (finish line, material selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an addon line.
///
/// Catalog addons reuse the stable catalog id so a toggle can find the line
/// again; custom addons get a generated id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddonId(pub String);

impl AddonId {
    /// Id for a catalog addon line.
    pub fn catalog(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Generated id for a custom addon line.
    pub fn custom() -> Self {
        Self(format!("custom-{}", Uuid::new_v4()))
    }
}

impl fmt::Display for AddonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three trades an estimate can cover.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Hanging drywall sheets
    Hanging,
    /// Taping and finishing
    Finishing,
    /// Painting
    Painting,
}

impl TradeType {
    /// All trades in display order.
    pub const ALL: [TradeType; 3] = [TradeType::Hanging, TradeType::Finishing, TradeType::Painting];
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hanging => write!(f, "Hanging"),
            Self::Finishing => write!(f, "Finishing"),
            Self::Painting => write!(f, "Painting"),
        }
    }
}

impl FromStr for TradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hanging" => Ok(Self::Hanging),
            "finishing" => Ok(Self::Finishing),
            "painting" => Ok(Self::Painting),
            _ => Err(format!("Unknown trade: {}", s)),
        }
    }
}
