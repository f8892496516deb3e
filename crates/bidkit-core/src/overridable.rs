//! Override-vs-default value wrapper.
//!
//! The same pattern recurs across sheets, finish lines, materials, and
//! addons: a catalog/profile default that a user-supplied value can supersede
//! without altering the default itself. `Overridable` implements it once.

use serde::{Deserialize, Serialize};

/// A value with a catalog/profile default and an optional user override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overridable<T> {
    default: T,
    #[serde(rename = "override", default = "none", skip_serializing_if = "Option::is_none")]
    override_value: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T: Copy> Overridable<T> {
    /// Wrap a default with no override set.
    pub fn new(default: T) -> Self {
        Self {
            default,
            override_value: None,
        }
    }

    /// The value in effect: the override when set, otherwise the default.
    pub fn effective(&self) -> T {
        self.override_value.unwrap_or(self.default)
    }

    /// The underlying default.
    pub fn default_value(&self) -> T {
        self.default
    }

    /// The override, if one is set.
    pub fn override_value(&self) -> Option<T> {
        self.override_value
    }

    /// Whether an override is currently in effect.
    pub fn has_override(&self) -> bool {
        self.override_value.is_some()
    }

    /// Set or clear the override. `None` reverts to the default.
    pub fn set_override(&mut self, value: Option<T>) {
        self.override_value = value;
    }

    /// Clear the override, reverting to the default.
    pub fn clear_override(&mut self) {
        self.override_value = None;
    }

    /// Replace the default without touching any override.
    pub fn set_default(&mut self, default: T) {
        self.default = default;
    }
}
