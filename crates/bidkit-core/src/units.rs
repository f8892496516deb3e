//! Unit conversion utilities
//!
//! Room dimensions are entered as whole feet plus inches (0-11) and converted
//! to decimal feet before any area math. Opening sizes are entered in inches
//! and converted to square feet. Parsing helpers reject invalid text so the
//! caller can keep the previous value instead of propagating NaN.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Square inches per square foot.
pub const SQIN_PER_SQFT: f64 = 144.0;

/// A length entered as whole feet plus inches.
///
/// Inches are normalized into the 0-11 range on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Whole feet component
    pub feet: u32,
    /// Inches component (0-11)
    pub inches: u32,
}

impl Dimension {
    /// Create a dimension, carrying excess inches into feet.
    pub fn new(feet: u32, inches: u32) -> Self {
        Self {
            feet: feet + inches / 12,
            inches: inches % 12,
        }
    }

    /// Whole feet only.
    pub fn feet(feet: u32) -> Self {
        Self { feet, inches: 0 }
    }

    /// Decimal feet for area math.
    pub fn as_feet(&self) -> f64 {
        self.feet as f64 + self.inches as f64 / 12.0
    }

    /// True when both components are zero.
    pub fn is_zero(&self) -> bool {
        self.feet == 0 && self.inches == 0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inches == 0 {
            write!(f, "{}'", self.feet)
        } else {
            write!(f, "{}' {}\"", self.feet, self.inches)
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    /// Parse `12`, `12.5`, `12'6"`, or `12 6` as feet(+inches).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Ok(Dimension::default());
        }

        if input.contains('\'') {
            let cleaned = input.replace('"', "");
            let parts: Vec<&str> = cleaned.splitn(2, '\'').collect();
            let feet = parts[0]
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid feet component: {}", parts[0]))?;
            let inches = match parts.get(1).map(|p| p.trim()) {
                Some("") | None => 0,
                Some(rest) => rest
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid inches component: {}", rest))?,
            };
            if inches > 11 {
                return Err(format!("Inches out of range: {}", inches));
            }
            return Ok(Dimension::new(feet, inches));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [feet, inches] => {
                let feet = feet
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid feet component: {}", feet))?;
                let inches = inches
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid inches component: {}", inches))?;
                if inches > 11 {
                    return Err(format!("Inches out of range: {}", inches));
                }
                Ok(Dimension::new(feet, inches))
            }
            [single] => {
                let decimal_feet = single
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid dimension: {}", single))?;
                if !decimal_feet.is_finite() || decimal_feet < 0.0 {
                    return Err(format!("Dimension out of range: {}", single));
                }
                Ok(from_decimal_feet(decimal_feet))
            }
            _ => Err(format!("Invalid dimension: {}", input)),
        }
    }
}

/// Split decimal feet into a feet+inches pair, rounding to the nearest inch.
pub fn from_decimal_feet(value: f64) -> Dimension {
    let clamped = value.max(0.0);
    let total_inches = (clamped * 12.0).round() as u32;
    Dimension::new(total_inches / 12, total_inches % 12)
}

/// Convert a width x height pair in inches to square feet.
pub fn inches_to_sqft(width_in: f64, height_in: f64) -> f64 {
    (width_in.max(0.0) * height_in.max(0.0)) / SQIN_PER_SQFT
}

/// Parse a non-negative quantity or rate from text.
///
/// Invalid or negative input is an error; callers retain the previous value.
pub fn parse_non_negative(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }
    let value = input
        .parse::<f64>()
        .map_err(|_| format!("Invalid number: {}", input))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("Value out of range: {}", input));
    }
    Ok(value)
}

/// Clamp a numeric input to be non-negative, mapping non-finite values to 0.
pub fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
