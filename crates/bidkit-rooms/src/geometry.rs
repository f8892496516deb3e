//! Room area calculation
//!
//! Pure functions from a room's shape, dimensions, and openings to square
//! footage. No caching and no side effects; callers re-invoke on every
//! mutation.
//!
//! Wall square footage is stored gross (no opening deduction). The net
//! wall figure deducts openings and floors at zero, and the room total is
//! net walls plus ceiling.

use crate::room::{Room, RoomShape};

/// Derived square footage for one room.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct RoomAreas {
    /// Gross wall area, before opening deduction
    pub wall_sqft: f64,
    /// Ceiling area
    pub ceiling_sqft: f64,
    /// Total area of doors and windows
    pub openings_sqft: f64,
    /// Net walls plus ceiling
    pub total_sqft: f64,
}

impl RoomAreas {
    /// Wall area after deducting openings, floored at zero.
    pub fn net_wall_sqft(&self) -> f64 {
        (self.wall_sqft - self.openings_sqft).max(0.0)
    }

    /// Gross walls plus ceiling, no opening deduction.
    pub fn gross_total_sqft(&self) -> f64 {
        self.wall_sqft + self.ceiling_sqft
    }
}

/// Compute all derived areas for a room.
pub fn compute_areas(room: &Room) -> RoomAreas {
    let height = room.height().as_feet();
    let (wall_sqft, ceiling_sqft) = match room.shape() {
        RoomShape::Rectangular { length, width } => {
            let l = length.as_feet();
            let w = width.as_feet();
            (2.0 * (l + w) * height, l * w)
        }
        RoomShape::LShape {
            main_length,
            main_width,
            ext_length,
            ext_width,
        } => {
            // The two rectangles are measured independently; the shared
            // corner at the joint is counted in both. Known characteristic
            // of the estimating convention, not corrected here.
            let ml = main_length.as_feet();
            let mw = main_width.as_feet();
            let el = ext_length.as_feet();
            let ew = ext_width.as_feet();
            (
                2.0 * (ml + mw) * height + 2.0 * (el + ew) * height,
                ml * mw + el * ew,
            )
        }
        RoomShape::Custom { walls, ceiling_sqft } => {
            let wall: f64 = walls.iter().map(|w| w.length.as_feet() * height).sum();
            (wall, ceiling_sqft.max(0.0))
        }
    };

    let openings_sqft: f64 = room
        .doors()
        .iter()
        .chain(room.windows().iter())
        .map(|o| o.total_sqft())
        .sum();

    let net_wall = (wall_sqft - openings_sqft).max(0.0);

    RoomAreas {
        wall_sqft,
        ceiling_sqft,
        openings_sqft,
        total_sqft: net_wall + ceiling_sqft,
    }
}
