//! Room model
//!
//! A room is a shape (rectangular, L-shape, or custom wall segments), a
//! shared ceiling height, and a set of door/window openings. The derived
//! square-footage fields are recomputed on every mutation and never edited
//! by hand.

use crate::geometry::{self, RoomAreas};
use bidkit_core::units::inches_to_sqft;
use bidkit_core::{Dimension, OpeningId, RoomId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard door and window sizes offered as presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningPreset {
    /// 24" x 80" interior door
    Door24,
    /// 28" x 80" interior door
    Door28,
    /// 30" x 80" interior door
    Door30,
    /// 32" x 80" interior door
    Door32,
    /// 36" x 80" entry door
    Door36,
    /// 72" x 80" double door
    DoorDouble,
    /// 24" x 36" window
    Window24x36,
    /// 36" x 48" window
    Window36x48,
    /// 48" x 48" window
    Window48x48,
    /// 72" x 48" picture window
    Window72x48,
}

impl OpeningPreset {
    /// Width and height in inches.
    pub fn size_inches(&self) -> (f64, f64) {
        match self {
            Self::Door24 => (24.0, 80.0),
            Self::Door28 => (28.0, 80.0),
            Self::Door30 => (30.0, 80.0),
            Self::Door32 => (32.0, 80.0),
            Self::Door36 => (36.0, 80.0),
            Self::DoorDouble => (72.0, 80.0),
            Self::Window24x36 => (24.0, 36.0),
            Self::Window36x48 => (36.0, 48.0),
            Self::Window48x48 => (48.0, 48.0),
            Self::Window72x48 => (72.0, 48.0),
        }
    }
}

impl fmt::Display for OpeningPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.size_inches();
        write!(f, "{}\" x {}\"", w, h)
    }
}

/// Size of an opening: a catalog preset or custom inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningSize {
    /// Standard size from the preset list
    Preset(OpeningPreset),
    /// Custom width x height in inches
    Custom { width_in: f64, height_in: f64 },
}

impl OpeningSize {
    /// Width and height in inches.
    pub fn size_inches(&self) -> (f64, f64) {
        match self {
            Self::Preset(p) => p.size_inches(),
            Self::Custom { width_in, height_in } => (width_in.max(0.0), height_in.max(0.0)),
        }
    }
}

/// A door or window deducted from wall square footage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Identity within the room
    pub id: OpeningId,
    /// Preset or custom size
    pub size: OpeningSize,
    /// Number of identical openings
    pub quantity: u32,
}

impl Opening {
    /// An opening with a preset size.
    pub fn preset(preset: OpeningPreset, quantity: u32) -> Self {
        Self {
            id: OpeningId::new(),
            size: OpeningSize::Preset(preset),
            quantity,
        }
    }

    /// An opening with a custom size in inches.
    pub fn custom(width_in: f64, height_in: f64, quantity: u32) -> Self {
        Self {
            id: OpeningId::new(),
            size: OpeningSize::Custom {
                width_in: width_in.max(0.0),
                height_in: height_in.max(0.0),
            },
            quantity,
        }
    }

    /// Square feet per single opening.
    pub fn sqft(&self) -> f64 {
        let (w, h) = self.size_inches();
        inches_to_sqft(w, h)
    }

    /// Square feet across the full quantity.
    pub fn total_sqft(&self) -> f64 {
        self.sqft() * self.quantity as f64
    }

    /// Width and height in inches.
    pub fn size_inches(&self) -> (f64, f64) {
        self.size.size_inches()
    }
}

/// One wall of a custom-shaped room. Height is shared room-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSegment {
    /// Length of this wall run
    pub length: Dimension,
}

/// The footprint of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RoomShape {
    /// Simple rectangle
    Rectangular { length: Dimension, width: Dimension },
    /// Main rectangle plus an extension rectangle.
    ///
    /// The two rectangles are measured independently; the joint between
    /// them is not de-overlapped.
    LShape {
        main_length: Dimension,
        main_width: Dimension,
        ext_length: Dimension,
        ext_width: Dimension,
    },
    /// Arbitrary wall runs with a manually supplied ceiling area.
    Custom {
        walls: Vec<WallSegment>,
        ceiling_sqft: f64,
    },
}

impl RoomShape {
    /// Short name for display and persistence.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rectangular { .. } => "rectangular",
            Self::LShape { .. } => "l_shape",
            Self::Custom { .. } => "custom",
        }
    }
}

/// A measured room with derived square footage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Identity within the project
    pub id: RoomId,
    /// Display name ("Master Bedroom")
    pub name: String,
    /// Footprint
    shape: RoomShape,
    /// Ceiling height, shared by every wall
    height: Dimension,
    /// Door openings
    doors: Vec<Opening>,
    /// Window openings
    windows: Vec<Opening>,
    /// Position within the project's room list
    pub sort_order: u32,
    /// Derived areas; recomputed on every mutation
    areas: RoomAreas,
}

impl Room {
    /// Create a room and compute its initial areas.
    pub fn new(name: impl Into<String>, shape: RoomShape, height: Dimension) -> Self {
        let mut room = Self {
            id: RoomId::new(),
            name: name.into(),
            shape,
            height,
            doors: Vec::new(),
            windows: Vec::new(),
            sort_order: 0,
            areas: RoomAreas::default(),
        };
        room.recompute();
        room
    }

    /// A rectangular room from whole-feet dimensions.
    pub fn rectangular(name: impl Into<String>, length: Dimension, width: Dimension, height: Dimension) -> Self {
        Self::new(name, RoomShape::Rectangular { length, width }, height)
    }

    /// Rebuild a room from persisted fields, recomputing derived areas.
    ///
    /// Persisted square footage is read convenience only; it is never
    /// trusted on load.
    pub fn restore(
        id: RoomId,
        name: impl Into<String>,
        shape: RoomShape,
        height: Dimension,
        sort_order: u32,
    ) -> Self {
        let mut room = Self::new(name, shape, height);
        room.id = id;
        room.sort_order = sort_order;
        room
    }

    /// Current footprint.
    pub fn shape(&self) -> &RoomShape {
        &self.shape
    }

    /// Replace the footprint.
    pub fn set_shape(&mut self, shape: RoomShape) {
        self.shape = shape;
        self.recompute();
    }

    /// Ceiling height.
    pub fn height(&self) -> Dimension {
        self.height
    }

    /// Replace the ceiling height.
    pub fn set_height(&mut self, height: Dimension) {
        self.height = height;
        self.recompute();
    }

    /// Door openings.
    pub fn doors(&self) -> &[Opening] {
        &self.doors
    }

    /// Window openings.
    pub fn windows(&self) -> &[Opening] {
        &self.windows
    }

    /// Add a door opening, returning its id.
    pub fn add_door(&mut self, opening: Opening) -> OpeningId {
        let id = opening.id;
        self.doors.push(opening);
        self.recompute();
        id
    }

    /// Add a window opening, returning its id.
    pub fn add_window(&mut self, opening: Opening) -> OpeningId {
        let id = opening.id;
        self.windows.push(opening);
        self.recompute();
        id
    }

    /// Update an opening in place. Returns false when the id is unknown.
    pub fn update_opening(&mut self, id: OpeningId, size: OpeningSize, quantity: u32) -> bool {
        let found = self
            .doors
            .iter_mut()
            .chain(self.windows.iter_mut())
            .find(|o| o.id == id);
        match found {
            Some(opening) => {
                opening.size = size;
                opening.quantity = quantity;
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Remove an opening. Returns false when the id is unknown.
    pub fn remove_opening(&mut self, id: OpeningId) -> bool {
        let before = self.doors.len() + self.windows.len();
        self.doors.retain(|o| o.id != id);
        self.windows.retain(|o| o.id != id);
        let removed = self.doors.len() + self.windows.len() < before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Derived areas, current as of the last mutation.
    pub fn areas(&self) -> &RoomAreas {
        &self.areas
    }

    /// Recompute derived areas from shape, dimensions, and openings.
    pub fn recompute(&mut self) {
        self.areas = geometry::compute_areas(self);
    }
}
