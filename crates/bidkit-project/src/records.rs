//! Persistence record shapes
//!
//! The room record mirrors the stored document layer field for field,
//! camelCase included. Derived square footage is serialized for read
//! convenience but never trusted on load; rooms recompute from their
//! inputs.

use crate::aggregator::EstimateProject;
use bidkit_core::{Dimension, Error, Result, RoomId};
use bidkit_rooms::{Opening, OpeningPreset, Room, RoomShape, WallSegment};
use serde::{Deserialize, Serialize};

/// L-shape dimensions as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LShapeRecord {
    pub main_length_feet: u32,
    pub main_length_inches: u32,
    pub main_width_feet: u32,
    pub main_width_inches: u32,
    pub ext_length_feet: u32,
    pub ext_length_inches: u32,
    pub ext_width_feet: u32,
    pub ext_width_inches: u32,
}

/// One custom wall run as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWallRecord {
    pub length_feet: u32,
    pub length_inches: u32,
}

/// One door or window as persisted.
///
/// Preset openings also carry their resolved inches so readers need not
/// know the preset table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<OpeningPreset>,
    pub width_inches: f64,
    pub height_inches: f64,
    pub quantity: u32,
}

impl From<&Opening> for OpeningRecord {
    fn from(opening: &Opening) -> Self {
        let (width_inches, height_inches) = opening.size_inches();
        let preset = match opening.size {
            bidkit_rooms::OpeningSize::Preset(p) => Some(p),
            bidkit_rooms::OpeningSize::Custom { .. } => None,
        };
        Self {
            preset,
            width_inches,
            height_inches,
            quantity: opening.quantity,
        }
    }
}

impl From<&OpeningRecord> for Opening {
    fn from(record: &OpeningRecord) -> Self {
        match record.preset {
            Some(preset) => Opening::preset(preset, record.quantity),
            None => Opening::custom(record.width_inches, record.height_inches, record.quantity),
        }
    }
}

/// A room as the persistence layer stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: RoomId,
    #[serde(default)]
    pub name: String,
    /// "rectangular", "l_shape", or "custom"
    pub shape: String,
    pub length_feet: u32,
    pub length_inches: u32,
    pub width_feet: u32,
    pub width_inches: u32,
    pub height_feet: u32,
    pub height_inches: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l_shape_dimensions: Option<LShapeRecord>,
    #[serde(default)]
    pub custom_walls: Vec<CustomWallRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ceiling_sqft: Option<f64>,
    #[serde(default)]
    pub doors: Vec<OpeningRecord>,
    #[serde(default)]
    pub windows: Vec<OpeningRecord>,
    pub sort_order: u32,
    /// Derived, recomputable; stored for read convenience only
    #[serde(default)]
    pub wall_sqft: f64,
    #[serde(default)]
    pub ceiling_sqft: f64,
    #[serde(default)]
    pub openings_sqft: f64,
    #[serde(default)]
    pub total_sqft: f64,
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        let (length, width) = match room.shape() {
            RoomShape::Rectangular { length, width } => (*length, *width),
            _ => (Dimension::default(), Dimension::default()),
        };
        let l_shape_dimensions = match room.shape() {
            RoomShape::LShape {
                main_length,
                main_width,
                ext_length,
                ext_width,
            } => Some(LShapeRecord {
                main_length_feet: main_length.feet,
                main_length_inches: main_length.inches,
                main_width_feet: main_width.feet,
                main_width_inches: main_width.inches,
                ext_length_feet: ext_length.feet,
                ext_length_inches: ext_length.inches,
                ext_width_feet: ext_width.feet,
                ext_width_inches: ext_width.inches,
            }),
            _ => None,
        };
        let (custom_walls, custom_ceiling_sqft) = match room.shape() {
            RoomShape::Custom { walls, ceiling_sqft } => (
                walls
                    .iter()
                    .map(|w| CustomWallRecord {
                        length_feet: w.length.feet,
                        length_inches: w.length.inches,
                    })
                    .collect(),
                Some(*ceiling_sqft),
            ),
            _ => (Vec::new(), None),
        };
        let areas = room.areas();

        Self {
            id: room.id,
            name: room.name.clone(),
            shape: room.shape().kind_name().to_string(),
            length_feet: length.feet,
            length_inches: length.inches,
            width_feet: width.feet,
            width_inches: width.inches,
            height_feet: room.height().feet,
            height_inches: room.height().inches,
            l_shape_dimensions,
            custom_walls,
            custom_ceiling_sqft,
            doors: room.doors().iter().map(OpeningRecord::from).collect(),
            windows: room.windows().iter().map(OpeningRecord::from).collect(),
            sort_order: room.sort_order,
            wall_sqft: areas.wall_sqft,
            ceiling_sqft: areas.ceiling_sqft,
            openings_sqft: areas.openings_sqft,
            total_sqft: areas.total_sqft,
        }
    }
}

impl TryFrom<&RoomRecord> for Room {
    type Error = Error;

    fn try_from(record: &RoomRecord) -> Result<Room> {
        let shape = match record.shape.as_str() {
            "rectangular" => RoomShape::Rectangular {
                length: Dimension::new(record.length_feet, record.length_inches),
                width: Dimension::new(record.width_feet, record.width_inches),
            },
            "l_shape" => {
                let dims = record.l_shape_dimensions.ok_or_else(|| {
                    Error::other(format!(
                        "room {} is l_shape but has no lShapeDimensions",
                        record.id
                    ))
                })?;
                RoomShape::LShape {
                    main_length: Dimension::new(dims.main_length_feet, dims.main_length_inches),
                    main_width: Dimension::new(dims.main_width_feet, dims.main_width_inches),
                    ext_length: Dimension::new(dims.ext_length_feet, dims.ext_length_inches),
                    ext_width: Dimension::new(dims.ext_width_feet, dims.ext_width_inches),
                }
            }
            "custom" => RoomShape::Custom {
                walls: record
                    .custom_walls
                    .iter()
                    .map(|w| WallSegment {
                        length: Dimension::new(w.length_feet, w.length_inches),
                    })
                    .collect(),
                ceiling_sqft: record.custom_ceiling_sqft.unwrap_or(0.0).max(0.0),
            },
            other => {
                return Err(Error::other(format!("unknown room shape: {}", other)));
            }
        };

        let mut room = Room::restore(
            record.id,
            record.name.clone(),
            shape,
            Dimension::new(record.height_feet, record.height_inches),
            record.sort_order,
        );
        for door in &record.doors {
            room.add_door(Opening::from(door));
        }
        for window in &record.windows {
            room.add_window(Opening::from(window));
        }
        Ok(room)
    }
}

impl EstimateProject {
    /// Replace the project's rooms with loaded records and resynchronize.
    pub fn import_rooms(&mut self, records: &[RoomRecord]) -> Result<()> {
        let mut rooms = records
            .iter()
            .map(Room::try_from)
            .collect::<Result<Vec<_>>>()?;
        rooms.sort_by_key(|r| r.sort_order);
        self.replace_rooms(rooms);
        Ok(())
    }

    /// Serialize every room for persistence.
    pub fn export_rooms(&self) -> Vec<RoomRecord> {
        self.rooms().iter().map(RoomRecord::from).collect()
    }
}
