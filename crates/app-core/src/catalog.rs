//! Static catalog of real-world objects offered for scale comparison.

use crate::constants::WORLD_UNITS_PER_METER;
use glam::Vec3;
use thiserror::Error;

/// A real-world reference object with physical dimensions in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonObject {
    pub id: &'static str,
    pub title: &'static str,
    pub height_m: f32,
    pub width_m: f32,
    pub depth_m: f32,
}

impl ComparisonObject {
    /// Dimensions converted to world units (width, height, depth).
    pub fn world_size(&self) -> Vec3 {
        Vec3::new(
            self.width_m * WORLD_UNITS_PER_METER,
            self.height_m * WORLD_UNITS_PER_METER,
            self.depth_m * WORLD_UNITS_PER_METER,
        )
    }
}

pub const CATALOG: &[ComparisonObject] = &[
    ComparisonObject {
        id: "human",
        title: "Average person",
        height_m: 1.75,
        width_m: 0.5,
        depth_m: 0.3,
    },
    ComparisonObject {
        id: "car",
        title: "Family car",
        height_m: 1.45,
        width_m: 1.8,
        depth_m: 4.5,
    },
    ComparisonObject {
        id: "bus",
        title: "Double-decker bus",
        height_m: 4.4,
        width_m: 2.5,
        depth_m: 11.2,
    },
    ComparisonObject {
        id: "container",
        title: "Shipping container",
        height_m: 2.6,
        width_m: 2.4,
        depth_m: 12.2,
    },
    ComparisonObject {
        id: "house",
        title: "Two-story house",
        height_m: 8.0,
        width_m: 10.0,
        depth_m: 12.0,
    },
    ComparisonObject {
        id: "boeing-747",
        title: "Boeing 747",
        height_m: 19.4,
        width_m: 68.4,
        depth_m: 70.6,
    },
    ComparisonObject {
        id: "statue-of-liberty",
        title: "Statue of Liberty",
        height_m: 93.0,
        width_m: 17.0,
        depth_m: 17.0,
    },
    ComparisonObject {
        id: "big-ben",
        title: "Big Ben",
        height_m: 96.0,
        width_m: 12.0,
        depth_m: 12.0,
    },
    ComparisonObject {
        id: "eiffel-tower",
        title: "Eiffel Tower",
        height_m: 330.0,
        width_m: 125.0,
        depth_m: 125.0,
    },
    ComparisonObject {
        id: "empire-state",
        title: "Empire State Building",
        height_m: 443.0,
        width_m: 129.0,
        depth_m: 57.0,
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown comparison object id: {0}")]
    UnknownId(String),
}

/// Look up a catalog entry by id.
pub fn find(id: &str) -> Result<&'static ComparisonObject, CatalogError> {
    CATALOG
        .iter()
        .find(|o| o.id == id)
        .ok_or_else(|| CatalogError::UnknownId(id.to_string()))
}
