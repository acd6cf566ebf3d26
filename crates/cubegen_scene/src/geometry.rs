//! # Cube Geometry Tables
//!
//! Constant point, vertex-list and start-index data for the unit cube shared
//! by every generated leaf. The tables live in the binary's read-only data;
//! building a geometry payload copies them into attribute arrays but never
//! recomputes them.

use cubegen_attr::{Attr, AttrGroup, GroupBuilder};

/// Positions of the 8 cube corners, flattened as XYZ triples.
pub const CUBE_POINTS: [f64; 24] = [
    -0.5, -0.5, 0.5, //
    0.5, -0.5, 0.5, //
    -0.5, 0.5, 0.5, //
    0.5, 0.5, 0.5, //
    -0.5, 0.5, -0.5, //
    0.5, 0.5, -0.5, //
    -0.5, -0.5, -0.5, //
    0.5, -0.5, -0.5,
];

/// Corner indices of the 6 faces, flattened as quads.
pub const CUBE_VERTEX_LIST: [i64; 24] = [
    2, 3, 1, 0, //
    4, 5, 3, 2, //
    6, 7, 5, 4, //
    0, 1, 7, 6, //
    3, 5, 7, 1, //
    4, 2, 0, 6,
];

/// Start offset of each face in the vertex list, plus the terminating bound.
pub const CUBE_START_INDEX: [i64; 7] = [0, 4, 8, 12, 16, 20, 24];

/// Builds the `geometry` attribute group for one cube leaf.
///
/// The payload is identical for every leaf: `point.P` holds the corner
/// positions as triples, `poly.vertexList` and `poly.startIndex` describe
/// the quad faces.
#[must_use]
pub fn build_geometry() -> AttrGroup {
    GroupBuilder::new()
        .set("point.P", Attr::float_array(CUBE_POINTS.to_vec(), 3))
        .set(
            "poly.vertexList",
            Attr::int_array(CUBE_VERTEX_LIST.to_vec(), 1),
        )
        .set(
            "poly.startIndex",
            Attr::int_array(CUBE_START_INDEX.to_vec(), 1),
        )
        .build()
}
