//! # Op-Argument Encoding
//!
//! Builds the nested argument tree that drives a scene expansion. The base
//! location `/root/world/geo/cubes` becomes group entries interleaved with
//! the `"c"` child marker, `c.world.c.geo.c.cubes`, with the fan-out group
//! `"a"` attached at the deepest level. The implicit `root` segment is
//! dropped; the root location always exists.
//!
//! Interleaving a marker group per level leaves room to attach further
//! per-level parameters later without changing the encoding convention.

use cubegen_attr::{encode_name, Attr, AttrGroup, GroupBuilder};

use crate::error::{SceneError, SceneResult};

/// Encodes a base location and fan-out parameters into op arguments.
///
/// `location` must be an absolute path starting with `/root`. Passing
/// `max_rotation: None` omits the `maxRotation` attribute entirely; the
/// generator then falls back to its default of `0.0`.
///
/// Segments containing reserved characters are escaped, so locations like
/// `/root/world/geo.main` survive the encode/decode round trip.
///
/// # Errors
///
/// Returns [`SceneError::InvalidLocation`] if the path is not absolute or
/// does not start at `/root`.
pub fn encode_base_location(
    location: &str,
    number_of_cubes: i64,
    max_rotation: Option<f64>,
) -> SceneResult<AttrGroup> {
    let segments = base_segments(location)?;

    let mut hierarchy = String::new();
    for segment in &segments {
        if !hierarchy.is_empty() {
            hierarchy.push('.');
        }
        hierarchy.push_str("c.");
        hierarchy.push_str(&encode_name(segment));
    }
    let fanout_key = |attr: &str| {
        if hierarchy.is_empty() {
            format!("a.{attr}")
        } else {
            format!("{hierarchy}.a.{attr}")
        }
    };

    let mut builder =
        GroupBuilder::new().set(&fanout_key("numberOfCubes"), Attr::Int(number_of_cubes));
    if let Some(rotation) = max_rotation {
        builder = builder.set(&fanout_key("maxRotation"), Attr::Float(rotation));
    }
    Ok(builder.build())
}

/// Splits a `/root/...` location into the segments below the root.
fn base_segments(location: &str) -> SceneResult<Vec<&str>> {
    let invalid = || SceneError::InvalidLocation(location.to_string());

    let relative = location.strip_prefix('/').ok_or_else(invalid)?;
    let mut segments: Vec<&str> = relative.split('/').collect();
    if segments.first() != Some(&"root") {
        return Err(invalid());
    }
    segments.remove(0);
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(invalid());
    }
    Ok(segments)
}
