//! # Leaf Transform Synthesis
//!
//! Per-cube transform derived from the cube index and its precomputed
//! rotation. Spacing grows quadratically with the index so that the linearly
//! growing cubes never overlap along the row.

use cubegen_attr::{Attr, AttrGroup, GroupBuilder};

/// Builds the `xform` attribute group for the `index`-th cube.
///
/// * `translate` - `(0.25 * (index + 2) * index, 0, 0)`
/// * `rotateX` - `rotation` about the X axis; `rotateY`/`rotateZ` are kept
///   as inert zero rotations about their axes for structural symmetry
/// * `scale` - uniform `(index + 1) * 0.5`
///
/// The group has inheritance disabled: the transform is absolute, never
/// composed with ancestor transforms.
#[must_use]
pub fn build_transform(index: i64, rotation: f64) -> AttrGroup {
    let offset = 0.25 * (index as f64 + 2.0) * index as f64;
    let scale = (index as f64 + 1.0) * 0.5;

    GroupBuilder::new()
        .set("translate", Attr::float_array(vec![offset, 0.0, 0.0], 3))
        .set(
            "rotateX",
            Attr::float_array(vec![rotation, 1.0, 0.0, 0.0], 4),
        )
        .set("rotateY", Attr::float_array(vec![0.0, 0.0, 1.0, 0.0], 4))
        .set("rotateZ", Attr::float_array(vec![0.0, 0.0, 0.0, 1.0], 4))
        .set("scale", Attr::float_array(vec![scale, scale, scale], 3))
        .set_group_inherit(false)
        .build()
}
