//! # Per-Location Cook Protocol
//!
//! One visit, one decision. The cook inspects the arguments forwarded to the
//! current location and either descends one hierarchy level, fans out cube
//! children, or synthesizes a leaf. Argument groups are checked in that
//! order and the first match wins; later groups are never consulted.
//!
//! The host boundary is the [`CookInterface`] trait. Anything able to answer
//! "am I the root", hand out named arguments, create children and record
//! attributes can drive the generator; the in-memory engine in
//! [`crate::engine`] is one such host.

use cubegen_attr::{decode_name, Attr, AttrGroup, GroupBuilder};

use crate::error::SceneError;
use crate::geometry::build_geometry;
use crate::xform::build_transform;

/// Argument key encoding one level of the base location hierarchy.
pub const CHILD_GROUP: &str = "c";
/// Argument key carrying the fan-out parameters at the base location.
pub const FANOUT_GROUP: &str = "a";
/// Argument key carrying per-cube leaf parameters.
pub const LEAF_GROUP: &str = "leaf";

/// Attribute value marking a generated leaf as a polygon mesh.
pub const POLYMESH_TYPE: &str = "polymesh";

/// Host-side contract for a single location visit.
///
/// Each method maps to one operation the traversal engine exposes to the
/// generator; the generator holds no state of its own between visits.
pub trait CookInterface {
    /// Whether the current location is the scene-graph root.
    fn at_root(&self) -> bool;

    /// Reads a named argument attached to this visit.
    fn op_arg(&self, name: &str) -> Option<&Attr>;

    /// Creates a child location, forwarding `args` to its visit.
    fn create_child(&mut self, name: &str, args: AttrGroup);

    /// Stops traversal descending past this location.
    fn stop_descent(&mut self);

    /// Records a result attribute on the current location.
    fn set_attr(&mut self, name: &str, value: Attr);

    /// Surfaces a validation failure to the user without aborting the
    /// overall traversal.
    fn report_error(&mut self, message: &str);
}

/// Fan-out parameters read from the `"a"` group at the base location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanoutParams {
    /// Number of cube children to create.
    pub count: i64,
    /// Rotation of the last cube; earlier cubes get a linear fraction.
    pub max_rotation: f64,
}

impl FanoutParams {
    /// Reads fan-out parameters, defaulting absent or mistyped fields.
    #[must_use]
    pub fn from_group(group: &AttrGroup) -> Self {
        Self {
            count: group.get("numberOfCubes").map_or(0, |a| a.int_or(0)),
            max_rotation: group.get("maxRotation").map_or(0.0, |a| a.float_or(0.0)),
        }
    }

    /// Rotation fraction for cube `index`: `max_rotation * index / count`.
    ///
    /// Only meaningful for `0 <= index < count`; the fan-out loop never
    /// evaluates this with `count == 0`.
    #[must_use]
    pub fn rotation_for(&self, index: i64) -> f64 {
        self.max_rotation * index as f64 / self.count as f64
    }
}

/// Leaf parameters read from the `"leaf"` group at a cube location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafParams {
    /// Index of this cube within its fan-out.
    pub index: i64,
    /// Rotation angle applied about the X axis.
    pub rotation: f64,
}

impl LeafParams {
    /// Reads leaf parameters, defaulting absent or mistyped fields.
    #[must_use]
    pub fn from_group(group: &AttrGroup) -> Self {
        Self {
            index: group.get("index").map_or(0, |a| a.int_or(0)),
            rotation: group.get("rotation").map_or(0.0, |a| a.float_or(0.0)),
        }
    }
}

/// Decodes the single child entry of a hierarchy group.
///
/// The entry name is unescaped into the child location name; its value is
/// the argument group forwarded to that child. A non-group value forwards
/// empty arguments, which makes the child a no-op location.
fn decode_child(group: &AttrGroup) -> Result<(String, AttrGroup), SceneError> {
    if group.len() != 1 {
        return Err(SceneError::MalformedHierarchy);
    }
    let (raw_name, value) = group.entry(0).ok_or(SceneError::MalformedHierarchy)?;
    let name = decode_name(raw_name);
    let args = value.as_group().cloned().unwrap_or_default();
    Ok((name, args))
}

/// Builds the argument group attached to the `index`-th cube child.
fn leaf_args(index: i64, rotation: f64) -> AttrGroup {
    GroupBuilder::new()
        .set("leaf.index", Attr::Int(index))
        .set("leaf.rotation", Attr::Float(rotation))
        .build()
}

/// Runs the generator for one location visit.
///
/// Implements the per-visit state machine: root suppression, hierarchy
/// descent, fan-out, leaf synthesis. Absence of every recognized argument
/// group means no work at this location and is not an error.
pub fn cook<I: CookInterface>(interface: &mut I) {
    if interface.at_root() {
        // The root itself never becomes a cube, but its arguments may still
        // start a descent.
        interface.stop_descent();
    }

    // Stage 1: hierarchy descent. Exactly one child entry is decoded and the
    // remaining encoding is forwarded untouched.
    let descent = match interface.op_arg(CHILD_GROUP) {
        Some(Attr::Group(group)) => Some(decode_child(group)),
        _ => None,
    };
    if let Some(step) = descent {
        match step {
            Ok((name, child_args)) => {
                tracing::debug!(child = %name, "descending hierarchy level");
                interface.create_child(&name, child_args);
            }
            Err(err) => {
                interface.report_error(&err.to_string());
                interface.stop_descent();
            }
        }
        return;
    }

    // Stage 2: fan-out at the base location.
    let fanout = match interface.op_arg(FANOUT_GROUP) {
        Some(Attr::Group(group)) => Some(FanoutParams::from_group(group)),
        _ => None,
    };
    if let Some(params) = fanout {
        // count <= 0 creates nothing; the rotation fraction is never
        // evaluated so there is no division by zero.
        tracing::debug!(count = params.count, "fanning out cube children");
        for index in 0..params.count {
            let name = format!("cube_{index}");
            interface.create_child(&name, leaf_args(index, params.rotation_for(index)));
        }
        return;
    }

    // Stage 3: leaf synthesis.
    let leaf = match interface.op_arg(LEAF_GROUP) {
        Some(Attr::Group(group)) => Some(LeafParams::from_group(group)),
        _ => None,
    };
    if let Some(params) = leaf {
        interface.set_attr("geometry", Attr::Group(build_geometry()));
        interface.set_attr(
            "xform",
            Attr::Group(build_transform(params.index, params.rotation)),
        );
        interface.set_attr("type", Attr::Str(POLYMESH_TYPE.to_string()));
        interface.stop_descent();
    }
}
