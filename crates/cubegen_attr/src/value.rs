//! # Attribute Values
//!
//! The tagged union carried by every entry of an attribute tree. Scalars and
//! flattened arrays cover the wire-level payloads (indices, rotations, point
//! data); groups provide the nesting that encodes hierarchies.

use crate::group::AttrGroup;

/// A single value in an attribute tree.
///
/// Arrays are stored flattened with an explicit tuple size, so a list of 3D
/// points is one `FloatArray` with `tuple_size == 3` rather than a list of
/// lists. This matches how geometry payloads are consumed downstream.
#[derive(Clone, Debug, PartialEq)]
pub enum Attr {
    /// A single integer.
    Int(i64),
    /// A single floating point number.
    Float(f64),
    /// A UTF-8 string.
    Str(String),
    /// A flattened integer array.
    IntArray {
        /// The flattened values.
        values: Vec<i64>,
        /// Number of values per logical element.
        tuple_size: usize,
    },
    /// A flattened floating point array.
    FloatArray {
        /// The flattened values.
        values: Vec<f64>,
        /// Number of values per logical element.
        tuple_size: usize,
    },
    /// A nested group of named attributes.
    Group(AttrGroup),
}

impl Attr {
    /// Returns the integer value, if this is an `Int`.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float value, if this is a `Float`.
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string value, if this is a `Str`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the nested group, if this is a `Group`.
    #[inline]
    #[must_use]
    pub const fn as_group(&self) -> Option<&AttrGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the integer value, or `default` if this is not an `Int`.
    ///
    /// Wrong types fall back to the default rather than erroring; optional
    /// parameters are simply absent or malformed, never fatal.
    #[inline]
    #[must_use]
    pub const fn int_or(&self, default: i64) -> i64 {
        match self.as_int() {
            Some(value) => value,
            None => default,
        }
    }

    /// Returns the float value, or `default` if this is not a `Float`.
    #[inline]
    #[must_use]
    pub const fn float_or(&self, default: f64) -> f64 {
        match self.as_float() {
            Some(value) => value,
            None => default,
        }
    }

    /// Creates a flattened float array attribute.
    #[inline]
    #[must_use]
    pub fn float_array(values: Vec<f64>, tuple_size: usize) -> Self {
        Self::FloatArray { values, tuple_size }
    }

    /// Creates a flattened integer array attribute.
    #[inline]
    #[must_use]
    pub fn int_array(values: Vec<i64>, tuple_size: usize) -> Self {
        Self::IntArray { values, tuple_size }
    }
}
