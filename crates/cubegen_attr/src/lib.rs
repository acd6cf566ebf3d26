//! # Cubegen Attribute Model
//!
//! Tagged recursive value type for attribute trees, the data currency of the
//! scene generator. Parameters arrive as nested groups, results leave as
//! nested groups; this crate owns that representation.
//!
//! ## Design Principles
//!
//! 1. **Value semantics** - attributes are copied or moved between stages,
//!    never shared or aliased
//! 2. **Stable entry order** - group children keep insertion order, so index
//!    access is deterministic
//! 3. **Forgiving readers** - a missing or wrongly-typed scalar yields the
//!    caller's default, mirroring how the generator treats optional inputs
//!
//! ## Example
//!
//! ```rust,ignore
//! use cubegen_attr::{Attr, GroupBuilder};
//!
//! let args = GroupBuilder::new()
//!     .set("leaf.index", Attr::Int(3))
//!     .set("leaf.rotation", Attr::Float(45.0))
//!     .build();
//!
//! assert_eq!(args.lookup("leaf.index").and_then(Attr::as_int), Some(3));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod group;
pub mod name;
pub mod value;

pub use group::{AttrGroup, GroupBuilder};
pub use name::{decode_name, encode_name};
pub use value::Attr;
