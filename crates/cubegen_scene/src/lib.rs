//! # Cubegen Scene Generator
//!
//! Procedural scene-graph generation: a compact, hierarchical parameter
//! encoding is expanded into a named tree of locations, each leaf carrying
//! unit-cube geometry and an index-derived transform.
//!
//! ## How a scene grows
//!
//! Generation runs once per location, not once per scene. Every visit
//! inspects its own arguments and performs exactly one of three actions:
//!
//! 1. **Descend** - a `"c"` group encodes one more level of the base
//!    location path; create that single child and forward the remainder
//! 2. **Fan out** - an `"a"` group carries cube count and max rotation;
//!    create `cube_0..cube_{n-1}`, each with precomputed leaf parameters
//! 3. **Synthesize** - a `"leaf"` group carries `(index, rotation)`;
//!    populate this location with geometry, transform and type, then stop
//!
//! ## Concurrency
//!
//! Visits are pure functions of their forwarded arguments. Sibling subtrees
//! share nothing mutable, so the engine cooks them on rayon worker threads
//! and merges results in child order for deterministic output.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cubegen_scene::{encode_base_location, SceneGraph};
//!
//! let args = encode_base_location("/root/world/geo/cubes", 4, Some(90.0))?;
//! let scene = SceneGraph::expand(&args);
//! assert!(scene.find("/world/geo/cubes/cube_3").is_some());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod args;
pub mod config;
pub mod cook;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod xform;

pub use args::encode_base_location;
pub use config::GeneratorConfig;
pub use cook::{cook, CookInterface, FanoutParams, LeafParams};
pub use engine::{CookReport, Location, SceneGraph};
pub use error::{SceneError, SceneResult};
pub use geometry::{build_geometry, CUBE_POINTS, CUBE_START_INDEX, CUBE_VERTEX_LIST};
pub use xform::build_transform;
