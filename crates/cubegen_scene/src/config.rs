//! # Generator Configuration
//!
//! TOML-backed node parameters for a cube generator, loaded once at startup
//! and turned into encoded op arguments. Mirrors the parameter set a host
//! node exposes: base location, cube count, and an optional maximum
//! rotation behind an enable flag.
//!
//! ```toml
//! location = "/root/world/geo/cubes"
//! number_of_cubes = 20
//! rotate_cubes = true
//! max_rotation = 90.0
//! ```

use std::fs;
use std::path::Path;

use cubegen_attr::AttrGroup;
use serde::Deserialize;

use crate::args::encode_base_location;
use crate::error::SceneResult;

/// Node parameters for one cube generator.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GeneratorConfig {
    /// Base scene-graph location under which cubes are generated.
    pub location: String,
    /// Number of cubes to generate at the base location.
    pub number_of_cubes: i64,
    /// Whether the cubes are rotated at all. When `false`, `max_rotation`
    /// is ignored and not even encoded into the op arguments.
    #[serde(default)]
    pub rotate_cubes: bool,
    /// Rotation of the last cube; earlier cubes get a linear fraction.
    #[serde(default)]
    pub max_rotation: f64,
}

impl GeneratorConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SceneError::Config`] on malformed TOML or missing
    /// required fields.
    pub fn from_toml_str(text: &str) -> SceneResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SceneError::Io`] if the file cannot be read, or
    /// [`crate::SceneError::Config`] if it fails to parse.
    pub fn load(path: &Path) -> SceneResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Encodes this config into root-level op arguments.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SceneError::InvalidLocation`] if the configured
    /// location is not an absolute path under `/root`.
    pub fn op_args(&self) -> SceneResult<AttrGroup> {
        let max_rotation = self.rotate_cubes.then_some(self.max_rotation);
        encode_base_location(&self.location, self.number_of_cubes, max_rotation)
    }
}
