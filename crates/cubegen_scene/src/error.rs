//! # Scene Generation Errors
//!
//! Two kinds of failure exist and they never mix: encoding problems found
//! while cooking a location are *reported* through the cook interface and
//! stay local to that subtree, while configuration problems surface as
//! ordinary `Result` errors before any traversal starts.

use thiserror::Error;

/// Errors raised while configuring or cooking a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A hierarchy-encoding group did not contain exactly one child entry.
    ///
    /// The display text is the fixed message surfaced to the user; the
    /// traversal of the offending subtree halts but siblings are unaffected.
    #[error("Unsupported attributes convention.")]
    MalformedHierarchy,

    /// A base location that is not an absolute path under the scene root.
    #[error("invalid base location {0:?}: expected an absolute path under /root")]
    InvalidLocation(String),

    /// The generator config file failed to parse.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// The generator config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scene generation operations.
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_hierarchy_message_is_fixed() {
        // The exact text is part of the user-facing contract.
        assert_eq!(
            SceneError::MalformedHierarchy.to_string(),
            "Unsupported attributes convention."
        );
    }
}
