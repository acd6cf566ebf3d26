//! # Attribute Groups
//!
//! Ordered, name-keyed containers of [`Attr`] values plus the dotted-path
//! [`GroupBuilder`] used to assemble nested parameter trees.
//!
//! Groups preserve insertion order. Hierarchy decoding addresses children by
//! index, so a group's entry order is part of its meaning, not an
//! implementation detail.

use crate::value::Attr;

/// An ordered collection of named attributes.
///
/// Carries an `inherit` flag (default `true`). A group written as a transform
/// disables it to mark the transform as absolute rather than composed with
/// ancestor transforms.
#[derive(Clone, Debug, PartialEq)]
pub struct AttrGroup {
    entries: Vec<(String, Attr)>,
    inherit: bool,
}

impl AttrGroup {
    /// Creates an empty group with inheritance enabled.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            inherit: true,
        }
    }

    /// Number of direct child entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the group has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this group composes with ancestor values.
    #[inline]
    #[must_use]
    pub const fn inherit(&self) -> bool {
        self.inherit
    }

    /// Enables or disables inheritance for this group.
    #[inline]
    pub fn set_inherit(&mut self, inherit: bool) {
        self.inherit = inherit;
    }

    /// Sets a direct child entry, replacing any existing entry of that name.
    ///
    /// New names are appended, preserving insertion order.
    pub fn set(&mut self, name: impl Into<String>, value: Attr) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the direct child with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attr> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Returns the child entry at `index`, in insertion order.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<(&str, &Attr)> {
        self.entries
            .get(index)
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over `(name, value)` entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Attr)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Resolves a dotted path (`"point.P"`) through nested groups.
    ///
    /// Path components are literal entry names; no unescaping is applied.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Attr> {
        let mut components = path.split('.');
        let first = components.next()?;
        let mut current = self.get(first)?;
        for component in components {
            current = current.as_group()?.get(component)?;
        }
        Some(current)
    }

    fn set_path(&mut self, components: &[&str], value: Attr) {
        let Some((head, rest)) = components.split_first() else {
            return;
        };
        if rest.is_empty() {
            self.set(*head, value);
            return;
        }
        // Descend into an existing group child, or make one (clobbering any
        // non-group entry of the same name, the way dotted setters do).
        let needs_group = !matches!(self.get(head), Some(Attr::Group(_)));
        if needs_group {
            self.set(*head, Attr::Group(Self::new()));
        }
        if let Some((_, Attr::Group(child))) =
            self.entries.iter_mut().find(|(n, _)| n == head)
        {
            child.set_path(rest, value);
        }
    }
}

impl Default for AttrGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an [`AttrGroup`] from dotted-path assignments.
///
/// Intermediate groups are created on demand, so
/// `set("c.world.a.numberOfCubes", ...)` produces the full nested hierarchy
/// in one call. Path components are literal entry names; callers escape
/// segment names that contain the delimiter first.
#[derive(Clone, Debug, Default)]
pub struct GroupBuilder {
    root: AttrGroup,
}

impl GroupBuilder {
    /// Creates an empty builder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attribute at a dotted path, creating intermediate groups.
    #[must_use]
    pub fn set(mut self, path: &str, value: Attr) -> Self {
        let components: Vec<&str> = path.split('.').collect();
        self.root.set_path(&components, value);
        self
    }

    /// Sets the inheritance flag of the group being built.
    #[must_use]
    pub fn set_group_inherit(mut self, inherit: bool) -> Self {
        self.root.set_inherit(inherit);
        self
    }

    /// Finishes the builder and returns the group.
    #[inline]
    #[must_use]
    pub fn build(self) -> AttrGroup {
        self.root
    }
}
