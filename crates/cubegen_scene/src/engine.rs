//! # In-Memory Scene Engine
//!
//! A host for the cook protocol that materializes the generated scene as an
//! owned tree. Each visit cooks against a [`SceneVisit`] adapter; children
//! created by the visit are cooked recursively, sibling subtrees in parallel
//! on the rayon pool.
//!
//! Determinism: child results are merged in creation order, so the produced
//! tree is identical whatever the thread scheduling.

use cubegen_attr::{Attr, AttrGroup};
use rayon::prelude::*;

use crate::cook::{cook, CookInterface};

/// A node in the generated scene description.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Name of this location within its parent.
    pub name: String,
    /// Result attributes recorded by this location's visit.
    pub attrs: AttrGroup,
    /// Child locations, in creation order.
    pub children: Vec<Location>,
}

impl Location {
    /// Total number of locations in this subtree, including itself.
    #[must_use]
    pub fn location_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Self::location_count)
            .sum::<usize>()
    }
}

/// A validation failure reported while cooking one location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookReport {
    /// Path of the location whose visit reported the error.
    pub path: String,
    /// The user-facing message.
    pub message: String,
}

/// The expanded scene: a location tree plus every report raised on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph {
    /// The scene root. Its children are the first encoded hierarchy level.
    pub root: Location,
    /// Reports collected across all visits, in pre-order position.
    pub reports: Vec<CookReport>,
}

impl SceneGraph {
    /// Expands a scene from root-level op arguments.
    ///
    /// Cooks the root visit and recursively cooks every created child.
    /// Sibling subtrees are independent by construction and expand on rayon
    /// worker threads.
    #[must_use]
    pub fn expand(op_args: &AttrGroup) -> Self {
        let (root, reports) = expand_visit(String::new(), "root".to_string(), op_args, true);
        tracing::info!(
            locations = root.location_count(),
            reports = reports.len(),
            "scene expansion complete"
        );
        Self { root, reports }
    }

    /// Finds a location by path, e.g. `"/world/geo/cube_0"`.
    ///
    /// The root itself is `"/"`; path segments are decoded location names.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Location> {
        let mut current = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.children.iter().find(|child| child.name == segment)?;
        }
        Some(current)
    }

    /// Total number of locations in the scene, including the root.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.root.location_count()
    }
}

/// Adapter presenting one pending visit through the cook interface.
struct SceneVisit<'a> {
    at_root: bool,
    args: &'a AttrGroup,
    attrs: AttrGroup,
    pending: Vec<(String, AttrGroup)>,
    errors: Vec<String>,
    descend: bool,
}

impl CookInterface for SceneVisit<'_> {
    fn at_root(&self) -> bool {
        self.at_root
    }

    fn op_arg(&self, name: &str) -> Option<&Attr> {
        self.args.get(name)
    }

    fn create_child(&mut self, name: &str, args: AttrGroup) {
        self.pending.push((name.to_string(), args));
    }

    fn stop_descent(&mut self) {
        self.descend = false;
    }

    fn set_attr(&mut self, name: &str, value: Attr) {
        self.attrs.set(name, value);
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Cooks one location and expands the children it created.
///
/// `path` is the location's own path (`""` for the root so that children
/// render as `/world`). Children a visit explicitly creates always cook;
/// `stop_descent` concerns traversal of pre-existing children, of which an
/// in-memory expansion has none.
fn expand_visit(
    path: String,
    name: String,
    args: &AttrGroup,
    at_root: bool,
) -> (Location, Vec<CookReport>) {
    let mut visit = SceneVisit {
        at_root,
        args,
        attrs: AttrGroup::new(),
        pending: Vec::new(),
        errors: Vec::new(),
        descend: true,
    };
    cook(&mut visit);
    if !visit.descend {
        tracing::trace!(path = %path, "descent stopped");
    }

    let mut reports: Vec<CookReport> = visit
        .errors
        .into_iter()
        .map(|message| CookReport {
            path: if path.is_empty() { "/".to_string() } else { path.clone() },
            message,
        })
        .collect();

    let expanded: Vec<(Location, Vec<CookReport>)> = visit
        .pending
        .into_par_iter()
        .map(|(child_name, child_args)| {
            let child_path = format!("{path}/{child_name}");
            expand_visit(child_path, child_name, &child_args, false)
        })
        .collect();

    let mut children = Vec::with_capacity(expanded.len());
    for (child, child_reports) in expanded {
        children.push(child);
        reports.extend(child_reports);
    }

    (
        Location {
            name,
            attrs: visit.attrs,
            children,
        },
        reports,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubegen_attr::GroupBuilder;

    #[test]
    fn test_find_resolves_paths() {
        let args = GroupBuilder::new()
            .set("c.world.c.geo.a.numberOfCubes", Attr::Int(1))
            .build();
        let scene = SceneGraph::expand(&args);

        assert!(scene.find("/").is_some());
        assert!(scene.find("/world").is_some());
        assert!(scene.find("/world/geo").is_some());
        assert!(scene.find("/world/geo/cube_0").is_some());
        assert!(scene.find("/world/geo/cube_1").is_none());
        assert!(scene.find("/city").is_none());
    }

    #[test]
    fn test_reports_carry_offending_path() {
        // Malformed encoding two levels down: 'c' group with two entries.
        let args = GroupBuilder::new()
            .set("c.world.c.geo.a.numberOfCubes", Attr::Int(1))
            .set("c.world.c.sky.a.numberOfCubes", Attr::Int(1))
            .build();
        let scene = SceneGraph::expand(&args);

        assert_eq!(scene.reports.len(), 1);
        assert_eq!(scene.reports[0].path, "/world");
        assert_eq!(scene.reports[0].message, "Unsupported attributes convention.");
        // The offending subtree produced no children.
        assert!(scene.find("/world").is_some_and(|loc| loc.children.is_empty()));
    }

    #[test]
    fn test_location_count_covers_whole_tree() {
        let args = GroupBuilder::new()
            .set("c.world.a.numberOfCubes", Attr::Int(2))
            .build();
        let scene = SceneGraph::expand(&args);

        // root + world + 2 cubes
        assert_eq!(scene.location_count(), 4);
        let world = scene.find("/world").expect("world location");
        assert_eq!(world.location_count(), 3);
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let args = GroupBuilder::new()
            .set("c.world.c.geo.a.numberOfCubes", Attr::Int(64))
            .set("c.world.c.geo.a.maxRotation", Attr::Float(180.0))
            .build();
        assert_eq!(SceneGraph::expand(&args), SceneGraph::expand(&args));
    }
}
