//! # Scene Expansion Integration Tests
//!
//! Drives the full pipeline: encode a base location, expand the scene graph,
//! and verify every generated location against the generation contract.

use cubegen_attr::{Attr, GroupBuilder};
use cubegen_scene::{
    build_geometry, build_transform, encode_base_location, GeneratorConfig, SceneGraph,
};

#[test]
fn test_end_to_end_two_cube_scene() {
    let args = GroupBuilder::new()
        .set("c.world.c.geo.a.numberOfCubes", Attr::Int(2))
        .set("c.world.c.geo.a.maxRotation", Attr::Float(90.0))
        .build();
    let scene = SceneGraph::expand(&args);

    assert!(scene.reports.is_empty());
    // root, world, geo, cube_0, cube_1
    assert_eq!(scene.location_count(), 5);

    // Intermediate locations exist and carry no leaf payload.
    for path in ["/world", "/world/geo"] {
        let location = scene.find(path).expect(path);
        assert!(location.attrs.is_empty(), "{path} must not carry attributes");
    }

    let cube_0 = scene.find("/world/geo/cube_0").expect("cube_0");
    assert_eq!(cube_0.attrs.get("type"), Some(&Attr::Str("polymesh".into())));
    assert_eq!(
        cube_0.attrs.get("xform"),
        Some(&Attr::Group(build_transform(0, 0.0)))
    );
    assert_eq!(
        cube_0.attrs.lookup("xform.translate"),
        Some(&Attr::float_array(vec![0.0, 0.0, 0.0], 3))
    );
    assert_eq!(
        cube_0.attrs.lookup("xform.scale"),
        Some(&Attr::float_array(vec![0.5, 0.5, 0.5], 3))
    );

    let cube_1 = scene.find("/world/geo/cube_1").expect("cube_1");
    assert_eq!(
        cube_1.attrs.lookup("xform.rotateX"),
        Some(&Attr::float_array(vec![45.0, 1.0, 0.0, 0.0], 4))
    );
    assert_eq!(
        cube_1.attrs.lookup("xform.translate"),
        Some(&Attr::float_array(vec![0.75, 0.0, 0.0], 3))
    );
    assert_eq!(
        cube_1.attrs.lookup("xform.scale"),
        Some(&Attr::float_array(vec![1.0, 1.0, 1.0], 3))
    );

    // Geometry is byte-identical across leaves.
    assert_eq!(cube_0.attrs.get("geometry"), cube_1.attrs.get("geometry"));
    assert_eq!(
        cube_0.attrs.get("geometry"),
        Some(&Attr::Group(build_geometry()))
    );

    // Leaves are terminal.
    assert!(cube_0.children.is_empty());
    assert!(cube_1.children.is_empty());
}

#[test]
fn test_depth_matches_encoded_levels() {
    for depth in 1usize..6 {
        let segments: Vec<String> = (0..depth).map(|level| format!("level{level}")).collect();
        let location = format!("/root/{}", segments.join("/"));
        let args = encode_base_location(&location, 1, None).expect("valid location");
        let scene = SceneGraph::expand(&args);

        // One location per encoded level, plus root and the single cube.
        assert_eq!(scene.location_count(), depth + 2);
        let base_path = format!("/{}", segments.join("/"));
        let base = scene.find(&base_path).expect("base location");
        assert_eq!(base.children.len(), 1);
        assert_eq!(base.children[0].name, "cube_0");
    }
}

#[test]
fn test_fanout_rotations_are_linear_fractions() {
    let count = 8;
    let max_rotation = 120.0;
    let args =
        encode_base_location("/root/world", count, Some(max_rotation)).expect("valid location");
    let scene = SceneGraph::expand(&args);

    for index in 0..count {
        let cube = scene
            .find(&format!("/world/cube_{index}"))
            .expect("cube location");
        let expected = max_rotation * index as f64 / count as f64;
        assert_eq!(
            cube.attrs.lookup("xform.rotateX"),
            Some(&Attr::float_array(vec![expected, 1.0, 0.0, 0.0], 4))
        );
    }
    // First cube is always unrotated.
    let first = scene.find("/world/cube_0").expect("cube_0");
    assert_eq!(
        first.attrs.lookup("xform.rotateX"),
        Some(&Attr::float_array(vec![0.0, 1.0, 0.0, 0.0], 4))
    );
}

#[test]
fn test_zero_cubes_yields_empty_base() {
    let args = encode_base_location("/root/world/geo", 0, None).expect("valid location");
    let scene = SceneGraph::expand(&args);

    assert!(scene.reports.is_empty());
    let geo = scene.find("/world/geo").expect("base location");
    assert!(geo.children.is_empty());
}

#[test]
fn test_escaped_segments_decode_into_location_names() {
    let args = encode_base_location("/root/geo.main/assets", 1, None).expect("valid location");
    let scene = SceneGraph::expand(&args);

    // The dotted segment is one location, not two.
    let base = scene.find("/geo.main/assets").expect("base location");
    assert_eq!(base.children.len(), 1);
}

#[test]
fn test_malformed_level_reports_and_stops() {
    // Two child markers at the second level.
    let args = GroupBuilder::new()
        .set("c.world.c.geo.a.numberOfCubes", Attr::Int(4))
        .set("c.world.c.sky.a.numberOfCubes", Attr::Int(4))
        .build();
    let scene = SceneGraph::expand(&args);

    assert_eq!(scene.reports.len(), 1);
    assert_eq!(scene.reports[0].message, "Unsupported attributes convention.");
    // No cubes anywhere below the malformed level.
    assert_eq!(scene.location_count(), 2);
}

#[test]
fn test_config_drives_expansion() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        location = "/root/world/geo/cubes"
        number_of_cubes = 3
        rotate_cubes = true
        max_rotation = 60.0
        "#,
    )
    .expect("valid config");
    let scene = SceneGraph::expand(&config.op_args().expect("valid location"));

    assert_eq!(scene.location_count(), 7);
    let cube_2 = scene.find("/world/geo/cubes/cube_2").expect("cube_2");
    assert_eq!(
        cube_2.attrs.lookup("xform.rotateX"),
        Some(&Attr::float_array(vec![40.0, 1.0, 0.0, 0.0], 4))
    );
    assert!(!cube_2
        .attrs
        .lookup("xform")
        .and_then(Attr::as_group)
        .expect("xform group")
        .inherit());
}
