//! Expands a cube generator config into a scene graph and prints the tree.
//!
//! Usage: `cubegen <config.toml>`

use std::env;
use std::path::Path;
use std::process::ExitCode;

use cubegen_attr::Attr;
use cubegen_scene::{GeneratorConfig, Location, SceneGraph};

fn main() -> ExitCode {
    let Some(config_path) = env::args().nth(1) else {
        eprintln!("usage: cubegen <config.toml>");
        return ExitCode::FAILURE;
    };

    let config = match GeneratorConfig::load(Path::new(&config_path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("cubegen: {err}");
            return ExitCode::FAILURE;
        }
    };

    let op_args = match config.op_args() {
        Ok(op_args) => op_args,
        Err(err) => {
            eprintln!("cubegen: {err}");
            return ExitCode::FAILURE;
        }
    };

    let scene = SceneGraph::expand(&op_args);

    println!("scene from {config_path} ({} locations)", scene.location_count());
    print_location(&scene.root, 0);

    for report in &scene.reports {
        eprintln!("cubegen: error at {}: {}", report.path, report.message);
    }

    ExitCode::SUCCESS
}

/// Prints one location line and recurses over its children.
fn print_location(location: &Location, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}/{}", location.name);

    if let Some(Attr::Str(kind)) = location.attrs.get("type") {
        line.push_str(&format!(" [{kind}]"));
    }
    if let Some(Attr::FloatArray { values, .. }) = location.attrs.lookup("xform.translate") {
        line.push_str(&format!(" translate=({}, {}, {})", values[0], values[1], values[2]));
    }
    if let Some(Attr::FloatArray { values, .. }) = location.attrs.lookup("xform.rotateX") {
        line.push_str(&format!(" rotateX={}", values[0]));
    }

    println!("{line}");
    for child in &location.children {
        print_location(child, depth + 1);
    }
}
