#![deny(unsafe_code)]
//! CLI for inspecting the gles-shapes rendering core without a GPU.
//!
//! Subcommands:
//! - `shaders` — print the vertex and fragment GLSL sources
//! - `projection` — print the projection matrix for a surface size
//! - `vertices` — print the triangle-list stream each shape submits

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use gles_shapes_core::render::sources::{FRAGMENT_SHADER, VERTEX_SHADER};
use gles_shapes_core::{projection_matrix, Scene, SceneConfig};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "gles-shapes", about = "Inspect the gles-shapes rendering core")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (env_logger syntax); defaults to RUST_LOG, then "info".
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the shader sources.
    Shaders,
    /// Print the projection matrix for a surface size.
    Projection {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 1920)]
        width: i32,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 1080)]
        height: i32,

        /// Local units from center to top edge; defaults to the scene's scale.
        #[arg(short, long)]
        scale: Option<f32>,

        /// Scene config JSON file.
        #[arg(long)]
        scene: Option<PathBuf>,
    },
    /// Print the vertex stream each shape submits, in draw order.
    Vertices {
        /// Scene config JSON file; the built-in scene is used if omitted.
        #[arg(long)]
        scene: Option<PathBuf>,
    },
}

fn load_scene(path: Option<&Path>) -> Result<Scene, CliError> {
    let Some(path) = path else {
        return Ok(Scene::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    let scene = SceneConfig::from_json(&text)?.build()?;
    log::info!(
        "loaded scene from {} ({} shapes, scale {})",
        path.display(),
        scene.shapes().len(),
        scene.scale()
    );
    Ok(scene)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Shaders => {
            if cli.json {
                let info = serde_json::json!({
                    "vertex": VERTEX_SHADER,
                    "fragment": FRAGMENT_SHADER,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("// vertex\n{VERTEX_SHADER}\n// fragment\n{FRAGMENT_SHADER}");
            }
        }
        Command::Projection {
            width,
            height,
            scale,
            scene,
        } => {
            let scale = match scale {
                Some(s) => s,
                None => load_scene(scene.as_deref())?.scale(),
            };
            let matrix = projection_matrix(width, height, scale)?;
            let rows: Vec<[f32; 4]> = (0..4).map(|r| matrix.row(r).to_array()).collect();
            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "scale": scale,
                    "rows": rows,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for row in rows {
                    println!(
                        "{:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                        row[0], row[1], row[2], row[3]
                    );
                }
            }
        }
        Command::Vertices { scene } => {
            let scene = load_scene(scene.as_deref())?;
            if cli.json {
                let shapes: Vec<_> = scene
                    .shapes()
                    .iter()
                    .map(|shape| {
                        let vertices: Vec<[f32; 2]> =
                            shape.vertices().iter().map(|v| v.to_array()).collect();
                        serde_json::json!({
                            "kind": shape.kind(),
                            "color": shape.color().to_array(),
                            "vertices": vertices,
                        })
                    })
                    .collect();
                let info = serde_json::json!({
                    "scale": scene.scale(),
                    "shapes": shapes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for (i, shape) in scene.shapes().iter().enumerate() {
                    let c = shape.color();
                    println!(
                        "#{i} {} color=({}, {}, {})",
                        shape.kind(),
                        c.x,
                        c.y,
                        c.z
                    );
                    for v in shape.vertices() {
                        println!("  ({}, {})", v.x, v.y);
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.log.as_deref());
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
