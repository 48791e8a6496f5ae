//! Elastica trace demo: drives the scene from a scripted pointer sweep and
//! sketches the final frame in the terminal.
//!
//! Usage:
//! ```text
//! cargo run --example trace              # 180 frames (three seconds)
//! cargo run --example trace -- 600       # longer sweep
//! RUST_LOG=elastica=trace cargo run --example trace
//! ```
//!
//! The sketch maps the 1000x600 canvas onto an 80x24 character grid:
//! `O` fixed endpoints, `+` interior control points, `.` sampled path,
//! arrows for tangent-overlay samples, `x` the pointer.

use std::f64::consts::TAU;

use elastica::math::Point2;
use elastica::sampling::SamplingParams;
use elastica::scene::Scene;
use elastica::simulation::NOMINAL_FRAME_MILLIS;

const CANVAS_W: f64 = 1000.0;
const CANVAS_H: f64 = 600.0;
const GRID_W: usize = 80;
const GRID_H: usize = 24;

fn main() -> Result<(), elastica::ElasticaError> {
    // Default: WARN for everything, INFO for elastica.
    // Override with RUST_LOG env var (e.g. RUST_LOG=elastica=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("elastica=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let frames: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(180);

    let mut scene = Scene::new(CANVAS_W, CANVAS_H, SamplingParams::default())?;

    let mut pointer = Point2::new(CANVAS_W / 2.0, CANVAS_H / 2.0);
    for i in 0..frames {
        let now = f64::from(i) * NOMINAL_FRAME_MILLIS;
        pointer = scripted_pointer(f64::from(i) / f64::from(frames.max(1)));
        scene.tick(now, pointer);
    }

    print_sketch(&scene, pointer)?;
    println!(
        "{frames} frames, last frame {:.2} ms",
        scene.last_frame_millis()
    );
    Ok(())
}

/// Pointer sweep: one counter-clockwise loop around the canvas center.
fn scripted_pointer(phase: f64) -> Point2 {
    let angle = phase * TAU;
    Point2::new(
        CANVAS_W / 2.0 + 250.0 * angle.cos(),
        CANVAS_H / 2.0 + 150.0 * angle.sin(),
    )
}

fn print_sketch(scene: &Scene, pointer: Point2) -> Result<(), elastica::ElasticaError> {
    let mut grid = [[' '; GRID_W]; GRID_H];

    for point in &scene.path()?.points {
        plot(&mut grid, *point, '.');
    }
    let length = scene.params().tangent_length;
    for sample in scene.tangents()? {
        let (a, b) = sample.segment(length);
        plot(&mut grid, a, arrow_from_vec(-sample.tangent.x, -sample.tangent.y));
        plot(&mut grid, b, arrow_from_vec(sample.tangent.x, sample.tangent.y));
    }
    let (p0, p3) = scene.endpoints();
    plot(&mut grid, p0, 'O');
    plot(&mut grid, p3, 'O');
    let (p1, p2) = scene.control_positions();
    plot(&mut grid, p1, '+');
    plot(&mut grid, p2, '+');
    plot(&mut grid, pointer, 'x');

    for row in &grid {
        let line: String = row.iter().collect();
        println!("{line}");
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn plot(grid: &mut [[char; GRID_W]; GRID_H], point: Point2, glyph: char) {
    let col = (point.x / CANVAS_W * (GRID_W as f64 - 1.0)).round();
    let row = (point.y / CANVAS_H * (GRID_H as f64 - 1.0)).round();
    if col >= 0.0 && row >= 0.0 && col < GRID_W as f64 && row < GRID_H as f64 {
        grid[row as usize][col as usize] = glyph;
    }
}

fn arrow_from_vec(x: f64, y: f64) -> char {
    if x.abs() >= y.abs() {
        if x >= 0.0 {
            '>'
        } else {
            '<'
        }
    } else if y >= 0.0 {
        'v'
    } else {
        '^'
    }
}
