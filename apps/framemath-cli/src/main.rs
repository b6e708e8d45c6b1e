use std::path::PathBuf;

use clap::{Parser, Subcommand};
use framemath_kernel::reference::{SplitMix64, gauss_jordan_inverse};
use framemath_kernel::{Matrix4x4, Vector3};
use framemath_render::{
    ConstantBufferRenderer, DebugTextRenderer, FrameMatrices, FrameParams, Renderer, Spin,
};
use tracing_subscriber::EnvFilter;

/// Condition-normalized error above which the adjugate inverse is reported as
/// a mismatch. Well above f32 rounding, far below a wrong cofactor.
const INVERSE_TOLERANCE: f32 = 1e-4;

#[derive(Parser)]
#[command(name = "framemath-cli", about = "CLI tool for framemath operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Frame parameters as JSON; missing fields use defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the matrix layout contract
    Info,
    /// Compose one frame and print its matrices
    Frame {
        /// Vertical field of view in radians
        #[arg(long)]
        fov: Option<f32>,
        /// Aspect ratio (width / height)
        #[arg(long)]
        aspect: Option<f32>,
        /// Write the effective parameters to this JSON file
        #[arg(long)]
        write_config: Option<PathBuf>,
    },
    /// Spin the object and print where a marker point lands each frame
    Animate {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "10")]
        frames: u32,
        /// Y rotation added per frame, in radians
        #[arg(short, long, default_value = "0.03")]
        spin: f32,
    },
    /// Project an object-space point to screen coordinates
    Project {
        #[arg(allow_hyphen_values = true)]
        x: f32,
        #[arg(allow_hyphen_values = true)]
        y: f32,
        #[arg(allow_hyphen_values = true)]
        z: f32,
    },
    /// Cross-check the closed-form inverse against Gauss-Jordan elimination
    InvertCheck {
        /// Number of random matrices
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

/// Outcome of an inverse cross-check run.
#[derive(Debug, Default)]
struct InvertReport {
    checked: usize,
    skipped: usize,
    worst_error: f32,
}

fn max_abs(m: &Matrix4x4) -> f32 {
    m.m.iter().flatten().fold(0.0, |acc, v| acc.max(v.abs()))
}

fn invert_check(count: usize, seed: u64) -> InvertReport {
    let mut rng = SplitMix64::new(seed);
    let mut report = InvertReport::default();
    for _ in 0..count {
        let m = rng.next_matrix(-10.0, 10.0);
        let reference = match (gauss_jordan_inverse(&m), m.try_inverse()) {
            (Some(reference), Ok(_)) => reference,
            _ => {
                report.skipped += 1;
                continue;
            }
        };
        // Forward error grows with the condition number, so divide it out.
        let inv_norm = max_abs(&reference);
        let condition = (4.0 * max_abs(&m) * inv_norm).max(1.0);
        let error = m.inverse().max_abs_diff(&reference) / (inv_norm * condition);
        tracing::trace!(error, "checked matrix");
        report.worst_error = report.worst_error.max(error);
        report.checked += 1;
    }
    report
}

fn load_params(config: Option<&PathBuf>) -> anyhow::Result<FrameParams> {
    match config {
        Some(path) => Ok(FrameParams::load(path)?),
        None => Ok(FrameParams::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut params = load_params(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("framemath-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", framemath_kernel::crate_info());
            println!("render: {}", framemath_render::crate_info());
            println!(
                "layout: Matrix4x4 = {} bytes (16 x f32, row-major)",
                std::mem::size_of::<Matrix4x4>()
            );
        }
        Commands::Frame {
            fov,
            aspect,
            write_config,
        } => {
            if let Some(fov) = fov {
                params.projection.fov_y = fov;
            }
            if let Some(aspect) = aspect {
                params.projection.aspect_ratio = aspect;
            }
            let frame = FrameMatrices::compose(&params)?;
            print!("{}", DebugTextRenderer::new().render(&frame));

            let payload = ConstantBufferRenderer::new().render(&frame);
            println!("constant buffer: {} bytes", payload.as_bytes().len());

            if let Some(path) = write_config {
                params.save(&path)?;
                tracing::info!(path = %path.display(), "wrote frame params");
            }
        }
        Commands::Animate { frames, spin } => {
            let spin = Spin {
                rate: Vector3::new(0.0, spin, 0.0),
            };
            let marker = Vector3::new(0.5, 0.5, 0.0);
            println!(
                "Animating {frames} frames, marker=({}, {}, {})",
                marker.x, marker.y, marker.z
            );
            for i in 0..frames {
                params.advance(&spin);
                let frame = FrameMatrices::compose(&params)?;
                match frame.project_to_screen(marker) {
                    Ok(p) => println!(
                        "frame {i:>4}: rotate.y={:.3} screen=({:.2}, {:.2}) depth={:.4}",
                        params.object.rotate.y, p.x, p.y, p.z
                    ),
                    Err(e) => println!("frame {i:>4}: {e}"),
                }
            }
        }
        Commands::Project { x, y, z } => {
            let frame = FrameMatrices::compose(&params)?;
            let point = Vector3::new(x, y, z);
            let ndc = frame.project_to_ndc(point)?;
            let screen = frame.project_to_screen(point)?;
            println!("ndc:    ({:.4}, {:.4}, {:.4})", ndc.x, ndc.y, ndc.z);
            println!(
                "screen: ({:.2}, {:.2}) depth={:.4}",
                screen.x, screen.y, screen.z
            );
        }
        Commands::InvertCheck { count, seed } => {
            println!("Inverse cross-check: seed={seed}, count={count}");
            let report = invert_check(count, seed);
            println!(
                "checked={}, skipped={}, worst normalized error={:e}",
                report.checked, report.skipped, report.worst_error
            );
            if report.worst_error > INVERSE_TOLERANCE {
                anyhow::bail!(
                    "adjugate inverse disagrees with Gauss-Jordan: {:e} > {:e}",
                    report.worst_error,
                    INVERSE_TOLERANCE
                );
            }
            println!("Match: OK");
        }
    }

    Ok(())
}
