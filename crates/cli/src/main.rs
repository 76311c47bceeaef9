use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use quickhull2::hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use quickhull2::hull2::{HullCfg, Traversal, DEFAULT_MAX_DEPTH, EPS};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;
mod report;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls of 2D point files (QuickHull)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Disk,
    Square,
    Circle,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Disk => CloudShape::Disk,
            Shape::Square => CloudShape::Square,
            Shape::Circle => CloudShape::Circle,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (csv/parquet/json) and write a JSON report
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Half-plane tolerance for "strictly outside"
        #[arg(long, default_value_t = EPS)]
        eps: f64,
        /// Use native recursion instead of the explicit work stack
        #[arg(long)]
        recursive: bool,
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Emit vertices counterclockwise (default: as built, clockwise)
        #[arg(long)]
        ccw: bool,
    },
    /// Draw a seeded random point cloud (csv/parquet/json by extension)
    Random {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, value_enum, default_value_t = Shape::Disk)]
        shape: Shape,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            eps,
            recursive,
            max_depth,
            ccw,
        } => {
            let traversal = if recursive {
                Traversal::Recursive { max_depth }
            } else {
                Traversal::WorkList
            };
            hull(&input, &out, HullCfg { eps, traversal }, ccw)
        }
        Action::Random {
            count,
            shape,
            radius,
            seed,
            index,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape: shape.into(),
                radius,
            };
            random(cfg, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

fn hull(input: &str, out: &str, cfg: HullCfg, ccw: bool) -> Result<()> {
    tracing::info!(input, out, eps = cfg.eps, traversal = ?cfg.traversal, ccw, "hull");
    let points = io::read_points(Path::new(input))?;
    let body = report::build_report(&points, cfg, ccw)?;
    tracing::info!(n = body.input_count, hull = body.count, winding = %body.winding, "hull_done");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&body)?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    let params = serde_json::json!({
        "eps": cfg.eps,
        "traversal": format!("{:?}", cfg.traversal),
        "ccw": ccw,
    });
    write_sidecar(out_path, Payload::new(params).with_input(input))?;
    Ok(())
}

fn random(cfg: CloudCfg, tok: ReplayToken, out: &str) -> Result<()> {
    tracing::info!(count = cfg.count, shape = ?cfg.shape, radius = cfg.radius, seed = tok.seed, index = tok.index, out, "random");
    if !(cfg.radius.is_finite() && cfg.radius > 0.0) {
        bail!("radius must be finite and > 0 (got {})", cfg.radius);
    }
    let points = draw_cloud(cfg, tok);
    let out_path = Path::new(out);
    io::write_points(out_path, &points)?;
    let params = serde_json::json!({
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "radius": cfg.radius,
        "seed": tok.seed,
        "index": tok.index,
    });
    write_sidecar(out_path, Payload::new(params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "quickhull2": quickhull2::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
