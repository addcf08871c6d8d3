use anyhow::{bail, Context, Result};
use asteroids::prelude::*;
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

/// Upper bound on frames preallocated up front; longer runs grow the vector.
const MAX_PREALLOC_FRAMES: u64 = 1 << 16;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless runner and polygon probe for the Asteroids scaffold")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Drive the playfield for a number of ticks and write the recorded frames
    Run {
        #[arg(long, default_value_t = 100)]
        ticks: u64,
        #[arg(long)]
        out: PathBuf,
        /// Stage config JSON (missing fields take defaults)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Number of random rocks besides the ship
        #[arg(long, default_value_t = 4)]
        rocks: usize,
    },
    /// Build one polygon and print its geometry as JSON
    Probe {
        /// Points as "x,y;x,y;..."
        #[arg(long)]
        shape: String,
        #[arg(long, default_value = "0,0")]
        offset: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rotate: f64,
        /// Query point for the containment test
        #[arg(long)]
        point: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            ticks,
            out,
            config,
            seed,
            rocks,
        } => run(ticks, &out, config.as_deref(), seed, rocks),
        Action::Probe {
            shape,
            offset,
            rotate,
            point,
        } => probe(&shape, &offset, rotate, point.as_deref()),
        Action::Report => report(),
    }
}

fn load_cfg(path: Option<&Path>) -> Result<StageCfg> {
    let Some(path) = path else {
        return Ok(StageCfg::default());
    };
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Ship at the field centre plus `rocks` drifting radial shapes.
fn build_field(cfg: &StageCfg, seed: u64, rocks: usize) -> Result<Field> {
    let mut field = Field::for_stage(cfg);
    let (cx, cy) = field.center();
    let ship = vec![
        Point::new(0.0, 0.0),
        Point::new(30.0, 10.0),
        Point::new(0.0, 20.0),
        Point::new(6.0, 10.0),
    ];
    field.push(Sprite::from_shape(ship, Point::new(cx, cy), 270.0)?);

    let mut rng = StdRng::seed_from_u64(seed);
    for index in 0..rocks as u64 {
        let shape = draw_shape_radial(ShapeCfg::default(), ReplayToken { seed, index })
            .context("rock shape config")?;
        let at = random_point(&mut rng, cfg.width as f64, cfg.height as f64);
        let heading = rng.gen::<f64>() * std::f64::consts::TAU;
        let speed = rng.gen_range(20.0..60.0);
        let rock = Sprite::from_shape(shape, at, 0.0)?
            .with_velocity(Point::new(heading.cos() * speed, heading.sin() * speed))
            .with_spin(rng.gen_range(-90.0..90.0));
        field.push(rock);
    }
    Ok(field)
}

fn run(ticks: u64, out: &Path, config: Option<&Path>, seed: u64, rocks: usize) -> Result<()> {
    let cfg = load_cfg(config)?;
    tracing::info!(ticks, out = %out.display(), seed, rocks, title = %cfg.title, "run");
    let mut field = build_field(&cfg, seed, rocks)?;

    let mut stage = Stage::new(cfg.clone());
    let mut canvas = Recorder::default();
    let mut frames: Vec<Frame> = Vec::with_capacity(frame_capacity(ticks));
    let ran = stage.run(&mut field, &mut canvas, ticks, |tick, c| {
        frames.push(c.take_frame(tick));
        ControlFlow::Continue(())
    });
    tracing::info!(ran, frames = frames.len(), "stage_done");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec(&frames)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let record = provenance::RunRecord {
        ticks_requested: ticks,
        ticks_run: ran,
        frames: frames.len(),
        seed,
        rocks,
        stage: cfg,
    };
    let prov = provenance::write_sidecar(out, &record)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn frame_capacity(ticks: u64) -> usize {
    ticks.min(MAX_PREALLOC_FRAMES) as usize
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected \"x,y\", got {s:?}"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Point::new(x, y))
}

fn parse_shape(s: &str) -> Result<Vec<Point>> {
    let pts = s
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;
    if pts.is_empty() {
        bail!("shape has no points");
    }
    Ok(pts)
}

fn probe(shape: &str, offset: &str, rotate: f64, point: Option<&str>) -> Result<()> {
    tracing::info!(shape, offset, rotate, point, "probe");
    let poly = Polygon::new(parse_shape(shape)?, parse_point(offset)?, rotate)?;
    let contains = point.map(parse_point).transpose()?.map(|q| poly.contains(q));
    let (xs, ys) = poly.outline();
    let obj = serde_json::json!({
        "area": poly.area(),
        "rotation": poly.rotation(),
        "offset": poly.offset(),
        "shape": poly.shape(),
        "world_points": poly.world_points(),
        "outline": { "xs": xs, "ys": ys },
        "contains": contains,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let build = provenance::Build::current();
    let obj = serde_json::json!({
        "code_rev": build.code_rev,
        "version": build.version,
        "stage": StageCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
