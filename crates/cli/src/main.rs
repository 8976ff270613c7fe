use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shoelace::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "shoelace-cli")]
#[command(about = "Polygon areas via the shoelace formula")]
struct Cmd {
    /// Log at DEBUG instead of INFO (logs go to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a shape from `x,y` vertices and print its area
    Area {
        #[arg(long, value_enum, default_value_t = ShapeKind::Ngon)]
        shape: ShapeKind,
        /// Print a JSON object instead of the bare number
        #[arg(long)]
        json: bool,
        /// One vertex as `x,y`; repeat in boundary order
        #[arg(
            short = 'p',
            long = "vertex",
            value_name = "X,Y",
            required = true,
            allow_hyphen_values = true,
            value_parser = parse_vertex
        )]
        vertices: Vec<Point>,
    },
    /// Run the reference scenarios and print each area
    Demo {
        #[arg(long)]
        json: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ShapeKind {
    Triangle,
    Square,
    Ngon,
}

impl ShapeKind {
    fn name(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Ngon => "ngon",
        }
    }
}

#[derive(Debug, Serialize)]
struct AreaReport {
    shape: &'static str,
    vertices: Vec<[f64; 2]>,
    area: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Area {
            shape,
            json,
            vertices,
        } => area(shape, vertices, json),
        Action::Demo { json } => demo(json).map(|_| ()),
        Action::Report => report(),
    }
}

/// Parse one `x,y` token. Three or more components surface as `InvalidDimension`.
fn parse_vertex(token: &str) -> Result<Point> {
    if token.trim().is_empty() {
        bail!("empty vertex token");
    }
    let coords = token
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("bad coordinate {c:?} in vertex {token:?}"))
        })
        .collect::<Result<Vec<f64>>>()?;
    Point::new(&coords).with_context(|| format!("vertex {token:?}"))
}

fn build_shape(kind: ShapeKind, points: Vec<Point>) -> Result<Box<dyn Polygon<V = Point>>> {
    let shape: Box<dyn Polygon<V = Point>> = match kind {
        ShapeKind::Triangle => Box::new(Triangle::new(points)?),
        ShapeKind::Square => Box::new(Square::new(points)?),
        ShapeKind::Ngon => Box::new(Ngon::new(points)?),
    };
    Ok(shape)
}

fn measure(kind: ShapeKind, points: Vec<Point>) -> Result<AreaReport> {
    let shape = build_shape(kind, points)?;
    let area = shape.area();
    tracing::debug!(shape = kind.name(), n = shape.vertices().len(), area, "measured");
    Ok(AreaReport {
        shape: kind.name(),
        vertices: shape.vertices().iter().map(|p| [p.x(), p.y()]).collect(),
        area,
    })
}

fn area(kind: ShapeKind, points: Vec<Point>, json: bool) -> Result<()> {
    tracing::info!(shape = kind.name(), n = points.len(), "area");
    let report = measure(kind, points)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.area);
    }
    Ok(())
}

/// Reference shapes with their known areas.
fn scenarios() -> Vec<(ShapeKind, Vec<[f64; 2]>, f64)> {
    vec![
        (
            ShapeKind::Triangle,
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            0.5,
        ),
        (
            ShapeKind::Square,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            1.0,
        ),
        (
            ShapeKind::Ngon,
            vec![
                [0.0, 0.0],
                [0.5, 0.25],
                [1.0, 0.0],
                [0.75, 0.5],
                [1.0, 1.0],
                [0.5, 0.75],
                [0.0, 1.0],
                [0.25, 5.0],
            ],
            0.5,
        ),
        (
            ShapeKind::Square,
            vec![[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]],
            2.0,
        ),
    ]
}

fn demo(json: bool) -> Result<Vec<AreaReport>> {
    tracing::info!("demo");
    let mut reports = Vec::new();
    for (kind, raw, expected) in scenarios() {
        let points = raw.into_iter().map(Point::from).collect();
        let report = measure(kind, points)?;
        if (report.area - expected).abs() > 1e-12 {
            bail!(
                "{} area {} differs from expected {}",
                report.shape,
                report.area,
                expected
            );
        }
        if !json {
            println!("{:<8} {}", report.shape, report.area);
        }
        reports.push(report);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(reports)
}

fn report() -> Result<()> {
    let obj = provenance::block();
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
