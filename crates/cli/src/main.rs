use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use planar::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
use planar::{
    area, convex_hull, in_polygon, is_convex, polar_sort, polar_sort_around, signed_area, Pt,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

use input::{read_points, read_polygon, to_pairs};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Planar geometry queries on JSON polygons ([[x, y], ...])")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Polygon area (unsigned unless --signed)
    Area {
        #[arg(long)]
        polygon: PathBuf,
        /// Keep the orientation sign (positive = counter-clockwise)
        #[arg(long)]
        signed: bool,
    },
    /// Convexity test (collinear vertices allowed)
    Convex {
        #[arg(long)]
        polygon: PathBuf,
    },
    /// Even-odd point-in-polygon test
    Contains {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Count points on the boundary as inside
        #[arg(long)]
        inclusive: bool,
    },
    /// Convex hull of a point set (counter-clockwise)
    Hull {
        #[arg(long)]
        polygon: PathBuf,
    },
    /// Polar sort around the origin or a given center
    Sort {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true, requires = "around_y")]
        around_x: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "around_x")]
        around_y: Option<f64>,
    },
    /// Draw a reproducible random star-shaped polygon
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report {
    Area { vertices: usize, area: f64, signed: bool },
    Convex { vertices: usize, convex: bool },
    Contains { point: [f64; 2], strict: bool, inside: bool },
    Points { points: Vec<[f64; 2]> },
}

fn main() -> Result<()> {
    // stdout carries the JSON report; logs go to stderr
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let report = run(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(action: Action) -> Result<Report> {
    match action {
        Action::Area { polygon, signed } => {
            let poly = read_polygon(&polygon)?;
            let a = if signed { signed_area(&poly) } else { area(&poly) };
            tracing::info!(vertices = poly.len(), area = a, signed, "area");
            Ok(Report::Area {
                vertices: poly.len(),
                area: a,
                signed,
            })
        }
        Action::Convex { polygon } => {
            let poly = read_polygon(&polygon)?;
            let convex = is_convex(&poly);
            tracing::info!(vertices = poly.len(), convex, "convex");
            Ok(Report::Convex {
                vertices: poly.len(),
                convex,
            })
        }
        Action::Contains {
            polygon,
            x,
            y,
            inclusive,
        } => {
            let poly = read_polygon(&polygon)?;
            let strict = !inclusive;
            let inside = in_polygon(&poly, Pt::new(x, y), strict);
            tracing::info!(vertices = poly.len(), x, y, strict, inside, "contains");
            Ok(Report::Contains {
                point: [x, y],
                strict,
                inside,
            })
        }
        Action::Hull { polygon } => {
            let pts = read_points(&polygon)?;
            let hull = convex_hull(&pts);
            tracing::info!(points = pts.len(), hull = hull.len(), "hull");
            Ok(Report::Points {
                points: to_pairs(&hull),
            })
        }
        Action::Sort {
            polygon,
            around_x,
            around_y,
        } => {
            let mut pts = read_points(&polygon)?;
            let center = match (around_x, around_y) {
                (Some(x), Some(y)) => Pt::new(x, y),
                _ => Pt::zero(),
            };
            ensure!(
                pts.iter().all(|&p| p != center),
                "cannot sort a point that coincides with the center {center}"
            );
            if center.is_zero() {
                polar_sort(&mut pts);
            } else {
                polar_sort_around(&mut pts, center);
            }
            tracing::info!(points = pts.len(), center = %center, "sort");
            Ok(Report::Points {
                points: to_pairs(&pts),
            })
        }
        Action::Sample {
            seed,
            index,
            vertices,
        } => {
            let poly = draw_polygon_radial(RadialCfg::fixed(vertices), ReplayToken { seed, index });
            tracing::info!(seed, index, vertices = poly.len(), "sample");
            Ok(Report::Points {
                points: to_pairs(&poly),
            })
        }
    }
}
