//! Print a few reproducible star polygons with their area, convexity and a
//! containment check for the origin.
//!
//! Usage:
//!   cargo run -p planar --example polygon_report -- 5

use planar::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
use planar::{area, convex_hull, in_polygon, is_convex, Pt};

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cfg = RadialCfg {
        min_vertices: 5,
        max_vertices: 12,
        ..RadialCfg::default()
    };
    for index in 0..count {
        let poly = draw_polygon_radial(cfg, ReplayToken { seed: 2025, index });
        let hull = convex_hull(&poly);
        println!(
            "sample {index}: n={}, area={:.4}, hull_area={:.4}, convex={}, origin_inside={}",
            poly.len(),
            area(&poly),
            area(&hull),
            is_convex(&poly),
            in_polygon(&poly, Pt::new(0.0, 0.0), true),
        );
    }
}
