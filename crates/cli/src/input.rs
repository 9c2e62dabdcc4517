use anyhow::{ensure, Context, Result};
use planar::Pt;
use std::fs;
use std::path::Path;

/// Read a JSON array of `[x, y]` pairs.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Pt<f64>>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    ensure!(
        raw.iter().flatten().all(|c| c.is_finite()),
        "{}: coordinates must be finite",
        path.display()
    );
    tracing::debug!(path = %path.display(), points = raw.len(), "input_loaded");
    Ok(raw.into_iter().map(Pt::from).collect())
}

/// Read a polygon: like [`read_points`] but with at least three vertices.
pub fn read_polygon<P: AsRef<Path>>(path: P) -> Result<Vec<Pt<f64>>> {
    let path = path.as_ref();
    let pts = read_points(path)?;
    ensure!(
        pts.len() >= 3,
        "{}: a polygon needs at least 3 vertices, got {}",
        path.display(),
        pts.len()
    );
    Ok(pts)
}

pub fn to_pairs(pts: &[Pt<f64>]) -> Vec<[f64; 2]> {
    pts.iter().map(|p| [p.x, p.y]).collect()
}
