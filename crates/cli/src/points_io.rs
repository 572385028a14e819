//! Point files: JSON arrays of `[x, y]` pairs, or CSV with integer `x`/`y` columns.

use anyhow::{bail, Context, Result};
use octohull::Point;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk form of a point: a two-element JSON array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Xy(i64, i64);

impl From<Xy> for Point {
    fn from(Xy(x, y): Xy) -> Self {
        Point::new(x, y)
    }
}

impl From<&Point> for Xy {
    fn from(p: &Point) -> Self {
        Xy(p.x, p.y)
    }
}

/// Read points, choosing the format by extension (`.json` or `.csv`).
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        _ => bail!("unsupported point file {} (expected .json or .csv)", path.display()),
    }
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<Xy> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(rows.into_iter().map(Point::from).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = df.column("x")?.cast(&DataType::Int64)?;
    let ys = df.column("y")?.cast(&DataType::Int64)?;
    xs.i64()?
        .into_iter()
        .zip(ys.i64()?.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("{}: row {row} is missing x or y", path.display()),
        })
        .collect()
}

/// Write points as a pretty-printed JSON array of `[x, y]` pairs.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let rows: Vec<Xy> = points.iter().map(Xy::from).collect();
    fs::write(path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
