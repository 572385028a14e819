//! Point-level geometry: relative directions, slopes, and extremal points.
//!
//! Points carry integer coordinates; derived quantities (slope, squared
//! magnitude) are computed in `f64` after casting, so differences never
//! overflow `i64`.

use nalgebra::Vector2;

use crate::compass::{Direction, DirectionPair};
use crate::error::HullError;

/// A point with integer coordinates. Equality is structural.
pub type Point = Vector2<i64>;

/// Where `to` lies as seen from `from`: vertical component first, then horizontal.
///
/// Identical points give `DirectionPair::NONE`.
pub fn relative_direction(from: Point, to: Point) -> DirectionPair {
    let vertical = match to.y.cmp(&from.y) {
        std::cmp::Ordering::Greater => Some(Direction::North),
        std::cmp::Ordering::Less => Some(Direction::South),
        std::cmp::Ordering::Equal => None,
    };
    let horizontal = match to.x.cmp(&from.x) {
        std::cmp::Ordering::Greater => Some(Direction::East),
        std::cmp::Ordering::Less => Some(Direction::West),
        std::cmp::Ordering::Equal => None,
    };
    DirectionPair::new(vertical, horizontal)
}

#[inline]
fn delta(from: Point, to: Point) -> Vector2<f64> {
    to.cast::<f64>() - from.cast::<f64>()
}

/// Slope of the segment `from → to`; vertical segments give `f64::INFINITY`.
#[inline]
pub fn slope(from: Point, to: Point) -> f64 {
    let d = delta(from, to);
    if d.x == 0.0 {
        return f64::INFINITY;
    }
    d.y / d.x
}

/// Squared Euclidean distance. Only used for ordering, so no square root.
#[inline]
pub fn squared_magnitude(from: Point, to: Point) -> f64 {
    delta(from, to).norm_squared()
}

#[inline]
fn coordinate(p: &Point, direction: Direction) -> i64 {
    if direction.is_vertical() {
        p.y
    } else {
        p.x
    }
}

/// All points tied for the extreme coordinate in `direction`, in input order.
///
/// North/East select the maximum y/x, South/West the minimum.
pub fn extremal_points(points: &[Point], direction: Direction) -> Result<Vec<Point>, HullError> {
    let values = points.iter().map(|p| coordinate(p, direction));
    let best = match direction {
        Direction::North | Direction::East => values.max(),
        Direction::South | Direction::West => values.min(),
    }
    .ok_or(HullError::EmptyPointSet)?;
    Ok(points
        .iter()
        .filter(|p| coordinate(p, direction) == best)
        .copied()
        .collect())
}

/// The extremal point for a two-axis tie-break order.
///
/// `pair.first` selects the primary extreme; among those, `pair.second` breaks
/// ties. E.g. "NE" is the north-most point, east-most among equals.
pub fn inflection_point(points: &[Point], pair: DirectionPair) -> Result<Point, HullError> {
    let (Some(primary), Some(secondary)) = (pair.first, pair.second) else {
        return Err(HullError::MissingAxis(pair));
    };
    let tied = extremal_points(points, primary)?;
    extremal_points(&tied, secondary)?
        .first()
        .copied()
        .ok_or(HullError::EmptyPointSet)
}
