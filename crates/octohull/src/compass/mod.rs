//! Compass vocabulary for walking a hull boundary.
//!
//! Purpose
//! - `Direction` names a half-axis; `DirectionPair` combines up to two of them
//!   and serves both as an octant label ("NE") and as a tie-break order ("WS").
//! - `Octant` is the closed set of the eight labels a counterclockwise walk may
//!   travel in. `VALID_PATH` lists them in walking order and `LOCAL_MAXIMUMS`
//!   holds, index for index, the extremal point that must sit at each turn.
//!
//! Conventions
//! - An absent component is `None`, never an empty string.
//! - `relative_direction` puts the vertical component first; labels parsed from
//!   text keep their letter order. `DirectionPair::octant` accepts both shapes
//!   of a single-letter label ("E" and "(absent, E)") but never reorders two.

mod tables;
mod types;

pub use tables::{ANCHOR, LOCAL_MAXIMUMS, VALID_PATH};
pub use types::{
    direction_pair_from_label, label_from_direction_pair, Direction, DirectionPair, Octant,
};
