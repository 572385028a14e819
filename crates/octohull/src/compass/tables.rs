use super::types::{Direction::*, DirectionPair, Octant};

/// Octants of a counterclockwise walk around an octagon, starting bottom-left.
pub const VALID_PATH: [Octant; 8] = [
    Octant::SouthEast,
    Octant::East,
    Octant::NorthEast,
    Octant::North,
    Octant::NorthWest,
    Octant::West,
    Octant::SouthWest,
    Octant::South,
];

/// Tie-break orders of the turning points, co-indexed with `VALID_PATH`.
///
/// Entry `i` names the point the walk must be standing on before it may head
/// off in `VALID_PATH[i]`: "WS" is the west-most point, ties broken south-most.
pub const LOCAL_MAXIMUMS: [DirectionPair; 8] = [
    DirectionPair::both(West, South),
    DirectionPair::both(South, West),
    DirectionPair::both(South, East),
    DirectionPair::both(East, South),
    DirectionPair::both(East, North),
    DirectionPair::both(North, East),
    DirectionPair::both(North, West),
    DirectionPair::both(West, North),
];

/// Where every walk starts: west-most, then south-most.
pub const ANCHOR: DirectionPair = LOCAL_MAXIMUMS[0];
