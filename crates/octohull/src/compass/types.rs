use std::fmt;
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// A half-axis. North/South are measured along y, East/West along x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    #[inline]
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

/// Up to two directions, in order. `None` is the explicit "no direction".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionPair {
    pub first: Option<Direction>,
    pub second: Option<Direction>,
}

impl DirectionPair {
    /// Both components absent (two coincident points).
    pub const NONE: Self = Self::new(None, None);

    #[inline]
    pub const fn new(first: Option<Direction>, second: Option<Direction>) -> Self {
        Self { first, second }
    }

    /// Pair with both components present, e.g. `both(West, South)` for "WS".
    #[inline]
    pub const fn both(first: Direction, second: Direction) -> Self {
        Self::new(Some(first), Some(second))
    }

    /// The octant this pair labels, matched on the exact label.
    ///
    /// Tie-break orders such as "ES" are not octants and map to `None`, as does
    /// `NONE`. A single direction matches regardless of which slot holds it.
    pub fn octant(&self) -> Option<Octant> {
        use Direction::*;
        match (self.first, self.second) {
            (Some(South), Some(East)) => Some(Octant::SouthEast),
            (Some(North), Some(East)) => Some(Octant::NorthEast),
            (Some(North), Some(West)) => Some(Octant::NorthWest),
            (Some(South), Some(West)) => Some(Octant::SouthWest),
            (Some(d), None) | (None, Some(d)) => Some(match d {
                North => Octant::North,
                South => Octant::South,
                East => Octant::East,
                West => Octant::West,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for DirectionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in [self.first, self.second].into_iter().flatten() {
            write!(f, "{}", d.letter())?;
        }
        Ok(())
    }
}

impl FromStr for DirectionPair {
    type Err = ParseDirectionError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = label.chars().collect();
        if letters.is_empty() || letters.len() > 2 {
            return Err(ParseDirectionError::BadLength {
                label: label.to_string(),
            });
        }
        let mut parsed = [None; 2];
        for (slot, &letter) in parsed.iter_mut().zip(&letters) {
            let d = Direction::from_letter(letter).ok_or_else(|| ParseDirectionError::BadLetter {
                label: label.to_string(),
                letter,
            })?;
            *slot = Some(d);
        }
        Ok(Self::new(parsed[0], parsed[1]))
    }
}

/// Parse a one- or two-letter label ("N", "SE", "WS") into a pair.
pub fn direction_pair_from_label(label: &str) -> Result<DirectionPair, ParseDirectionError> {
    label.parse()
}

/// Render a pair as its label; absent components render as nothing.
pub fn label_from_direction_pair(pair: DirectionPair) -> String {
    pair.to_string()
}

/// Direction-of-travel category along a counterclockwise hull walk.
///
/// Discriminants equal the position in `VALID_PATH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Octant {
    SouthEast = 0,
    East = 1,
    NorthEast = 2,
    North = 3,
    NorthWest = 4,
    West = 5,
    SouthWest = 6,
    South = 7,
}

impl Octant {
    /// Position in `VALID_PATH` (and `LOCAL_MAXIMUMS`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The pair `relative_direction` yields for travel in this octant.
    pub fn pair(self) -> DirectionPair {
        use Direction::*;
        match self {
            Octant::SouthEast => DirectionPair::both(South, East),
            Octant::East => DirectionPair::new(None, Some(East)),
            Octant::NorthEast => DirectionPair::both(North, East),
            Octant::North => DirectionPair::new(Some(North), None),
            Octant::NorthWest => DirectionPair::both(North, West),
            Octant::West => DirectionPair::new(None, Some(West)),
            Octant::SouthWest => DirectionPair::both(South, West),
            Octant::South => DirectionPair::new(Some(South), None),
        }
    }

    /// Tie-break order locating the point where the walk may turn into this octant.
    #[inline]
    pub fn local_maximum(self) -> DirectionPair {
        super::LOCAL_MAXIMUMS[self.index()]
    }
}

impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pair())
    }
}
