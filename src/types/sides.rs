//! The four sides of a rectangular domain.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One side of the domain.
///
/// Ordering and numeric ids follow the west, east, south, north
/// convention (0..=3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    West,
    East,
    South,
    North,
}

impl Side {
    /// All sides in id order.
    pub const ALL: [Side; 4] = [Side::West, Side::East, Side::South, Side::North];

    /// Numeric id (west = 0, east = 1, south = 2, north = 3).
    #[inline]
    pub fn id(self) -> usize {
        match self {
            Side::West => 0,
            Side::East => 1,
            Side::South => 2,
            Side::North => 3,
        }
    }

    /// Side from its numeric id.
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// Whether this side is normal to the x axis.
    #[inline]
    pub fn is_x_normal(self) -> bool {
        matches!(self, Side::West | Side::East)
    }

    /// Whether this side sits at the lower end of its axis.
    #[inline]
    pub fn is_lower(self) -> bool {
        matches!(self, Side::West | Side::South)
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Side::West => "west",
            Side::East => "east",
            Side::South => "south",
            Side::North => "north",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown side name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown side {0:?}, expected one of w/west, e/east, s/south, n/north")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "west" => Ok(Side::West),
            "e" | "east" => Ok(Side::East),
            "s" | "south" => Ok(Side::South),
            "n" | "north" => Ok(Side::North),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// A value attached to each side, with named fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides<T> {
    pub west: T,
    pub east: T,
    pub south: T,
    pub north: T,
}

impl<T> Sides<T> {
    /// Create from explicit values (west, east, south, north).
    pub fn new(west: T, east: T, south: T, north: T) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }

    /// Same value on every side.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            west: value.clone(),
            east: value.clone(),
            south: value.clone(),
            north: value,
        }
    }

    /// Value for one side.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::West => &self.west,
            Side::East => &self.east,
            Side::South => &self.south,
            Side::North => &self.north,
        }
    }

    /// Mutable value for one side.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::West => &mut self.west,
            Side::East => &mut self.east,
            Side::South => &mut self.south,
            Side::North => &mut self.north,
        }
    }

    /// Map a function over all sides.
    pub fn map<U, F>(self, mut f: F) -> Sides<U>
    where
        F: FnMut(T) -> U,
    {
        Sides {
            west: f(self.west),
            east: f(self.east),
            south: f(self.south),
            north: f(self.north),
        }
    }

    /// Iterate as `(side, value)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side() {
        assert_eq!("w".parse::<Side>(), Ok(Side::West));
        assert_eq!("East".parse::<Side>(), Ok(Side::East));
        assert_eq!(" s ".parse::<Side>(), Ok(Side::South));
        assert_eq!("north".parse::<Side>(), Ok(Side::North));
        assert!("up".parse::<Side>().is_err());
    }

    #[test]
    fn test_ids() {
        for side in Side::ALL {
            assert_eq!(Side::from_id(side.id()), Some(side));
        }
        assert_eq!(Side::from_id(4), None);
        assert!(Side::West.is_x_normal() && Side::West.is_lower());
        assert!(!Side::North.is_x_normal() && !Side::North.is_lower());
    }

    #[test]
    fn test_sides_access() {
        let mut sides = Sides::new(1, 2, 3, 4);
        *sides.get_mut(Side::South) = 30;
        assert_eq!(*sides.get(Side::South), 30);
        let doubled = sides.map(|v| v * 2);
        let collected: Vec<_> = doubled.iter().map(|(_, v)| *v).collect();
        assert_eq!(collected, vec![2, 4, 60, 8]);
    }
}
