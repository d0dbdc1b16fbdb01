//! Rectangular coordinate extents.

use std::fmt;

/// Rectangular extent of a grid patch.
///
/// Field order follows the west, east, south, north convention used
/// everywhere in this crate.
///
/// # Example
///
/// ```
/// use cu_swe::types::Extent2D;
///
/// let extent = Extent2D::new(-1.0, 1.0, 0.0, 4.0);
/// assert_eq!(extent.east - extent.west, 2.0);
/// assert_eq!(extent.to_string(), "[-1, 1] × [0, 4]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent2D {
    /// Western boundary (minimum x)
    pub west: f64,
    /// Eastern boundary (maximum x)
    pub east: f64,
    /// Southern boundary (minimum y)
    pub south: f64,
    /// Northern boundary (maximum y)
    pub north: f64,
}

impl Extent2D {
    /// Create a new extent.
    ///
    /// No ordering check is done here; gridline construction validates the
    /// bounds and reports a [`GridError`](crate::GridError).
    pub fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }

    /// Unit square [0, 1] × [0, 1].
    pub fn unit_square() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

impl fmt::Display for Extent2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] × [{}, {}]",
            self.west, self.east, self.south, self.north
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square() {
        let e = Extent2D::unit_square();
        assert_eq!(e, Extent2D::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_display() {
        let e = Extent2D::new(1.0, 2.5, -3.0, 4.0);
        assert_eq!(e.to_string(), "[1, 2.5] × [-3, 4]");
    }
}
