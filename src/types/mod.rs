//! Small strongly-typed helpers for describing a structured grid.
//!
//! - [`Extent2D`]: rectangular coordinate extent (west, east, south, north)
//! - [`Side`] / [`Sides`]: the four domain sides with named fields
//!
//! # Example
//!
//! ```
//! use cu_swe::types::{Extent2D, Side, Sides};
//!
//! let extent = Extent2D::new(0.0, 4.0, 0.0, 5.0);
//! assert_eq!(extent.to_string(), "[0, 4] × [0, 5]");
//!
//! let sides = Sides::uniform(0.0_f64);
//! assert_eq!(*sides.get(Side::North), 0.0);
//! ```

mod extent;
mod sides;

pub use extent::Extent2D;
pub use sides::{ParseSideError, Side, Sides};
