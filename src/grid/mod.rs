//! Structured grid geometry.
//!
//! - [`Gridline`]: coordinates of one axis, whole or partitioned
//! - [`Domain`]: a halo-padded 2D patch built from two gridlines
//! - [`Topography`]: static bottom elevation on centers and faces

mod domain;
mod gridline;
mod topography;

pub use domain::{Domain, GhostLayers, NHALO};
pub use gridline::{GridAxis, Gridline};
pub use topography::Topography;

