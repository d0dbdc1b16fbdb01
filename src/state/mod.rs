//! Solution and working arrays.
//!
//! [`States`] owns the cell-centered conservative and primitive fields, the
//! limited slopes and the [`FaceQuantities`] of both axes. Everything is
//! allocated once per domain; the flux stages overwrite it in place.

mod faces;
mod states;

pub use faces::{FaceOneSide, FaceQuantities, FaceTwoSide, NFIELDS};
pub use states::States;
