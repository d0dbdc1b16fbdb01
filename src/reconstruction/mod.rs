//! Second-order MUSCL reconstruction.
//!
//! Stages, in the order the flux driver runs them:
//!
//! 1. [`reconstruct_cell_centers`]: `(w, hu, hv)` to `(h, u, v)` at cell
//!    centers with dry-state snapping
//! 2. [`compute_slopes`]: generalized minmod slopes along x and y
//! 3. [`reconstruct_faces`]: extrapolation to both sides of every face and
//!    the face depth, velocity and conservative values

mod cell_centers;
mod faces;
mod limiter;

pub use cell_centers::{cell_primitives, reconstruct_cell_centers};
pub use faces::{
    apply_dry_correction, extrapolate_to_faces, face_conservatives, face_depth, face_velocity,
    fix_face_depth_edge, fix_face_depth_internal, reconstruct_faces,
};
pub use limiter::{compute_slopes, limiter_factor, minmod_slope, minmod_slopes};
