//! Local wave speeds and the central-upwind numerical flux.
//!
//! - [`compute_local_speeds`]: one-sided speed bounds on every face
//! - [`compute_discontinuous_fluxes`]: physical flux on both face sides
//! - [`compute_central_fluxes`]: the common flux `cf` per axis
//!
//! The scalar kernels ([`wave_speed_bounds`], [`central_upwind`], ...) are
//! public so that they can be tested and reused on their own.

mod central_upwind;
mod wave_speed;

pub use central_upwind::{
    boundary_flux_sum, central_upwind, compute_central_fluxes, compute_discontinuous_fluxes,
    discontinuous_flux_x, discontinuous_flux_y,
};
pub use wave_speed::{
    celerity, compute_local_speeds, local_speed, normal_component, wave_speed_bounds,
};
