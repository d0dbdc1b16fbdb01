//! Boundary conditions on the halo of a structured domain.
//!
//! Ghost layers are filled by pure functions of the interior cells next to
//! each side (see [`conditions`]). A [`BoundarySet`] describes, per side and
//! per conserved field, which one to use and applies them to the
//! conservative array before each flux evaluation.
//!
//! | Kind | Ghost values |
//! |------|--------------|
//! | `Constant(v)` | `v` in both layers |
//! | `LinearExtrapolation` | `c0 + (c0 - c1)`, `c0 + 2(c0 - c1)` |
//! | `Symmetric` | `c0`, `c1` |
//! | `AntiSymmetric` | `-c0`, `-c1` |

pub mod conditions;
mod set;

pub use set::{BoundaryKind, BoundarySet};
