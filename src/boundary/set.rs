//! Per-side, per-field boundary descriptions.

use std::fmt;

use log::debug;
use ndarray::{Array3, s};

use crate::grid::{Domain, Topography};
use crate::state::{NFIELDS, States};
use crate::types::{Side, Sides};

use super::conditions;

/// How the ghost cells of one field on one side are filled.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundaryKind {
    /// Fixed value in both ghost layers.
    Constant(f64),
    /// Linear continuation of the two boundary cells.
    LinearExtrapolation,
    /// Mirror image of the interior.
    Symmetric,
    /// Negated mirror image of the interior.
    AntiSymmetric,
}

impl BoundaryKind {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryKind::Constant(_) => "constant",
            BoundaryKind::LinearExtrapolation => "extrap",
            BoundaryKind::Symmetric => "symmetric",
            BoundaryKind::AntiSymmetric => "antisymmetric",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryKind::Constant(v) => write!(f, "constant({v})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Boundary descriptions for every side and every conserved field.
///
/// # Example
///
/// ```
/// use cu_swe::boundary::{BoundaryKind, BoundarySet};
/// use cu_swe::types::Side;
///
/// let bcs = BoundarySet::extrapolate_all()
///     .with_side(Side::West, [BoundaryKind::Constant(1.5), BoundaryKind::Constant(0.3), BoundaryKind::Constant(0.0)])
///     .with_wall(Side::North);
/// assert_eq!(bcs.get(Side::North)[2], BoundaryKind::AntiSymmetric);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundarySet {
    sides: Sides<[BoundaryKind; NFIELDS]>,
}

impl Default for BoundarySet {
    fn default() -> Self {
        Self::extrapolate_all()
    }
}

impl BoundarySet {
    /// Explicit description for every side.
    pub fn new(sides: Sides<[BoundaryKind; NFIELDS]>) -> Self {
        Self { sides }
    }

    /// Linear extrapolation of every field on every side.
    pub fn extrapolate_all() -> Self {
        Self::new(Sides::uniform([BoundaryKind::LinearExtrapolation; NFIELDS]))
    }

    /// Solid walls on every side.
    pub fn walls() -> Self {
        let mut set = Self::extrapolate_all();
        for side in Side::ALL {
            set = set.with_wall(side);
        }
        set
    }

    /// Replace the description of one side.
    pub fn with_side(mut self, side: Side, kinds: [BoundaryKind; NFIELDS]) -> Self {
        *self.sides.get_mut(side) = kinds;
        self
    }

    /// Solid wall on `side`: the water level and tangential momentum are
    /// mirrored, the normal momentum is mirrored with opposite sign.
    pub fn with_wall(self, side: Side) -> Self {
        let mut kinds = [BoundaryKind::Symmetric; NFIELDS];
        kinds[if side.is_x_normal() { 1 } else { 2 }] = BoundaryKind::AntiSymmetric;
        self.with_side(side, kinds)
    }

    /// Descriptions for one side, ordered `(w, hu, hv)`.
    pub fn get(&self, side: Side) -> &[BoundaryKind; NFIELDS] {
        self.sides.get(side)
    }

    /// Fill the ghost layers of `q` along all four sides.
    ///
    /// Only the interior stretch of each side is touched; halo corners are
    /// left as they are.
    pub fn apply(&self, q: &mut Array3<f64>, domain: &Domain) {
        for (side, kinds) in self.sides.iter() {
            let layers = domain.ghost_layers(side);
            let along = domain.tangential(side);
            for (k, kind) in kinds.iter().enumerate() {
                let line = |idx: usize| {
                    if side.is_x_normal() {
                        s![k, along.clone(), idx]
                    } else {
                        s![k, idx, along.clone()]
                    }
                };
                let (inner, outer, first, second) = q.multi_slice_mut((
                    line(layers.inner),
                    line(layers.outer),
                    line(layers.first),
                    line(layers.second),
                ));
                let ghosts = [inner, outer];
                let interior = [first.view(), second.view()];
                match *kind {
                    BoundaryKind::Constant(value) => conditions::constant(ghosts, value),
                    BoundaryKind::LinearExtrapolation => {
                        conditions::linear_extrapolation(ghosts, interior)
                    }
                    BoundaryKind::Symmetric => conditions::mirror(ghosts, interior, 1.0),
                    BoundaryKind::AntiSymmetric => conditions::mirror(ghosts, interior, -1.0),
                }
            }
        }
    }

    /// Fill the ghost layers of `states.q`.
    pub fn apply_to_states(&self, states: &mut States) {
        let States { domain, q, .. } = states;
        self.apply(q, domain);
    }

    /// Set ghost-cell elevations to match the water-level condition of
    /// each side, then fill the halo corners.
    ///
    /// Constant levels hold the boundary face elevation, extrapolated
    /// levels extrapolate it, mirrored levels mirror it.
    pub fn prepare_topography(&self, topo: &mut Topography, domain: &Domain) {
        for (side, kinds) in self.sides.iter() {
            debug!(
                "{} boundary: w = {}, hu = {}, hv = {}",
                side, kinds[0], kinds[1], kinds[2]
            );
            match kinds[0] {
                BoundaryKind::Constant(_) => topo.hold_ghosts(domain, side),
                BoundaryKind::LinearExtrapolation => topo.extrapolate_ghosts(domain, side),
                BoundaryKind::Symmetric | BoundaryKind::AntiSymmetric => {
                    topo.mirror_ghosts(domain, side)
                }
            }
        }
        topo.fill_corners(domain);
    }
}
