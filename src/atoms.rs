use crate::utils;

/// A single atom record from the header of a cube file.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    /// The first column of the atom line, usually the atomic number.
    pub label: String,
    /// The position in the length units of the file.
    pub position: [f64; 3],
}

/// Lattice - the per-voxel step vectors of the grid
///
/// > steps: [[f64; 3]; 3] - one row per lattice direction, as stored in the
/// >                        file
/// > volume: f64 - the signed determinant of steps
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    pub steps: [[f64; 3]; 3],
    pub volume: f64,
}

impl Lattice {
    /// Initialises the structure from the step vectors.
    ///
    /// > [
    /// >     [ax, ay, az],
    /// >     [bx, by, bz],
    /// >     [cx, cy, cz],
    /// >  ]
    ///
    /// The volume keeps its sign: a left-handed set of vectors gives a
    /// negative volume and a degenerate one gives zero.
    pub fn new(lattice: [[f64; 3]; 3]) -> Self {
        let volume = utils::determinant(&lattice);
        Self { steps: lattice,
               volume }
    }
}
