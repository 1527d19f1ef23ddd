use crate::errors::ReduceError;
use crate::grid::Grid;
use crate::io::cube::CubeVolume;
use std::path::PathBuf;

/// The outcome of reducing a single cube file.
#[derive(Clone, Debug, PartialEq)]
pub struct ReductionResult {
    /// The file the volume was read from.
    pub source: PathBuf,
    /// Integral of the wavefunction itself.
    pub integral: f64,
    /// The inverse participation ratio.
    pub ipr: f64,
}

impl ReductionResult {
    /// Reduces an already parsed volume.
    pub fn from_volume(source: PathBuf,
                       volume: &CubeVolume)
                       -> Result<Self, ReduceError> {
        let integral = integrate(&volume.grid, cell_volume(volume));
        let ipr = ipr(volume)?;
        Ok(Self { source,
                  integral,
                  ipr })
    }
}

/// The signed determinant of the lattice step vectors.
///
/// No absolute value is taken: a left-handed lattice gives a negative volume
/// and a degenerate one gives zero. Both cancel out of the IPR ratio.
pub fn cell_volume(volume: &CubeVolume) -> f64 {
    volume.lattice.volume
}

/// cell_volume times the sum of every voxel.
///
/// Every voxel is weighted by the same scalar rather than by its own
/// differential volume. This matches the convention of the tools that write
/// the files and is kept for output compatibility, it is not a Riemann sum.
pub fn integrate(grid: &Grid, cell_volume: f64) -> f64 {
    cell_volume * grid.sum()
}

/// Raises every voxel to an integer power.
pub fn power(grid: &Grid, exponent: i32) -> Grid {
    grid.map(|v| v.powi(exponent))
}

/// Inverse participation ratio: integral of psi^4 over integral of psi^2.
pub fn ipr(volume: &CubeVolume) -> Result<f64, ReduceError> {
    let cell_volume = cell_volume(volume);
    let squared = integrate(&power(&volume.grid, 2), cell_volume);
    let fourth = integrate(&power(&volume.grid, 4), cell_volume);
    log::debug!("integral psi^2 = {:e}, integral psi^4 = {:e}",
                squared,
                fourth);
    if squared == 0. {
        return Err(ReduceError::DivisionByZero { cell_volume });
    }
    Ok(fourth / squared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Lattice;
    use crate::grid::Size;

    fn volume(grid: Grid, lattice: [[f64; 3]; 3]) -> CubeVolume {
        let size = grid.size.as_array();
        CubeVolume { comments: [String::new(), String::new()],
                     atom_count: 0,
                     origin: [0.; 3],
                     voxel_counts: size,
                     lattice: Lattice::new(lattice),
                     atoms: vec![],
                     grid }
    }

    fn cubic(step: f64) -> [[f64; 3]; 3] {
        [[step, 0., 0.], [0., step, 0.], [0., 0., step]]
    }

    #[test]
    fn reducer_cell_volume() {
        let v = volume(Grid::filled(Size::new(2, 2, 2).unwrap(), 1.),
                       [[3., 3., 0.], [-3., 3., 0.], [1., 1., 1.]]);
        assert!((cell_volume(&v) - 18.).abs() < 1E-12)
    }

    #[test]
    fn reducer_cell_volume_left_handed() {
        let v = volume(Grid::filled(Size::new(1, 1, 1).unwrap(), 1.),
                       [[0., 2., 0.], [2., 0., 0.], [0., 0., 2.]]);
        assert_eq!(cell_volume(&v), -8.)
    }

    #[test]
    fn reducer_integrate_constant() {
        let grid = Grid::filled(Size::new(3, 4, 5).unwrap(), 0.5);
        let integral = integrate(&grid, 0.25);
        assert!((integral - 0.25 * 0.5 * 60.).abs() < 1E-12)
    }

    #[test]
    fn reducer_power() {
        let size = Size::new(1, 2, 2).unwrap();
        let grid = Grid::new(size, vec![-1., 2., 0.5, 3.]).unwrap();
        assert_eq!(power(&grid, 2).values(), &[1., 4., 0.25, 9.]);
        assert_eq!(power(&grid, 4).values(), &[1., 16., 0.0625, 81.]);
        assert_eq!(power(&grid, 4).size, size);
    }

    #[test]
    fn reducer_ipr_constant() {
        let v = volume(Grid::filled(Size::new(4, 3, 2).unwrap(), 2.),
                       cubic(0.3));
        assert!((ipr(&v).unwrap() - 4.).abs() < 1E-12)
    }

    #[test]
    fn reducer_ipr_independent_of_volume() {
        let grid = Grid::filled(Size::new(5, 5, 5).unwrap(), 2.);
        let small = ipr(&volume(grid.clone(), cubic(0.1))).unwrap();
        let large = ipr(&volume(grid, cubic(7.))).unwrap();
        assert!((small - large).abs() < 1E-9)
    }

    #[test]
    fn reducer_ipr_single_voxel() {
        let size = Size::new(2, 2, 2).unwrap();
        let mut data = vec![0.; 8];
        data[5] = 3.;
        let v = volume(Grid::new(size, data).unwrap(), cubic(0.5));
        // (0.125 * 81) / (0.125 * 9)
        assert!((ipr(&v).unwrap() - 9.).abs() < 1E-12)
    }

    #[test]
    fn reducer_ipr_two_voxels() {
        let size = Size::new(1, 1, 2).unwrap();
        let v = volume(Grid::new(size, vec![1., 2.]).unwrap(), cubic(1.));
        // (1 + 16) / (1 + 4)
        assert!((ipr(&v).unwrap() - 3.4).abs() < 1E-12)
    }

    #[test]
    fn reducer_ipr_zero_grid() {
        let v = volume(Grid::filled(Size::new(2, 2, 2).unwrap(), 0.),
                       cubic(1.));
        assert_eq!(ipr(&v),
                   Err(ReduceError::DivisionByZero { cell_volume: 1. }))
    }

    #[test]
    fn reducer_ipr_degenerate_lattice() {
        let v = volume(Grid::filled(Size::new(2, 2, 2).unwrap(), 1.),
                       [[1., 0., 0.], [2., 0., 0.], [0., 0., 1.]]);
        assert!(ipr(&v).is_err())
    }

    #[test]
    fn reducer_result_from_volume() {
        let v = volume(Grid::filled(Size::new(2, 2, 2).unwrap(), 2.),
                       cubic(0.5));
        let result =
            ReductionResult::from_volume(PathBuf::from("wf.cube"), &v).unwrap();
        assert_eq!(result.source, PathBuf::from("wf.cube"));
        assert!((result.integral - 0.125 * 16.).abs() < 1E-12);
        assert!((result.ipr - 4.).abs() < 1E-12);
    }
}
