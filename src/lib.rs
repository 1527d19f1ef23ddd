//! Inverse participation ratios (IPR) of wavefunctions stored in cube files,
//! the volumetric format written by [Qbox], [Gaussian], Quantum Espresso and
//! friends.
//!
//! The IPR measures how localised a wavefunction is:
//! ```text
//! IPR = ∫ψ⁴ dV / ∫ψ² dV
//! ```
//! Larger values mean the wavefunction is concentrated in fewer voxels.
//!
//! ## Installing the binary
//! ### From Source
//! ```sh
//! $ cargo build --release
//! $ mv ./target/release/cube2ipr ~/bin
//! ```
//!
//! ## Usage
//! For a single file the IPR is printed to the terminal.
//! ```sh
//! $ cube2ipr wf66-frame-0.cube
//! ```
//! A series of wavefunctions sharing a prefix can be processed in one go, the
//! files are ordered by the last integer in their name and the results are
//! written to `<prefix>_ipr.dat`.
//! ```sh
//! $ cube2ipr -prefix wf_
//! ```
//! A file that cannot be read is recorded as a comment line in the report and
//! the run carries on, pass `--strict` to stop at the first failure instead.
//!
//! ## Using the library
//! ```no_run
//! use cube2ipr::io::cube::CubeVolume;
//! use cube2ipr::reducer;
//!
//! let volume = CubeVolume::load("wf_1.cube").unwrap();
//! let ipr = reducer::ipr(&volume).unwrap();
//! ```
//!
//! ## Conventions
//! The cell volume is the signed determinant of the three per-voxel step
//! vectors and each integral is that volume times the plain sum of the
//! voxels. Both integrals share the factor so it cancels in the ratio.
//! Voxel values past the count declared in the header are ignored with a
//! warning.
//!
//! [Qbox]: <http://qboxcode.org/>
//! [Gaussian]: <https://gaussian.com/>

/// Reads and reduces single files or whole prefix batches.
pub mod analysis;
/// For parsing command-line arguments.
pub mod arguments;
/// Contains [Atom](atoms::Atom) for the atoms listed in a cube header and
/// [Lattice](atoms::Lattice) for the voxel step vectors.
pub mod atoms;
/// Provides custom errors types.
pub mod errors;
/// Contains [Grid](grid::Grid), the dense 3d field read from a cube file.
pub mod grid;
/// Handles the File I/O: the cube reader, prefix discovery and the report.
pub mod io;
/// Provides the [Bar](progress::Bar) shown while a batch is processed.
pub mod progress;
/// Cell volume, integration and the IPR itself.
pub mod reducer;
/// Misc functions for vector and matrix manipulation.
pub mod utils;
