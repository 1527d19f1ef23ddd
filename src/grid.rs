/// Dense 3d scalar field stored as a flat row-major vector.
///
/// The flat index p of the voxel (x, y, z) is x * ny * nz + y * nz + z, which
/// is the order voxel values appear in a cube file: the first lattice
/// direction varies slowest and the last fastest.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// The 3d size of the data.
    pub size: Size,
    data: Vec<f64>,
}

impl Grid {
    /// Wraps a flattened vector, returns None if its length does not match
    /// the size.
    pub fn new(size: Size, data: Vec<f64>) -> Option<Self> {
        if data.len() == size.total {
            Some(Self { size, data })
        } else {
            None
        }
    }

    /// A grid with every voxel set to value.
    pub fn filled(size: Size, value: f64) -> Self {
        let data = vec![value; size.total];
        Self { size, data }
    }

    /// Converts a 1D index of the array into a 3D index
    pub fn to_3d(&self, p: usize) -> [usize; 3] {
        let x = p / (self.size.y * self.size.z);
        let y = (p / self.size.z) % self.size.y;
        let z = p % self.size.z;
        [x, y, z]
    }

    /// Converts a 3D index into the index of the flattened array
    pub fn to_1d(&self, index: [usize; 3]) -> usize {
        (index[0] * self.size.y + index[1]) * self.size.z + index[2]
    }

    /// The value at a 3D index, None if out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<f64> {
        if index[0] < self.size.x
           && index[1] < self.size.y
           && index[2] < self.size.z
        {
            Some(self.data[self.to_1d(index)])
        } else {
            None
        }
    }

    /// The voxel values in file order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Sum of every voxel.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Applies f to every voxel, returning a grid of the same shape.
    pub fn map<F>(&self, f: F) -> Self
        where F: Fn(f64) -> f64
    {
        let data = self.data.iter().map(|v| f(*v)).collect::<Vec<f64>>();
        Self { size: self.size,
               data }
    }
}

/// Size of the density data in 3d
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    /// Number of voxels along the first lattice direction.
    pub x: usize,
    /// Number of voxels along the second lattice direction.
    pub y: usize,
    /// Number of voxels along the third lattice direction.
    pub z: usize,
    /// Total number of voxels.
    pub total: usize,
}

impl Size {
    /// The length of the flattened array for the density data in 3d, None if
    /// it overflows.
    pub fn new(x: usize, y: usize, z: usize) -> Option<Self> {
        let total = x.checked_mul(y)?.checked_mul(z)?;
        Some(Self { x, y, z, total })
    }

    pub fn as_array(&self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }
}
