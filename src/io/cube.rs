use crate::atoms::{Atom, Lattice};
use crate::errors::{CubeError, FormatIssue};
use crate::grid::{Grid, Size};
use crate::io::reader::BufReader;
use std::io::{self, BufRead};
use std::path::Path;
use std::str::FromStr;

/// Upper bound on the up-front allocation for the voxel buffer, the vector
/// still grows past it for larger grids.
const MAX_PREALLOCATION: usize = 1 << 24;

/// A parsed cube file: the header geometry plus the full voxel grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeVolume {
    /// The two free-form comment lines at the top of the file.
    pub comments: [String; 2],
    /// Number of atoms declared in the header.
    pub atom_count: usize,
    /// Origin of the grid in the length units of the file.
    pub origin: [f64; 3],
    /// Number of voxels along each lattice direction, in declared order.
    pub voxel_counts: [usize; 3],
    /// The per-voxel step vectors, one row per lattice direction.
    pub lattice: Lattice,
    /// The atoms listed in the header.
    pub atoms: Vec<Atom>,
    /// The scalar field, voxel_counts[0] x voxel_counts[1] x voxel_counts[2].
    pub grid: Grid,
}

impl CubeVolume {
    /// Reads a cube file from disk.
    ///
    /// Voxel values past the declared na * nb * nc are ignored (a warning is
    /// logged) to stay compatible with files produced by tools that pad the
    /// final line. A shorter stream is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CubeError> {
        let path = path.as_ref();
        log::info!("Reading {} as cube format.", path.display());
        let reader = BufReader::open(path).map_err(|e| file_access(path, e))?;
        read(reader, path)
    }

    /// Reads a cube formatted stream, path is only used to label errors.
    pub fn from_reader<R: BufRead>(reader: R,
                                   path: impl AsRef<Path>)
                                   -> Result<Self, CubeError> {
        read(BufReader::new(reader), path.as_ref())
    }
}

fn file_access(path: &Path, source: io::Error) -> CubeError {
    CubeError::FileAccess { path: path.to_path_buf(),
                            source }
}

fn format_error(path: &Path, line: usize, issue: FormatIssue) -> CubeError {
    CubeError::Format { path: path.to_path_buf(),
                        line,
                        issue }
}

/// The whitespace separated fields of one header line.
struct Fields<'p, 'b> {
    path: &'p Path,
    line: usize,
    fields: Vec<&'b str>,
}

impl<'p, 'b> Fields<'p, 'b> {
    fn text(&self, i: usize, name: &str) -> Result<&'b str, CubeError> {
        match self.fields.get(i) {
            Some(f) => Ok(*f),
            None => Err(format_error(self.path,
                                     self.line,
                                     FormatIssue::MissingField(name.to_string()))),
        }
    }

    fn parse<T: FromStr>(&self, i: usize, name: &str) -> Result<T, CubeError> {
        let text = self.text(i, name)?;
        text.parse::<T>().map_err(|_| {
                             format_error(self.path,
                                          self.line,
                                          FormatIssue::InvalidNumber(name.to_string(),
                                                                     text.to_string()))
                         })
    }

    fn vector(&self, start: usize, name: &str) -> Result<[f64; 3], CubeError> {
        Ok([self.parse(start, &format!("{} x", name))?,
            self.parse(start + 1, &format!("{} y", name))?,
            self.parse(start + 2, &format!("{} z", name))?])
    }
}

/// Reads the next line, naming it for the error if the file has ended.
fn next_line<'p, 'b, R: BufRead>(reader: &mut BufReader<R>,
                                 buffer: &'b mut String,
                                 what: &str,
                                 path: &'p Path)
                                 -> Result<Fields<'p, 'b>, CubeError> {
    match reader.read_line(buffer) {
        Some(Ok(text)) => {
            let text: &'b String = text;
            Ok(Fields { path,
                        line: reader.line_number(),
                        fields: text.split_whitespace().collect() })
        }
        Some(Err(e)) => Err(file_access(path, e)),
        None => Err(format_error(path,
                                 reader.line_number() + 1,
                                 FormatIssue::MissingLine(what.to_string()))),
    }
}

fn read<R: BufRead>(mut reader: BufReader<R>,
                    path: &Path)
                    -> Result<CubeVolume, CubeError> {
    let mut buffer = String::new();
    // first two lines are comments
    let mut comments = [String::new(), String::new()];
    for comment in comments.iter_mut() {
        let line = next_line(&mut reader, &mut buffer, "comment", path)?;
        *comment = line.fields.join(" ");
    }
    let (atom_count, origin) = {
        let line = next_line(&mut reader, &mut buffer, "atom count", path)?;
        let natoms = line.parse::<i64>(0, "atom count")?;
        if natoms < 0 {
            return Err(format_error(path,
                                    line.line,
                                    FormatIssue::NegativeAtomCount(natoms)));
        }
        (natoms as usize, line.vector(1, "origin")?)
    };
    let mut voxel_counts = [0usize; 3];
    let mut steps = [[0f64; 3]; 3];
    let mut size_line = 0;
    for (i, (count, step)) in
        voxel_counts.iter_mut().zip(steps.iter_mut()).enumerate()
    {
        let what = format!("voxel count {}", i + 1);
        let line = next_line(&mut reader, &mut buffer, &what, path)?;
        *count = line.parse::<usize>(0, &what)?;
        *step = line.vector(1, &format!("lattice vector {}", i + 1))?;
        size_line = line.line;
    }
    let lattice = Lattice::new(steps);
    let size = match Size::new(voxel_counts[0], voxel_counts[1], voxel_counts[2])
    {
        Some(size) => size,
        None => {
            return Err(format_error(path,
                                    size_line,
                                    FormatIssue::GridTooLarge(voxel_counts)))
        }
    };
    let mut atoms = Vec::with_capacity(atom_count.min(MAX_PREALLOCATION));
    for i in 0..atom_count {
        let what = format!("atom {}", i + 1);
        let line = next_line(&mut reader, &mut buffer, &what, path)?;
        let label = line.text(0, &format!("{} label", what))?.to_string();
        // the charge column must be there but is not kept
        let _ = line.text(1, &format!("{} charge", what))?;
        let position = line.vector(2, &what)?;
        atoms.push(Atom { label, position });
    }
    let data = read_voxels(&mut reader, &mut buffer, size.total, path)?;
    let found = data.len();
    let grid = Grid::new(size, data).ok_or_else(|| {
                                        format_error(path,
                                                     reader.line_number(),
                                                     FormatIssue::Truncated(size.total,
                                                                            found))
                                    })?;
    log::info!("Read {} voxels ({} x {} x {}) and {} atoms from {}.",
               size.total,
               size.x,
               size.y,
               size.z,
               atom_count,
               path.display());
    Ok(CubeVolume { comments,
                    atom_count,
                    origin,
                    voxel_counts,
                    lattice,
                    atoms,
                    grid })
}

/// Reads exactly total values from the rest of the stream.
fn read_voxels<R: BufRead>(reader: &mut BufReader<R>,
                           buffer: &mut String,
                           total: usize,
                           path: &Path)
                           -> Result<Vec<f64>, CubeError> {
    let mut data = Vec::with_capacity(total.min(MAX_PREALLOCATION));
    let mut excess = 0usize;
    while let Some(text) = reader.read_line(buffer) {
        let text = text.map_err(|e| file_access(path, e))?;
        let line = reader.line_number();
        for value in text.split_whitespace() {
            if data.len() == total {
                excess += 1;
                continue;
            }
            match value.parse::<f64>() {
                Ok(v) => data.push(v),
                Err(_) => {
                    let field = format!("voxel {}", data.len() + 1);
                    return Err(format_error(path,
                                            line,
                                            FormatIssue::InvalidNumber(field,
                                                                       value.to_string())));
                }
            }
        }
    }
    if data.len() < total {
        return Err(format_error(path,
                                reader.line_number(),
                                FormatIssue::Truncated(total, data.len())));
    }
    if excess > 0 {
        log::warn!("{}: ignoring {} values past the declared {} voxels.",
                   path.display(),
                   excess,
                   total);
    }
    Ok(data)
}
