use crate::errors::Error;
use crate::io::{self, cube::CubeVolume, output};
use crate::progress::Bar;
use crate::reducer::ReductionResult;
use std::path::{Path, PathBuf};

/// What happened to one file of a batch.
#[derive(Debug)]
pub struct Outcome {
    pub source: PathBuf,
    pub result: Result<ReductionResult, Error>,
}

/// The files of a prefix run and where their report goes.
#[derive(Debug)]
pub struct Batch {
    /// `<prefix>_ipr.dat`
    pub report: PathBuf,
    pub outcomes: Vec<Outcome>,
}

impl Batch {
    /// Number of files that could not be reduced.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Writes the report file.
    pub fn write(&self) -> Result<(), Error> {
        output::write(output::report_file(&self.outcomes), &self.report)
            .map_err(|source| Error::Io { context: format!("Unable to write {}",
                                                           self.report
                                                               .display()),
                                          source })
    }
}

/// Reads and reduces a single cube file. The volume is dropped once the
/// result has been computed.
pub fn analyse_file(path: impl AsRef<Path>) -> Result<ReductionResult, Error> {
    let path = path.as_ref();
    let volume = CubeVolume::load(path)?;
    let result = ReductionResult::from_volume(path.to_path_buf(), &volume)?;
    log::debug!("{}: integral = {:e}, ipr = {:e}",
                path.display(),
                result.integral,
                result.ipr);
    Ok(result)
}

/// Reduces each file in order.
///
/// With strict set the first failure is returned and nothing else is
/// processed. Otherwise failures are logged and recorded against their file.
pub fn analyse_files(paths: Vec<PathBuf>,
                     strict: bool,
                     pbar: &Bar)
                     -> Result<Vec<Outcome>, Error> {
    let mut outcomes = Vec::with_capacity(paths.len());
    for source in paths {
        pbar.working_on(source.display().to_string());
        let result = analyse_file(&source);
        pbar.tick();
        match result {
            Err(e) if strict => return Err(e),
            Err(e) => {
                log::error!("Skipping {}: {}", source.display(), e);
                outcomes.push(Outcome { source,
                                        result: Err(e) });
            }
            Ok(r) => outcomes.push(Outcome { source,
                                             result: Ok(r) }),
        }
    }
    Ok(outcomes)
}

/// Finds every `<prefix>*.cube`, sorted by the last integer in the file name,
/// and reduces them. The report is not written.
pub fn analyse_prefix(prefix: &str,
                      strict: bool,
                      show_progress: bool)
                      -> Result<Batch, Error> {
    let files = io::prefix_files(prefix)?;
    let pbar = if show_progress {
        Bar::visible(files.len() as u64, String::from("Computing IPR: "))
    } else {
        Bar::new(files.len() as u64, String::from("Computing IPR: "))
    };
    let outcomes = analyse_files(files, strict, &pbar)?;
    Ok(Batch { report: PathBuf::from(output::report_name(prefix)),
               outcomes })
}
