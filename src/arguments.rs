use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// What the program has been asked to reduce.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    /// A single cube file, the IPR is printed.
    Single(PathBuf),
    /// Every `<prefix>*.cube`, the IPRs are written to `<prefix>_ipr.dat`.
    Prefix(String),
}

/// Create a container for dealing with clap and being able to test arg parsing
pub enum ClapApp {
    App,
}

impl ClapApp {
    /// Create and return the clap::Command
    pub fn get(&self) -> Command {
        Command::new("Cube2IPR")
            .version(crate_version!())
            .about("Converts a bunch of wave functions to Inverse Participation ratios (IPR)")
            .arg(Arg::new("file")
                .index(1)
                .required_unless_present("prefix")
                .conflicts_with("prefix")
                .value_name("FILE.cube")
                .help("The cube file to analyse."))
            .arg(Arg::new("prefix")
                .short('p')
                .long("prefix")
                .num_args(1)
                .value_name("FILE_PREFIX")
                .help("Analyse every <FILE_PREFIX>*.cube.")
                .long_help(
"Analyse every file matching <FILE_PREFIX>*.cube, ordered by the last integer
in the file name (wf_2.cube before wf_10.cube). The results are written to
<FILE_PREFIX>_ipr.dat. The single-dash spelling -prefix is also accepted."))
            .arg(Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .conflicts_with("file")
                .help("Stop at the first file that cannot be processed.")
                .long_help(
"By default a file that cannot be read or reduced is logged, recorded as a
comment line in the report and the remaining files are processed. With this
flag the first failure aborts the run and no report is written."))
            .arg(Arg::new("no progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Hide the progress bar in prefix mode."))
            .arg(Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more detail, repeat for more (-v, -vv, -vvv)."))
    }
}

/// Rewrites the single-dash `-prefix` into `--prefix` so clap does not read it
/// as `-p refix`.
pub fn normalise<I, T>(args: I) -> Vec<OsString>
    where I: IntoIterator<Item = T>,
          T: Into<OsString>
{
    args.into_iter()
        .map(|a| {
            let a: OsString = a.into();
            if a == "-prefix" {
                OsString::from("--prefix")
            } else {
                a
            }
        })
        .collect()
}

/// Holds the arguments passed to the program from the command-line
pub struct Args {
    pub mode: Mode,
    pub strict: bool,
    pub progress: bool,
    pub verbosity: u8,
}

impl Args {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: ArgMatches) -> Self {
        // clap guarantees exactly one of file and prefix
        let mode = match arguments.get_one::<String>("prefix") {
            Some(prefix) => Mode::Prefix(prefix.clone()),
            None => match arguments.get_one::<String>("file") {
                Some(f) => Mode::Single(PathBuf::from(f)),
                None => Mode::Single(PathBuf::new()),
            },
        };
        Self { mode,
               strict: arguments.get_flag("strict"),
               progress: !arguments.get_flag("no progress"),
               verbosity: arguments.get_count("verbose") }
    }
}
