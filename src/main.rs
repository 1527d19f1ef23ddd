use anyhow::{bail, Context, Result};
use cube2ipr::analysis;
use cube2ipr::arguments::{self, Args, ClapApp, Mode};
use cube2ipr::io::output;
use log::LevelFilter;

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    match verbosity {
        0 => builder.filter_level(LevelFilter::Warn),
        1 => builder.filter_level(LevelFilter::Info),
        2 => builder.filter_level(LevelFilter::Debug),
        _ => builder.filter_level(LevelFilter::Trace),
    };
    builder.format_timestamp(None).init();
}

fn main() -> Result<()> {
    // argument parsing
    let app = ClapApp::App.get();
    let args =
        Args::new(app.get_matches_from(arguments::normalise(std::env::args_os())));
    init_logging(args.verbosity);
    // print splash
    println!("{}", output::splash());
    match &args.mode {
        Mode::Single(file) => {
            let result = analysis::analyse_file(file).with_context(|| {
                             format!("Failed to compute the IPR of {}",
                                     file.display())
                         })?;
            println!("{}", output::single_line(result.ipr));
        }
        Mode::Prefix(prefix) => {
            let batch =
                analysis::analyse_prefix(prefix, args.strict, args.progress)
                    .with_context(|| format!("Failed to process {}*.cube", prefix))?;
            batch.write()?;
            println!("IPR data is written in file: {}", batch.report.display());
            let failures = batch.failures();
            if failures > 0 {
                bail!("{} of {} files could not be processed, see {}",
                      failures,
                      batch.outcomes.len(),
                      batch.report.display());
            }
        }
    }
    println!("{}", output::finished());
    Ok(())
}
