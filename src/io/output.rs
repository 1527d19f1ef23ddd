use crate::analysis::Outcome;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The banner printed before a run.
pub fn splash() -> String {
    String::from(
"------------------------------------------------------------------------
                             Cube2IPR                                   
Converts a bunch of wave functions to Inverse Participation ratios (IPR)
                     Written by Arpan Kundu                             
------------------------------------------------------------------------")
}

/// The banner printed once a run has completed.
pub fn finished() -> String {
    String::from(
"-----------------------------------------------------------------------
                        Cube2IPR FINISHED                              
-----------------------------------------------------------------------")
}

/// The console line for a single file.
pub fn single_line(ipr: f64) -> String {
    format!("IPR = {:12.4}", ipr)
}

/// Name of the report file written in prefix mode.
pub fn report_name(prefix: &str) -> String {
    format!("{}_ipr.dat", prefix)
}

/// The fixed comment block at the top of the report.
pub fn report_header() -> String {
    String::from(
"#======================================================================================
#                                Generated by Cube2IPR                                 
#A script that converts a bunch of wave functions to Inverse Participation ratios (IPR)
#                               Written by Arpan Kundu                                 
#--------------------------------------------------------------------------------------
#          Column-1 ==> File name   and column-2 ==> IPR (unitless)                    
#======================================================================================
")
}

/// Builds the report: the header then one line per file, in the order given.
///
/// Files that failed are kept as comment lines so the data columns stay
/// readable by plotting tools.
pub fn report_file(outcomes: &[Outcome]) -> String {
    let mut report = report_header();
    for outcome in outcomes {
        let line = match &outcome.result {
            Ok(result) => {
                format!(" {}    {:12.4}\n", outcome.source.display(), result.ipr)
            }
            Err(e) => format!("#{}    FAILED: {}\n", outcome.source.display(), e),
        };
        report.push_str(&line);
    }
    report
}

/// Write the report to file
pub fn write(report: String, filename: impl AsRef<Path>) -> std::io::Result<()> {
    let mut report_file = File::create(filename)?;
    report_file.write_all(report.as_bytes())?;
    Ok(())
}
