use crate::errors::Error;
use globset::Glob;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub mod cube;
pub mod output;
pub mod reader;

/// Splits a prefix into the directory to search and the start of the file
/// names to match.
///
/// The split is on the last separator of the raw text, so a trailing `.` or
/// `..` stays part of the name: `run/..` matches `run/..*.cube`.
fn split_prefix(prefix: &str) -> (PathBuf, String) {
    match prefix.rfind(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR) {
        Some(i) => (PathBuf::from(&prefix[..=i]), prefix[i + 1..].to_string()),
        None => (PathBuf::new(), prefix.to_string()),
    }
}

/// Finds every file matching `<prefix>*.cube`, ordered by the last integer in
/// the file name.
///
/// The prefix may contain a directory part, which is kept in the returned
/// paths. Hidden files are skipped unless the prefix itself names them.
pub fn prefix_files(prefix: &str) -> Result<Vec<PathBuf>, Error> {
    let (dir, name_prefix) = split_prefix(prefix);
    let pattern = format!("{}*.cube", name_prefix);
    let matcher = Glob::new(&pattern).map_err(|source| Error::Pattern {
                                         pattern: pattern.clone(),
                                         source,
                                     })?
                                     .compile_matcher();
    let search = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir.as_path()
    };
    let entries = fs::read_dir(search).map_err(|source| Error::Io {
        context: format!("Unable to list {}", search.display()),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
                             context: format!("Unable to list {}",
                                              search.display()),
                             source,
                         })?;
        let name = entry.file_name();
        if !matcher.is_match(&name) {
            continue;
        }
        if name.to_string_lossy().starts_with('.') && !name_prefix.starts_with('.')
        {
            continue;
        }
        let path = dir.join(&name);
        if path.is_file() {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(Error::NoMatches(format!("{}*.cube", prefix)));
    }
    sort_by_last_integer(&mut files);
    log::info!("Found {} files matching {}*.cube.", files.len(), prefix);
    Ok(files)
}

/// Sort key: numbered files first by the value of their last integer, then
/// files without digits, ties broken by the path.
fn sort_key(digits: &Regex, path: &Path) -> (bool, usize, String, PathBuf) {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => String::new(),
    };
    match digits.find_iter(&name).last() {
        Some(m) => {
            // compare by length then text so integers of any size order
            // numerically
            let trimmed = m.as_str().trim_start_matches('0');
            (false, trimmed.len(), trimmed.to_string(), path.to_path_buf())
        }
        None => (true, 0, String::new(), path.to_path_buf()),
    }
}

/// Orders paths by the last integer found in each file name, ascending
/// numerically rather than lexically (wf_2 before wf_10).
pub fn sort_by_last_integer(paths: &mut [PathBuf]) {
    // safe to unwrap as the pattern is a constant
    let digits = Regex::new(r"\d+").unwrap();
    paths.sort_by_cached_key(|p| sort_key(&digits, p));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn sort_numeric_not_lexical() {
        let mut files = paths(&["wf_10.cube", "wf_2.cube", "wf_1.cube"]);
        sort_by_last_integer(&mut files);
        assert_eq!(files, paths(&["wf_1.cube", "wf_2.cube", "wf_10.cube"]));
    }

    #[test]
    fn sort_uses_last_integer() {
        let mut files = paths(&["wf66-frame-3.cube", "wf12-frame-1.cube"]);
        sort_by_last_integer(&mut files);
        assert_eq!(files,
                   paths(&["wf12-frame-1.cube", "wf66-frame-3.cube"]));
    }

    #[test]
    fn sort_ignores_directory_digits() {
        let mut files = paths(&["run9/wf_5.cube", "run9/wf_40.cube"]);
        sort_by_last_integer(&mut files);
        assert_eq!(files, paths(&["run9/wf_5.cube", "run9/wf_40.cube"]));
    }

    #[test]
    fn sort_leading_zeros_and_huge() {
        let mut files = paths(&["wf_99999999999999999999999.cube",
                                "wf_007.cube",
                                "wf_10.cube"]);
        sort_by_last_integer(&mut files);
        assert_eq!(files,
                   paths(&["wf_007.cube",
                           "wf_10.cube",
                           "wf_99999999999999999999999.cube"]));
    }

    #[test]
    fn sort_unnumbered_last() {
        let mut files = paths(&["wf_final.cube", "wf_3.cube"]);
        sort_by_last_integer(&mut files);
        assert_eq!(files, paths(&["wf_3.cube", "wf_final.cube"]));
    }

    #[test]
    fn split_prefix_with_directory() {
        let (dir, name) = split_prefix("run1/wf_");
        assert_eq!(dir, PathBuf::from("run1"));
        assert_eq!(name, "wf_");
    }

    #[test]
    fn split_prefix_bare() {
        let (dir, name) = split_prefix("wf_");
        assert_eq!(dir, PathBuf::new());
        assert_eq!(name, "wf_");
    }

    #[test]
    fn split_prefix_directory_only() {
        let (dir, name) = split_prefix("run1/");
        assert_eq!(dir, PathBuf::from("run1/"));
        assert_eq!(name, "");
    }

    #[test]
    fn split_prefix_trailing_dots() {
        let (dir, name) = split_prefix("run1/..");
        assert_eq!(dir, PathBuf::from("run1/"));
        assert_eq!(name, "..");
        let (dir, name) = split_prefix(".");
        assert_eq!(dir, PathBuf::new());
        assert_eq!(name, ".");
    }

    #[test]
    fn prefix_files_dotted_name() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        File::create(sub.join("plain_1.cube")).unwrap();
        File::create(sub.join("..x_2.cube")).unwrap();
        let prefix = format!("{}/..", sub.display());
        let files = prefix_files(&prefix).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "..x_2.cube");
    }

    #[test]
    fn prefix_files_matches_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        for name in &["wf_10.cube", "wf_1.cube", "wf_2.cube", "wf_3.txt",
                      "other_1.cube", ".wf_4.cube"]
        {
            File::create(tmp.path().join(name)).unwrap();
        }
        let prefix = format!("{}/wf_", tmp.path().display());
        let files = prefix_files(&prefix).unwrap();
        let names = files.iter()
                         .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                         .collect::<Vec<String>>();
        assert_eq!(names, vec!["wf_1.cube", "wf_2.cube", "wf_10.cube"]);
        assert!(files.iter().all(|p| p.starts_with(tmp.path())));
    }

    #[test]
    fn prefix_files_no_match() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = format!("{}/wf_", tmp.path().display());
        assert!(matches!(prefix_files(&prefix), Err(Error::NoMatches(_))));
    }

    #[test]
    fn prefix_files_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = format!("{}/nowhere/wf_", tmp.path().display());
        assert!(matches!(prefix_files(&prefix), Err(Error::Io { .. })));
    }
}
