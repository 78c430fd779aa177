use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;

// The pattern filters entry names; recursion always descends into every
// subdirectory regardless of whether its name matches.
pub fn child_files(directory: &Path, config: &Config) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    collect(directory, config, true, &mut entries)?;
    Ok(entries)
}

pub fn child_directories(directory: &Path, config: &Config) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    collect(directory, config, false, &mut entries)?;
    Ok(entries)
}

fn collect(
    directory: &Path,
    config: &Config,
    want_files: bool,
    entries: &mut Vec<PathBuf>,
) -> io::Result<()> {
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let is_dir = entry.file_type()?.is_dir();
        if is_dir != want_files {
            let name = entry.file_name();
            if config.matches(&name.to_string_lossy()) {
                entries.push(entry.path());
            }
        }
        if is_dir && config.recursive {
            collect(&entry.path(), config, want_files, entries)?;
        }
    }
    Ok(())
}
