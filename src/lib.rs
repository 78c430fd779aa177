use std::path::Path;

mod apply;
mod config;
mod culture;
mod error;
mod walk;

pub use config::{Config, FileTypes, TimestampTypes};
pub use culture::Culture;
pub use error::Error;

use apply::{apply_timestamps, EntryKind};

pub const USAGE: &str = "\
[options...] <files or folders...>
options:
  /F:types              file types to process (default: CDS)
                    C - file
                    D - directory
                    S - subfolders contained inside a directory
  /S:types              timestamp types to set (default: CAW)
                    C - creation time
                    A - last access time
                    W - last write time
  /T:dateTime           date/time to use (default: now)
  /C:cultureNameOrLCID  culture used to parse and display timestamps (default: en-US)
  /P:searchPattern      file search filter (default: *.*)
  /R                    enable recursive folder search (default: disabled)
  /V                    enable verbose mode (default: disabled)
examples:
  1. overwrite dates of specified files:
     \"README.md\" \"LICENSE.md\"
  2. overwrite creation time of specified directory, its subfolders and files:
     /S:C \"/T:5/11/2020 11:54:34 AM\" \"docs\"
  3. overwrite dates of text files contained inside specified directory:
     /F:C /R \"/P:*.txt\" \"docs\"
  4. overwrite dates of subfolders contained inside specified directory:
     /F:S /R \"docs\"
  5. overwrite dates of specified directory:
     /F:D \"docs\"
";

/// Options take effect only for operands that follow them; the first error
/// aborts everything that follows, with no rollback of writes already made.
pub fn run(args: &[String]) -> Result<(), Error> {
    let mut config = Config::new();

    for (index, arg) in args.iter().enumerate() {
        if let Some(letters) = arg.strip_prefix("/F:") {
            config.file_types = FileTypes::from_letters(letters)?;
        } else if let Some(letters) = arg.strip_prefix("/S:") {
            config.timestamp_types = TimestampTypes::from_letters(letters)?;
        } else if let Some(value) = arg.strip_prefix("/T:") {
            config.date_time = config.culture.parse(value)?;
            if config.verbose {
                println!("timestamp: {}", config.culture.format(&config.date_time));
            }
        } else if let Some(value) = arg.strip_prefix("/C:") {
            config.culture = Culture::resolve(value)?;
            if config.verbose {
                println!("culture: {}", config.culture.name());
            }
        } else if let Some(pattern) = arg.strip_prefix("/P:") {
            config.set_pattern(pattern)?;
        } else if arg == "/R" {
            config.recursive = true;
        } else if arg == "/V" {
            config.verbose = true;
        } else if Path::new(arg).is_dir() {
            process_directory(Path::new(arg), &config)?;
        } else if Path::new(arg).is_file() {
            process_file(Path::new(arg), &config)?;
        } else {
            return Err(Error::UnrecognizedArgument {
                argument: arg.clone(),
                index,
            });
        }
    }

    Ok(())
}

// The three passes are independent; any combination of file-type flags runs.
fn process_directory(directory: &Path, config: &Config) -> Result<(), Error> {
    if config.file_types.contains(FileTypes::FILE) {
        for file in walk::child_files(directory, config)? {
            apply_timestamps(&file, EntryKind::File, config)?;
        }
    }

    if config.file_types.contains(FileTypes::DIRECTORY_CONTENTS) {
        for sub_directory in walk::child_directories(directory, config)? {
            apply_timestamps(&sub_directory, EntryKind::Directory, config)?;
        }
    }

    if config.file_types.contains(FileTypes::DIRECTORY) {
        apply_timestamps(directory, EntryKind::Directory, config)?;
    }

    Ok(())
}

fn process_file(file: &Path, config: &Config) -> Result<(), Error> {
    // Only enabled file types get touched; a file operand without the file
    // flag is skipped, not an error.
    if config.file_types.contains(FileTypes::FILE) {
        apply_timestamps(file, EntryKind::File, config)?;
    }
    Ok(())
}
