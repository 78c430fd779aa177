use bitflags::bitflags;
use chrono::{DateTime, Local};
use glob::Pattern;

use crate::culture::Culture;
use crate::error::Error;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileTypes: u8 {
        const FILE = 1;
        const DIRECTORY = 1 << 1;
        const DIRECTORY_CONTENTS = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TimestampTypes: u8 {
        const CREATION = 1;
        const LAST_ACCESS = 1 << 1;
        const LAST_WRITE = 1 << 2;
    }
}

impl FileTypes {
    // The set starts empty, so `/F:` with no letters selects nothing.
    pub fn from_letters(letters: &str) -> Result<Self, Error> {
        let mut types = FileTypes::empty();
        for letter in letters.chars() {
            types |= match letter {
                'C' => FileTypes::FILE,
                'D' => FileTypes::DIRECTORY,
                'S' => FileTypes::DIRECTORY_CONTENTS,
                other => return Err(Error::UnrecognizedFileType(other)),
            };
        }
        Ok(types)
    }
}

impl TimestampTypes {
    pub fn from_letters(letters: &str) -> Result<Self, Error> {
        let mut types = TimestampTypes::empty();
        for letter in letters.chars() {
            types |= match letter {
                'C' => TimestampTypes::CREATION,
                'A' => TimestampTypes::LAST_ACCESS,
                'W' => TimestampTypes::LAST_WRITE,
                other => return Err(Error::UnrecognizedTimestampType(other)),
            };
        }
        Ok(types)
    }
}

// Mutated left to right as options parse; operands see whatever values are
// in effect when they are reached.
pub struct Config {
    pub file_types: FileTypes,
    pub timestamp_types: TimestampTypes,
    pub date_time: DateTime<Local>,
    pub culture: Culture,
    pub pattern: Pattern,
    pub match_all: bool,
    pub recursive: bool,
    pub verbose: bool,
}

impl Config {
    pub fn new() -> Self {
        Config {
            file_types: FileTypes::all(),
            timestamp_types: TimestampTypes::all(),
            date_time: Local::now(),
            culture: Culture::default(),
            pattern: Pattern::new("*.*").unwrap(),
            match_all: true,
            recursive: false,
            verbose: false,
        }
    }

    // `*.*` matches every name, including dotless ones, the Win32
    // enumeration meaning of that filter.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<(), Error> {
        self.match_all = pattern == "*.*" || pattern == "*";
        self.pattern = Pattern::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(())
    }

    pub fn matches(&self, name: &str) -> bool {
        self.match_all || self.pattern.matches(name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
