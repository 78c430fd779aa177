use std::path::Path;

use filetime::FileTime;

use crate::config::{Config, TimestampTypes};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    fn tag(self) -> &'static str {
        match self {
            EntryKind::File => "F",
            EntryKind::Directory => "D",
        }
    }
}

/// Write the selected timestamp fields of one entry. Fields are independent
/// conditional writes in the order creation, last-access, last-write; a
/// failed write propagates immediately and earlier writes stay in place.
pub fn apply_timestamps(path: &Path, kind: EntryKind, config: &Config) -> Result<(), Error> {
    if config.verbose {
        println!("{}", verbose_line(path, kind, config)?);
    }

    let time = FileTime::from_unix_time(
        config.date_time.timestamp(),
        config.date_time.timestamp_subsec_nanos(),
    );

    if config.timestamp_types.contains(TimestampTypes::CREATION) {
        platform::set_creation_time(path, time).map_err(|source| Error::SetTimestamps {
            path: path.to_path_buf(),
            source,
        })?;
    }

    if config.timestamp_types.contains(TimestampTypes::LAST_ACCESS) {
        filetime::set_file_atime(path, time).map_err(|source| Error::SetTimestamps {
            path: path.to_path_buf(),
            source,
        })?;
    }

    if config.timestamp_types.contains(TimestampTypes::LAST_WRITE) {
        filetime::set_file_mtime(path, time).map_err(|source| Error::SetTimestamps {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

fn verbose_line(path: &Path, kind: EntryKind, config: &Config) -> Result<String, Error> {
    let absolute = std::path::absolute(path)?;
    Ok(format!(
        "{}  {}  {}",
        config.culture.format(&config.date_time),
        kind.tag(),
        absolute.display()
    ))
}

#[cfg(windows)]
mod platform {
    use std::fs::OpenOptions;
    use std::io;
    use std::os::windows::fs::OpenOptionsExt;
    use std::os::windows::io::AsRawHandle;
    use std::path::Path;

    use filetime::FileTime;
    use windows_sys::Win32::Storage::FileSystem::{
        SetFileTime, FILETIME, FILE_FLAG_BACKUP_SEMANTICS,
    };

    const WINDOWS_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

    pub fn set_creation_time(path: &Path, time: FileTime) -> io::Result<()> {
        // Backup semantics is required to open directory handles.
        let handle = OpenOptions::new()
            .write(true)
            .custom_flags(FILE_FLAG_BACKUP_SEMANTICS)
            .open(path)?;
        let intervals = (time.unix_seconds() + WINDOWS_EPOCH_OFFSET_SECS) * 10_000_000
            + i64::from(time.nanoseconds() / 100);
        let creation = FILETIME {
            dwLowDateTime: intervals as u32,
            dwHighDateTime: (intervals >> 32) as u32,
        };
        let ok = unsafe {
            SetFileTime(
                handle.as_raw_handle() as _,
                &creation,
                std::ptr::null(),
                std::ptr::null(),
            )
        };
        if ok == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(not(windows))]
mod platform {
    use std::io;
    use std::path::Path;

    use filetime::FileTime;

    // Creation time is not settable through any portable Unix interface;
    // the field is skipped rather than failing the entry, so the remaining
    // fields still get written.
    pub fn set_creation_time(_path: &Path, _time: FileTime) -> io::Result<()> {
        Ok(())
    }
}
