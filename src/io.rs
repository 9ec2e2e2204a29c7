use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SniffError};

/// Bytes the upload path inspects before streaming the rest of the body.
pub const DEFAULT_PREFIX_LEN: usize = 16;

const MAX_PREALLOC: usize = 64 * 1024;

/// Reads at most `limit` bytes from the start of `path`.
///
/// A file shorter than `limit` yields a shorter buffer, possibly empty; the
/// classifier decides what that means.
pub fn read_prefix(path: impl AsRef<Path>, limit: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let io_err = |source: io::Error| SniffError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = open_read_only(path).map_err(io_err)?;
    let prefix = read_prefix_from(file, limit).map_err(io_err)?;

    debug!(path = %path.display(), bytes = prefix.len(), "read prefix");
    Ok(prefix)
}

/// Reads at most `limit` bytes from any reader, retrying on interruption.
pub fn read_prefix_from<R: Read>(reader: R, limit: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(limit.min(MAX_PREALLOC));
    reader.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn open_read_only(path: &Path) -> io::Result<File> {
    let file = OpenOptions::new().read(true).open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        ));
    }
    Ok(file)
}
