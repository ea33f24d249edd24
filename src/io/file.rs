use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use bytes::Bytes;
use tracing::debug;

use crate::error::IoError;

/// Default upper bound on the size of a file loaded into memory (256 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Read an entire file into an immutable buffer.
///
/// The file size is checked against `max_bytes` before any data is read, so
/// an oversized file is rejected without allocating for it.
pub fn read_file(path: &Path, max_bytes: u64) -> Result<Bytes, IoError> {
    let path_str = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|e| map_io_error(&path_str, e))?;
    if !metadata.is_file() {
        return Err(IoError::Read {
            path: path_str,
            message: "not a regular file".to_string(),
        });
    }

    let size = metadata.len();
    if size == 0 {
        return Err(IoError::Empty { path: path_str });
    }
    if size > max_bytes {
        return Err(IoError::FileTooLarge {
            path: path_str,
            size,
            limit: max_bytes,
        });
    }

    let data = fs::read(path).map_err(|e| map_io_error(&path_str, e))?;
    debug!(path = %path_str, bytes = data.len(), "loaded file");

    Ok(Bytes::from(data))
}

fn map_io_error(path: &str, error: std::io::Error) -> IoError {
    match error.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_string()),
        _ => IoError::Read {
            path: path.to_string(),
            message: error.to_string(),
        },
    }
}
