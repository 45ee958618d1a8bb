//! Whole-file loading with explicit failure classification.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ZtripError;

/// Read the full contents of `path` into memory.
///
/// Directories are rejected outright instead of surfacing as a zero-byte
/// read, and the byte count is checked against the size reported by the
/// filesystem so a file truncated after stat is never silently accepted.
/// A file that grew after stat is read only up to the reported size.
pub fn load_file(path: &Path) -> Result<Vec<u8>, ZtripError> {
    if path.is_dir() {
        return Err(ZtripError::Directory(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| ZtripError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let expected = file
        .metadata()
        .map_err(|source| ZtripError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len() as usize;

    let mut data = Vec::new();
    data.try_reserve_exact(expected)
        .map_err(|_| ZtripError::FileBuffer(path.to_path_buf()))?;
    // A read error partway through leaves us short of `expected` just like a
    // truncated file does, and is reported the same way.
    let _ = file.take(expected as u64).read_to_end(&mut data);
    if data.len() != expected {
        return Err(ZtripError::ShortRead {
            path: path.to_path_buf(),
            got: data.len(),
            expected,
        });
    }
    Ok(data)
}
