use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a single check can fail.
///
/// The first three variants implicate the compression library itself and are
/// the findings this harness exists to surface; the rest are environment
/// errors around loading the input.
#[derive(Error, Debug)]
pub enum ZtripError {
    /// The library reported an error from a compression or decompression call.
    #[error("{op} error: {name}")]
    Codec { op: &'static str, name: &'static str },

    /// Decompression finished without error but regenerated the wrong length.
    #[error("Incorrect regenerated size: {got} != {expected}")]
    RegeneratedSize { got: usize, expected: usize },

    /// Regenerated bytes differ from the source despite no reported error.
    #[error("Silent decoding corruption !!! (first mismatch at byte {offset})")]
    Corruption { offset: usize },

    /// Input path points at a directory.
    #[error("Ignoring directory '{0}'")]
    Directory(PathBuf),

    /// Input file could not be opened or stat'd.
    #[error("Impossible to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    /// Scratch buffers for the round trip could not be allocated.
    #[error("not enough memory for round-trip buffers")]
    OutOfMemory,

    /// The file buffer could not be allocated.
    #[error("not enough memory to load '{0}'")]
    FileBuffer(PathBuf),

    /// Reading stopped before the size reported by stat.
    #[error("Error reading '{path}': read {got} of {expected} bytes")]
    ShortRead {
        path: PathBuf,
        got: usize,
        expected: usize,
    },
}

impl ZtripError {
    /// Process exit code used when terminating cleanly on this failure.
    pub fn exit_code(&self) -> i32 {
        use ZtripError::*;
        match self {
            Codec { .. } | RegeneratedSize { .. } | Corruption { .. } | OutOfMemory => 1,
            Directory(_) => 2,
            Open { .. } => 3,
            FileBuffer(_) => 4,
            ShortRead { .. } => 5,
        }
    }

    /// True when the failure implicates the compression library rather than
    /// the environment. Only these abort under a fuzzing build.
    pub fn is_finding(&self) -> bool {
        matches!(
            self,
            ZtripError::Codec { .. }
                | ZtripError::RegeneratedSize { .. }
                | ZtripError::Corruption { .. }
        )
    }
}
