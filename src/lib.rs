//! Round-trip corruption checker for the Zstandard library.
//!
//! Loads a file, compresses it with a fixed parameter set (level 1, three
//! workers, lazy strategy), decompresses the result, and fails fatally if
//! the regenerated bytes differ from the original. Exists to catch silent
//! data corruption in libzstd under fuzzing or batch testing; it implements
//! no compression of its own.

pub mod codec;
pub mod error;
pub mod loader;
pub mod report;
pub mod roundtrip;

pub use error::ZtripError;
pub use loader::load_file;
pub use report::{report_failure, FailureAction};
pub use roundtrip::{round_trip_check, verify};

use std::path::Path;

/// Load `path` and run one round-trip check on its contents.
///
/// Every buffer involved lives only for the duration of this call.
pub fn check_file(path: &Path) -> Result<(), ZtripError> {
    let data = load_file(path)?;
    round_trip_check(&data)
}
