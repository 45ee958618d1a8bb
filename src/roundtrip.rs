//! The round-trip checker: compress, decompress, compare.

use crate::codec;
use crate::error::ZtripError;

/// Compress `src` with the fixed parameter set, decompress the result, and
/// fail unless the regenerated bytes are identical to the source.
///
/// Both scratch buffers are sized by [`codec::compress_bound`]; the bound is
/// never smaller than the source length, so the same capacity holds the
/// regenerated bytes as well. Zero-length input round-trips through an empty
/// frame.
pub fn round_trip_check(src: &[u8]) -> Result<(), ZtripError> {
    let capacity = codec::compress_bound(src.len());
    let mut compressed = scratch(capacity)?;
    let mut result = scratch(capacity)?;

    let written = codec::compress_into(&mut compressed, src)?;
    let regenerated = codec::decompress_into(&mut result, &compressed[..written])?;
    verify(src, &result[..regenerated])
}

/// Compare regenerated bytes against the source.
///
/// Split out from [`round_trip_check`] so the corruption classification can
/// be exercised directly, without mutating the library under test.
pub fn verify(src: &[u8], regenerated: &[u8]) -> Result<(), ZtripError> {
    if regenerated.len() != src.len() {
        return Err(ZtripError::RegeneratedSize {
            got: regenerated.len(),
            expected: src.len(),
        });
    }
    match src.iter().zip(regenerated).position(|(a, b)| a != b) {
        Some(offset) => Err(ZtripError::Corruption { offset }),
        None => Ok(()),
    }
}

/// Zeroed scratch buffer of `capacity` bytes. Allocation failure is a
/// reported error, not a panic.
fn scratch(capacity: usize) -> Result<Vec<u8>, ZtripError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| ZtripError::OutOfMemory)?;
    buf.resize(capacity, 0);
    Ok(buf)
}
