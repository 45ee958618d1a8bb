//! Boundary wrapper around the Zstandard bindings.
//!
//! Every zstd call the harness makes goes through this module, and raw
//! `SafeResult` codes are converted to [`ZtripError::Codec`] here so the
//! rest of the crate never inspects sentinel error values.

use zstd_safe::zstd_sys::ZSTD_EndDirective;
use zstd_safe::{CCtx, CParameter, CompressionLevel, DCtx, InBuffer, OutBuffer, Strategy};

use crate::error::ZtripError;

/// Compression level applied to every check.
pub const LEVEL: CompressionLevel = 1;

/// Worker threads requested from libzstd. Any parallelism stays internal to
/// the compression call; the harness itself is single threaded.
pub const NB_WORKERS: u32 = 3;

/// Match-finding strategy applied to every check.
pub const STRATEGY: Strategy = Strategy::ZSTD_lazy;

/// Worst-case compressed size for an input of `src_len` bytes.
pub fn compress_bound(src_len: usize) -> usize {
    zstd_safe::compress_bound(src_len)
}

/// Compress all of `src` into `dst` with the fixed parameter set, returning
/// the number of compressed bytes written.
///
/// `dst` must hold at least [`compress_bound`] of `src.len()` bytes. The
/// whole input is handed over in one buffer with the end directive; the call
/// is repeated only until libzstd reports the frame complete, which it does
/// without ever needing more output space than the bound.
pub fn compress_into(dst: &mut [u8], src: &[u8]) -> Result<usize, ZtripError> {
    let mut cctx = CCtx::create();
    checked(
        "set compression level",
        cctx.set_parameter(CParameter::CompressionLevel(LEVEL)),
    )?;
    checked(
        "set worker count",
        cctx.set_parameter(CParameter::NbWorkers(NB_WORKERS)),
    )?;
    checked(
        "set strategy",
        cctx.set_parameter(CParameter::Strategy(STRATEGY)),
    )?;

    let mut input = InBuffer::around(src);
    let mut output = OutBuffer::around(dst);
    loop {
        let remaining = checked(
            "compression",
            cctx.compress_stream2(&mut output, &mut input, ZSTD_EndDirective::ZSTD_e_end),
        )?;
        if remaining == 0 {
            break;
        }
    }
    Ok(output.pos())
}

/// Decompress one complete frame from `src` into `dst`, returning the
/// regenerated length.
pub fn decompress_into(dst: &mut [u8], src: &[u8]) -> Result<usize, ZtripError> {
    let mut dctx = DCtx::create();
    checked("decompression", dctx.decompress(dst, src))
}

fn checked(op: &'static str, result: zstd_safe::SafeResult) -> Result<usize, ZtripError> {
    result.map_err(|code| ZtripError::Codec {
        op,
        name: zstd_safe::get_error_name(code),
    })
}
