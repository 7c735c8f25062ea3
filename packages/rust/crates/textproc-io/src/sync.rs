//! Synchronous chunked copy.

use std::fs as std_fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::DEFAULT_BUFSIZE;
use crate::error::IoError;

/// Drain `src` into `dst` in chunks of at most `bufsize` bytes.
///
/// A `bufsize` of 0 falls back to [`DEFAULT_BUFSIZE`]. Returns the number of
/// bytes copied.
///
/// # Errors
/// Propagates the first read or write failure.
pub fn copy_stream<R, W>(src: &mut R, dst: &mut W, bufsize: usize) -> Result<u64, IoError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; effective(bufsize)];
    let mut total = 0u64;
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        dst.write_all(&buf[..n])?;
        total += n as u64;
    }
    Ok(total)
}

/// Copy `src_path` to `dst_path` chunk by chunk (synchronous).
///
/// The destination is created or truncated.
///
/// # Errors
/// `IoError::NotFound` when the source is missing, `IoError::System` otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use textproc_io::{copy_file, DEFAULT_BUFSIZE};
///
/// let copied = copy_file("a.bin", "b.bin", DEFAULT_BUFSIZE)?;
/// ```
pub fn copy_file<P, Q>(src_path: P, dst_path: Q, bufsize: usize) -> Result<u64, IoError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (src_path, dst_path) = (src_path.as_ref(), dst_path.as_ref());

    let mut src = std_fs::File::open(src_path).map_err(|e| IoError::on_open(src_path, e))?;
    let mut dst = BufWriter::new(std_fs::File::create(dst_path)?);

    let copied = copy_stream(&mut src, &mut dst, bufsize)?;
    dst.flush()?;

    tracing::debug!(
        src = %src_path.display(),
        dst = %dst_path.display(),
        bytes = copied,
        "copied file"
    );
    Ok(copied)
}

pub(crate) fn effective(bufsize: usize) -> usize {
    if bufsize == 0 { DEFAULT_BUFSIZE } else { bufsize }
}
