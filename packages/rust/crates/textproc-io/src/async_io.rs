//! Asynchronous chunked copy.
//!
//! Powered by Tokio for non-blocking I/O.

use std::path::Path;

use tokio::fs as tokio_fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufWriter};

use crate::error::IoError;
use crate::sync::effective;

/// Copy `src_path` to `dst_path` chunk by chunk (asynchronous).
///
/// Same contract as [`crate::copy_file`].
///
/// # Errors
/// `IoError::NotFound` when the source is missing, `IoError::System` otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use textproc_io::{copy_file_async, DEFAULT_BUFSIZE};
///
/// let copied = copy_file_async("a.bin", "b.bin", DEFAULT_BUFSIZE).await?;
/// ```
pub async fn copy_file_async<P, Q>(src_path: P, dst_path: Q, bufsize: usize) -> Result<u64, IoError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (src_path, dst_path) = (src_path.as_ref(), dst_path.as_ref());

    let mut src = tokio_fs::File::open(src_path)
        .await
        .map_err(|e| IoError::on_open(src_path, e))?;
    let mut dst = BufWriter::new(tokio_fs::File::create(dst_path).await?);

    let mut buf = vec![0u8; effective(bufsize)];
    let mut total = 0u64;
    loop {
        let n = src.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        dst.write_all(&buf[..n]).await?;
        total += n as u64;
    }
    dst.flush().await?;

    tracing::debug!(
        src = %src_path.display(),
        dst = %dst_path.display(),
        bytes = total,
        "copied file (async)"
    );
    Ok(total)
}
