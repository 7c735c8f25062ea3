//! head/tail over line or byte chunks.

use std::io::{BufRead, Write};

use textproc_io::{Chunk, CopyMode, IoError, read_data, write_out};
use textproc_window::FifoBuffer;

/// Trailing window over whichever unit a [`CopyMode`] counts in.
#[derive(Debug)]
pub enum ChunkWindow {
    /// Window of whole lines.
    Lines(FifoBuffer<Vec<u8>>),
    /// Window of bytes.
    Bytes(FifoBuffer<u8>),
}

impl ChunkWindow {
    /// Window of `|size|` units.
    #[must_use]
    pub fn new(mode: CopyMode, size: isize) -> Self {
        match mode {
            CopyMode::Lines => Self::Lines(FifoBuffer::new(size)),
            CopyMode::Bytes => Self::Bytes(FifoBuffer::new(size)),
        }
    }

    /// Push a chunk through the window and return what fell out of it.
    ///
    /// A chunk of the other unit is returned untouched.
    #[must_use]
    pub fn filter(&mut self, chunk: Chunk) -> Chunk {
        match (self, chunk) {
            (Self::Lines(w), Chunk::Lines(lines)) => Chunk::Lines(w.filter(lines)),
            (Self::Bytes(w), Chunk::Bytes(bytes)) => Chunk::Bytes(w.filter(bytes)),
            (_, other) => other,
        }
    }

    /// Consume the window, returning what it still holds.
    #[must_use]
    pub fn into_chunk(self) -> Chunk {
        match self {
            Self::Lines(w) => Chunk::Lines(w.into_inner()),
            Self::Bytes(w) => Chunk::Bytes(w.into_inner()),
        }
    }
}

/// Write the last `count` lines or bytes of `src`.
///
/// # Errors
/// Propagates read and write failures.
pub fn tail<R, W>(src: &mut R, dst: &mut W, mode: CopyMode, count: usize) -> Result<(), IoError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let size = isize::try_from(count).unwrap_or(isize::MAX);
    let mut window = ChunkWindow::new(mode, size);
    loop {
        let chunk = read_data(src, mode, 0)?;
        if chunk.is_empty() {
            break;
        }
        // evicted units are not part of the tail
        let _ = window.filter(chunk);
    }
    if count > 0 {
        write_out(dst, &window.into_chunk())?;
    }
    dst.flush()?;
    Ok(())
}

/// Write the first `count` lines or bytes of `src`.
///
/// A negative `count` writes everything except the last `|count|` units,
/// streaming whatever the trailing window evicts.
///
/// # Errors
/// Propagates read and write failures.
pub fn head<R, W>(src: &mut R, dst: &mut W, mode: CopyMode, count: isize) -> Result<(), IoError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    if count < 0 {
        let mut window = ChunkWindow::new(mode, count);
        loop {
            let chunk = read_data(src, mode, 0)?;
            if chunk.is_empty() {
                break;
            }
            write_out(dst, &window.filter(chunk))?;
        }
        dst.flush()?;
        return Ok(());
    }

    let mut remaining = count.unsigned_abs();
    while remaining > 0 {
        let chunk = match read_data(src, mode, remaining)? {
            Chunk::Lines(mut lines) => {
                lines.truncate(remaining);
                Chunk::Lines(lines)
            }
            bytes @ Chunk::Bytes(_) => bytes,
        };
        if chunk.is_empty() {
            break;
        }
        remaining -= chunk.len();
        write_out(dst, &chunk)?;
    }
    dst.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ignores_mismatched_unit() {
        let mut w = ChunkWindow::new(CopyMode::Lines, 1);
        let passed = w.filter(Chunk::Bytes(b"abc".to_vec()));
        assert_eq!(passed, Chunk::Bytes(b"abc".to_vec()));
        assert_eq!(w.into_chunk(), Chunk::Lines(Vec::new()));
    }
}
