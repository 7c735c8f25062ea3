//! Line and byte chunk reading.
//!
//! Filters that work on "the last N lines" or "the last N bytes" pull their
//! input through [`read_data`] and push results through [`write_out`], so the
//! same loop serves both units.

use std::io::{self, BufRead, Write};

use crate::error::IoError;

/// Upper bound, in bytes, on the line batch returned by one [`read_data`] call.
pub const DEFAULT_LINE_BUFFER: usize = 256;

/// Upper bound, in bytes, on the block returned by one [`read_data`] call.
pub const DEFAULT_BYTE_BUFFER: usize = 1_048_576;

/// Unit a filter counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMode {
    /// Raw bytes.
    #[default]
    Bytes,
    /// Newline-terminated lines (the final line may lack its newline).
    Lines,
}

/// One batch of input, shaped by [`CopyMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A block of bytes.
    Bytes(Vec<u8>),
    /// Whole lines, each keeping its terminator.
    Lines(Vec<Vec<u8>>),
}

impl Chunk {
    /// True at end of input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(b) => b.is_empty(),
            Self::Lines(l) => l.is_empty(),
        }
    }

    /// Number of units (bytes or lines) in this chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(b) => b.len(),
            Self::Lines(l) => l.len(),
        }
    }
}

/// Read the next chunk from `src`. An empty chunk means end of input.
///
/// In line mode whole lines are gathered until their combined length reaches
/// `bs` bytes (capped at [`DEFAULT_LINE_BUFFER`]); at least one line is
/// returned unless the source is exhausted. In byte mode a single read of up to
/// `bs` bytes (capped at [`DEFAULT_BYTE_BUFFER`]) is performed. A `bs` of 0
/// means "use the cap".
///
/// # Errors
/// Propagates any read error from `src`.
pub fn read_data<R: BufRead + ?Sized>(src: &mut R, mode: CopyMode, bs: usize) -> Result<Chunk, IoError> {
    match mode {
        CopyMode::Lines => {
            let hint = cap(bs, DEFAULT_LINE_BUFFER);
            let mut lines = Vec::new();
            let mut total = 0;
            while total < hint {
                let mut line = Vec::new();
                if src.read_until(b'\n', &mut line)? == 0 {
                    break;
                }
                total += line.len();
                lines.push(line);
            }
            Ok(Chunk::Lines(lines))
        }
        CopyMode::Bytes => {
            let mut buf = vec![0u8; cap(bs, DEFAULT_BYTE_BUFFER)];
            let n = loop {
                match src.read(&mut buf) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e.into()),
                }
            };
            buf.truncate(n);
            Ok(Chunk::Bytes(buf))
        }
    }
}

/// Write a chunk to `dst`, line by line or as one block.
///
/// # Errors
/// Propagates any write error from `dst`.
pub fn write_out<W: Write + ?Sized>(dst: &mut W, chunk: &Chunk) -> Result<(), IoError> {
    match chunk {
        Chunk::Bytes(data) => dst.write_all(data)?,
        Chunk::Lines(lines) => {
            for line in lines {
                dst.write_all(line)?;
            }
        }
    }
    Ok(())
}

fn cap(bs: usize, limit: usize) -> usize {
    if bs == 0 { limit } else { bs.min(limit) }
}
