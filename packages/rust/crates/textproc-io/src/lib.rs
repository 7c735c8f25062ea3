#![allow(clippy::doc_markdown)]

//! textproc-io - Chunked file copy and line/byte chunk readers
//!
//! # Features
//!
//! - **Dual API**: Sync (std::fs) for the CLI filters, Async (tokio::fs) for copies
//! - **Chunking**: Fixed-size byte chunks or bounded batches of lines
//! - **Binary detection**: NULL byte scan before paging
//!
//! # Layout
//!
//! ```text
//! textproc-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection
//! ├── chunk.rs    # Line/byte chunk reading and writing
//! ├── sync.rs     # Synchronous copy
//! └── async_io.rs # Asynchronous copy (Tokio)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use textproc_io::{copy_file, copy_file_async, DEFAULT_BUFSIZE};
//!
//! let copied = copy_file("in.bin", "out.bin", DEFAULT_BUFSIZE)?;
//! let copied = copy_file_async("in.bin", "out.bin", DEFAULT_BUFSIZE).await?;
//! ```

mod async_io;
mod chunk;
mod detect;
mod error;
mod sync;

/// Default chunk size for file copies.
pub const DEFAULT_BUFSIZE: usize = 4096;

pub use async_io::copy_file_async;
pub use chunk::{Chunk, CopyMode, DEFAULT_BYTE_BUFFER, DEFAULT_LINE_BUFFER, read_data, write_out};
pub use detect::is_binary;
pub use error::IoError;
pub use sync::{copy_file, copy_stream};
