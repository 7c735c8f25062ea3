//! Binary detection.

use memchr::memchr;

/// Bytes inspected by [`is_binary`].
const SNIFF_LEN: usize = 8192;

/// True when a NUL byte appears within the leading [`SNIFF_LEN`] bytes.
///
/// Used to keep the pager from dumping binary data on a terminal.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let head = &buffer[..buffer.len().min(SNIFF_LEN)];
    memchr(0, head).is_some()
}
