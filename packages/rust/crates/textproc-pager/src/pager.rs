//! Screen-by-screen paging.

use std::io::{BufRead, Write};

use crate::error::PagerError;
use crate::term::{Key, Terminal};
use crate::wrap::wrap;

/// Counters reported when paging ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagerStats {
    /// Source lines consumed.
    pub lines_read: usize,
    /// Screen rows written (a wrapped line counts once per row).
    pub rows_printed: usize,
    /// Times the pager stopped to wait for a key.
    pub screens: usize,
}

/// Page `source` onto `out`, wrapping to the terminal width.
///
/// `number` is the page height; 0 means the terminal height minus one row for
/// the prompt line. After each page one key is read: space shows another full
/// page, enter shows one more row, anything else stops. End of input stops
/// immediately. A line wrapped across a page boundary resumes where it was cut.
///
/// # Errors
/// Propagates read, write and terminal failures.
pub fn more<R, T, W>(mut source: R, term: &mut T, out: &mut W, number: usize) -> Result<PagerStats, PagerError>
where
    R: BufRead,
    T: Terminal + ?Sized,
    W: Write + ?Sized,
{
    let page = if number == 0 {
        term.lines().saturating_sub(1).max(1)
    } else {
        number
    };
    let limit = term.cols();
    tracing::debug!(page, limit, "paging");

    let mut stats = PagerStats::default();
    let mut quota = page;
    let mut pending: Option<String> = None;
    let mut raw = Vec::new();

    loop {
        while quota > 0 {
            let mut line = if let Some(rest) = pending.take() {
                rest
            } else {
                raw.clear();
                if source.read_until(b'\n', &mut raw)? == 0 {
                    out.flush()?;
                    return Ok(stats);
                }
                stats.lines_read += 1;
                String::from_utf8_lossy(&raw).into_owned()
            };

            loop {
                let (row, rest) = wrap(&line, limit);
                writeln!(out, "{row}")?;
                stats.rows_printed += 1;
                quota -= 1;
                if rest.is_empty() {
                    break;
                }
                if quota == 0 {
                    pending = Some(rest);
                    break;
                }
                line = rest;
            }
        }

        out.flush()?;
        stats.screens += 1;
        match term.read_key()? {
            Key::Space => quota = page,
            Key::Enter => quota = 1,
            Key::Other => break,
        }
    }

    tracing::debug!(?stats, "pager stopped by user");
    Ok(stats)
}
