//! Hard wrapping of a single line to a column limit.

/// Split `line` into the first row of at most `width` characters and the rest.
///
/// One trailing `\n` (or `\r\n`) is dropped first. A `width` of 0 disables
/// wrapping. The split always lands on a char boundary.
#[must_use]
pub fn wrap(line: &str, width: usize) -> (String, String) {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    if width == 0 {
        return (line.to_string(), String::new());
    }
    match line.char_indices().nth(width) {
        Some((at, _)) => (line[..at].to_string(), line[at..].to_string()),
        None => (line.to_string(), String::new()),
    }
}
