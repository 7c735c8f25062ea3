//! Paging against a scripted terminal.

use std::collections::VecDeque;
use std::io::Cursor;

use textproc_pager::{Key, PagerError, PagerStats, Terminal, more};

/// Fixed-size terminal that replays a list of keys, then answers `Other`.
struct ScriptedTerminal {
    lines: usize,
    cols: usize,
    keys: VecDeque<Key>,
    prompts: usize,
}

impl ScriptedTerminal {
    fn new(lines: usize, cols: usize, keys: &[Key]) -> Self {
        Self {
            lines,
            cols,
            keys: keys.iter().copied().collect(),
            prompts: 0,
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn lines(&self) -> usize {
        self.lines
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn read_key(&mut self) -> Result<Key, PagerError> {
        self.prompts += 1;
        Ok(self.keys.pop_front().unwrap_or(Key::Other))
    }
}

fn numbered(n: usize) -> String {
    (1..=n).map(|i| format!("{i}\n")).collect()
}

fn page(text: &str, term: &mut ScriptedTerminal, number: usize) -> (String, PagerStats) {
    let mut out = Vec::new();
    let stats = more(Cursor::new(text.as_bytes().to_vec()), term, &mut out, number).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

#[test]
fn test_first_screen_uses_terminal_height_minus_one() {
    let mut term = ScriptedTerminal::new(4, 80, &[]);
    let (out, stats) = page(&numbered(10), &mut term, 0);
    assert_eq!(out, "1\n2\n3\n");
    assert_eq!(stats.screens, 1);
    assert_eq!(term.prompts, 1);
}

#[test]
fn test_space_shows_full_screen_enter_one_line() {
    let mut term = ScriptedTerminal::new(24, 80, &[Key::Space, Key::Enter]);
    let (out, stats) = page(&numbered(20), &mut term, 3);
    assert_eq!(out, numbered(7));
    assert_eq!(stats.rows_printed, 7);
    assert_eq!(stats.screens, 3);
}

#[test]
fn test_eof_ends_without_prompt() {
    let mut term = ScriptedTerminal::new(24, 80, &[]);
    let (out, stats) = page(&numbered(5), &mut term, 10);
    assert_eq!(out, numbered(5));
    assert_eq!(stats.lines_read, 5);
    assert_eq!(term.prompts, 0);
}

#[test]
fn test_long_lines_wrap_and_count_rows() {
    let mut term = ScriptedTerminal::new(24, 4, &[]);
    let (out, stats) = page("abcdefghij\nxy\n", &mut term, 10);
    assert_eq!(out, "abcd\nefgh\nij\nxy\n");
    assert_eq!(stats.rows_printed, 4);
    assert_eq!(stats.lines_read, 2);
}

#[test]
fn test_wrapped_remainder_carries_to_next_screen() {
    let mut term = ScriptedTerminal::new(24, 3, &[Key::Space]);
    let (out, _) = page("aaabbbccc\nd\n", &mut term, 2);
    assert_eq!(out, "aaa\nbbb\nccc\nd\n");
    assert_eq!(term.prompts, 2);
}

#[test]
fn test_other_key_quits() {
    let mut term = ScriptedTerminal::new(24, 80, &[Key::Other, Key::Space]);
    let (out, stats) = page(&numbered(10), &mut term, 2);
    assert_eq!(out, "1\n2\n");
    assert_eq!(stats.screens, 1);
}

#[test]
fn test_empty_lines_take_a_row() {
    let mut term = ScriptedTerminal::new(24, 80, &[]);
    let (out, stats) = page("\n\nz", &mut term, 5);
    assert_eq!(out, "\n\nz\n");
    assert_eq!(stats.rows_printed, 3);
}
