//! textproc-pager - wrap and page line-oriented text on a terminal
//!
//! The pager loop in [`more`] only talks to a [`Terminal`] for its size and for
//! one keypress between screens, so it runs the same against a real terminal
//! ([`CrosstermTerminal`]) or a scripted one in tests.

mod error;
mod pager;
mod term;
mod wrap;

pub use error::PagerError;
pub use pager::{PagerStats, more};
pub use term::{CrosstermTerminal, Key, Terminal};
pub use wrap::wrap;
