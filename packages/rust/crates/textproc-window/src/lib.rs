//! textproc-window: fixed-capacity trailing window ("keep the last N items seen").
//!
//! Items pushed past the capacity are evicted oldest-first and handed back to
//! the caller, so nothing is ever lost: the window is a delayed output, not a cache.

mod fifo;

pub use fifo::FifoBuffer;
