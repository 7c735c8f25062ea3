#![allow(missing_docs)]

//! textproc-cli: the pieces behind the `textproc` binary.
//!
//! `filters` runs head/tail over line or byte chunks using the trailing window;
//! `settings` loads and merges the YAML configuration.

pub mod filters;
pub mod settings;

pub use filters::{ChunkWindow, head, tail};
pub use settings::{Settings, load_settings, load_settings_from_paths, settings_paths};
