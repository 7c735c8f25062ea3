use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "textproc")]
#[command(author, version, about = "Small file and text utilities: copy, head, tail, more.", long_about = None)]
pub(crate) struct Cli {
    /// Override config directory (holds `textproc/settings.yaml`).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Copy SRC to DST in fixed-size chunks.
    Copy {
        src: PathBuf,
        dst: PathBuf,

        /// Chunk size in bytes (default: 4096)
        #[arg(long)]
        bufsize: Option<usize>,

        /// Copy on the tokio runtime instead of blocking I/O
        #[arg(long = "async-io")]
        async_io: bool,
    },
    /// Print the first N lines; a negative N prints all but the last |N|.
    Head {
        /// Number of lines (or bytes with --bytes)
        #[arg(short = 'n', long = "lines", allow_negative_numbers = true)]
        count: Option<isize>,

        /// Count bytes instead of lines
        #[arg(short = 'c', long)]
        bytes: bool,

        /// Input file, `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
    /// Print the last N lines.
    Tail {
        /// Number of lines (or bytes with --bytes); the sign is ignored
        #[arg(short = 'n', long = "lines", allow_negative_numbers = true)]
        count: Option<isize>,

        /// Count bytes instead of lines
        #[arg(short = 'c', long)]
        bytes: bool,

        /// Input file, `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
    /// Page through text one screen at a time.
    More {
        /// Rows per screen (default: terminal height - 1)
        #[arg(short = 'n', long = "lines")]
        lines: Option<usize>,

        /// Page files even when they look binary
        #[arg(short, long)]
        force: bool,

        /// Input file, `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}
