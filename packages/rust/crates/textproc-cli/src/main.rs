//! textproc - chunked copy, head/tail through a trailing window, and a pager.
//!
//! Usage:
//!   textproc copy SRC DST [--bufsize N] [--async-io]
//!   textproc head [-n N] [--bytes] [FILE]
//!   textproc tail [-n N] [--bytes] [FILE]
//!   textproc more [-n LINES] [--force] [FILE]

mod cli;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textproc_cli::settings::DEFAULT_FILTER_COUNT;
use textproc_cli::{Settings, head, load_settings, tail};
use textproc_io::{CopyMode, DEFAULT_BUFSIZE, copy_file, copy_file_async, copy_stream, is_binary};
use textproc_pager::{CrosstermTerminal, more};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "textproc_cli=debug,textproc_io=debug,textproc_pager=debug"
        } else {
            "textproc_cli=info,textproc_io=info,textproc_pager=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let settings = load_settings(cli.conf.as_deref());

    match cli.command {
        Command::Copy {
            src,
            dst,
            bufsize,
            async_io,
        } => {
            let bufsize = bufsize.or(settings.copy.bufsize).unwrap_or(DEFAULT_BUFSIZE);
            let result = if async_io || settings.copy.async_io.unwrap_or(false) {
                copy_file_async(&src, &dst, bufsize).await
            } else {
                copy_file(&src, &dst, bufsize)
            };
            let copied = result
                .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
            info!(src = %src.display(), dst = %dst.display(), bytes = copied, "copy complete");
        }
        Command::Head { count, bytes, file } => {
            let (count, mode) = filter_args(&settings, count, bytes);
            let mut input = open_input(&file)?;
            let mut out = BufWriter::new(io::stdout().lock());
            head(&mut *input, &mut out, mode, count).context("head failed")?;
        }
        Command::Tail { count, bytes, file } => {
            let (count, mode) = filter_args(&settings, count, bytes);
            let mut input = open_input(&file)?;
            let mut out = BufWriter::new(io::stdout().lock());
            tail(&mut *input, &mut out, mode, count.unsigned_abs()).context("tail failed")?;
        }
        Command::More { lines, force, file } => {
            let lines = lines.or(settings.pager.lines).unwrap_or(0);
            run_more(&file, lines, force)?;
        }
    }

    Ok(())
}

fn filter_args(settings: &Settings, count: Option<isize>, bytes: bool) -> (isize, CopyMode) {
    let count = count.or(settings.filter.count).unwrap_or(DEFAULT_FILTER_COUNT);
    let mode = if bytes || settings.filter.bytes.unwrap_or(false) {
        CopyMode::Bytes
    } else {
        CopyMode::Lines
    };
    (count, mode)
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn run_more(file: &Path, lines: usize, force: bool) -> Result<()> {
    let mut input = open_input(file)?;
    if !force && is_binary(input.fill_buf().context("cannot read input")?) {
        bail!("{} looks like a binary file (use --force to page it anyway)", file.display());
    }

    let stdout = io::stdout();
    if !stdout.is_terminal() {
        // nothing to page on; behave like cat
        let mut out = stdout.lock();
        copy_stream(&mut input, &mut out, DEFAULT_BUFSIZE)?;
        out.flush()?;
        return Ok(());
    }

    let mut term = CrosstermTerminal::new();
    let mut out = stdout.lock();
    let stats = more(input, &mut term, &mut out, lines).context("pager failed")?;
    tracing::debug!(
        lines_read = stats.lines_read,
        rows = stats.rows_printed,
        screens = stats.screens,
        "pager finished"
    );
    Ok(())
}
