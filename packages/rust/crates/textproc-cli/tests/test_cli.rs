//! Integration tests for the `textproc` CLI binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn write_file(path: &Path, content: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Binary rooted at `root`, so no stray `textproc.yaml` from the cwd is picked up.
fn textproc_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textproc"));
    cmd.env("TEXTPROC_ROOT", root)
        .env("TEXTPROC_CONFIG_HOME", root.join("no-config"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    cmd
}

fn numbered(n: usize) -> String {
    (1..=n).map(|i| format!("{i}\n")).collect()
}

#[test]
fn test_more_refuses_binary_input() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let file = tmp.path().join("blob.bin");
    write_file(&file, b"text\x00more")?;

    let output = textproc_cmd(tmp.path()).arg("more").arg(&file).output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("binary"));
    Ok(())
}

#[test]
fn test_more_force_pages_binary_through_pipe() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let file = tmp.path().join("blob.bin");
    write_file(&file, b"text\x00more\n")?;

    let output = textproc_cmd(tmp.path())
        .arg("more")
        .arg("--force")
        .arg(&file)
        .output()?;

    assert!(
        output.status.success(),
        "textproc more --force failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(output.stdout, b"text\x00more\n");
    Ok(())
}

#[test]
fn test_more_without_terminal_copies_unpaged() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let file = tmp.path().join("notes.txt");
    let text = numbered(500);
    write_file(&file, text.as_bytes())?;

    let output = textproc_cmd(tmp.path())
        .args(["more", "-n", "3"])
        .arg(&file)
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, text);
    Ok(())
}

#[test]
fn test_settings_count_and_flag_override() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let conf = tmp.path().join("conf");
    write_file(
        &conf.join("textproc/settings.yaml"),
        b"filter:\n  count: 2\n",
    )?;
    let file = tmp.path().join("lines.txt");
    write_file(&file, numbered(10).as_bytes())?;

    let from_settings = textproc_cmd(tmp.path())
        .arg("--conf")
        .arg(&conf)
        .arg("tail")
        .arg(&file)
        .output()?;
    assert!(from_settings.status.success());
    assert_eq!(String::from_utf8(from_settings.stdout)?, "9\n10\n");

    let from_flag = textproc_cmd(tmp.path())
        .arg("--conf")
        .arg(&conf)
        .args(["tail", "-n", "3"])
        .arg(&file)
        .output()?;
    assert!(from_flag.status.success());
    assert_eq!(String::from_utf8(from_flag.stdout)?, "8\n9\n10\n");
    Ok(())
}

#[test]
fn test_settings_bytes_mode_and_head() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let conf = tmp.path().join("conf");
    write_file(
        &conf.join("textproc/settings.yaml"),
        b"filter:\n  count: 4\n  bytes: true\n",
    )?;
    let file = tmp.path().join("word.txt");
    write_file(&file, b"abcdefgh")?;

    let output = textproc_cmd(tmp.path())
        .arg("--conf")
        .arg(&conf)
        .arg("head")
        .arg(&file)
        .output()?;
    assert!(output.status.success());
    assert_eq!(output.stdout, b"abcd");
    Ok(())
}

#[test]
fn test_copy_async_io_identical() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let src = tmp.path().join("src.bin");
    let dst = tmp.path().join("dst.bin");
    let data: Vec<u8> = (0..70_001u32).map(|i| (i % 253) as u8).collect();
    write_file(&src, &data)?;

    let output = textproc_cmd(tmp.path())
        .arg("copy")
        .arg(&src)
        .arg(&dst)
        .args(["--async-io", "--bufsize", "1000"])
        .output()?;

    assert!(
        output.status.success(),
        "textproc copy failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read(&dst)?, data);
    Ok(())
}

#[test]
fn test_copy_missing_source_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let output = textproc_cmd(tmp.path())
        .arg("copy")
        .arg(tmp.path().join("missing"))
        .arg(tmp.path().join("out"))
        .output()?;
    assert!(!output.status.success());
    assert!(!tmp.path().join("out").exists());
    Ok(())
}
