//! Shared helpers for CLI integration tests.

#![allow(dead_code, clippy::unwrap_used, deprecated)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use image::{Rgba, RgbaImage};

/// Builds a `ninepatch-fix` command isolated from the user's config files.
///
/// Runs inside `dir` with the XDG config home pointed at `dir/xdg`.
pub fn ninepatch_fix(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ninepatch-fix").unwrap();
    cmd.current_dir(dir).env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd
}

/// Reads a PNG back as RGBA.
pub fn read_rgba(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

/// Returns the RGBA value of a single pixel.
pub fn pixel(path: &Path, x: u32, y: u32) -> Rgba<u8> {
    *read_rgba(path).get_pixel(x, y)
}

/// Snapshot of every file's bytes under `root`, sorted by path.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut out = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(path) = pending.pop() {
        if path.is_dir() {
            pending.extend(fs::read_dir(&path).unwrap().map(|e| e.unwrap().path()));
        } else {
            out.push((path.clone(), fs::read(&path).unwrap()));
        }
    }
    out.sort();
    out
}
