//! Provenance for headless runs: which build produced a frames file, and from what inputs.

use anyhow::{Context, Result};
use asteroids::prelude::StageCfg;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Build identity: git commit (or "unknown") and library version.
#[derive(Clone, Debug, Serialize)]
pub struct Build {
    pub code_rev: String,
    pub version: &'static str,
}

impl Build {
    pub fn current() -> Self {
        Self {
            code_rev: git_rev(),
            version: asteroids::VERSION,
        }
    }
}

/// What one `run` did.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunRecord {
    pub ticks_requested: u64,
    /// Ticks the stage actually ran (less than requested if it was switched off).
    pub ticks_run: u64,
    pub frames: usize,
    pub seed: u64,
    pub rocks: usize,
    pub stage: StageCfg,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    #[serde(flatten)]
    build: Build,
    run: &'a RunRecord,
    frames_file: String,
}

/// Write `<frames stem>.provenance.json` next to `frames_path`.
pub fn write_sidecar(frames_path: &Path, record: &RunRecord) -> Result<PathBuf> {
    let path = sidecar_path(frames_path);
    let doc = Sidecar {
        build: Build::current(),
        run: record,
        frames_file: frames_path.to_string_lossy().into_owned(),
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(frames_path: &Path) -> PathBuf {
    frames_path.with_extension("provenance.json")
}

/// `GIT_COMMIT` from the environment if set, else `git rev-parse HEAD`.
fn git_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
