use anyhow::{Context, Result};
use edmonds::api::{SearchStats, SolveStats};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Solver counters of one run, flattened for JSON.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RunStats {
    pub trees: usize,
    pub augmentations: usize,
    pub blossoms: usize,
    pub frustrated: usize,
    pub leaf_edges: usize,
    pub isolated_removed: usize,
    pub frustrated_removed: usize,
}

impl From<SearchStats> for RunStats {
    fn from(s: SearchStats) -> Self {
        Self {
            trees: s.trees,
            augmentations: s.augmentations,
            blossoms: s.blossoms,
            frustrated: s.frustrated,
            ..Self::default()
        }
    }
}

impl From<SolveStats> for RunStats {
    fn from(s: SolveStats) -> Self {
        Self {
            leaf_edges: s.leaf_edges,
            isolated_removed: s.isolated_removed,
            frustrated_removed: s.frustrated_removed,
            ..Self::from(s.search)
        }
    }
}

/// One solve of the input graph (relabelled by `seed` when given).
#[derive(Clone, Debug, Serialize)]
pub struct RunRecord {
    pub seed: Option<u64>,
    pub matching_size: usize,
    pub elapsed_ms: f64,
    pub stats: RunStats,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub code_rev: String,
    pub input: String,
    pub mode: &'static str,
    pub nodes: usize,
    pub edges: usize,
    pub runs: Vec<RunRecord>,
}

/// Write `report` as pretty JSON to `path`, creating parent directories.
pub fn write_report(path: &Path, report: &RunReport) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// `<dir>/<stem>.report.json` next to an output artifact.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("matching"));
    name.push(".report.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
