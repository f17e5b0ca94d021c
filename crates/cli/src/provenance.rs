use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a report: the driver parameters and the sample kinds shown.
pub struct Payload {
    pub params: Value,
    pub samples: Vec<String>,
}

impl Payload {
    pub fn new(params: Value, samples: Vec<String>) -> Self {
        Self { params, samples }
    }
}

/// Pretty-print `value` as JSON to `path`, creating parent directories.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Write `<report>.provenance.json` next to a report: git revision, library
/// version, callsite, parameters, sample kinds, outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(report: P, payload: Payload) -> Result<PathBuf> {
    let report = report.as_ref();
    let provenance_path = provenance_path(report);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "trigon_version": trigon::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "samples": payload.samples,
        "params": payload.params,
        "outputs": [report.to_string_lossy()]
    });
    write_json(&provenance_path, &doc)?;
    Ok(provenance_path)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn provenance_path(report: &Path) -> PathBuf {
    let mut name = report
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    report.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
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
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/out/triangles.json"));
        assert_eq!(derived, Path::new("/tmp/out/triangles.provenance.json"));
    }

    #[test]
    fn sidecar_lists_report_and_samples() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("nested/triangles.json");
        write_json(&report, &json!([])).unwrap();
        let payload = Payload::new(json!({"format": "json"}), vec!["right".into()]);
        let prov_path = write_sidecar(&report, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], report.to_string_lossy().as_ref());
        assert_eq!(parsed["samples"][0], "right");
        assert_eq!(parsed["trigon_version"], trigon::VERSION);
    }
}
