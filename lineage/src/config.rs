//! Optional `lineage.toml` read by the umbrella `lineage` CLI.
//!
//! The standalone demo binaries never read it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logging::DEFAULT_FILTER;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "lineage.toml";

/// Lineage configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LineageConfig {
    /// Tracing filter used when `RUST_LOG` is unset (e.g. `"lineage=debug"`).
    pub log_filter: String,

    pub describe: DescribeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DescribeConfig {
    /// Format used by `lineage describe` when `--format` is omitted.
    pub format: GraphFormat,
}

/// Rendering of a type graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    #[default]
    Text,
    Json,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
            describe: DescribeConfig::default(),
        }
    }
}

impl LineageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        EnvFilter::try_new(&self.log_filter)
            .map_err(|err| anyhow!("log_filter {:?} is invalid: {}", self.log_filter, err))?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LineageConfig::default()`.
pub fn load_config(path: &Path) -> Result<LineageConfig> {
    if !path.exists() {
        let cfg = LineageConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LineageConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LineageConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, LineageConfig::default());
        assert_eq!(cfg.describe.format, GraphFormat::Text);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[describe]\nformat = \"json\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.describe.format, GraphFormat::Json);
        assert_eq!(cfg.log_filter, DEFAULT_FILTER);
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join(CONFIG_FILE);
        let cfg = LineageConfig {
            log_filter: "lineage=debug".to_string(),
            describe: DescribeConfig {
                format: GraphFormat::Json,
            },
        };
        write_config(&path, &cfg).expect("write");
        assert_eq!(load_config(&path).expect("load"), cfg);
    }

    #[test]
    fn rejects_empty_log_filter() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "log_filter = \"  \"\n").expect("write");
        let err = load_config(&path).expect_err("empty filter");
        assert!(err.to_string().contains("log_filter"));
    }

    #[test]
    fn rejects_unknown_format() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[describe]\nformat = \"yaml\"\n").expect("write");
        assert!(load_config(&path).is_err());
    }
}
