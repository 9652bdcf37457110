use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::filename::FilenameStrategy;
use crate::job::{JobSettings, ListingJob};
use crate::listing::{DEFAULT_RECORD, DEFAULT_SEPARATOR};
use crate::RellistError;

const RAW_DATA_DOCSTRING: &str =
    "From <https://github.com/SichangHe/internet_route_verification/releases/tag/raw-data>.";

/// A named group of listing jobs run against one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub jobs: Vec<ListingJob>,
}

/// Global configuration loaded from `$XDG_CONFIG_HOME/rellist/config.toml`
/// (usually `~/.config/rellist/config.toml`); see [`config_path`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RellistConfig {
    /// Record name wrapped around each entry in call listings.
    pub record: String,
    /// Separator between rendered entries.
    pub separator: String,
    /// Ancestor depth removed per anchor when row removal is on (2 = grandparent).
    pub row_levels: usize,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl Default for RellistConfig {
    fn default() -> Self {
        Self {
            record: DEFAULT_RECORD.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            row_levels: 2,
            presets: default_presets(),
        }
    }
}

impl RellistConfig {
    pub fn preset(&self, name: &str) -> Result<&Preset, RellistError> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RellistError::UnknownPreset(name.to_string()))
    }

    pub fn job_settings(&self) -> JobSettings {
        JobSettings {
            record: self.record.clone(),
            separator: self.separator.clone(),
            row_levels: self.row_levels,
        }
    }
}

fn stats_job(label: &str, pattern: &str) -> ListingJob {
    ListingJob {
        label: Some(label.to_string()),
        pattern: pattern.to_string(),
        prefix: "all2/".to_string(),
        ..ListingJob::default()
    }
}

/// Presets shipped in a freshly created config.
fn default_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "stats2".to_string(),
            jobs: vec![
                stats_job("AS stats", "--as_stats2.csv"),
                stats_job("AS pair stats", "--as_pair_stats2.csv"),
                stats_job("Route stats", "--route_stats2.csv"),
                stats_job("Route first-hop stats", "--route_first_hop_stats2.csv"),
            ],
        },
        Preset {
            name: "ribs".to_string(),
            jobs: vec![ListingJob {
                label: Some("RIB dumps".to_string()),
                pattern: "0000.".to_string(),
                prefix: "../data/ribs/".to_string(),
                strategy: FilenameStrategy::Label,
                base_url: Some("https://github.com".to_string()),
                assign: Some("ribs".to_string()),
                docstring: Some(RAW_DATA_DOCSTRING.to_string()),
                remove_rows: true,
                ..ListingJob::default()
            }],
        },
    ]
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rellist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RellistConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub fn load_or_init_at(path: &Path) -> Result<RellistConfig> {
    if !path.exists() {
        let default_cfg = RellistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RellistConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
