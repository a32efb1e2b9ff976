use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_LIVE_SITE: &str = "https://MoHHamMed-2030.github.io/anan-saudi-aviation-system/";
pub const DEFAULT_REPOSITORY: &str = "https://github.com/MoHHamMed-2030/anan-saudi-aviation-system";

const DEFAULT_TICK_MS: u64 = 1000;
const MIN_TICK_MS: u64 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct Links {
    #[serde(default = "default_live_site")]
    pub live_site: String,
    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            live_site: default_live_site(),
            repository: default_repository(),
        }
    }
}

fn default_live_site() -> String {
    DEFAULT_LIVE_SITE.to_string()
}

fn default_repository() -> String {
    DEFAULT_REPOSITORY.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Dataset file; the built-in snapshot is used when unset.
    #[serde(default)]
    pub dataset: Option<String>,

    #[serde(default)]
    pub initial_tab: Option<String>,

    #[serde(default)]
    pub clock_locale: Option<String>,

    #[serde(default)]
    pub tick_ms: Option<u64>,

    #[serde(default)]
    pub links: Links,
}

impl Config {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(MIN_TICK_MS))
    }

    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset.as_deref().and_then(expand_path)
    }
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ANAN_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("anan").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("anan").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "anan", "anan")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("anan"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("anan"));
    }
    directories::ProjectDirs::from("io", "anan", "anan").map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_dir() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| PathBuf::from(".anan").join("logs"))
}

pub fn export_dir() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("exports"))
        .unwrap_or_else(|| PathBuf::from(".anan").join("exports"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.links.live_site, DEFAULT_LIVE_SITE);
        assert!(config.dataset_path().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "dataset = \"/srv/anan/snapshot.json\"\ninitial_tab = \"alerts\"\nclock_locale = \"en-GB\"\ntick_ms = 10\n\n[links]\nrepository = \"https://example.org/anan\""
        )
        .unwrap();
        let config = load_from(file.path());
        assert_eq!(config.initial_tab.as_deref(), Some("alerts"));
        assert_eq!(config.clock_locale.as_deref(), Some("en-GB"));
        assert_eq!(config.tick_period(), Duration::from_millis(MIN_TICK_MS));
        assert_eq!(
            config.dataset_path(),
            Some(PathBuf::from("/srv/anan/snapshot.json"))
        );
        assert_eq!(config.links.repository, "https://example.org/anan");
        assert_eq!(config.links.live_site, DEFAULT_LIVE_SITE);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_ms = \"fast\"").unwrap();
        let config = load_from(file.path());
        assert!(config.tick_ms.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml"));
        assert!(config.initial_tab.is_none());
    }
}
