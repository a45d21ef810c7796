use crate::{Error, Result};
use gradboard_engine::{DEFAULT_DATE_FORMAT, PageSize};
use gradboard_types::ChartKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "GRADBOARD_CONFIG";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GRADBOARD_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`<config_dir>/gradboard/config.toml`)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("gradboard").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no platform config directory found".to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout; unset leaves it to the transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "enabled")]
    pub schools: bool,
    #[serde(default = "enabled")]
    pub announcements: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            date_format: default_date_format(),
            schools: true,
            announcements: true,
        }
    }
}

/// One chart section and the endpoint feeding it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSource {
    pub id: String,
    pub endpoint: String,
    pub title: String,
    #[serde(default)]
    pub kind: ChartKind,
    #[serde(default = "enabled")]
    pub enabled: bool,
}

impl ChartSource {
    pub fn new(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        title: impl Into<String>,
        kind: ChartKind,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            title: title.into(),
            kind,
            enabled: true,
        }
    }

    /// Label used in the section's error message
    pub fn failure_label(&self) -> String {
        format!("加载 {} 数据失败", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default = "default_charts")]
    pub charts: Vec<ChartSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dashboard: DashboardConfig::default(),
            charts: default_charts(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// Read and validate a config file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dashboard.page_size == 0 {
            return Err(Error::Config(
                "dashboard.page_size must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for chart in &self.charts {
            if !seen.insert(chart.id.as_str()) {
                return Err(Error::Config(format!("duplicate chart id `{}`", chart.id)));
            }
        }
        Ok(())
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.dashboard.page_size).unwrap_or_default()
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSource> {
        self.charts.iter().find(|chart| chart.id == id)
    }

    pub fn enabled_charts(&self) -> impl Iterator<Item = &ChartSource> {
        self.charts.iter().filter(|chart| chart.enabled)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.server.base_url = base_url.into();
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    PageSize::default().get()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn enabled() -> bool {
    true
}

fn default_charts() -> Vec<ChartSource> {
    vec![
        ChartSource::new(
            "cs-total",
            "/api/national-lines/computer-science-total",
            "近三年计算机总分国家线",
            ChartKind::Line,
        ),
        ChartSource::new(
            "politics",
            "/api/national-lines/politics-recent",
            "近三年政治国家线",
            ChartKind::Bar,
        ),
        ChartSource::new(
            "english-math",
            "/api/national-lines/english-math-subjects",
            "英/数主要科目国家线趋势",
            ChartKind::Line,
        ),
        ChartSource::new(
            "exam-type-ratio",
            "/api/stats/exam-type-ratio",
            "自命题 vs 408 比例",
            ChartKind::Pie,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size().get(), 15);
        assert_eq!(config.charts.len(), 4);
        assert_eq!(config.chart("politics").map(|c| c.kind), Some(ChartKind::Bar));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default().with_base_url("http://10.0.0.2:8080");
        config.server.timeout_secs = Some(3);
        config.charts.truncate(1);
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_missing_file_yields_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[dashboard]\npage_size = 20\nannouncements = false\n",
        )?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.dashboard.page_size, 20);
        assert!(!loaded.dashboard.announcements);
        assert!(loaded.dashboard.schools);
        assert_eq!(loaded.charts, default_charts());
        Ok(())
    }

    #[test]
    fn test_zero_page_size_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[dashboard]\npage_size = 0\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_duplicate_chart_ids_are_rejected() {
        let mut config = Config::default();
        config.charts.push(config.charts[0].clone());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chart_kind_defaults_to_line() -> Result<()> {
        let config: Config = toml::from_str(
            "[[charts]]\nid = \"x\"\nendpoint = \"/api/national-lines/x\"\ntitle = \"X\"\n",
        )?;
        assert_eq!(config.charts[0].kind, ChartKind::Line);
        assert!(config.charts[0].enabled);
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/gradboard-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/gradboard-test.toml"));
        Ok(())
    }
}
