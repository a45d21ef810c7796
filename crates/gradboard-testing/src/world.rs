//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temp directory holding its config file, so runs never
//! see the user's real configuration.

use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated CLI environment.
///
/// # Example
/// ```ignore
/// use assert_cmd::cargo::cargo_bin_cmd;
/// use gradboard_testing::TestWorld;
///
/// let world = TestWorld::new().with_base_url("http://127.0.0.1:9");
/// let mut cmd = cargo_bin_cmd!("gradboard");
/// world.configure_command(&mut cmd).arg("charts");
/// cmd.assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("gradboard.toml");
        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the config file verbatim
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Write a config that only points the client at `base_url`
    pub fn with_base_url(self, base_url: &str) -> Self {
        let toml = format!("[server]\nbase_url = \"{}\"\ntimeout_secs = 5\n", base_url);
        self.with_config(&toml)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point `cmd` at this world's config and scrub inherited settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("gradboard")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .env_remove("GRADBOARD_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
