//! Configuration loader.
//!
//! Resolves which config file to read, parses it, and applies environment
//! overrides.

use super::types::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PRODUCTMIND_CONFIG_PATH";

/// Where the effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTier {
    /// Built-in defaults, no file found.
    Defaults,
    /// `--config` flag or `PRODUCTMIND_CONFIG_PATH`.
    Explicit,
    /// `./productmind.yaml`
    Project,
    /// `~/.productmind/config.yaml`
    User,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Defaults => write!(f, "defaults"),
            ConfigTier::Explicit => write!(f, "explicit"),
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
        }
    }
}

/// Loaded configuration plus provenance.
#[derive(Debug)]
pub struct ConfigLoader {
    config: Config,
    tier: ConfigTier,
    path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Load configuration from the process environment and well-known paths.
    ///
    /// An explicit path that does not exist is an error; missing project or
    /// user files are skipped.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));
        let user = dirs::home_dir().map(|h| h.join(".productmind").join("config.yaml"));

        let mut loader =
            Self::load_from(explicit.as_deref(), Path::new("productmind.yaml"), user.as_deref())?;
        loader.apply_env(|key| std::env::var(key).ok());
        Ok(loader)
    }

    /// Resolve the config file from explicit candidates without touching the
    /// process environment.
    pub fn load_from(
        explicit: Option<&Path>,
        project: &Path,
        user: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            let config = read_config(path)?;
            return Ok(Self::found(config, ConfigTier::Explicit, path));
        }

        if project.is_file() {
            let config = read_config(project)?;
            return Ok(Self::found(config, ConfigTier::Project, project));
        }

        if let Some(path) = user.filter(|p| p.is_file()) {
            let config = read_config(path)?;
            return Ok(Self::found(config, ConfigTier::User, path));
        }

        debug!("No config file found, using defaults");
        Ok(Self {
            config: Config::default(),
            tier: ConfigTier::Defaults,
            path: None,
        })
    }

    fn found(config: Config, tier: ConfigTier, path: &Path) -> Self {
        debug!(tier = %tier, path = %path.display(), "Loaded config file");
        Self {
            config,
            tier,
            path: Some(path.to_path_buf()),
        }
    }

    /// Apply `PRODUCTMIND_*` overrides using the given variable lookup.
    /// Unparsable numeric values are ignored with a warning.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PRODUCTMIND_HOST") {
            self.config.server.host = host;
        }
        if let Some(port) = parse_env(&lookup, "PRODUCTMIND_PORT") {
            self.config.server.port = port;
        }
        if let Some(delay) = parse_env(&lookup, "PRODUCTMIND_DELAY_MS") {
            self.config.generation.delay_ms = delay;
        }
        if let Some(seed) = parse_env(&lookup, "PRODUCTMIND_SEED") {
            self.config.generation.seed = Some(seed);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn tier(&self) -> ConfigTier {
        self.tier
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

fn parse_env<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn falls_back_to_defaults_when_nothing_exists() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::load_from(
            None,
            &dir.path().join("productmind.yaml"),
            Some(&dir.path().join("user.yaml")),
        )
        .unwrap();
        assert_eq!(loader.tier(), ConfigTier::Defaults);
        assert!(loader.path().is_none());
        assert_eq!(loader.config().tickets.start, 100);
    }

    #[test]
    fn project_file_beats_user_file() {
        let dir = TempDir::new().unwrap();
        let project = write(&dir, "productmind.yaml", "server:\n  port: 9000\n");
        let user = write(&dir, "user.yaml", "server:\n  port: 9100\n");

        let loader = ConfigLoader::load_from(None, &project, Some(&user)).unwrap();
        assert_eq!(loader.tier(), ConfigTier::Project);
        assert_eq!(loader.config().server.port, 9000);
    }

    #[test]
    fn user_file_used_without_project_file() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.yaml", "tickets:\n  prefix: PM\n");

        let loader =
            ConfigLoader::load_from(None, &dir.path().join("missing.yaml"), Some(&user)).unwrap();
        assert_eq!(loader.tier(), ConfigTier::User);
        assert_eq!(loader.config().tickets.prefix, "PM");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigLoader::load_from(
            Some(&dir.path().join("nope.yaml")),
            &dir.path().join("productmind.yaml"),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.yaml", "server: [unclosed");
        assert!(ConfigLoader::load_from(Some(&path), &path, None).is_err());
    }

    #[test]
    fn env_overrides_apply_and_skip_garbage() {
        let dir = TempDir::new().unwrap();
        let mut loader =
            ConfigLoader::load_from(None, &dir.path().join("missing.yaml"), None).unwrap();

        let vars: HashMap<&str, &str> = [
            ("PRODUCTMIND_HOST", "0.0.0.0"),
            ("PRODUCTMIND_PORT", "not-a-port"),
            ("PRODUCTMIND_DELAY_MS", "0"),
            ("PRODUCTMIND_SEED", "42"),
        ]
        .into_iter()
        .collect();
        loader.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        let config = loader.into_config();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, super::super::DEFAULT_UI_PORT);
        assert_eq!(config.generation.delay_ms, 0);
        assert_eq!(config.generation.seed, Some(42));
    }
}
