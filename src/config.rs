use crate::cli::output::OutputFormat;
use crate::mutator::MutationConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = ".namemut.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub periods: bool,
    pub digits: u32,
    pub domain: String,

    /// Records with more tokens than this are skipped; 0 disables the check
    pub max_tokens: usize,

    pub format: OutputFormat,
}

fn default_max_tokens() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            periods: false,
            digits: 0,
            domain: String::new(),
            max_tokens: default_max_tokens(),
            format: OutputFormat::default(),
        }
    }
}

/// One configuration layer: a config file or the command line.
/// Only the keys that are present replace the value from lower layers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    pub periods: Option<bool>,
    pub digits: Option<u32>,
    pub domain: Option<String>,
    pub max_tokens: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl Overrides {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local (or explicit) config > global config > defaults
    pub fn load(config_file: Option<&Path>, cli: Overrides) -> Result<Self> {
        let global_path = Self::global_config_path().filter(|path| path.exists());

        let local_path = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(LOCAL_CONFIG)).filter(|path| path.exists()),
        };

        Self::from_layers(global_path.as_deref(), local_path.as_deref(), cli)
    }

    fn from_layers(global: Option<&Path>, local: Option<&Path>, cli: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = global {
            info!("Loading global config from {}", path.display());
            config = config.apply(Overrides::from_file(path)?);
        }

        if let Some(path) = local {
            info!("Loading config from {}", path.display());
            config = config.apply(Overrides::from_file(path)?);
        }

        Ok(config.apply(cli))
    }

    fn apply(mut self, layer: Overrides) -> Self {
        if let Some(periods) = layer.periods {
            self.periods = periods;
        }
        if let Some(digits) = layer.digits {
            self.digits = digits;
        }
        if let Some(domain) = layer.domain {
            self.domain = domain;
        }
        if let Some(max_tokens) = layer.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        self
    }

    pub fn mutation_config(&self) -> MutationConfig {
        MutationConfig {
            use_periods: self.periods,
            suffix_limit: self.digits,
            domain: self.domain.clone(),
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "namemut").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.periods);
        assert_eq!(config.digits, 0);
        assert!(config.domain.is_empty());
        assert_eq!(config.max_tokens, 10);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_apply_only_present_keys() {
        let base = Config {
            digits: 3,
            domain: "corp.local".to_string(),
            ..Default::default()
        };

        let config = base.apply(Overrides {
            periods: Some(true),
            ..Default::default()
        });
        assert!(config.periods);
        assert_eq!(config.digits, 3);
        assert_eq!(config.domain, "corp.local");
    }

    #[test]
    fn test_local_resets_global_to_default_values() {
        let global = config_file("digits = 3\nperiods = true\nformat = \"json\"\nmax_tokens = 4\n");
        let local = config_file("digits = 0\nperiods = false\nformat = \"text\"\nmax_tokens = 10\n");

        let config =
            Config::from_layers(Some(global.path()), Some(local.path()), Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_layer_priority() {
        let global = config_file("digits = 3\ndomain = \"global.org\"\nmax_tokens = 6\n");
        let local = config_file("domain = \"local.org\"\n");

        let config = Config::from_layers(
            Some(global.path()),
            Some(local.path()),
            Overrides {
                digits: Some(1),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.digits, 1);
        assert_eq!(config.domain, "local.org");
        assert_eq!(config.max_tokens, 6);
    }

    #[test]
    fn test_partial_config_file() {
        let file = config_file("digits = 5\nformat = \"json\"\n");

        let layer = Overrides::from_file(file.path()).unwrap();
        assert_eq!(layer.digits, Some(5));
        assert_eq!(layer.format, Some(OutputFormat::Json));
        assert_eq!(layer.max_tokens, None);
    }

    #[test]
    fn test_invalid_config_file() {
        let file = config_file("digits = \"many\"\n");

        let err = Overrides::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_mutation_config() {
        let config = Config {
            periods: true,
            digits: 2,
            domain: "x.org".to_string(),
            ..Default::default()
        };
        let mc = config.mutation_config();
        assert!(mc.use_periods);
        assert_eq!(mc.suffix_limit, 2);
        assert_eq!(mc.domain, "x.org");
    }
}
