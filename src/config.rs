use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Optional TOML document passed with `--config`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessorConfig {
    /// Target directory for pattern storage.
    pub data_dir: Option<Utf8PathBuf>,
}

impl ProcessorConfig {
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
    }
}

/// Pick the working directory: flag, then config file. `None` leaves the
/// processor on its built-in default.
pub fn resolve_data_dir(
    flag: Option<&Utf8Path>,
    config: &ProcessorConfig,
) -> Option<Utf8PathBuf> {
    flag.map(Utf8Path::to_owned).or_else(|| config.data_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("config.toml")).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_data_dir() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "data_dir = 'store/patterns'\n");

        let config = ProcessorConfig::load(&path).unwrap();
        assert_eq!(config.data_dir.as_deref(), Some(Utf8Path::new("store/patterns")));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "");

        let config = ProcessorConfig::load(&path).unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "data_directory = 'x'\n");

        let err = ProcessorConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ProcessorConfig::load(Utf8Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }

    #[test]
    fn flag_beats_config_file() {
        let config = ProcessorConfig {
            data_dir: Some(Utf8PathBuf::from("from-config")),
        };

        assert_eq!(
            resolve_data_dir(Some(Utf8Path::new("from-flag")), &config).as_deref(),
            Some(Utf8Path::new("from-flag"))
        );
        assert_eq!(
            resolve_data_dir(None, &config).as_deref(),
            Some(Utf8Path::new("from-config"))
        );
        assert!(resolve_data_dir(None, &ProcessorConfig::default()).is_none());
    }
}
