use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use texty_core::{CanonicalField, ColumnMap, CoreError, DEFAULT_OUTPUT_FILE_NAME};
use thiserror::Error;

const APP_DIR: &str = "texty";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_file_name: String,
    pub log_file: Option<PathBuf>,
    column_map: ColumnMap,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            log_file: None,
            column_map: ColumnMap::default(),
        }
    }
}

impl AppConfig {
    pub fn column_map(&self) -> &ColumnMap {
        &self.column_map
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid output_file_name value: {0:?}")]
    InvalidOutputFileName(String),
    #[error("invalid log_file value: {0}")]
    InvalidLogFile(PathBuf),
    #[error("invalid columns.{field}: {source}")]
    InvalidColumns {
        field: String,
        #[source]
        source: CoreError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_file_name: Option<String>,
    log_file: Option<PathBuf>,
    #[serde(default)]
    columns: BTreeMap<String, Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(name) = parsed.output_file_name {
        config.output_file_name = validate_output_file_name(&name)?;
    }

    if let Some(log_file) = parsed.log_file {
        if log_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidLogFile(log_file));
        }
        config.log_file = Some(log_file);
    }

    for (key, candidates) in parsed.columns {
        let invalid = |source| ConfigError::InvalidColumns {
            field: key.clone(),
            source,
        };
        let field: CanonicalField = key.parse().map_err(invalid)?;
        config.column_map = config
            .column_map
            .with_override(field, candidates)
            .map_err(invalid)?;
    }

    Ok(config)
}

// The output always lands beside the input, so only a bare file name is
// accepted here.
fn validate_output_file_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let is_bare = Path::new(trimmed)
        .file_name()
        .is_some_and(|name| name == trimmed);
    if trimmed.is_empty() || !is_bare {
        return Err(ConfigError::InvalidOutputFileName(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{load, load_at_path, merge_config, ConfigError, ConfigFile};
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;
    use texty_core::{CanonicalField, CoreError};

    #[test]
    fn merge_config_defaults() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged.output_file_name, texty_core::DEFAULT_OUTPUT_FILE_NAME);
        assert_eq!(merged.output_file_name, "formatted_textypro.csv");
        assert!(merged.log_file.is_none());
        assert_eq!(merged.column_map(), &texty_core::ColumnMap::default());
    }

    #[test]
    fn merge_config_applies_column_overrides() {
        let mut columns = BTreeMap::new();
        columns.insert(
            "phone_number".to_string(),
            vec!["Mobile Phone".to_string(), "Other Phone".to_string()],
        );
        let parsed = ConfigFile {
            output_file_name: Some("texty.csv".to_string()),
            log_file: None,
            columns,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.output_file_name, "texty.csv");
        let rule = merged
            .column_map()
            .rule(CanonicalField::PhoneNumber)
            .expect("rule");
        assert_eq!(rule.candidates, ["Mobile Phone", "Other Phone"]);
    }

    #[test]
    fn merge_config_rejects_fixed_fields() {
        let mut columns = BTreeMap::new();
        columns.insert("tags".to_string(), vec!["Categories".to_string()]);
        let parsed = ConfigFile {
            columns,
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColumns {
                source: CoreError::UnmappableField(_),
                ..
            }
        ));
    }

    #[test]
    fn merge_config_rejects_unknown_fields() {
        let mut columns = BTreeMap::new();
        columns.insert("fax".to_string(), vec!["Business Fax".to_string()]);
        let parsed = ConfigFile {
            columns,
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert_eq!(err.to_string(), "invalid columns.fax: unknown canonical field: fax");
    }

    #[test]
    fn merge_config_rejects_output_paths() {
        for name in ["", "  ", "out/texty.csv", "../texty.csv"] {
            let parsed = ConfigFile {
                output_file_name: Some(name.to_string()),
                ..ConfigFile::default()
            };
            let err = merge_config(parsed).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidOutputFileName(_)), "{name}");
        }
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));

        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "output_file_name = \"upload.csv\"\nlog_file = \"texty.log\"\n[columns]\ncity = [\"Home City\", \"Business City\"]\n",
        )
        .expect("write config");

        let config = load(Some(path)).expect("load");
        assert_eq!(config.output_file_name, "upload.csv");
        assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("texty.log")));
        let rule = config.column_map().rule(CanonicalField::City).expect("rule");
        assert_eq!(rule.candidates, ["Home City", "Business City"]);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "delimiter = \";\"\n").expect("write config");

        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
