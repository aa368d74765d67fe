use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable / tests).
pub const BASE_DIR_ENV: &str = "CREATORVERSE_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct CreatorversePaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl CreatorversePaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (config_dir, data_dir, base_dir);

    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
      data_dir = base.join("data");
    } else {
      let proj_dirs =
        ProjectDirs::from("com", "creatorverse", "creatorverse").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
      data_dir = proj_dirs.data_dir().to_path_buf();
    }

    Self::at(base_dir, config_dir, data_dir)
  }

  /// Paths bajo un directorio concreto, sin mirar el entorno.
  pub fn under(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base = base.into();
    let config_dir = base.join("config");
    let data_dir = base.join("data");
    Self::at(base, config_dir, data_dir)
  }

  fn at(base_dir: PathBuf, config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;

    Ok(Self { base_dir, config_dir, data_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("creatorverse.toml")
  }
}
