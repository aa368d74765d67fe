use creatorverse_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
  pub db_path: PathBuf,
  /// `journal_mode` de SQLite que se aplica a cada conexión del pool.
  pub journal_mode: Option<String>,
  /// Máximo de conexiones en el pool.
  #[serde(default = "default_pool_size")]
  pub pool_size: u32,
}

fn default_pool_size() -> u32 {
  4
}

impl Default for StorageConfig {
  fn default() -> Self {
    let db_path = PATHS.data_dir.join("creatorverse.db");
    StorageConfig { db_path, journal_mode: Some("WAL".to_string()), pool_size: default_pool_size() }
  }
}

impl StorageConfig {
  /// Config para un fichero concreto, sin mirar `creatorverse.toml`.
  pub fn at(db_path: impl Into<PathBuf>) -> Self {
    StorageConfig { db_path: db_path.into(), journal_mode: Some("WAL".to_string()), pool_size: default_pool_size() }
  }

  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("storage")?;
    CONFIG_BACKEND.save_section("storage", &cfg)?;
    Ok(cfg)
  }

  /// Cadena de conexión para el backend SQLite de diesel.
  pub fn database_url(&self) -> String {
    self.db_path.to_string_lossy().into_owned()
  }
}
