use creatorverse_config::{CONFIG_BACKEND, ConfigError, TomlConfigBackend};
use creatorverse_core::views::{CARD_PLACEHOLDER_IMAGE, DETAIL_PLACEHOLDER_IMAGE, Placeholders};
use serde::{Deserialize, Serialize};

/// Sección `[display]` de `creatorverse.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
  #[serde(default = "default_card_image")]
  pub card_image: String,
  #[serde(default = "default_detail_image")]
  pub detail_image: String,
}

fn default_card_image() -> String {
  CARD_PLACEHOLDER_IMAGE.to_string()
}

fn default_detail_image() -> String {
  DETAIL_PLACEHOLDER_IMAGE.to_string()
}

impl Default for DisplayConfig {
  fn default() -> Self {
    Self { card_image: default_card_image(), detail_image: default_detail_image() }
  }
}

impl DisplayConfig {
  /// Carga desde la sección `[display]` usando el backend global.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    backend.load_section_with_default("display")
  }
}

impl From<DisplayConfig> for Placeholders {
  fn from(cfg: DisplayConfig) -> Self {
    Placeholders { card_image: cfg.card_image, detail_image: cfg.detail_image }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use creatorverse_config::CreatorversePaths;
  use tempfile::tempdir;

  #[test]
  fn test_partial_section_falls_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(CreatorversePaths::under(tmp.path()).unwrap());
    std::fs::write(backend.paths().config_file(), "[display]\ncard_image = \"card.png\"\n").unwrap();

    let cfg = DisplayConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.card_image, "card.png");
    assert_eq!(cfg.detail_image, DETAIL_PLACEHOLDER_IMAGE);

    let placeholders = Placeholders::from(cfg);
    assert_eq!(placeholders.card_image, "card.png");
  }

  #[test]
  fn test_missing_file_uses_defaults() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(CreatorversePaths::under(tmp.path()).unwrap());

    assert_eq!(DisplayConfig::load_from(&backend).unwrap(), DisplayConfig::default());
  }
}
