use crate::paths::{ConfigError, CreatorversePaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

// toml_edit para escribir preservando comentarios
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Backend de configuración sobre `creatorverse.toml`, una sección por crate.
pub struct TomlConfigBackend {
  paths: CreatorversePaths,
}

impl TomlConfigBackend {
  pub fn new(paths: CreatorversePaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &CreatorversePaths {
    &self.paths
  }

  /// Lee una sección del fichero. Sin fichero o sin sección devuelve
  /// `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde) y volver a parsearla como
    //    tabla de toml_edit.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Reemplazar solo esa sección; el resto del documento no se toca.
    doc[section] = section_item;

    crate::io::atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    db_path: String,
    pool_size: u32,
  }

  fn backend(base: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(CreatorversePaths::under(base).unwrap())
  }

  #[test]
  fn test_missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());

    let loaded: Sample = backend.load_section_with_default("storage").unwrap();
    assert_eq!(loaded, Sample::default());
  }

  #[test]
  fn test_save_then_load_section() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());
    let sample = Sample { db_path: "/tmp/creators.db".into(), pool_size: 4 };

    backend.save_section("storage", &sample).unwrap();

    let loaded: Sample = backend.load_section_with_default("storage").unwrap();
    assert_eq!(loaded, sample);
  }

  #[test]
  fn test_save_preserves_other_sections_and_comments() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());
    fs::write(
      backend.paths().config_file(),
      "# placeholders for the grid\n[display]\ncard_image = \"card.png\"\n",
    )
    .unwrap();

    backend.save_section("storage", &Sample { db_path: "x.db".into(), pool_size: 1 }).unwrap();

    let content = fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(content.contains("# placeholders for the grid"));
    assert!(content.contains("card_image = \"card.png\""));
    assert!(content.contains("[storage]"));
  }

  #[test]
  fn test_bad_section_type_is_reported() {
    let tmp = tempdir().unwrap();
    let backend = backend(tmp.path());
    fs::write(backend.paths().config_file(), "[storage]\ndb_path = 3\npool_size = 1\n").unwrap();

    let err = backend.load_section_with_default::<Sample>("storage").unwrap_err();
    assert!(err.to_string().contains("decode section [storage]"));
  }
}
