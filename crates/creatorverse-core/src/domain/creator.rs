use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::ids::CreatorId;
use crate::links::{self, SocialLinkSet};

/// Nombre mostrado cuando el registro no tiene nombre.
pub const UNTITLED: &str = "Untitled";

/// Perfil de un creador tal y como lo devuelve el almacén de datos.
///
/// El adaptador de persistencia ya ha reconciliado las variantes históricas
/// de la columna de imagen, así que aquí solo existe `image_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
  /// Identificador asignado por el almacén.
  pub id: CreatorId,

  pub name: Option<String>,

  pub description: Option<String>,

  /// URL de la imagen de perfil, si la hay.
  pub image_url: Option<String>,

  /// Enlaces sociales empaquetados en un único campo de texto.
  pub links_field: Option<String>,

  /// Momento de inserción, si el almacén lo conoce.
  pub created_at: Option<NaiveDateTime>,
}

impl Creator {
  /// Nombre para mostrar; `Untitled` si falta o está en blanco.
  pub fn display_name(&self) -> &str {
    non_blank(self.name.as_deref()).unwrap_or(UNTITLED)
  }

  /// Descripción para mostrar; vacía si falta.
  pub fn display_description(&self) -> &str {
    self.description.as_deref().unwrap_or_default()
  }

  /// Decodifica `links_field` en enlaces clasificados por plataforma.
  pub fn social_links(&self) -> SocialLinkSet {
    links::decode(self.links_field.as_deref())
  }
}

/// Conjunto de campos que se envía al almacén al crear o actualizar.
///
/// En una actualización todos los campos se sobrescriben: `None` borra el
/// valor almacenado.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorChanges {
  pub name: Option<String>,
  pub description: Option<String>,
  pub image_url: Option<String>,
  /// Campo de enlaces ya codificado (puede ser vacío).
  pub links_field: String,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Platform;

  fn creator(name: Option<&str>) -> Creator {
    Creator {
      id: CreatorId::new(),
      name: name.map(str::to_string),
      description: None,
      image_url: None,
      links_field: Some("https://twitch.tv/foo, https://example.com".into()),
      created_at: None,
    }
  }

  #[test]
  fn test_display_name_placeholder() {
    assert_eq!(creator(None).display_name(), "Untitled");
    assert_eq!(creator(Some("   ")).display_name(), "Untitled");
    assert_eq!(creator(Some("Tame Impala")).display_name(), "Tame Impala");
  }

  #[test]
  fn test_missing_description_is_empty() {
    assert_eq!(creator(None).display_description(), "");
  }

  #[test]
  fn test_social_links_decodes_field() {
    let links = creator(None).social_links();
    let platforms: Vec<Platform> = links.iter().map(|l| l.platform).collect();
    assert_eq!(platforms, vec![Platform::Twitch, Platform::Site]);
  }
}
