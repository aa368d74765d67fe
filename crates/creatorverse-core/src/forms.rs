use serde::{Deserialize, Serialize};

use crate::domain::creator::non_blank;
use crate::domain::{Creator, CreatorChanges};
use crate::links::{SocialSlots, normalize_avatar_url};

/// Estado de los formularios de alta y edición: el texto tal cual lo
/// escribió el usuario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorForm {
  pub name: String,
  pub description: String,
  pub image_url: String,
  pub socials: SocialSlots,
}

impl CreatorForm {
  /// Formulario de edición prellenado con un registro existente.
  pub fn from_creator(creator: &Creator) -> Self {
    CreatorForm {
      name: creator.name.clone().unwrap_or_default(),
      description: creator.description.clone().unwrap_or_default(),
      image_url: creator.image_url.clone().unwrap_or_default(),
      socials: SocialSlots::from_links(&creator.social_links()),
    }
  }

  /// Convierte el formulario en el conjunto de campos a guardar.
  ///
  /// Los textos se recortan y los vacíos pasan a `None`; la imagen pasa por
  /// [`normalize_avatar_url`] y los enlaces se empaquetan por hueco.
  pub fn to_changes(&self) -> CreatorChanges {
    let image = non_blank(Some(self.image_url.as_str())).map(str::trim);

    CreatorChanges {
      name: trimmed(&self.name),
      description: trimmed(&self.description),
      image_url: normalize_avatar_url(image),
      links_field: self.socials.encode(),
    }
  }
}

fn trimmed(value: &str) -> Option<String> {
  non_blank(Some(value)).map(|v| v.trim().to_string())
}
