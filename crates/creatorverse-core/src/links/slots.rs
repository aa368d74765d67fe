use serde::{Deserialize, Serialize};

use crate::domain::Platform;
use crate::links::codec::{SocialLinkSet, encode};

/// Huecos de enlaces sociales que expone el formulario de un creador.
///
/// El orden de empaquetado es parte del contrato: youtube, instagram, x.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSlots {
  pub youtube: Option<String>,
  pub instagram: Option<String>,
  /// Twitter/X.
  pub x: Option<String>,
}

impl SocialSlots {
  /// Empaqueta los huecos en el campo de enlaces.
  pub fn encode(&self) -> String {
    encode([self.youtube.as_deref(), self.instagram.as_deref(), self.x.as_deref()])
  }

  /// Rellena los huecos con el primer enlace de cada plataforma.
  ///
  /// Los enlaces de otras plataformas no tienen hueco y se pierden si el
  /// formulario se vuelve a guardar.
  pub fn from_links(links: &SocialLinkSet) -> Self {
    let pick = |platform| links.first_href(platform).map(str::to_string);

    SocialSlots {
      youtube: pick(Platform::Youtube),
      instagram: pick(Platform::Instagram),
      x: pick(Platform::Twitter),
    }
  }
}
