//! Modelos de vista de las pantallas de listado y detalle.
//!
//! Aquí se aplican los valores por defecto de los campos que faltan, para que
//! ninguna pantalla tenga que decidirlos por su cuenta.

use serde::{Deserialize, Serialize};

use crate::domain::creator::non_blank;
use crate::domain::{Creator, CreatorId};
use crate::links::{SocialLink, SocialLinkSet};
use crate::routes::Route;

pub const CARD_PLACEHOLDER_IMAGE: &str = "https://placehold.co/640x360?text=Creator";
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x600?text=Creator";
/// Texto alternativo de la imagen de detalle cuando no hay nombre.
pub const DETAIL_ALT_FALLBACK: &str = "Creator";

/// Imágenes de relleno para registros sin imagen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
  pub card_image: String,
  pub detail_image: String,
}

impl Default for Placeholders {
  fn default() -> Self {
    Self { card_image: CARD_PLACEHOLDER_IMAGE.to_string(), detail_image: DETAIL_PLACEHOLDER_IMAGE.to_string() }
  }
}

/// Tarjeta de la rejilla de creadores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorCard {
  pub id: CreatorId,
  pub name: String,
  pub description: String,
  pub image: String,
  pub links: Vec<SocialLink>,
  pub view_route: String,
  pub edit_route: String,
}

impl CreatorCard {
  pub fn new(creator: &Creator, placeholders: &Placeholders) -> Self {
    CreatorCard {
      id: creator.id,
      name: creator.display_name().to_string(),
      description: creator.display_description().to_string(),
      image: image_or(creator, &placeholders.card_image),
      links: creator.social_links().into_vec(),
      view_route: Route::View(creator.id).to_string(),
      edit_route: Route::Edit(creator.id).to_string(),
    }
  }
}

/// Vista de detalle de un creador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorDetail {
  pub id: CreatorId,
  pub name: Option<String>,
  pub image: String,
  pub image_alt: String,
  pub description: Option<String>,
  pub links: SocialLinkSet,
  pub edit_route: String,
}

impl CreatorDetail {
  pub fn new(creator: &Creator, placeholders: &Placeholders) -> Self {
    CreatorDetail {
      id: creator.id,
      name: non_blank(creator.name.as_deref()).map(str::to_string),
      image: image_or(creator, &placeholders.detail_image),
      image_alt: non_blank(creator.name.as_deref()).unwrap_or(DETAIL_ALT_FALLBACK).to_string(),
      description: non_blank(creator.description.as_deref()).map(str::to_string),
      links: creator.social_links(),
      edit_route: Route::Edit(creator.id).to_string(),
    }
  }
}

fn image_or(creator: &Creator, placeholder: &str) -> String {
  non_blank(creator.image_url.as_deref()).unwrap_or(placeholder).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Platform;

  fn bare() -> Creator {
    Creator {
      id: CreatorId::new(),
      name: None,
      description: None,
      image_url: None,
      links_field: None,
      created_at: None,
    }
  }

  #[test]
  fn test_card_defaults() {
    let creator = bare();
    let card = CreatorCard::new(&creator, &Placeholders::default());

    assert_eq!(card.name, "Untitled");
    assert_eq!(card.description, "");
    assert_eq!(card.image, CARD_PLACEHOLDER_IMAGE);
    assert!(card.links.is_empty());
    assert_eq!(card.view_route, format!("/view/{}", creator.id));
    assert_eq!(card.edit_route, format!("/edit/{}", creator.id));
  }

  #[test]
  fn test_detail_defaults_and_links() {
    let creator = Creator {
      links_field: Some("https://tiktok.com/foo https://tiktok.com/foo".into()),
      ..bare()
    };
    let detail = CreatorDetail::new(&creator, &Placeholders::default());

    assert_eq!(detail.name, None);
    assert_eq!(detail.image_alt, "Creator");
    assert_eq!(detail.image, DETAIL_PLACEHOLDER_IMAGE);
    assert_eq!(detail.links.len(), 1);
    assert_eq!(detail.links.first_href(Platform::Tiktok), Some("https://tiktok.com/foo"));
  }

  #[test]
  fn test_custom_placeholders_and_real_image() {
    let placeholders = Placeholders { card_image: "card.png".into(), detail_image: "detail.png".into() };

    assert_eq!(CreatorCard::new(&bare(), &placeholders).image, "card.png");

    let creator = Creator { image_url: Some("https://img/x.png".into()), name: Some("X".into()), ..bare() };
    let detail = CreatorDetail::new(&creator, &placeholders);
    assert_eq!(detail.image, "https://img/x.png");
    assert_eq!(detail.image_alt, "X");
  }
}
