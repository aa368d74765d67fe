use serde::{Deserialize, Serialize};
use std::fmt;

/// Red social a la que pertenece un enlace.
///
/// Conjunto cerrado: cualquier URL `http(s)` que no encaje con ninguna
/// plataforma conocida cae en [`Platform::Site`].
///
/// Para Twitter/X la etiqueta canónica es `twitter`; `x` se acepta como alias
/// al deserializar, pero nunca se emite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  Youtube,
  #[serde(alias = "x")]
  Twitter,
  Instagram,
  Tiktok,
  Twitch,
  /// Web genérica.
  Site,
}

impl Platform {
  pub fn as_str(&self) -> &'static str {
    match self {
      Platform::Youtube => "youtube",
      Platform::Twitter => "twitter",
      Platform::Instagram => "instagram",
      Platform::Tiktok => "tiktok",
      Platform::Twitch => "twitch",
      Platform::Site => "site",
    }
  }

  /// Nombre legible, pensado para etiquetas en pantalla.
  pub fn label(&self) -> &'static str {
    match self {
      Platform::Youtube => "YouTube",
      Platform::Twitter => "X / Twitter",
      Platform::Instagram => "Instagram",
      Platform::Tiktok => "TikTok",
      Platform::Twitch => "Twitch",
      Platform::Site => "Website",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
