//! Empaquetado de enlaces sociales en un único campo de texto.
//!
//! El almacén guarda todas las URLs sociales de un creador en una sola columna
//! de texto, separadas por espacios y/o comas. Este módulo es el único lugar
//! que sabe leer y escribir ese formato:
//!
//! - [`decode`]: texto → enlaces clasificados, sin duplicados y en orden.
//! - [`encode`]: URLs opcionales → texto listo para guardar.
//! - [`normalize_avatar_url`]: pide la variante grande de un avatar conocido.
//!
//! Ninguna de estas funciones falla: los tokens inválidos se descartan.

mod avatar;
mod codec;
mod slots;

pub use avatar::normalize_avatar_url;
pub use codec::{SocialLink, SocialLinkSet, classify, decode, encode};
pub use slots::SocialSlots;
