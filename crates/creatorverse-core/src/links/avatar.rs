use once_cell::sync::Lazy;
use regex::Regex;

/// Tamaño que se pide al host de avatares.
const AVATAR_SIZE_TOKEN: &str = "s800-";

/// Token de tamaño de los avatares de YouTube/Google (`s88-`, `s160-`, ...).
static SIZE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)s[0-9]{2,4}-").expect("valid regex"));

/// Sube la resolución de un avatar de YouTube/Google a `s800`.
///
/// Sustituye la primera aparición de `s` + 2..4 dígitos + `-` por `s800-`.
/// Es una heurística: no se comprueba el host. Un valor ausente o vacío se
/// devuelve tal cual.
pub fn normalize_avatar_url(url: Option<&str>) -> Option<String> {
  let url = url?;
  if url.is_empty() {
    return Some(String::new());
  }

  Some(SIZE_TOKEN_RE.replace(url, AVATAR_SIZE_TOKEN).into_owned())
}
