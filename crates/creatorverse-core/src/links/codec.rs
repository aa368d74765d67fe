use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::Platform;

/// Tabla de clasificación, en orden de prioridad: gana la primera fila que
/// tenga alguna subcadena contenida en la URL (ya en minúsculas).
const PLATFORM_RULES: [(Platform, &[&str]); 5] = [
  (Platform::Youtube, &["youtube.com", "youtu.be", "/@"]),
  (Platform::Twitter, &["twitter.com", "x.com"]),
  (Platform::Instagram, &["instagram.com"]),
  (Platform::Tiktok, &["tiktok.com"]),
  (Platform::Twitch, &["twitch.tv"]),
];

const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Un enlace social ya clasificado.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocialLink {
  pub platform: Platform,
  /// URL tal y como aparecía en el campo (sin tocar mayúsculas).
  pub href: String,
}

/// Secuencia ordenada de enlaces sin `href` repetidos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinkSet(Vec<SocialLink>);

impl SocialLinkSet {
  pub fn iter(&self) -> std::slice::Iter<'_, SocialLink> {
    self.0.iter()
  }

  pub fn as_slice(&self) -> &[SocialLink] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// `href` del primer enlace de la plataforma indicada.
  pub fn first_href(&self, platform: Platform) -> Option<&str> {
    self.0.iter().find(|link| link.platform == platform).map(|link| link.href.as_str())
  }

  pub fn into_vec(self) -> Vec<SocialLink> {
    self.0
  }
}

impl IntoIterator for SocialLinkSet {
  type Item = SocialLink;
  type IntoIter = std::vec::IntoIter<SocialLink>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a SocialLinkSet {
  type Item = &'a SocialLink;
  type IntoIter = std::slice::Iter<'a, SocialLink>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// Clasifica una URL por plataforma.
///
/// Solo mira subcadenas; no valida el esquema ni el host.
pub fn classify(href: &str) -> Platform {
  let lowered = href.to_lowercase();

  PLATFORM_RULES
    .iter()
    .find(|(_, needles)| needles.iter().any(|needle| lowered.contains(needle)))
    .map(|(platform, _)| *platform)
    .unwrap_or(Platform::Site)
}

/// Decodifica el campo de enlaces de un creador.
///
/// - Campo ausente o en blanco → conjunto vacío.
/// - Los tokens se separan por rachas de espacios y/o comas.
/// - Se descartan en silencio los tokens que no empiezan por `http://` o
///   `https://` (sin distinguir mayúsculas).
/// - Si un `href` ya apareció antes, se conserva solo la primera aparición.
pub fn decode(links_field: Option<&str>) -> SocialLinkSet {
  let raw = links_field.map(str::trim).unwrap_or_default();
  if raw.is_empty() {
    return SocialLinkSet::default();
  }

  let mut seen: HashSet<&str> = HashSet::new();
  let mut links = Vec::new();

  for token in raw.split(is_separator).filter(|t| !t.is_empty()) {
    if !has_http_scheme(token) {
      continue;
    }

    if !seen.insert(token) {
      continue;
    }

    links.push(SocialLink { platform: classify(token), href: token.to_string() });
  }

  SocialLinkSet(links)
}

/// Empaqueta URLs opcionales en un único campo de texto.
///
/// Recorta cada valor, descarta los vacíos y une el resto con un espacio,
/// respetando el orden de entrada. No clasifica ni valida nada.
pub fn encode<I, S>(parts: I) -> String
where
  I: IntoIterator<Item = Option<S>>,
  S: AsRef<str>,
{
  let kept: Vec<String> = parts
    .into_iter()
    .flatten()
    .map(|part| part.as_ref().trim().to_string())
    .filter(|part| !part.is_empty())
    .collect();

  kept.join(" ")
}

fn is_separator(c: char) -> bool {
  c.is_whitespace() || c == ','
}

fn has_http_scheme(token: &str) -> bool {
  ACCEPTED_SCHEMES
    .iter()
    .any(|scheme| token.get(..scheme.len()).is_some_and(|head| head.eq_ignore_ascii_case(scheme)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::rstest;

  fn pairs(set: &SocialLinkSet) -> Vec<(Platform, &str)> {
    set.iter().map(|l| (l.platform, l.href.as_str())).collect()
  }

  #[rstest]
  #[case("https://www.youtube.com/channel/UC123", Platform::Youtube)]
  #[case("https://youtu.be/dQw4w9WgXcQ", Platform::Youtube)]
  #[case("https://example.com/@someone", Platform::Youtube)]
  #[case("https://twitter.com/jack", Platform::Twitter)]
  #[case("https://x.com/jack", Platform::Twitter)]
  #[case("https://www.instagram.com/natgeo", Platform::Instagram)]
  #[case("https://www.tiktok.com/@khaby.lame", Platform::Youtube)]
  #[case("https://www.tiktok.com/khaby.lame", Platform::Tiktok)]
  #[case("https://twitch.tv/shroud", Platform::Twitch)]
  #[case("https://tameimpala.com", Platform::Site)]
  #[case("HTTPS://WWW.YOUTUBE.COM/C/FOO", Platform::Youtube)]
  fn test_classify_priority(#[case] href: &str, #[case] expected: Platform) {
    assert_eq!(classify(href), expected);
  }

  #[test]
  fn test_decode_end_to_end_example() {
    let set = decode(Some(
      "https://youtube.com/@foo https://x.com/bar, not-a-url https://youtube.com/@foo",
    ));

    assert_eq!(
      pairs(&set),
      vec![(Platform::Youtube, "https://youtube.com/@foo"), (Platform::Twitter, "https://x.com/bar")]
    );
  }

  #[rstest]
  #[case(None)]
  #[case(Some(""))]
  #[case(Some("   \n\t "))]
  #[case(Some(" , ,, "))]
  fn test_decode_empty_input(#[case] field: Option<&str>) {
    assert!(decode(field).is_empty());
  }

  #[test]
  fn test_decode_drops_tokens_without_http_scheme() {
    let set = decode(Some("ftp://files.example.com www.youtube.com/foo mailto:a@b.c javascript:alert(1)"));
    assert!(set.is_empty());
  }

  #[test]
  fn test_decode_scheme_check_is_case_insensitive() {
    let set = decode(Some("HTTP://Example.com/Page HtTpS://Twitch.tv/Foo"));
    assert_eq!(
      pairs(&set),
      vec![(Platform::Site, "HTTP://Example.com/Page"), (Platform::Twitch, "HtTpS://Twitch.tv/Foo")]
    );
  }

  #[test]
  fn test_decode_keeps_first_duplicate_with_original_casing() {
    let set = decode(Some("https://Example.com/A,https://Example.com/A https://example.com/a"));

    // Solo se deduplica por coincidencia exacta.
    assert_eq!(
      pairs(&set),
      vec![(Platform::Site, "https://Example.com/A"), (Platform::Site, "https://example.com/a")]
    );
  }

  #[test]
  fn test_decode_mixed_separators() {
    let set = decode(Some("https://a.com,,  https://b.com\n\thttps://c.com ,https://d.com"));
    let hrefs: Vec<&str> = set.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(hrefs, vec!["https://a.com", "https://b.com", "https://c.com", "https://d.com"]);
  }

  #[test]
  fn test_decode_does_not_panic_on_multibyte_tokens() {
    let set = decode(Some("ñandú https://café.example/ü"));
    assert_eq!(pairs(&set), vec![(Platform::Site, "https://café.example/ü")]);
  }

  #[test]
  fn test_encode_drops_blank_slots() {
    assert_eq!(encode(Vec::<Option<&str>>::new()), "");
    assert_eq!(encode([Some(""), Some("  ")]), "");
    assert_eq!(encode([None, Some("  https://x.com/bar "), None, Some("https://a.com")]), "https://x.com/bar https://a.com");
  }

  #[test]
  fn test_encode_then_decode_preserves_hrefs_and_order() {
    let urls = ["https://twitch.tv/a", "https://youtu.be/b", "https://example.org/c", "https://instagram.com/d"];
    let field = encode(urls.iter().map(Some));
    let decoded: Vec<String> = decode(Some(&field)).into_iter().map(|l| l.href).collect();
    assert_eq!(decoded, urls);
  }

  #[test]
  fn test_first_href() {
    let set = decode(Some("https://instagram.com/one https://instagram.com/two"));
    assert_eq!(set.first_href(Platform::Instagram), Some("https://instagram.com/one"));
    assert_eq!(set.first_href(Platform::Twitch), None);
  }
}
