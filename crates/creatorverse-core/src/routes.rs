use std::fmt;

use crate::domain::CreatorId;

/// Pantallas de la aplicación.
///
/// Cualquier ruta que no encaje (incluido un id que no se puede parsear)
/// redirige al listado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  /// `/`
  List,
  /// `/add`
  Add,
  /// `/edit/:id`
  Edit(CreatorId),
  /// `/view/:id`
  View(CreatorId),
}

impl Route {
  pub fn resolve(path: &str) -> Route {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
      [] => Route::List,
      ["add"] => Route::Add,
      ["edit", id] => id.parse().map(Route::Edit).unwrap_or(Route::List),
      ["view", id] => id.parse().map(Route::View).unwrap_or(Route::List),
      _ => Route::List,
    }
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Route::List => write!(f, "/"),
      Route::Add => write!(f, "/add"),
      Route::Edit(id) => write!(f, "/edit/{id}"),
      Route::View(id) => write!(f, "/view/{id}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_known_routes() {
    let id = CreatorId::new();

    assert_eq!(Route::resolve("/"), Route::List);
    assert_eq!(Route::resolve(""), Route::List);
    assert_eq!(Route::resolve("/add"), Route::Add);
    assert_eq!(Route::resolve("/add/"), Route::Add);
    assert_eq!(Route::resolve(&format!("/edit/{id}")), Route::Edit(id));
    assert_eq!(Route::resolve(&format!("/view/{id}?tab=links")), Route::View(id));
  }

  #[test]
  fn test_unmatched_paths_redirect_to_list() {
    assert_eq!(Route::resolve("/nope"), Route::List);
    assert_eq!(Route::resolve("/view/42"), Route::List);
    assert_eq!(Route::resolve("/edit"), Route::List);
    assert_eq!(Route::resolve("/add/extra"), Route::List);
  }

  #[test]
  fn test_display_round_trip() {
    let id = CreatorId::new();
    for route in [Route::List, Route::Add, Route::Edit(id), Route::View(id)] {
      assert_eq!(Route::resolve(&route.to_string()), route);
    }
  }
}
