use std::io::Write;

use anyhow::Result;
use creatorverse_core::domain::CreatorId;
use creatorverse_core::forms::CreatorForm;
use creatorverse_core::links;
use creatorverse_core::ports::CreatorRepository;
use creatorverse_core::routes::Route;
use creatorverse_core::services::CreatorService;
use creatorverse_core::views::{CreatorCard, CreatorDetail, Placeholders};
use tracing::debug;

use crate::cli::FieldArgs;
use crate::render;

/// Las cuatro pantallas, manejadas desde la línea de comandos.
pub struct App<R>
where
  R: CreatorRepository,
{
  service: CreatorService<R>,
  placeholders: Placeholders,
}

impl<R> App<R>
where
  R: CreatorRepository,
{
  pub fn new(repo: R, placeholders: Placeholders) -> Self {
    Self { service: CreatorService::new(repo), placeholders }
  }

  pub fn list(&self, out: &mut impl Write, json: bool) -> Result<()> {
    let cards: Vec<CreatorCard> =
      self.service.list_creators()?.iter().map(|c| CreatorCard::new(c, &self.placeholders)).collect();

    if json {
      writeln!(out, "{}", serde_json::to_string_pretty(&cards)?)?;
    } else {
      render::cards(out, &cards)?;
    }
    Ok(())
  }

  pub fn show(&self, out: &mut impl Write, id: CreatorId, json: bool) -> Result<()> {
    let creator = self.service.get_creator(id)?;
    let detail = CreatorDetail::new(&creator, &self.placeholders);

    if json {
      writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
    } else {
      render::detail(out, &detail)?;
    }
    Ok(())
  }

  pub fn add(&self, out: &mut impl Write, fields: FieldArgs) -> Result<CreatorId> {
    let mut form = CreatorForm::default();
    fields.apply(&mut form);

    let created = self.service.create_creator(&form)?;
    writeln!(out, "Created {} -> {}", created.display_name(), Route::View(created.id))?;
    Ok(created.id)
  }

  pub fn edit(&self, out: &mut impl Write, id: CreatorId, fields: FieldArgs) -> Result<()> {
    let mut form = self.service.edit_form(id)?;
    fields.apply(&mut form);

    self.service.update_creator(id, &form)?;
    writeln!(out, "Saved -> {}", Route::View(id))?;
    Ok(())
  }

  pub fn delete(&self, out: &mut impl Write, id: CreatorId) -> Result<()> {
    self.service.delete_creator(id)?;
    writeln!(out, "Deleted {id} -> {}", Route::List)?;
    Ok(())
  }

  /// Resuelve una ruta de la app y pinta esa pantalla. Las rutas desconocidas
  /// acaban en el listado.
  pub fn open(&self, out: &mut impl Write, path: &str) -> Result<()> {
    let route = Route::resolve(path);
    debug!(%path, %route, "resolved route");

    match route {
      Route::List => self.list(out, false),
      Route::View(id) => self.show(out, id, false),
      Route::Add => Ok(render::form(out, "Add Creator", &CreatorForm::default())?),
      Route::Edit(id) => {
        let form = self.service.edit_form(id)?;
        Ok(render::form(out, "Edit Creator", &form)?)
      }
    }
  }
}

/// Imprime los enlaces decodificados de un campo de enlaces en bruto.
pub fn print_links(out: &mut impl Write, field: &str) -> Result<()> {
  let decoded = links::decode(Some(field));
  if decoded.is_empty() {
    writeln!(out, "no links")?;
  }
  render::links(out, decoded.as_slice(), "")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use creatorverse_core::CoreError;
  use creatorverse_storage::SqliteCreatorRepository;
  use creatorverse_storage::config::StorageConfig;
  use tempfile::{TempDir, tempdir};

  fn app() -> (TempDir, App<SqliteCreatorRepository>) {
    let tmp = tempdir().unwrap();
    let repo = SqliteCreatorRepository::new(&StorageConfig::at(tmp.path().join("app.db"))).unwrap();
    (tmp, App::new(repo, Placeholders::default()))
  }

  fn sink() -> Vec<u8> {
    Vec::new()
  }

  fn fields(name: &str) -> FieldArgs {
    FieldArgs {
      name: Some(name.into()),
      youtube: Some("https://youtube.com/@ann".into()),
      x: Some("https://x.com/ann".into()),
      ..Default::default()
    }
  }

  #[test]
  fn test_add_then_list_json() {
    let (_tmp, app) = app();
    let mut out = sink();
    app.add(&mut out, fields("Ann")).unwrap();

    let mut out = sink();
    app.list(&mut out, true).unwrap();
    let cards: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(cards[0]["name"], "Ann");
    assert_eq!(cards[0]["links"][0]["platform"], "youtube");
    assert_eq!(cards[0]["links"][1]["platform"], "twitter");
  }

  #[test]
  fn test_edit_clears_slot() {
    let (_tmp, app) = app();
    let id = app.add(&mut sink(), fields("Ann")).unwrap();

    app.edit(&mut sink(), id, FieldArgs { x: Some(String::new()), ..Default::default() }).unwrap();

    let mut out = sink();
    app.show(&mut out, id, false).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Ann\n"));
    assert!(text.contains("https://youtube.com/@ann"));
    assert!(!text.contains("https://x.com/ann"));
  }

  #[test]
  fn test_open_routes() {
    let (_tmp, app) = app();
    let id = app.add(&mut sink(), fields("Ann")).unwrap();

    let mut out = sink();
    app.open(&mut out, &format!("/edit/{id}")).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("  X / Twitter (optional): https://x.com/ann"));

    let mut out = sink();
    app.open(&mut out, "/somewhere/else").unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("Creatorverse\n"));
  }

  #[test]
  fn test_delete_then_show_is_not_found() {
    let (_tmp, app) = app();
    let id = app.add(&mut sink(), fields("Ann")).unwrap();

    app.delete(&mut sink(), id).unwrap();

    let err = app.show(&mut sink(), id, false).unwrap_err();
    assert!(matches!(err.downcast_ref::<CoreError>(), Some(CoreError::NotFound)));
  }

  #[test]
  fn test_print_links() {
    let mut out = sink();
    print_links(&mut out, "not-a-url").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "no links\n");
  }

  #[test]
  fn test_print_links_uses_platform_labels() {
    let mut out = sink();
    print_links(&mut out, "https://youtu.be/a, https://example.com").unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "YouTube      https://youtu.be/a\nWebsite      https://example.com\n");
  }
}
