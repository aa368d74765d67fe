use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::creators;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = creators)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CreatorRow {
  pub id: String,
  pub name: Option<String>,
  pub description: Option<String>,
  pub url: Option<String>,
  pub image_url: Option<String>,
  pub legacy_image_url: Option<String>,
  pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = creators)]
pub struct NewCreatorRow {
  pub id: String,
  pub name: Option<String>,
  pub description: Option<String>,
  pub url: Option<String>,
  pub image_url: Option<String>,
  pub created_at: NaiveDateTime,
}

/// Sobrescribe todas las columnas editables. `None` escribe NULL.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = creators)]
#[diesel(treat_none_as_null = true)]
pub struct CreatorChangeset {
  pub name: Option<String>,
  pub description: Option<String>,
  pub url: Option<String>,
  pub image_url: Option<String>,
  pub legacy_image_url: Option<String>,
}
