pub mod config;
pub mod models;
pub mod schema;

use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, warn};
use uuid::Uuid;

use creatorverse_core::domain::{Creator, CreatorChanges, CreatorId};
use creatorverse_core::ports::{CreatorRepository, RepoError};

use crate::config::StorageConfig;
use crate::models::{CreatorChangeset, CreatorRow, NewCreatorRow};
use crate::schema::creators;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const JOURNAL_MODES: [&str; 6] = ["DELETE", "TRUNCATE", "PERSIST", "MEMORY", "WAL", "OFF"];

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
type SqlitePooled = PooledConnection<ConnectionManager<SqliteConnection>>;

/// `CreatorRepository` sobre una base SQLite con pool de conexiones.
///
/// La identidad la pone el almacén: el id y `created_at` se generan aquí al
/// insertar.
pub struct SqliteCreatorRepository {
  pool: SqlitePool,
}

impl SqliteCreatorRepository {
  /// Abre (o crea) la base de datos y aplica las migraciones pendientes.
  pub fn new(cfg: &StorageConfig) -> Result<Self, RepoError> {
    let manager = ConnectionManager::<SqliteConnection>::new(cfg.database_url());
    let pragmas = SqlitePragmas { journal_mode: checked_journal_mode(cfg.journal_mode.as_deref()) };

    let pool = Pool::builder()
      .max_size(cfg.pool_size.max(1))
      .connection_customizer(Box::new(pragmas))
      .build(manager)
      .map_err(storage_error)?;

    let repo = Self { pool };
    repo.run_migrations()?;

    debug!(db = %cfg.db_path.display(), "creator store ready");
    Ok(repo)
  }

  /// Usa la sección `[storage]` de `creatorverse.toml`.
  pub fn new_from_config() -> Result<Self, RepoError> {
    let cfg = StorageConfig::load().map_err(storage_error)?;
    Self::new(&cfg)
  }

  fn conn(&self) -> Result<SqlitePooled, RepoError> {
    self.pool.get().map_err(storage_error)
  }

  fn run_migrations(&self) -> Result<(), RepoError> {
    let mut pooled = self.conn()?;
    let conn: &mut SqliteConnection = &mut pooled;

    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(storage_error)?;
    if !applied.is_empty() {
      info!(count = applied.len(), "applied storage migrations");
    }

    Ok(())
  }
}

impl CreatorRepository for SqliteCreatorRepository {
  fn list(&self) -> Result<Vec<Creator>, RepoError> {
    let mut conn = self.conn()?;

    let rows = creators::table.select(CreatorRow::as_select()).load(&mut *conn).map_err(storage_error)?;

    debug!(count = rows.len(), "loaded creator rows");
    rows.into_iter().map(row_to_creator).collect()
  }

  fn find(&self, creator_id: CreatorId) -> Result<Option<Creator>, RepoError> {
    let mut conn = self.conn()?;

    let row_opt = creators::table
      .find(creator_id.to_string())
      .select(CreatorRow::as_select())
      .first(&mut *conn)
      .optional()
      .map_err(storage_error)?;

    row_opt.map(row_to_creator).transpose()
  }

  fn insert(&self, changes: &CreatorChanges) -> Result<Creator, RepoError> {
    let new_row = NewCreatorRow {
      id: CreatorId::new().to_string(),
      name: changes.name.clone(),
      description: changes.description.clone(),
      url: Some(changes.links_field.clone()),
      image_url: changes.image_url.clone(),
      // con fracción de segundo: dos altas seguidas no empatan
      created_at: Utc::now().naive_utc(),
    };
    let mut conn = self.conn()?;

    let row = diesel::insert_into(creators::table)
      .values(&new_row)
      .returning(CreatorRow::as_returning())
      .get_result(&mut *conn)
      .map_err(storage_error)?;

    row_to_creator(row)
  }

  fn update(&self, creator_id: CreatorId, changes: &CreatorChanges) -> Result<(), RepoError> {
    let changeset = CreatorChangeset {
      name: changes.name.clone(),
      description: changes.description.clone(),
      url: Some(changes.links_field.clone()),
      image_url: changes.image_url.clone(),
      // a partir de aquí manda la columna canónica
      legacy_image_url: None,
    };
    let mut conn = self.conn()?;

    let affected = diesel::update(creators::table.find(creator_id.to_string()))
      .set(&changeset)
      .execute(&mut *conn)
      .map_err(storage_error)?;

    if affected == 0 {
      return Err(RepoError::NotFound);
    }
    Ok(())
  }

  fn delete(&self, creator_id: CreatorId) -> Result<(), RepoError> {
    let mut conn = self.conn()?;

    let affected =
      diesel::delete(creators::table.find(creator_id.to_string())).execute(&mut *conn).map_err(storage_error)?;

    if affected == 0 {
      return Err(RepoError::NotFound);
    }
    Ok(())
  }
}

/// Elige la imagen entre las dos columnas históricas: primero `image_url`,
/// después la heredada `imageURL`. Los valores en blanco cuentan como ausentes.
pub fn reconcile_image_url(image_url: Option<String>, legacy_image_url: Option<String>) -> Option<String> {
  [image_url, legacy_image_url].into_iter().flatten().find(|v| !v.trim().is_empty())
}

fn row_to_creator(row: CreatorRow) -> Result<Creator, RepoError> {
  let uuid = Uuid::parse_str(&row.id)
    .map_err(|e| RepoError::Storage(format!("invalid creator id {:?} in database: {e}", row.id)))?;

  Ok(Creator {
    id: CreatorId::from_uuid(uuid),
    name: row.name,
    description: row.description,
    image_url: reconcile_image_url(row.image_url, row.legacy_image_url),
    links_field: row.url,
    created_at: Some(row.created_at),
  })
}

fn storage_error(err: impl std::fmt::Display) -> RepoError {
  RepoError::Storage(err.to_string())
}

fn checked_journal_mode(mode: Option<&str>) -> Option<String> {
  let mode = mode?.trim().to_uppercase();
  if JOURNAL_MODES.contains(&mode.as_str()) {
    Some(mode)
  } else {
    warn!(%mode, "ignoring unknown sqlite journal_mode");
    None
  }
}

#[derive(Debug)]
struct SqlitePragmas {
  journal_mode: Option<String>,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
  fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
    let mut pragmas = String::from("PRAGMA busy_timeout = 5000;");
    if let Some(mode) = &self.journal_mode {
      pragmas.push_str(&format!(" PRAGMA journal_mode = {mode};"));
    }

    conn.batch_execute(&pragmas).map_err(r2d2::Error::QueryError)
  }
}
