use crate::domain::{Creator, CreatorChanges, CreatorId};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port del almacén tabular de creadores.
///
/// Cada llamada es una petición independiente: sin reintentos, sin lotes y
/// sin caché. El identificador lo asigna siempre el almacén.
pub trait CreatorRepository {
  /// Todos los registros, sin filtro ni paginación.
  fn list(&self) -> Result<Vec<Creator>, RepoError>;

  fn find(&self, id: CreatorId) -> Result<Option<Creator>, RepoError>;

  /// Inserta un registro nuevo y devuelve lo que quedó guardado.
  fn insert(&self, changes: &CreatorChanges) -> Result<Creator, RepoError>;

  /// Sobrescribe los campos de un registro existente.
  ///
  /// Devuelve [`RepoError::NotFound`] si no existe.
  fn update(&self, id: CreatorId, changes: &CreatorChanges) -> Result<(), RepoError>;

  fn delete(&self, id: CreatorId) -> Result<(), RepoError>;
}

impl<R: CreatorRepository + ?Sized> CreatorRepository for &R {
  fn list(&self) -> Result<Vec<Creator>, RepoError> {
    (**self).list()
  }

  fn find(&self, id: CreatorId) -> Result<Option<Creator>, RepoError> {
    (**self).find(id)
  }

  fn insert(&self, changes: &CreatorChanges) -> Result<Creator, RepoError> {
    (**self).insert(changes)
  }

  fn update(&self, id: CreatorId, changes: &CreatorChanges) -> Result<(), RepoError> {
    (**self).update(id, changes)
  }

  fn delete(&self, id: CreatorId) -> Result<(), RepoError> {
    (**self).delete(id)
  }
}
