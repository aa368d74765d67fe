// crates/creatorverse-core/src/errors.rs
use thiserror::Error;

use crate::ports::RepoError;

/// Error genérico del núcleo de Creatorverse.
///
/// Las capas superiores (CLI, etc.) deberían mapear este error a un mensaje
/// visible para el usuario. Ninguna variante es fatal para el proceso.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(String),

  #[error("creator not found")]
  NotFound,
}

impl From<RepoError> for CoreError {
  fn from(err: RepoError) -> Self {
    match err {
      RepoError::NotFound => CoreError::NotFound,
      RepoError::Storage(msg) => CoreError::Repository(msg),
    }
  }
}
