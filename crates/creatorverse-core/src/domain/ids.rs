use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identificador único de un creador.
///
/// Lo asigna el almacén de datos al insertar el registro y no cambia nunca.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatorId(Uuid);

impl CreatorId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    CreatorId(Uuid::new_v4())
  }

  /// Construye un `CreatorId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    CreatorId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for CreatorId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for CreatorId {
  fn from(u: Uuid) -> Self {
    CreatorId(u)
  }
}

impl From<CreatorId> for Uuid {
  fn from(id: CreatorId) -> Self {
    id.0
  }
}

impl FromStr for CreatorId {
  type Err = uuid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s.trim()).map(CreatorId)
  }
}

impl fmt::Display for CreatorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
