use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::domain::{Creator, CreatorId};
use crate::errors::CoreError;
use crate::forms::CreatorForm;
use crate::ports::CreatorRepository;

/// Casos de uso de las pantallas: listado, detalle, alta, edición y borrado.
///
/// El repositorio se inyecta; el servicio no conoce ningún cliente global.
pub struct CreatorService<R>
where
  R: CreatorRepository,
{
  repo: R,
}

impl<R> CreatorService<R>
where
  R: CreatorRepository,
{
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  // -------- QUERY (read) --------

  /// Todos los creadores, los más recientes primero.
  pub fn list_creators(&self) -> Result<Vec<Creator>, CoreError> {
    let mut creators = self.repo.list().inspect_err(|e| warn!(error = %e, "failed to list creators"))?;
    creators.sort_by(newest_first);

    debug!(count = creators.len(), "listed creators");
    Ok(creators)
  }

  pub fn get_creator(&self, id: CreatorId) -> Result<Creator, CoreError> {
    match self.repo.find(id)? {
      Some(creator) => Ok(creator),
      None => {
        debug!(%id, "creator not found");
        Err(CoreError::NotFound)
      }
    }
  }

  /// Formulario de edición prellenado.
  pub fn edit_form(&self, id: CreatorId) -> Result<CreatorForm, CoreError> {
    let creator = self.get_creator(id)?;
    Ok(CreatorForm::from_creator(&creator))
  }

  // -------- COMMAND (write) --------

  pub fn create_creator(&self, form: &CreatorForm) -> Result<Creator, CoreError> {
    let changes = form.to_changes();
    let created = self.repo.insert(&changes).inspect_err(|e| warn!(error = %e, "failed to create creator"))?;

    info!(id = %created.id, name = created.display_name(), "creator created");
    Ok(created)
  }

  pub fn update_creator(&self, id: CreatorId, form: &CreatorForm) -> Result<(), CoreError> {
    let changes = form.to_changes();
    self.repo.update(id, &changes).inspect_err(|e| warn!(%id, error = %e, "failed to update creator"))?;

    info!(%id, "creator updated");
    Ok(())
  }

  pub fn delete_creator(&self, id: CreatorId) -> Result<(), CoreError> {
    self.repo.delete(id).inspect_err(|e| warn!(%id, error = %e, "failed to delete creator"))?;

    info!(%id, "creator deleted");
    Ok(())
  }
}

/// Orden del listado: primero los que tienen fecha de alta, de la más
/// reciente a la más antigua; después por id descendente.
fn newest_first(a: &Creator, b: &Creator) -> Ordering {
  match (a.created_at, b.created_at) {
    (Some(x), Some(y)) => y.cmp(&x),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
  .then_with(|| b.id.cmp(&a.id))
}
