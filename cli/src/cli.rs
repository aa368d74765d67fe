use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use creatorverse_core::domain::CreatorId;
use creatorverse_core::forms::CreatorForm;

/// Argumentos del comando `creatorverse`.
#[derive(Debug, Parser)]
#[command(name = "creatorverse", about = "Consulta, crea, edita y borra perfiles de creadores", version)]
pub struct Cli {
  /// Fichero SQLite. Si falta, se usa la sección `[storage]` de `creatorverse.toml`.
  #[arg(long, global = true, value_name = "path")]
  pub database: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Lista todos los creadores, los más recientes primero.
  List {
    #[arg(long)]
    json: bool,
  },
  /// Muestra un creador.
  Show {
    id: CreatorId,
    #[arg(long)]
    json: bool,
  },
  /// Crea un creador.
  Add {
    #[command(flatten)]
    fields: FieldArgs,
  },
  /// Edita un creador. Las opciones omitidas conservan su valor; un valor vacío lo borra.
  Edit {
    id: CreatorId,
    #[command(flatten)]
    fields: FieldArgs,
  },
  /// Borra un creador.
  Delete {
    id: CreatorId,
    /// No pedir confirmación.
    #[arg(long, short)]
    yes: bool,
  },
  /// Pinta la pantalla de una ruta como `/view/<id>`.
  Open { path: String },
  /// Decodifica un campo de enlaces e indica la plataforma de cada URL.
  Links { field: String },
}

/// Campos del formulario, comunes a `add` y `edit`.
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
  #[arg(long)]
  pub name: Option<String>,
  #[arg(long)]
  pub description: Option<String>,
  /// Imagen de perfil. Los avatares de YouTube/Google se suben a 800px.
  #[arg(long = "image-url", value_name = "url")]
  pub image_url: Option<String>,
  #[arg(long, value_name = "url")]
  pub youtube: Option<String>,
  #[arg(long, value_name = "url")]
  pub instagram: Option<String>,
  /// Perfil de X / Twitter.
  #[arg(long, value_name = "url")]
  pub x: Option<String>,
}

impl FieldArgs {
  /// Escribe sobre `form` las opciones indicadas.
  pub fn apply(self, form: &mut CreatorForm) {
    if let Some(name) = self.name {
      form.name = name;
    }
    if let Some(description) = self.description {
      form.description = description;
    }
    if let Some(image_url) = self.image_url {
      form.image_url = image_url;
    }
    if let Some(youtube) = self.youtube {
      form.socials.youtube = Some(youtube);
    }
    if let Some(instagram) = self.instagram {
      form.socials.instagram = Some(instagram);
    }
    if let Some(x) = self.x {
      form.socials.x = Some(x);
    }
  }
}
