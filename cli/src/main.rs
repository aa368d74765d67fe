//! Interfaz de línea de comandos: un subcomando por pantalla de la app.

mod app;
mod cli;
mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use creatorverse_storage::SqliteCreatorRepository;
use creatorverse_storage::config::StorageConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app::{App, print_links};
use crate::cli::{Cli, Command};
use crate::config::DisplayConfig;

fn main() -> ExitCode {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  if let Err(e) = fmt().with_env_filter(filter).with_writer(io::stderr).try_init() {
    eprintln!("tracing init failed: {e}");
  }

  let cli = Cli::parse();

  // los errores se muestran en línea, como el aviso del formulario
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("⚠️ {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();

  let database = cli.database;
  let app = || build_app(database.as_deref());

  match cli.command {
    Command::List { json } => app()?.list(&mut out, json),
    Command::Show { id, json } => app()?.show(&mut out, id, json),
    Command::Add { fields } => app()?.add(&mut out, fields).map(|_| ()),
    Command::Edit { id, fields } => app()?.edit(&mut out, id, fields),
    Command::Delete { id, yes } => {
      let app = app()?;
      if !yes && !confirm("Delete this creator?")? {
        writeln!(out, "Cancelled.")?;
        return Ok(());
      }
      app.delete(&mut out, id)
    }
    Command::Open { path } => app()?.open(&mut out, &path),
    Command::Links { field } => print_links(&mut out, &field),
  }
}

/// Inyección de dependencias: almacén y ajustes de pantalla hacia las pantallas.
fn build_app(database: Option<&Path>) -> Result<App<SqliteCreatorRepository>> {
  let repo = match database {
    Some(path) => SqliteCreatorRepository::new(&StorageConfig::at(path))
      .with_context(|| format!("open database {}", path.display()))?,
    None => SqliteCreatorRepository::new_from_config().context("open database from [storage] config")?,
  };

  let display = DisplayConfig::load().unwrap_or_else(|e| {
    warn!(error = %e, "invalid [display] config, using defaults");
    DisplayConfig::default()
  });

  Ok(App::new(repo, display.into()))
}

fn confirm(question: &str) -> io::Result<bool> {
  let mut stderr = io::stderr();
  write!(stderr, "{question} [y/N] ")?;
  stderr.flush()?;

  let mut answer = String::new();
  io::stdin().lock().read_line(&mut answer)?;
  Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
