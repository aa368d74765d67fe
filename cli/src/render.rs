//! Pintado de las pantallas en texto plano.

use std::io::{self, Write};

use creatorverse_core::forms::CreatorForm;
use creatorverse_core::links::SocialLink;
use creatorverse_core::views::{CreatorCard, CreatorDetail};

const EMPTY_LIST: &str = "No creators yet. Add your first one!";

pub fn cards(out: &mut impl Write, cards: &[CreatorCard]) -> io::Result<()> {
  writeln!(out, "Creatorverse")?;
  writeln!(out, "============")?;

  if cards.is_empty() {
    writeln!(out, "{EMPTY_LIST}")?;
    return Ok(());
  }

  for card in cards {
    writeln!(out)?;
    writeln!(out, "{}  ({})", card.name, card.id)?;
    if !card.description.is_empty() {
      writeln!(out, "  {}", card.description)?;
    }
    writeln!(out, "  image: {}", card.image)?;
    links(out, &card.links, "  ")?;
    writeln!(out, "  view: {}  edit: {}", card.view_route, card.edit_route)?;
  }

  Ok(())
}

pub fn detail(out: &mut impl Write, detail: &CreatorDetail) -> io::Result<()> {
  writeln!(out, "{}", detail.name.as_deref().unwrap_or_default())?;
  writeln!(out, "image: {} ({})", detail.image, detail.image_alt)?;
  links(out, detail.links.as_slice(), "")?;
  if let Some(description) = &detail.description {
    writeln!(out)?;
    writeln!(out, "{description}")?;
  }
  writeln!(out)?;
  writeln!(out, "back: /  edit: {}", detail.edit_route)
}

pub fn form(out: &mut impl Write, title: &str, form: &CreatorForm) -> io::Result<()> {
  writeln!(out, "{title}")?;
  field(out, "Name", &form.name)?;
  field(out, "Description", &form.description)?;
  field(out, "YouTube (optional)", form.socials.youtube.as_deref().unwrap_or_default())?;
  field(out, "Instagram (optional)", form.socials.instagram.as_deref().unwrap_or_default())?;
  field(out, "X / Twitter (optional)", form.socials.x.as_deref().unwrap_or_default())?;
  field(out, "Image URL (optional)", &form.image_url)
}

pub fn links(out: &mut impl Write, links: &[SocialLink], indent: &str) -> io::Result<()> {
  for link in links {
    writeln!(out, "{indent}{:<12} {}", link.platform.label(), link.href)?;
  }
  Ok(())
}

fn field(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
  writeln!(out, "  {label}: {value}")
}
