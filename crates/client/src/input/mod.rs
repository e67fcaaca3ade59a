//! Line-based terminal input.
//!
//! Every prompt reads one line. Invalid text is never an error: each prompt
//! maps it to a documented default. Only end-of-input fails, with
//! [`RuntimeError::InputClosed`].
mod provider;

pub use provider::CliActionProvider;

use std::io::{BufRead, Write};

use arena_core::{Hero, HeroArchetype};
use arena_runtime::{Result, RuntimeError};
use strum::IntoEnumIterator;

pub const DEFAULT_HERO_NAME: &str = "Hero";

/// Read one line without its terminator; `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Print `text` without a newline and wait for the answer.
pub fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, text: &str) -> Result<String> {
    write!(writer, "{text}")?;
    writer.flush()?;
    read_line(reader)?.ok_or(RuntimeError::InputClosed)
}

/// Only an explicit `n` or `no` stops the session.
pub fn wants_to_continue(answer: &str) -> bool {
    !matches!(answer.trim().to_ascii_lowercase().as_str(), "n" | "no")
}

/// Entered name, or [`DEFAULT_HERO_NAME`] when blank.
pub fn hero_name(input: &str) -> String {
    match input.trim() {
        "" => DEFAULT_HERO_NAME.to_owned(),
        name => name.to_owned(),
    }
}

/// Show the class menu, then ask for a name.
pub fn choose_hero<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Hero> {
    writeln!(writer, "Choose your hero class:")?;
    for archetype in HeroArchetype::iter() {
        writeln!(
            writer,
            "  {}) {} - {}",
            archetype.menu_key(),
            archetype,
            archetype.tagline()
        )?;
    }

    let archetype = HeroArchetype::from_choice(&prompt(reader, writer, "Pick (1/2/3): ")?);
    let name = hero_name(&prompt(reader, writer, "Enter your hero name: ")?);
    tracing::info!(%archetype, name = %name, "hero chosen");

    Ok(Hero::new(archetype, name))
}
