//! The `people` demo: filters the seed person list by variant and fields.

use std::io::Write;

use clap::Args;
use color_eyre::eyre::Result;
use todo_core::{filter_by_kind, Person, PersonCriteria, PersonKind};

use crate::render;

#[derive(Debug, Clone, Args)]
pub struct PeopleArgs {
    /// Record variant to select: user or admin
    #[arg(short, long, default_value = "user")]
    pub kind: PersonKind,

    /// Exact name to match
    #[arg(long)]
    pub name: Option<String>,

    /// Exact age to match
    #[arg(long)]
    pub age: Option<u32>,

    /// Exact occupation to match (users only)
    #[arg(long)]
    pub occupation: Option<String>,

    /// Exact role to match (admins only)
    #[arg(long)]
    pub role: Option<String>,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}

impl PeopleArgs {
    fn criteria(&self) -> PersonCriteria {
        PersonCriteria {
            name: self.name.clone(),
            age: self.age,
            occupation: self.occupation.clone(),
            role: self.role.clone(),
        }
    }
}

/// Filters `persons` per `args` and writes the matches to `out`.
pub fn run<W: Write>(args: &PeopleArgs, persons: &[Person], out: &mut W) -> Result<()> {
    let matched = filter_by_kind(persons, args.kind, &args.criteria())?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&matched)?)?;
        return Ok(());
    }

    if matched.is_empty() {
        writeln!(out, "No {} records match.", args.kind)?;
        return Ok(());
    }
    for person in &matched {
        writeln!(out, "{}", render::person_line(person))?;
    }
    Ok(())
}
