//! Interactive mode: one line of input is one UI event.
//!
//! Commands:
//! - `name <text>` sets the search text (`name` alone clears it)
//! - `toggle <java|javascript|python>` flips a language checkbox
//! - `and` / `or` picks the combinator
//! - `show`, `status`, `help`, `quit`

use anyhow::{anyhow, Result};
use colored::Colorize;
use filter_engine::{Combinator, DevFilterEngine, FilterCriteria, FilterEvent, Language, Renderer};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::CardRenderer;

pub const HELP: &str = "\
Commands:
  name <text>      filter by name (accents, case and spaces are ignored)
  name             clear the name filter
  toggle <lang>    toggle java, javascript or python
  and | or         developer must know all / any of the checked languages
  show             print the current listing again
  status           print the current filter
  help             this message
  quit             leave";

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(FilterEvent),
    Show,
    Status,
    Help,
    Quit,
}

/// Parse one line of input into a command
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "name" => Ok(Command::Event(FilterEvent::NameQueryChanged(rest.to_string()))),
        "toggle" => {
            let language: Language = rest.parse()?;
            Ok(Command::Event(FilterEvent::LanguageToggled(language)))
        }
        "and" => Ok(Command::Event(FilterEvent::CombinatorSelected(Combinator::And))),
        "or" => Ok(Command::Event(FilterEvent::CombinatorSelected(Combinator::Or))),
        "show" => Ok(Command::Show),
        "status" => Ok(Command::Status),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(anyhow!("Unknown command '{}', type 'help'", other)),
    }
}

/// One-line summary of the active criteria
pub fn describe(criteria: &FilterCriteria) -> String {
    let languages = Language::ALL
        .iter()
        .map(|language| {
            let mark = if criteria.accepts(*language) { "x" } else { " " };
            format!("[{}] {}", mark, language)
        })
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        "name: {:?}  {}  combinator: {}",
        criteria.name_query, languages, criteria.combinator
    )
}

/// Read commands from stdin until `quit` or end of input
pub async fn run(mut engine: DevFilterEngine) -> Result<()> {
    let mut renderer = CardRenderer::new(std::io::stdout());
    engine.render(&mut renderer)?;
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !handle_line(&mut engine, &mut renderer, &line)? {
            break;
        }
    }

    Ok(())
}

/// Run one line of input. Returns `false` once the user asks to quit.
pub fn handle_line(
    engine: &mut DevFilterEngine,
    renderer: &mut impl Renderer,
    line: &str,
) -> Result<bool> {
    if line.trim().is_empty() {
        return Ok(true);
    }

    match parse_command(line) {
        Ok(Command::Event(event)) => {
            let total = engine.total_count();
            let visible = engine.dispatch(event);
            renderer.render(&visible, total)?;
        }
        Ok(Command::Show) => engine.render(renderer)?,
        Ok(Command::Status) => println!("{}", describe(engine.criteria())),
        Ok(Command::Help) => println!("{}", HELP),
        Ok(Command::Quit) => return Ok(false),
        Err(err) => println!("{}", err.to_string().yellow()),
    }
    Ok(true)
}
