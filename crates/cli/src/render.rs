//! Terminal card renderer.

use anyhow::{Context, Result};
use colored::Colorize;
use data_loader::DeveloperRecord;
use filter_engine::Renderer;
use std::io::Write;

/// Prints one card per visible developer to any writer
pub struct CardRenderer<W: Write> {
    out: W,
}

impl<W: Write> CardRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for CardRenderer<W> {
    fn render(&mut self, visible: &[&DeveloperRecord], total: usize) -> Result<()> {
        let header = format!("{} of {} developer(s)", visible.len(), total);
        writeln!(self.out, "{}", header.bold().blue()).context("Failed to write header")?;

        for (rank, dev) in visible.iter().enumerate() {
            let languages = dev
                .programming_languages
                .iter()
                .map(|entry| format!("{} ({})", entry.language, entry.knowledge))
                .collect::<Vec<_>>()
                .join(", ");

            writeln!(self.out, "{} {}", format!("{}.", rank + 1).green(), dev.name.bold())?;
            writeln!(self.out, "   {} {}", "•".cyan(), dev.picture)?;
            writeln!(
                self.out,
                "   {} {}",
                "•".cyan(),
                if languages.is_empty() { "-".to_string() } else { languages }
            )?;
        }

        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }
}
