//! Terminal rendering module for rich markdown output
//!
//! Renders the markdown produced by the core display wrappers with termimad,
//! with a plain text fallback.

use anyhow::{Context, Result};
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER: &str = "\x1b[35m";
const COMPLETED: &str = "\x1b[2;9m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Magenta);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match header_style(line) {
                Some(style) => println!("{style}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }

    /// Render a value as pretty-printed JSON, regardless of color settings
    pub fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }
}

/// Headers keep their hash symbols; completed events are dimmed and struck
/// through.
fn header_style(line: &str) -> Option<&'static str> {
    if !line.starts_with('#') {
        None
    } else if line.contains("✓ Completed") {
        Some(COMPLETED)
    } else {
        Some(HEADER)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
