//! Terminal side of the pit wall: styled stdout, stdin lines, boot sequence.

pub mod boot;
pub mod input;
pub mod render;

use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::{cursor, queue, terminal};
use pitwall_core::screen::{Line, Panel, Screen, Table};

/// Whether stdout should carry colors and cursor control.
pub fn styling_enabled() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

/// [`Screen`] over stdout.
///
/// Write errors are logged and dropped; a closed stdout must not take the
/// session down with it.
pub struct TerminalScreen {
    out: Stdout,
    styled: bool,
}

impl TerminalScreen {
    pub fn new(styled: bool) -> Self {
        Self {
            out: io::stdout(),
            styled,
        }
    }

    pub fn styled(&self) -> bool {
        self.styled
    }

    fn write(&mut self, text: &str, flush: bool) {
        let result = self.out.write_all(text.as_bytes()).and_then(|()| {
            if flush {
                self.out.flush()
            } else {
                Ok(())
            }
        });
        if let Err(e) = result {
            tracing::warn!("stdout write failed: {e}");
        }
    }
}

impl Screen for TerminalScreen {
    fn line(&mut self, line: Line) {
        let mut text = render::line(&line, self.styled);
        text.push('\n');
        self.write(&text, false);
    }

    fn table(&mut self, table: Table) {
        let mut text = render::table(&table, self.styled);
        text.push('\n');
        self.write(&text, false);
    }

    fn panel(&mut self, panel: Panel) {
        let mut text = render::panel(&panel, self.styled);
        text.push('\n');
        self.write(&text, false);
    }

    fn clear(&mut self) {
        if !self.styled {
            return;
        }
        let result = queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            terminal::Clear(terminal::ClearType::Purge),
            cursor::MoveTo(0, 0)
        )
        .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("clear screen failed: {e}");
        }
    }

    fn prompt(&mut self, prompt: Line) {
        let text = render::line(&prompt, self.styled);
        self.write(&text, true);
    }
}
