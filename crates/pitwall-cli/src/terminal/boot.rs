//! Start-lights boot sequence.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, queue};
use pitwall_core::data::tracks::LOGO;
use pitwall_core::screen::{Line, Panel, Screen, Span, Style, Tone};
use rand::Rng;

use super::TerminalScreen;
use super::render;

const LIGHTS: usize = 5;
const LAMP: &str = "███████";
const LAMP_ROWS: usize = 3;
const FIRST_LIGHT_DELAY: Duration = Duration::from_millis(1000);
const LIGHT_INTERVAL: Duration = Duration::from_millis(900);
const TRACK_GREEN_HOLD: Duration = Duration::from_millis(500);
const AWAY_HOLD: Duration = Duration::from_millis(1000);

/// Printed after the sequence, or instead of it when skipped.
pub fn hint() -> Line {
    Line::styled(
        "Type in 'radio' to get started with the F1 commands !",
        Style::new().fg(Tone::Red).bold(),
    )
}

/// Random pause between the fifth light and lights out.
pub fn hold<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_secs_f64(rng.random_range(1.5..3.5))
}

/// The start gantry with `lit` red lamps; `None` means lights out.
pub fn gantry(lit: Option<usize>) -> Panel {
    let on = Style::new().fg(Tone::Red).bold();
    let off = Style::new().fg(Tone::Grey).dim();

    let row = |_: usize| {
        let mut spans = Vec::new();
        for i in 0..LIGHTS {
            if i > 0 {
                spans.push(Span::plain("  "));
            }
            let style = match lit {
                Some(n) if i < n => on,
                _ => off,
            };
            spans.push(Span::styled(LAMP, style));
        }
        Line::new(spans)
    };

    let mut body = vec![Line::blank()];
    body.extend((0..LAMP_ROWS).map(row));
    body.push(Line::blank());

    match lit {
        Some(_) => Panel::new(body)
            .title("FIA START SEQUENCE")
            .border(Tone::White),
        None => Panel::new(body).title("TRACK GREEN").border(Tone::Green),
    }
}

struct Gantry {
    drawn_lines: u16,
    styled: bool,
}

impl Gantry {
    fn draw(&mut self, out: &mut impl Write, lit: Option<usize>) -> io::Result<()> {
        if self.drawn_lines > 0 {
            queue!(out, cursor::MoveToPreviousLine(self.drawn_lines))?;
        }
        let text = render::panel(&gantry(lit), self.styled);
        writeln!(out, "{text}")?;
        self.drawn_lines = u16::try_from(text.lines().count()).unwrap_or(u16::MAX);
        out.flush()
    }
}

/// Plays the sequence, then clears the screen.
pub fn play(screen: &mut TerminalScreen, pause: Duration) -> Result<()> {
    screen.clear();
    for line in LOGO.lines() {
        screen.line(Line::styled(line, Style::new().fg(Tone::Red).bold()));
    }
    screen.line(Line::styled(
        "[ ESTABLISHING CONNECTION TO PIT WALL ]",
        Style::new().fg(Tone::Red).dim(),
    ));
    screen.line(Line::blank());

    let mut out = io::stdout();
    let mut lights = Gantry {
        drawn_lines: 0,
        styled: screen.styled(),
    };
    lights.draw(&mut out, Some(0)).context("draw start gantry")?;
    thread::sleep(FIRST_LIGHT_DELAY);
    for lit in 1..=LIGHTS {
        lights.draw(&mut out, Some(lit)).context("draw start gantry")?;
        thread::sleep(LIGHT_INTERVAL);
    }
    thread::sleep(pause);
    lights.draw(&mut out, None).context("draw start gantry")?;
    thread::sleep(TRACK_GREEN_HOLD);

    screen.line(Line::blank());
    screen.line(Line::styled(
        "  LIGHTS OUT AND AWAY WE GO!  ",
        Style::new().fg(Tone::Green).bold(),
    ));
    thread::sleep(AWAY_HOLD);
    screen.clear();
    tracing::debug!("boot sequence complete");
    Ok(())
}
