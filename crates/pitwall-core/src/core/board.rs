//! Builders for everything the dispatcher puts on screen.
//!
//! Pure functions from data to [`Line`]/[`Table`]/[`Panel`], kept apart from
//! the dispatcher so layouts can be checked without a session.

use chrono::NaiveDateTime;

use super::listing::{EntryKind, Listing};
use super::session::Session;
use crate::data::calendar::RaceEvent;
use crate::data::champions::{CHAMPIONS, driver_tone};
use crate::data::quotes::{Quote, team_tone};
use crate::data::tracks::{TRACKS, Track};
use crate::gauge::{self, BAR_WIDTH};
use crate::integrations::{Headline, SpeedReport};
use crate::screen::{Align, Column, Line, Panel, Span, Style, Table, Tone, field};
use crate::telemetry::TelemetrySample;

pub const ALERT: Style = Style::new().fg(Tone::Red).bold();
pub const WARN: Style = Style::new().fg(Tone::Yellow);
pub const GOOD: Style = Style::new().fg(Tone::Green);
pub const HINT: Style = Style::new().dim();

/// `LABEL message` with a bold red label.
pub fn alert(label: &str, message: &str) -> Line {
    Line::new(vec![
        Span::styled(label, ALERT),
        Span::plain(format!(" {message}")),
    ])
}

pub fn prompt(session: &Session, driver: &str) -> Line {
    let tyre = session.tyre();
    Line::new(vec![
        Span::styled(
            format!("[ L{} ]", session.lap()),
            Style::new().fg(Tone::White).bold(),
        ),
        Span::styled(
            format!("[ {} ]", tyre.label()),
            Style::new().fg(tyre.tone()).bold(),
        ),
        Span::plain(" "),
        Span::styled(driver, Style::new().fg(Tone::Cyan).bold()),
        Span::plain(" :: "),
        Span::styled(
            session.working_directory().display().to_string(),
            Style::new().fg(Tone::Green).bold(),
        ),
        Span::plain(" > "),
    ])
}

pub fn farewell() -> Panel {
    Panel::new(vec![
        Line::styled("CHECKERED FLAG", Style::new().fg(Tone::White).bold()),
        Line::styled("P1. Great Drive. Session Ended.", HINT),
    ])
    .border(Tone::Green)
}

const COMMANDS: &[(&str, &str)] = &[
    ("grid", "List files (Current or Specific)"),
    ("box <dir>", "Change directory"),
    ("telemetry", "Status"),
    ("champions", "Hall of Fame"),
    ("clear", "Clear Screen"),
    ("flag", "End Session (Exit)"),
    ("map <name>", "Show Track Layout (eg: map monza)"),
    ("next", "Next Race Countdown"),
    ("news", "Latest Paddock Headlines"),
    ("drs", "Network Speed Test"),
    ("quote", "Iconic Radio Messages in F1"),
];

pub fn help() -> Panel {
    let body = COMMANDS
        .iter()
        .map(|(cmd, desc)| {
            Line::new(vec![
                Span::styled(format!("{cmd:<13}"), GOOD),
                Span::plain(format!("- {desc}")),
            ])
        })
        .collect();
    Panel::new(body).title("RACE ENGINEER").border(Tone::Green)
}

pub fn listing(listing: &Listing) -> Table {
    let mut table = Table::new(vec![
        Column::new("Pos"),
        Column::new("Driver (File)"),
        Column::new("Type").align(Align::Right),
        Column::new("Load (Size)").align(Align::Right),
    ])
    .title(format!("TRACK LIMITS ({})", listing.display_name()))
    .border(Tone::Magenta);

    for entry in &listing.entries {
        let style = match entry.kind {
            EntryKind::Dir => Style::new().fg(Tone::Blue).bold(),
            EntryKind::File => Style::new().fg(Tone::White),
        };
        table.add_row(vec![
            Span::styled(entry.position.to_string(), HINT),
            Span::styled(entry.name.clone(), style),
            Span::styled(entry.kind.tag(), style),
            Span::styled(gauge::format_size(entry.size), style),
        ]);
    }

    let hidden = listing.hidden();
    if hidden > 0 {
        table.add_row(vec![
            Span::styled("...", HINT),
            Span::plain(format!("+{hidden} more")),
            Span::plain(""),
            Span::plain(""),
        ]);
    }
    table
}

pub fn next_race(race: Option<&RaceEvent>, now: NaiveDateTime) -> Panel {
    let Some(race) = race else {
        return Panel::new(vec![
            Line::styled("No upcoming races scheduled in database.", HINT),
            Line::styled("Waiting for FIA Season Calendar update...", HINT),
        ])
        .title("OFF SEASON")
        .border(Tone::Grey);
    };

    let width = 10;
    Panel::new(vec![
        field(
            "NEXT EVENT",
            width,
            vec![Span::styled(
                race.event.to_uppercase(),
                Style::new().fg(Tone::Yellow).bold(),
            )],
        ),
        field(
            "LOCATION",
            width,
            vec![Span::styled(race.circuit.clone(), Style::new().fg(Tone::Cyan).bold())],
        ),
        field(
            "DATE",
            width,
            vec![Span::styled(
                race.date.format("%d %B %Y").to_string(),
                Style::new().fg(Tone::Cyan).bold(),
            )],
        ),
        field(
            "COUNTDOWN",
            width,
            vec![
                Span::styled(format!("{} DAYS", race.days_until(now)), ALERT),
                Span::plain(" until Lights Out"),
            ],
        ),
    ])
    .title("UPCOMING SESSION")
    .border(Tone::Green)
    .width(50)
}

pub fn telemetry(sample: &TelemetrySample) -> Panel {
    let width = 16;
    let fuel = sample.battery.map_or(100.0, |b| b.percent);
    let charging = if sample.battery.is_some_and(|b| b.charging) {
        " ⚡"
    } else {
        ""
    };
    let fuel_style = if fuel > 20.0 {
        GOOD
    } else {
        Style::new().fg(Tone::Red).bold()
    };
    let temp = sample
        .temperature_c
        .map_or_else(|| "NO SENSOR".to_string(), |t| format!("{t:.1}°C"));

    Panel::new(vec![
        field(
            "Engine Map (CPU)",
            width,
            vec![
                gauge::bar(sample.cpu_percent, BAR_WIDTH),
                Span::plain(format!(" {:.1}%", sample.cpu_percent)),
            ],
        ),
        field(
            "ERS Store (RAM)",
            width,
            vec![
                gauge::bar(sample.ram_percent, BAR_WIDTH),
                Span::plain(format!(" {:.1}GB", sample.ram_used_gb)),
            ],
        ),
        field(
            "Fuel Cell (BAT)",
            width,
            vec![Span::styled(format!("{fuel:.0}%{charging}"), fuel_style)],
        ),
        field(
            "Oil Temp",
            width,
            vec![Span::styled(temp, Style::new().fg(Tone::Cyan))],
        ),
    ])
    .title("VF-24 TELEMETRY")
    .subtitle(format!("Chassis: {}", sample.chassis))
    .border(Tone::Cyan)
    .width(60)
}

pub fn champions() -> Table {
    let mut table = Table::new(vec![
        Column::new("Season").align(Align::Center),
        Column::new("Driver"),
        Column::new("Constructor"),
    ])
    .title("HALL OF FAME (World Drivers' Champions)")
    .border(Tone::Gold);

    for champ in CHAMPIONS {
        table.add_row(vec![
            Span::styled(champ.season.to_string(), Style::new().fg(Tone::White).bold()),
            Span::styled(
                champ.driver,
                Style::new().fg(driver_tone(champ.driver)).bold(),
            ),
            Span::styled(champ.constructor, Style::new().fg(Tone::White).italic()),
        ]);
    }
    table
}

pub fn quote(quote: &Quote) -> Panel {
    let tone = team_tone(quote.team);
    let voice = Style::new().fg(tone).italic();
    let label = Style::new().fg(Tone::White).bold();
    Panel::new(vec![
        Line::new(vec![
            Span::styled(format!("{:<20}", quote.driver.to_uppercase()), label),
            Span::styled(format!("({})", quote.team), voice),
        ]),
        Line::blank(),
        Line::new(vec![
            Span::styled(format!("{:<20}", "RADIO:"), label),
            Span::styled(format!("\"{}\"", quote.message), voice),
        ]),
    ])
    .title("TEAM RADIO TRANSCRIPT")
    .border(tone)
    .width(60)
}

/// Track diagram, titled with the name as the driver typed it.
pub fn track(track: &Track, requested: &str) -> Panel {
    let mut body = vec![
        Line::styled(track.name, Style::new().fg(track.tone).bold()),
        Line::styled(track.details, HINT),
        Line::blank(),
    ];
    body.extend(track.art.lines().map(Line::plain));
    Panel::new(body)
        .title(requested.to_uppercase())
        .border(Tone::Green)
}

/// Usage hint plus every known track key.
pub fn map_usage() -> Vec<Line> {
    let mut lines = vec![
        Line::new(vec![
            Span::styled("Engineer:", WARN),
            Span::plain(" Which track? Usage: map <name>"),
        ]),
        Line::styled("Available:", HINT),
    ];
    lines.extend(TRACKS.iter().map(|t| Line::plain(format!("    {}", t.key))));
    lines
}

pub fn news(headlines: &[Headline]) -> Table {
    let mut table = Table::new(vec![
        Column::new("#").align(Align::Right),
        Column::new("Time"),
        Column::new("Headline"),
        Column::new("Source"),
    ])
    .title("PADDOCK RUMORS & HEADLINES")
    .border(Tone::Red);

    for (i, headline) in headlines.iter().enumerate() {
        table.add_row(vec![
            Span::styled((i + 1).to_string(), HINT),
            Span::styled(headline.time_label(), HINT),
            Span::styled(headline.title.clone(), Style::new().fg(Tone::White).bold()),
            Span::styled(headline.source.clone(), Style::new().fg(Tone::Cyan)),
        ]);
    }
    table
}

/// Link lines keyed by the `#` column of [`news`]; headlines without a link
/// are skipped.
pub fn news_links(headlines: &[Headline]) -> Vec<Line> {
    let links: Vec<Line> = headlines
        .iter()
        .enumerate()
        .filter(|(_, h)| !h.link.is_empty())
        .map(|(i, h)| {
            Line::new(vec![
                Span::styled(format!("{:>3}. ", i + 1), HINT),
                Span::styled(h.link.clone(), Style::new().fg(Tone::Cyan).italic()),
            ])
        })
        .collect();
    if links.is_empty() {
        return links;
    }
    let mut lines = vec![Line::styled("Open a story in your browser:", HINT)];
    lines.extend(links);
    lines
}

pub fn speed(report: &SpeedReport) -> Panel {
    let width = 20;
    let value = Style::new().fg(Tone::Yellow).bold();
    Panel::new(vec![
        field(
            "DOWNFORCE (Download)",
            width,
            vec![Span::styled(format!("{:.2} Mbps", report.download_mbps), value)],
        ),
        field(
            "THRUST (Upload)",
            width,
            vec![Span::styled(format!("{:.2} Mbps", report.upload_mbps), value)],
        ),
        field(
            "REACTION TIME (Ping)",
            width,
            vec![Span::styled(format!("{:.1} ms", report.ping_ms), value)],
        ),
        field(
            "POWER UNIT RATING",
            width,
            vec![Span::styled(
                report.rating(),
                Style::new().fg(Tone::Red).italic(),
            )],
        ),
    ])
    .title("AERODYNAMICS REPORT")
    .border(Tone::Magenta)
    .width(50)
}
