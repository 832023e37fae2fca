//! The read-eval loop.
//!
//! [`Dispatcher`] owns the [`Session`] and every collaborator. One input line
//! is fully handled before the next is read; nothing a command does can end
//! the loop except quitting or input closure.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::board::{self, ALERT, GOOD, HINT, WARN};
use super::listing;
use super::navigate::{self, NavError};
use super::parse::{self, Command};
use super::session::{Session, TyreCompound};
use crate::config::Config;
use crate::data::calendar::{Calendar, Clock};
use crate::data::quotes::QUOTES;
use crate::data::tracks;
use crate::integrations::{CommandRunner, HeadlineFeed, NetworkProbe};
use crate::screen::{Line, Screen, Span, Style, Tone};
use crate::telemetry::Sensors;

/// What a [`LineSource`] produced while the prompt was up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// The user pressed Ctrl+C instead of submitting a line.
    Interrupted,
    /// End of input.
    Closed,
}

/// Blocking source of input lines.
pub trait LineSource {
    fn read_line(&mut self) -> Result<Input>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// External collaborators handed to the dispatcher at construction.
pub struct Crew {
    pub shell: Box<dyn CommandRunner>,
    pub feed: Box<dyn HeadlineFeed>,
    pub probe: Box<dyn NetworkProbe>,
    pub sensors: Box<dyn Sensors>,
    pub clock: Box<dyn Clock>,
    pub rng: StdRng,
}

pub struct Dispatcher<S> {
    screen: S,
    session: Session,
    crew: Crew,
    driver: String,
    calendar: Calendar,
    news_limit: usize,
}

impl<S: Screen> Dispatcher<S> {
    pub fn new(screen: S, session: Session, crew: Crew, config: &Config) -> Self {
        Self {
            screen,
            session,
            crew,
            driver: config.driver.clone(),
            calendar: config.calendar(),
            news_limit: config.news.limit,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Prompts and dispatches until quit, input closure, or an input error.
    pub fn run(&mut self, input: &mut dyn LineSource) {
        loop {
            self.screen
                .prompt(board::prompt(&self.session, &self.driver));
            match input.read_line() {
                Ok(Input::Line(line)) => {
                    if self.handle_line(&line) == Flow::Quit {
                        break;
                    }
                }
                Ok(Input::Interrupted) => {
                    self.screen.line(Line::blank());
                    self.screen
                        .line(board::alert("RED FLAG!", "(Type 'flag' to exit)"));
                }
                Ok(Input::Closed) => {
                    tracing::debug!("input closed");
                    self.screen.line(Line::blank());
                    break;
                }
                Err(e) => {
                    tracing::warn!("input failed: {e:#}");
                    self.screen.line(Line::blank());
                    break;
                }
            }
        }
    }

    /// Handles one accepted input line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        self.session.complete_lap();
        let Some(command) = parse::parse(line) else {
            return Flow::Continue;
        };
        tracing::debug!(?command, lap = self.session.lap(), "dispatch");
        match self.execute(command) {
            Ok(flow) => flow,
            Err(e) => {
                self.screen
                    .line(board::alert("CRITICAL FAILURE:", &format!("{e:#}")));
                Flow::Continue
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Quit => {
                self.screen.panel(board::farewell());
                return Ok(Flow::Quit);
            }
            Command::Clear => {
                self.screen.clear();
                self.screen
                    .line(Line::styled("SAFETY CAR DEPLOYED", WARN));
            }
            Command::List(arg) => self.list(arg.as_deref()),
            Command::Navigate(arg) => self.pit_stop(arg.as_deref()),
            Command::Telemetry => {
                let sample = self.crew.sensors.read().context("read telemetry")?;
                self.screen.panel(board::telemetry(&sample));
            }
            Command::Champions => self.screen.table(board::champions()),
            Command::Map(name) => self.map(name.as_deref()),
            Command::Next => {
                let now = self.crew.clock.now();
                let race = self.calendar.next_race(now);
                self.screen.panel(board::next_race(race, now));
            }
            Command::News => self.news(),
            Command::SpeedTest => self.speed_test(),
            Command::Quote => {
                if let Some(quote) = QUOTES.choose(&mut self.crew.rng) {
                    self.screen.panel(board::quote(quote));
                }
            }
            Command::Help => self.screen.panel(board::help()),
            Command::Forward(line) => self.forward(&line),
        }
        Ok(Flow::Continue)
    }

    fn pit_stop(&mut self, arg: Option<&str>) {
        let Some(arg) = arg else {
            self.screen.line(engineer("Usage: box <directory>"));
            return;
        };

        match navigate::navigate(self.session.working_directory(), arg) {
            Ok(directory) => {
                let sector = match directory.file_name() {
                    Some(name) => name.to_string_lossy().into_owned(),
                    None => directory.display().to_string(),
                };
                let tyre = TyreCompound::pick(&mut self.crew.rng);
                tracing::debug!(directory = %directory.display(), %tyre, "pit stop");
                self.session.pit_stop(directory, tyre);
                self.screen.line(Line::new(vec![
                    Span::styled("PIT STOP COMPLETE.", GOOD),
                    Span::plain(format!(" Joined sector {sector}")),
                ]));
                self.screen.line(Line::styled(
                    format!("Fitted {tyre} tyres."),
                    Style::new().dim().italic(),
                ));
            }
            Err(NavError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "pit stop target missing");
                self.screen
                    .line(board::alert("GRAVEL TRAP!", "Directory not found."));
            }
            Err(NavError::PermissionDenied(path)) => {
                tracing::debug!(path = %path.display(), "pit stop target locked");
                self.screen
                    .line(board::alert("BLACK FLAG!", "Permission denied."));
            }
        }
    }

    fn list(&mut self, arg: Option<&str>) {
        let cwd = self.session.working_directory();
        let target = match arg {
            Some(arg) => navigate::resolve(cwd, arg),
            None => cwd.to_path_buf(),
        };
        let target = fs::canonicalize(&target).unwrap_or(target);

        match listing::list(&target) {
            Ok(listing) => self.screen.table(board::listing(&listing)),
            Err(e) => self.report_list_error(arg, &target, &e),
        }
    }

    fn report_list_error(&mut self, arg: Option<&str>, target: &Path, err: &io::Error) {
        tracing::debug!(target = %target.display(), "listing failed: {err}");
        let line = match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                let shown = arg.map_or_else(|| target.display().to_string(), str::to_string);
                board::alert(
                    "SECTOR ERROR:",
                    &format!("'{shown}' not found on track map."),
                )
            }
            io::ErrorKind::PermissionDenied => board::alert("RED FLAG:", "Access Denied."),
            _ => board::alert("SECTOR ERROR:", &err.to_string()),
        };
        self.screen.line(line);
    }

    fn map(&mut self, name: Option<&str>) {
        let Some(name) = name else {
            for line in board::map_usage() {
                self.screen.line(line);
            }
            return;
        };
        match tracks::find(name) {
            Some(track) => self.screen.panel(board::track(track, name)),
            None => self.screen.line(board::alert(
                "NO DATA:",
                &format!("Track '{name}' not in simulation database."),
            )),
        }
    }

    fn news(&mut self) {
        self.screen.line(Line::styled(
            "ESTABLISHING UPLINK TO PADDOCK...",
            Style::new().fg(Tone::Yellow).bold(),
        ));
        match self.crew.feed.fetch() {
            Ok(headlines) if headlines.is_empty() => {
                self.screen
                    .line(board::alert("CONNECTION LOST:", "No news data received."));
            }
            Ok(headlines) => {
                let shown = &headlines[..headlines.len().min(self.news_limit)];
                self.screen.table(board::news(shown));
                for line in board::news_links(shown) {
                    self.screen.line(line);
                }
            }
            Err(e) => {
                self.screen
                    .line(board::alert("COMMUNICATION FAILURE:", &format!("{e:#}")));
            }
        }
    }

    fn speed_test(&mut self) {
        self.screen.line(Line::blank());
        self.screen.line(Line::styled(
            "INITIATING DRS PERFORMANCE TEST...",
            Style::new().fg(Tone::Cyan).bold(),
        ));
        self.screen.line(Line::styled(
            "CALIBRATING SENSORS (ping, downforce, thrust)...",
            Style::new().fg(Tone::Yellow).bold(),
        ));
        match self.crew.probe.measure() {
            Ok(report) => {
                self.screen.line(Line::new(vec![
                    Span::styled("✓ REACTION TIME (Ping):", GOOD),
                    Span::plain(format!(" {:.1} ms", report.ping_ms)),
                ]));
                self.screen.panel(board::speed(&report));
            }
            Err(e) => {
                self.screen.line(board::alert(
                    "DRS FAILURE:",
                    "Could not connect to telemetry server.",
                ));
                self.screen.line(Line::styled(format!("{e:#}"), HINT));
            }
        }
    }

    fn forward(&mut self, line: &str) {
        self.screen
            .line(Line::styled("Relaying to Race Control...", HINT));
        let cwd = self.session.working_directory().to_path_buf();
        if let Err(e) = self.crew.shell.run(line, &cwd) {
            tracing::warn!("shell forwarding failed: {e:#}");
            self.screen.line(Line::styled("MECHANICAL FAILURE", ALERT));
        }
    }
}

fn engineer(message: &str) -> Line {
    Line::new(vec![
        Span::styled("Engineer:", WARN),
        Span::plain(format!(" {message}")),
    ])
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::rc::Rc;

    use anyhow::anyhow;
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::SeedableRng;
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::data::calendar::{FixedClock, RaceEvent};
    use crate::integrations::{DisabledShell, Headline, SpeedReport};
    use crate::screen::{Frame, RecordingScreen};
    use crate::telemetry::TelemetrySample;

    type Calls = Rc<RefCell<Vec<(String, PathBuf)>>>;

    struct RecordingShell(Calls);

    impl CommandRunner for RecordingShell {
        fn run(&mut self, command_line: &str, cwd: &Path) -> Result<()> {
            self.0
                .borrow_mut()
                .push((command_line.to_string(), cwd.to_path_buf()));
            Ok(())
        }
    }

    struct StubFeed(Option<Vec<Headline>>);

    impl HeadlineFeed for StubFeed {
        fn fetch(&mut self) -> Result<Vec<Headline>> {
            self.0.clone().ok_or_else(|| anyhow!("dns lookup failed"))
        }
    }

    struct StubProbe(Option<SpeedReport>);

    impl NetworkProbe for StubProbe {
        fn measure(&mut self) -> Result<SpeedReport> {
            self.0.ok_or_else(|| anyhow!("no route to host"))
        }
    }

    struct StubSensors;

    impl Sensors for StubSensors {
        fn read(&mut self) -> Result<TelemetrySample> {
            Ok(TelemetrySample {
                cpu_percent: 42.0,
                ram_percent: 70.0,
                ram_used_gb: 11.2,
                battery: None,
                temperature_c: None,
                chassis: "Linux".to_string(),
            })
        }
    }

    struct DeadSensors;

    impl Sensors for DeadSensors {
        fn read(&mut self) -> Result<TelemetrySample> {
            Err(anyhow!("sensor bus offline"))
        }
    }

    struct Script(VecDeque<Result<Input>>);

    impl Script {
        fn lines(lines: &[&str]) -> Self {
            Self(
                lines
                    .iter()
                    .map(|l| Ok(Input::Line((*l).to_string())))
                    .collect(),
            )
        }
    }

    impl LineSource for Script {
        fn read_line(&mut self) -> Result<Input> {
            self.0.pop_front().unwrap_or(Ok(Input::Closed))
        }
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn crew(calls: &Calls) -> Crew {
        Crew {
            shell: Box::new(RecordingShell(calls.clone())),
            feed: Box::new(StubFeed(Some(Vec::new()))),
            probe: Box::new(StubProbe(None)),
            sensors: Box::new(StubSensors),
            clock: Box::new(FixedClock(midnight(2026, 10, 16))),
            rng: StdRng::seed_from_u64(44),
        }
    }

    fn config() -> Config {
        Config {
            driver: "HAMILTON".to_string(),
            ..Config::default()
        }
    }

    struct Harness {
        dir: TempDir,
        calls: Calls,
        wall: Dispatcher<RecordingScreen>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with(|_| {}, &config())
        }

        fn with(tweak: impl FnOnce(&mut Crew), config: &Config) -> Self {
            let dir = tempdir().unwrap();
            let cwd = fs::canonicalize(dir.path()).unwrap();
            let calls = Calls::default();
            let mut crew = crew(&calls);
            tweak(&mut crew);
            let wall = Dispatcher::new(RecordingScreen::new(), Session::new(cwd), crew, config);
            Self { dir, calls, wall }
        }

        fn cwd(&self) -> PathBuf {
            fs::canonicalize(self.dir.path()).unwrap()
        }

        fn send(&mut self, line: &str) -> Flow {
            self.wall.handle_line(line)
        }

        fn output(&self) -> String {
            self.wall.screen().text()
        }
    }

    #[test]
    fn test_quit_aliases_end_session() {
        for alias in ["flag", "exit", "quit", "q", "FLAG", "Quit now"] {
            let mut h = Harness::new();
            assert_eq!(h.send(alias), Flow::Quit, "alias {alias}");
            assert!(h.output().contains("CHECKERED FLAG"));
            assert!(h.output().contains("P1. Great Drive. Session Ended."));
        }
    }

    #[test]
    fn test_list_aliases_render_identically() {
        let outputs: Vec<String> = ["grid", "ls", "dir", "LS"]
            .iter()
            .map(|alias| {
                let mut h = Harness::new();
                fs::write(h.dir.path().join("engine.map"), "x").unwrap();
                h.send(alias);
                format!("{:?}", h.wall.screen().tables()[0].rows)
            })
            .collect();
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_help_aliases_render_identically() {
        let mut a = Harness::new();
        let mut b = Harness::new();
        a.send("radio");
        b.send("help");
        assert_eq!(a.output(), b.output());
        assert!(a.output().starts_with("RACE ENGINEER"));
    }

    #[test]
    fn test_box_and_cd_both_pit_into_subdirectory() {
        for alias in ["box", "cd"] {
            let mut h = Harness::new();
            fs::create_dir(h.dir.path().join("garage")).unwrap();
            h.send(&format!("{alias} garage"));
            assert_eq!(h.wall.session().working_directory(), h.cwd().join("garage"));
            let out = h.output();
            assert!(out.contains("PIT STOP COMPLETE. Joined sector garage"));
            let tyre = h.wall.session().tyre();
            assert!(out.contains(&format!("Fitted {tyre} tyres.")));
        }
    }

    #[test]
    fn test_box_handles_spaces_and_quotes() {
        let mut h = Harness::new();
        fs::create_dir(h.dir.path().join("Race Data")).unwrap();
        h.send("box \"Race Data\"");
        assert_eq!(
            h.wall.session().working_directory(),
            h.cwd().join("Race Data")
        );
        h.send("box ..");
        assert_eq!(h.wall.session().working_directory(), h.cwd());
    }

    #[test]
    fn test_box_to_missing_directory_keeps_state() {
        let mut h = Harness::new();
        let tyre = h.wall.session().tyre();
        h.send("box nowhere");
        assert_eq!(h.wall.session().working_directory(), h.cwd());
        assert_eq!(h.wall.session().tyre(), tyre);
        assert_eq!(h.output(), "GRAVEL TRAP! Directory not found.\n");
    }

    #[test]
    fn test_box_into_file_is_not_found() {
        let mut h = Harness::new();
        fs::write(h.dir.path().join("notes.txt"), "x").unwrap();
        h.send("cd notes.txt");
        assert_eq!(h.wall.session().working_directory(), h.cwd());
        assert!(h.output().contains("GRAVEL TRAP!"));
    }

    #[test]
    fn test_box_without_argument_shows_usage() {
        let mut h = Harness::new();
        h.send("box");
        h.send("cd ");
        assert_eq!(
            h.output(),
            "Engineer: Usage: box <directory>\nEngineer: Usage: box <directory>\n"
        );
    }

    #[test]
    fn test_list_defaults_to_working_directory_and_caps_rows() {
        let mut h = Harness::new();
        for i in 0..25 {
            fs::write(h.dir.path().join(format!("lap{i:02}.log")), "x").unwrap();
        }
        h.send("grid");
        let tables = h.wall.screen().tables();
        let table = tables[0];
        let name = h.cwd().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(table.title, Some(format!("TRACK LIMITS ({name})")));
        assert_eq!(table.rows.len(), 21);
        assert_eq!(table.rows[20][1].text, "+5 more");
    }

    #[test]
    fn test_list_missing_target() {
        let mut h = Harness::new();
        h.send("ls ghost");
        assert_eq!(
            h.output(),
            "SECTOR ERROR: 'ghost' not found on track map.\n"
        );
        assert_eq!(h.wall.session().working_directory(), h.cwd());
    }

    #[test]
    fn test_list_error_reports_by_kind() {
        let mut h = Harness::new();
        let target = h.cwd().join("vault");
        let cases = [
            (
                io::Error::from(io::ErrorKind::PermissionDenied),
                "RED FLAG: Access Denied.\n",
            ),
            (
                io::Error::from(io::ErrorKind::NotADirectory),
                "SECTOR ERROR: 'vault' not found on track map.\n",
            ),
            (
                io::Error::other("disk on fire"),
                "SECTOR ERROR: disk on fire\n",
            ),
        ];
        for (err, expected) in cases {
            h.wall.screen_mut().reset();
            h.wall.report_list_error(Some("vault"), &target, &err);
            assert_eq!(h.output(), expected);
        }
    }

    #[test]
    fn test_list_error_without_argument_names_target() {
        let mut h = Harness::new();
        let target = h.cwd().join("gone");
        let err = io::Error::from(io::ErrorKind::NotFound);
        h.wall.report_list_error(None, &target, &err);
        assert_eq!(
            h.output(),
            format!("SECTOR ERROR: '{}' not found on track map.\n", target.display())
        );
    }

    #[test]
    fn test_list_subdirectory_does_not_move_session() {
        let mut h = Harness::new();
        fs::create_dir(h.dir.path().join("pits")).unwrap();
        fs::write(h.dir.path().join("pits").join("wheel.nut"), vec![0u8; 1536]).unwrap();
        h.send("ls pits");
        let tables = h.wall.screen().tables();
        assert_eq!(tables[0].title.as_deref(), Some("TRACK LIMITS (pits)"));
        assert_eq!(tables[0].rows[0][1].text, "wheel.nut");
        assert_eq!(tables[0].rows[0][3].text, "1.5 KB");
        assert_eq!(h.wall.session().working_directory(), h.cwd());
    }

    #[test]
    fn test_empty_line_only_moves_lap_counter() {
        let mut h = Harness::new();
        assert_eq!(h.send("   "), Flow::Continue);
        assert_eq!(h.send(""), Flow::Continue);
        assert!(h.wall.screen().frames.is_empty());
        assert!(h.calls.borrow().is_empty());
        assert_eq!(h.wall.session().lap(), 3);
    }

    #[test]
    fn test_unknown_line_forwarded_verbatim_once() {
        let mut h = Harness::new();
        h.send("echo  two   spaces 'quoted'");
        let calls = h.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "echo  two   spaces 'quoted'");
        assert_eq!(calls[0].1, h.cwd());
        assert_eq!(h.output(), "Relaying to Race Control...\n");
    }

    #[test]
    fn test_forward_runs_in_session_directory() {
        let mut h = Harness::new();
        fs::create_dir(h.dir.path().join("garage")).unwrap();
        h.send("box garage");
        h.send("make tyres");
        assert_eq!(h.calls.borrow()[0].1, h.cwd().join("garage"));
    }

    #[test]
    fn test_forward_launch_failure() {
        let mut h = Harness::with(|crew| crew.shell = Box::new(DisabledShell), &config());
        assert_eq!(h.send("whoami"), Flow::Continue);
        assert_eq!(
            h.output(),
            "Relaying to Race Control...\nMECHANICAL FAILURE\n"
        );
    }

    #[test]
    fn test_clear_then_safety_car() {
        let mut h = Harness::new();
        h.send("clear");
        assert_eq!(h.wall.screen().frames[0], Frame::Clear);
        assert_eq!(h.output(), "SAFETY CAR DEPLOYED\n");
    }

    #[test]
    fn test_next_race_uses_configured_calendar() {
        let calendar = vec![
            RaceEvent::new(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(), "First", "A"),
            RaceEvent::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), "Second", "B"),
            RaceEvent::new(NaiveDate::from_ymd_opt(2026, 10, 30).unwrap(), "Third", "C"),
        ];
        let config = Config {
            calendar,
            ..config()
        };

        let mut h = Harness::with(|_| {}, &config);
        h.send("next");
        let out = h.output();
        assert!(out.starts_with("UPCOMING SESSION"));
        assert!(out.contains("THIRD"));
        assert!(out.contains("14 DAYS"));

        let mut late = Harness::with(
            |crew| crew.clock = Box::new(FixedClock(midnight(2026, 11, 2))),
            &config,
        );
        late.send("next");
        assert!(late.output().starts_with("OFF SEASON"));
    }

    #[test]
    fn test_map_variants() {
        let mut h = Harness::new();
        h.send("map");
        assert!(h.output().starts_with("Engineer: Which track? Usage: map <name>"));

        h.wall.screen_mut().reset();
        h.send("map Monza");
        assert!(h.output().starts_with("MONZA"));

        h.wall.screen_mut().reset();
        h.send("map las vegas");
        let out = h.output();
        assert!(out.starts_with("LAS VEGAS\nLas Vegas Grand Prix"));

        h.wall.screen_mut().reset();
        h.send("map nurburgring");
        assert_eq!(
            h.output(),
            "NO DATA: Track 'nurburgring' not in simulation database.\n"
        );
    }

    #[test]
    fn test_news_outcomes() {
        let headline = |i: usize| Headline {
            published: None,
            title: format!("Story {i}"),
            link: String::new(),
            source: "Wire".to_string(),
        };

        let mut h = Harness::new();
        h.send("news");
        assert!(h.output().contains("CONNECTION LOST: No news data received."));

        let mut h = Harness::with(|crew| crew.feed = Box::new(StubFeed(None)), &config());
        h.send("news");
        assert!(h.output().contains("COMMUNICATION FAILURE: dns lookup failed"));

        let many = (0..15).map(headline).collect();
        let mut h = Harness::with(|crew| crew.feed = Box::new(StubFeed(Some(many))), &config());
        h.send("news");
        let tables = h.wall.screen().tables();
        assert_eq!(tables[0].title.as_deref(), Some("PADDOCK RUMORS & HEADLINES"));
        assert_eq!(tables[0].rows.len(), 10);
        assert_eq!(tables[0].rows[0][1].text, "LIVE");
        assert!(!h.output().contains("Open a story"));
    }

    #[test]
    fn test_drs_outcomes() {
        let mut h = Harness::new();
        h.send("drs");
        let out = h.output();
        assert!(out.contains("INITIATING DRS PERFORMANCE TEST..."));
        assert!(out.contains("DRS FAILURE: Could not connect to telemetry server."));
        assert!(out.contains("no route to host"));

        let report = SpeedReport {
            ping_ms: 9.87,
            download_mbps: 60.0,
            upload_mbps: 12.0,
        };
        let mut h = Harness::with(
            |crew| crew.probe = Box::new(StubProbe(Some(report))),
            &config(),
        );
        h.send("drs");
        let out = h.output();
        assert!(out.contains("✓ REACTION TIME (Ping): 9.9 ms"));
        assert!(out.contains("AERODYNAMICS REPORT"));
        assert!(out.contains("V6 HYBRID"));
    }

    #[test]
    fn test_command_error_reported_as_critical_failure() {
        let mut h = Harness::with(|crew| crew.sensors = Box::new(DeadSensors), &config());
        assert_eq!(h.send("telemetry"), Flow::Continue);
        assert_eq!(
            h.output(),
            "CRITICAL FAILURE: read telemetry: sensor bus offline\n"
        );
        assert_eq!(h.wall.session().lap(), 2);

        h.wall.screen_mut().reset();
        h.send("radio");
        assert!(h.output().starts_with("RACE ENGINEER"));
    }

    #[test]
    fn test_telemetry_champions_and_quote_render() {
        let mut h = Harness::new();
        h.send("telemetry");
        assert!(h.output().starts_with("VF-24 TELEMETRY"));
        assert!(h.output().contains("42.0%"));

        h.wall.screen_mut().reset();
        h.send("champions");
        assert!(h.output().starts_with("HALL OF FAME"));

        h.wall.screen_mut().reset();
        h.send("quote");
        assert!(h.output().starts_with("TEAM RADIO TRANSCRIPT"));
    }

    #[test]
    fn test_same_seed_same_quote() {
        let mut a = Harness::new();
        let mut b = Harness::new();
        a.send("quote");
        b.send("quote");
        assert_eq!(a.output(), b.output());
    }

    #[test]
    fn test_run_loop_prompts_and_interrupts() {
        let mut h = Harness::new();
        let mut script = Script(VecDeque::from([
            Ok(Input::Line("ls".to_string())),
            Ok(Input::Interrupted),
            Ok(Input::Line(String::new())),
            Ok(Input::Line("quit".to_string())),
            Ok(Input::Line("never read".to_string())),
        ]));
        h.wall.run(&mut script);

        assert_eq!(script.0.len(), 1);
        let laps: Vec<String> = h
            .wall
            .screen()
            .prompts()
            .iter()
            .map(|p| p.split(']').next().unwrap().to_string())
            .collect();
        assert_eq!(laps, vec!["[ L1 ", "[ L2 ", "[ L2 ", "[ L3 "]);
        assert!(h.output().contains("RED FLAG! (Type 'flag' to exit)"));
        assert!(h.output().contains("CHECKERED FLAG"));
    }

    #[test]
    fn test_prompt_shows_driver_and_directory() {
        let mut h = Harness::new();
        h.wall.run(&mut Script::lines(&[]));
        let prompt = &h.wall.screen().prompts()[0];
        assert_eq!(
            prompt,
            &format!("[ L1 ][ SOFT ] HAMILTON :: {} > ", h.cwd().display())
        );
    }

    #[test]
    fn test_run_loop_ends_on_closed_input() {
        let mut h = Harness::new();
        h.wall.run(&mut Script::lines(&["telemetry"]));
        assert_eq!(h.wall.screen().prompts().len(), 2);
        assert!(!h.output().contains("CHECKERED FLAG"));
    }

    #[test]
    fn test_run_loop_ends_on_input_error() {
        let mut h = Harness::new();
        let mut script = Script(VecDeque::from([
            Err(anyhow!("stdin vanished")),
            Ok(Input::Line("quit".to_string())),
        ]));
        h.wall.run(&mut script);
        assert_eq!(h.wall.screen().prompts().len(), 1);
        assert_eq!(script.0.len(), 1);
    }
}
