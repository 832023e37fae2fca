//! Interactive session: wires the terminal and the default collaborators
//! into a dispatcher and runs it until the driver takes the flag.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use pitwall_core::config::Config;
use pitwall_core::core::{Crew, Dispatcher, Session, interrupt};
use pitwall_core::data::calendar::SystemClock;
use pitwall_core::integrations::{
    CommandRunner, DisabledShell, HttpProbe, RssFeed, SystemShell,
};
use pitwall_core::screen::Screen;
use pitwall_core::telemetry::SystemSensors;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::terminal::input::StdinSource;
use crate::terminal::{self, TerminalScreen, boot};

pub struct SessionOptions {
    pub seed: Option<u64>,
    pub dir: Option<PathBuf>,
}

/// Canonical starting directory: `--dir`, else the process working directory.
pub fn starting_directory(dir: Option<&Path>) -> Result<PathBuf> {
    let raw = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("read current directory")?,
    };
    let canonical = raw
        .canonicalize()
        .with_context(|| format!("resolve starting directory {}", raw.display()))?;
    if !canonical.is_dir() {
        bail!("starting directory is not a directory: {}", canonical.display());
    }
    Ok(canonical)
}

pub fn run(options: &SessionOptions, config: &Config) -> Result<()> {
    let start = starting_directory(options.dir.as_deref())?;
    interrupt::init()?;

    // one tokio runtime for every collaborator; the loop itself stays blocking
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut screen = TerminalScreen::new(terminal::styling_enabled());
    if config.boot && io::stdout().is_terminal() {
        let pause = boot::hold(&mut rng);
        if let Err(e) = boot::play(&mut screen, pause) {
            tracing::warn!("boot sequence aborted: {e:#}");
        }
    }
    screen.line(boot::hint());

    let shell: Box<dyn CommandRunner> = if config.shell.enabled {
        Box::new(SystemShell)
    } else {
        Box::new(DisabledShell)
    };
    let crew = Crew {
        shell,
        feed: Box::new(RssFeed::new(
            rt.handle().clone(),
            config.news.url.clone(),
            config.news.timeout(),
        )?),
        probe: Box::new(HttpProbe::new(rt.handle().clone(), config.probe.clone())?),
        sensors: Box::new(SystemSensors),
        clock: Box::new(SystemClock),
        rng,
    };

    let mut input = StdinSource::spawn(rt.handle().clone())?;
    tracing::debug!(start = %start.display(), driver = %config.driver, "session start");
    let mut wall = Dispatcher::new(screen, Session::new(start), crew, config);
    wall.run(&mut input);

    rt.shutdown_background();
    Ok(())
}
