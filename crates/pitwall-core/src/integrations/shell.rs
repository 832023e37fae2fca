//! OS shell forwarding.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use super::CommandRunner;

/// Runs lines through `sh -c` (or `cmd /C` on Windows) with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemShell;

impl SystemShell {
    fn command(command_line: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command_line);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command_line);
            cmd
        }
    }
}

impl CommandRunner for SystemShell {
    fn run(&mut self, command_line: &str, cwd: &Path) -> Result<()> {
        tracing::debug!(command = command_line, cwd = %cwd.display(), "forwarding to shell");
        let status = Self::command(command_line)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context("launch command interpreter")?;
        tracing::debug!(%status, "shell finished");
        Ok(())
    }
}

/// Refuses every line; used when forwarding is switched off.
#[derive(Debug, Default)]
pub struct DisabledShell;

impl CommandRunner for DisabledShell {
    fn run(&mut self, command_line: &str, _cwd: &Path) -> Result<()> {
        tracing::debug!(command = command_line, "shell forwarding disabled");
        bail!("shell forwarding is disabled")
    }
}
