//! Stdin as a [`LineSource`].
//!
//! A reader thread performs one blocking `read_line` per request and hands
//! the result over a channel. Reads are only requested while the prompt is
//! up, so forwarded shell commands keep stdin to themselves. A read that an
//! interrupt abandoned stays outstanding and serves the next prompt.
//! Only while a read is awaited does a repeated Ctrl+C force an exit.

use std::io::{self, BufRead};
use std::sync::mpsc as std_mpsc;
use std::thread;

use anyhow::{Context, Result};
use pitwall_core::core::interrupt;
use pitwall_core::core::{Input, LineSource};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

type ReadResult = io::Result<Option<String>>;

pub struct StdinSource {
    handle: Handle,
    requests: std_mpsc::Sender<()>,
    lines: mpsc::Receiver<ReadResult>,
    pending: bool,
}

impl StdinSource {
    pub fn spawn(handle: Handle) -> Result<Self> {
        let (request_tx, request_rx) = std_mpsc::channel::<()>();
        let (line_tx, line_rx) = mpsc::channel::<ReadResult>(1);

        thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                while request_rx.recv().is_ok() {
                    let result = read_one(&mut stdin.lock());
                    let done = !matches!(result, Ok(Some(_)));
                    if line_tx.blocking_send(result).is_err() || done {
                        break;
                    }
                }
            })
            .context("spawn stdin reader")?;

        Ok(Self {
            handle,
            requests: request_tx,
            lines: line_rx,
            pending: false,
        })
    }
}

/// One line without its terminator; `None` at end of input.
pub fn read_one(reader: &mut impl BufRead) -> ReadResult {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

impl LineSource for StdinSource {
    fn read_line(&mut self) -> Result<Input> {
        if !self.pending {
            if self.requests.send(()).is_err() {
                return Ok(Input::Closed);
            }
            self.pending = true;
        }

        interrupt::reset();
        interrupt::set_awaiting_input(true);
        let lines = &mut self.lines;
        let received = self.handle.block_on(async {
            tokio::select! {
                received = lines.recv() => Some(received),
                () = interrupt::wait_for_interrupt() => None,
            }
        });
        interrupt::set_awaiting_input(false);

        match received {
            None => {
                interrupt::take();
                Ok(Input::Interrupted)
            }
            Some(None) => Ok(Input::Closed),
            Some(Some(result)) => {
                self.pending = false;
                match result.context("read stdin")? {
                    Some(line) => Ok(Input::Line(line)),
                    None => Ok(Input::Closed),
                }
            }
        }
    }
}
