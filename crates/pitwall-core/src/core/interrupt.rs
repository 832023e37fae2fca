use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tokio::sync::Notify;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static AWAITING_INPUT: AtomicBool = AtomicBool::new(false);
static INTERRUPT_NOTIFY: OnceLock<Notify> = OnceLock::new();

/// Installs the Ctrl+C handler.
///
/// The handler sets an interrupt flag only; it does not print anything.
/// The prompt loop decides what an interrupt means (a RED FLAG notice while
/// waiting for input). A second Ctrl+C at the prompt before the first one is
/// acknowledged exits with status 130; while a command runs, presses only
/// set the flag.
pub fn init() -> Result<()> {
    ctrlc::set_handler(trigger_ctrl_c).context("install Ctrl+C handler")
}

fn notify_waiters() {
    INTERRUPT_NOTIFY.get_or_init(Notify::new).notify_waiters();
}

/// Triggers an interrupt, force-exiting on an unacknowledged second one
/// while the prompt is waiting.
pub fn trigger_ctrl_c() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) && is_awaiting_input() {
        std::process::exit(130);
    }
    notify_waiters();
}

/// Marks whether the prompt is currently waiting for a line.
pub fn set_awaiting_input(awaiting: bool) {
    AWAITING_INPUT.store(awaiting, Ordering::SeqCst);
}

pub fn is_awaiting_input() -> bool {
    AWAITING_INPUT.load(Ordering::SeqCst)
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Clears the flag, returning whether it was set.
pub fn take() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

/// Waits until an interrupt is triggered.
pub async fn wait_for_interrupt() {
    loop {
        let notify = INTERRUPT_NOTIFY.get_or_init(Notify::new);
        let notified = notify.notified();
        if is_interrupted() {
            return;
        }
        notified.await;
    }
}

/// Resets the interrupt flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}
