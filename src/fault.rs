//! Panic capture for the game loop.
//!
//! The hook runs while the terminal is still in raw mode, so nothing is
//! printed there. The report is logged (when a log file is configured) and
//! kept until `main` has restored the terminal and can print it to stderr.

use std::backtrace::Backtrace;
use std::panic;
use std::sync::Mutex;

use tracing::error;

static LAST_REPORT: Mutex<Option<String>> = Mutex::new(None);

/// Replace the default panic hook with one that records a full report.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::force_capture();
        error!(%info, %backtrace, "panic");
        let report = format!("{info}\n\nstack backtrace:\n{backtrace}");
        if let Ok(mut slot) = LAST_REPORT.lock() {
            *slot = Some(report);
        }
    }));
}

/// The most recent panic report, if any, leaving none behind.
pub fn take_report() -> Option<String> {
    LAST_REPORT.lock().ok().and_then(|mut slot| slot.take())
}

/// Text of a caught panic payload.
pub fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    "unknown panic".to_string()
}
