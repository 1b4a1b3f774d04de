//! Keyboard polling thread.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::{debug, error};

use crate::mailbox::KeyMailbox;
use crate::map::key_to_char;

/// How long one wait for a key lasts before the stop flag is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Background thread feeding keystrokes into a [`KeyMailbox`].
///
/// Stopping is cooperative: [`InputPoller::stop`] raises a flag the thread
/// checks between waits, then joins it.
pub struct InputPoller {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputPoller {
    /// Start polling the terminal.
    pub fn spawn(mailbox: Arc<KeyMailbox>) -> io::Result<Self> {
        Self::spawn_with(mailbox, read_key)
    }

    /// Start polling with a custom key source.
    ///
    /// `next_key` waits up to the given timeout and returns `Ok(None)` when
    /// nothing usable arrived.
    pub fn spawn_with<F>(mailbox: Arc<KeyMailbox>, mut next_key: F) -> io::Result<Self>
    where
        F: FnMut(Duration) -> io::Result<Option<char>> + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("input".into())
            .spawn(move || {
                while !flag.load(Ordering::Acquire) {
                    match next_key(POLL_INTERVAL) {
                        Ok(Some(key)) => {
                            if let Some(dropped) = mailbox.post(key) {
                                debug!(?key, ?dropped, "unread key overwritten");
                            }
                        }
                        Ok(None) => {}
                        Err(err) => {
                            error!(%err, "keyboard read failed, input thread exiting");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the thread to stop and wait for it.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("input thread panicked");
            }
        }
    }
}

impl Drop for InputPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn read_key(timeout: Duration) -> io::Result<Option<char>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(key_to_char(key)),
        _ => Ok(None),
    }
}
