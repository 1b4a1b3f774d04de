//! Single-slot keystroke mailbox shared by the input thread and the game loop.

use std::sync::atomic::{AtomicU32, Ordering};

/// Slot value meaning "no key waiting". Not a valid `char`.
const EMPTY: u32 = u32::MAX;

/// Holds at most one keystroke.
///
/// Posting overwrites whatever is waiting (last writer wins); taking empties
/// the slot. Both are a single atomic swap, so no lock is needed.
#[derive(Debug)]
pub struct KeyMailbox {
    slot: AtomicU32,
}

impl KeyMailbox {
    pub fn new() -> Self {
        Self {
            slot: AtomicU32::new(EMPTY),
        }
    }

    /// Store `key`, returning the unread key it replaced.
    pub fn post(&self, key: char) -> Option<char> {
        decode(self.slot.swap(key as u32, Ordering::AcqRel))
    }

    /// Remove and return the waiting key.
    pub fn take(&self) -> Option<char> {
        decode(self.slot.swap(EMPTY, Ordering::AcqRel))
    }
}

impl Default for KeyMailbox {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(raw: u32) -> Option<char> {
    if raw == EMPTY {
        return None;
    }
    char::from_u32(raw)
}
