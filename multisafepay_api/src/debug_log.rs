//! Bounded in-memory record of raw request/response pairs.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Number of entries kept before the oldest one is evicted.
pub const DEBUG_LOG_CAPACITY: usize = 100;

/// One dumped round trip, recorded when the client runs in debug mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Request URL the entry is keyed by.
    pub url: String,
    /// Request line, headers and body as sent.
    pub request: Vec<u8>,
    /// Status line, headers and body as received.
    pub response: Vec<u8>,
}

/// Fixed-capacity FIFO store of [`LogEntry`] values.
///
/// Recording into a full log evicts the oldest entry within the same
/// critical section, so the length never exceeds the capacity even when
/// several requests finish at once.
pub struct DebugLog {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLog {
    pub fn new() -> Self {
        Self::with_capacity(DEBUG_LOG_CAPACITY)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one when the log is full.
    pub fn record(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Returns a copy of the recorded entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }

    /// Removes and returns every recorded entry, oldest first.
    pub fn drain(&self) -> Vec<LogEntry> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
