use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use tokio::sync::Mutex;

pub const MAX_HISTORY: usize = 1000;

const INITIAL_PH: f64 = 7.0;
const INITIAL_EC: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub ph: f64,
    pub ec: f64,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    pub fn now(ph: f64, ec: f64) -> Self {
        Self {
            ph,
            ec,
            timestamp: Utc::now(),
        }
    }
}

/// Insertion-ordered readings, oldest first. Never holds more than `capacity`
/// entries: a full history drops its oldest entry before accepting a new one.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<Reading>,
    capacity: usize,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, reading: Reading) {
        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                debug!("history is full, evicted reading from {}", evicted.timestamp);
            }
        }

        self.entries.push_back(reading);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<Reading> {
        self.entries.iter().copied().collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

struct State {
    current: Reading,
    history: History,
}

/// Latest reading plus bounded history, shared by every request.
///
/// Both fields live behind one lock so a submission updates them together
/// and readers never observe one without the other.
pub struct Storage {
    state: Mutex<State>,
}

impl Storage {
    pub fn new() -> Self {
        Self::with_history_capacity(MAX_HISTORY)
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(State {
                current: Reading::now(INITIAL_PH, INITIAL_EC),
                history: History::with_capacity(capacity),
            }),
        }
    }

    pub async fn record_reading(&self, ph: f64, ec: f64) -> Reading {
        let mut state = self.state.lock().await;

        let reading = Reading::now(ph, ec);
        state.current = reading;
        state.history.push(reading);

        reading
    }

    pub async fn current(&self) -> Reading {
        self.state.lock().await.current
    }

    pub async fn history(&self) -> Vec<Reading> {
        self.state.lock().await.history.to_vec()
    }

    pub async fn clear_history(&self) {
        let mut state = self.state.lock().await;

        debug!("clearing {} readings from history", state.history.len());
        state.history.clear();
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
