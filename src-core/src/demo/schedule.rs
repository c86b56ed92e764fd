use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::DemoConfig;

/// Selections below this size never produce a matched slot or a lock-in.
pub const MIN_PICKS: usize = 3;

/// A day-of-week / time-of-day cell of the weekly picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: String,
    pub time: String,
}

impl SlotKey {
    pub fn new(day: &str, time: &str) -> Self {
        Self {
            day: day.to_string(),
            time: time.to_string(),
        }
    }

    /// `"Friday 20:30"`
    pub fn label(&self) -> String {
        format!("{} {}", self.day, self.time)
    }

    /// `"Friday · 20:30"`, as shown on the booking card.
    pub fn booking_label(&self) -> String {
        format!("{} \u{b7} {}", self.day, self.time)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// How a lock-in resolved the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    /// Both sides picked this slot.
    Overlap(SlotKey),
    /// No common slot; the other side approved one of yours.
    Approved(SlotKey),
}

impl LockOutcome {
    pub fn slot(&self) -> &SlotKey {
        match self {
            LockOutcome::Overlap(slot) | LockOutcome::Approved(slot) => slot,
        }
    }

    pub fn is_no_overlap(&self) -> bool {
        matches!(self, LockOutcome::Approved(_))
    }
}

/// Your picks, kept in the order you made them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeNegotiation {
    yours: Vec<SlotKey>,
}

impl TimeNegotiation {
    /// Add or remove a pick. Keys off the grid are ignored.
    pub fn toggle(&mut self, key: SlotKey, config: &DemoConfig) {
        if !config.is_on_grid(&key) {
            return;
        }
        match self.yours.iter().position(|k| *k == key) {
            Some(idx) => {
                self.yours.remove(idx);
            }
            None => self.yours.push(key),
        }
    }

    pub fn yours(&self) -> &[SlotKey] {
        &self.yours
    }

    pub fn is_yours(&self, key: &SlotKey) -> bool {
        self.yours.contains(key)
    }

    /// First grid cell picked by both sides, once you have at least three picks.
    pub fn matched_slot(&self, config: &DemoConfig) -> Option<SlotKey> {
        if self.yours.len() < MIN_PICKS {
            return None;
        }
        config
            .grid_keys()
            .find(|key| self.is_yours(key) && config.their_slots.contains(key))
    }

    /// Resolve a time from both sides' picks. `None` when you have fewer than
    /// three picks or the other side has none.
    pub fn resolve(&self, config: &DemoConfig) -> Option<LockOutcome> {
        if self.yours.len() < MIN_PICKS || config.their_slots.is_empty() {
            return None;
        }
        match self.matched_slot(config) {
            Some(slot) => Some(LockOutcome::Overlap(slot)),
            None => self.yours.first().cloned().map(LockOutcome::Approved),
        }
    }
}
