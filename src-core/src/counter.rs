use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::TwoTableError;

pub const BASE_COUNT: u64 = 2847;
pub const STORAGE_KEY: &str = "twotable_waitlist_count";
/// Interval at which the front end rolls for a simulated signup.
pub const BUMP_INTERVAL_MS: u32 = 30_000;
const BUMP_THRESHOLD: f64 = 0.7;
const DAILY_GROWTH: f64 = 12.5;

/// Key/value persistence for the counter (browser local storage in the site).
pub trait CounterStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), TwoTableError>;
}

/// In-memory store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl CounterStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), TwoTableError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Calendar date (UTC) for a Unix timestamp in milliseconds, e.g. `Date.now()`.
pub fn date_from_millis(ms: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.date_naive())
        .unwrap_or_else(launch_date)
}

fn launch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default()
}

/// Deterministic starting count: base plus 12.5 signups per day since launch.
/// Dates before launch clamp to the base count.
pub fn seed_count(today: NaiveDate) -> u64 {
    let days = (today - launch_date()).num_days().max(0);
    BASE_COUNT + (days as f64 * DAILY_GROWTH).floor() as u64
}

/// Render with thousands separators, e.g. `2,847`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug)]
pub struct WaitlistCounter<S: CounterStore> {
    store: S,
    count: u64,
}

impl<S: CounterStore> WaitlistCounter<S> {
    /// Read the persisted count, or seed it from `today` and persist the seed.
    pub fn load_or_seed(mut store: S, today: NaiveDate) -> Self {
        let stored = store
            .load(STORAGE_KEY)
            .and_then(|raw| raw.trim().parse::<u64>().ok());

        let count = match stored {
            Some(count) => count,
            None => {
                let seeded = seed_count(today);
                debug!("Seeding waitlist counter at {}", seeded);
                if let Err(e) = store.save(STORAGE_KEY, &seeded.to_string()) {
                    warn!("Failed to persist seeded waitlist count: {}", e);
                }
                seeded
            }
        };

        Self { store, count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        if let Err(e) = self.store.save(STORAGE_KEY, &self.count.to_string()) {
            warn!("Failed to persist waitlist count: {}", e);
        }
        self.count
    }

    /// Simulated organic signup: bumps when `roll` (uniform in `[0, 1)`) exceeds 0.7.
    pub fn maybe_bump(&mut self, roll: f64) -> bool {
        if roll > BUMP_THRESHOLD {
            self.increment();
            true
        } else {
            false
        }
    }
}
