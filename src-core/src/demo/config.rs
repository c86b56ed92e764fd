use serde::{Deserialize, Serialize};

use super::schedule::SlotKey;
use crate::TwoTableError;

/// Immutable candidate shown on the results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub distance: String,
    /// Compatibility score, 0-100.
    pub score: u8,
    pub blurb: String,
    pub tags: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Cuisine and neighbourhood, e.g. "Italian · Clifton".
    pub category: String,
    pub rating: f32,
    pub price: String,
    pub eta_minutes: u32,
}

/// One column of the weekly picker: a day and its bookable times, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    pub day: String,
    pub slots: Vec<String>,
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoTimings {
    pub matching_ms: u64,
    pub auto_advance_ms: u64,
    pub rotate_ms: u64,
    pub like_commit_ms: u64,
}

impl Default for DemoTimings {
    fn default() -> Self {
        Self {
            matching_ms: 2600,
            auto_advance_ms: 450,
            rotate_ms: 3600,
            like_commit_ms: 550,
        }
    }
}

/// Walkthrough data. Fields missing from a TOML document keep their
/// built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub candidates: Vec<Candidate>,
    pub restaurants: Vec<Restaurant>,
    pub default_restaurant_id: String,
    pub time_grid: Vec<DayColumn>,
    /// The other party's pre-picked slots.
    pub their_slots: Vec<SlotKey>,
    pub profile_tags: Vec<String>,
    pub default_tags: Vec<String>,
    pub timings: DemoTimings,
}

/// Overrides shipped with the site.
const BUNDLED_TOML: &str = include_str!("../../demo.toml");

impl DemoConfig {
    /// The built-in data with the shipped `demo.toml` applied.
    pub fn bundled() -> Result<Self, TwoTableError> {
        Self::from_toml_str(BUNDLED_TOML)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, TwoTableError> {
        let config: DemoConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TwoTableError> {
        if self.restaurants.is_empty() {
            return Err(TwoTableError::Config("restaurant list is empty".to_string()));
        }
        if self.restaurant(&self.default_restaurant_id).is_none() {
            return Err(TwoTableError::Config(format!(
                "default restaurant '{}' is not in the restaurant list",
                self.default_restaurant_id
            )));
        }
        if self.time_grid.iter().all(|col| col.slots.is_empty()) {
            return Err(TwoTableError::Config("time grid has no slots".to_string()));
        }
        if self.their_slots.is_empty() {
            return Err(TwoTableError::Config(
                "the other party must have at least one slot".to_string(),
            ));
        }
        if let Some(stray) = self.their_slots.iter().find(|s| !self.is_on_grid(s)) {
            return Err(TwoTableError::Config(format!(
                "slot '{}' is not on the time grid",
                stray.label()
            )));
        }
        Ok(())
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Every slot key in grid order: days as listed, then times within a day.
    pub fn grid_keys(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.time_grid.iter().flat_map(|col| {
            col.slots
                .iter()
                .map(move |time| SlotKey::new(&col.day, time))
        })
    }

    pub fn is_on_grid(&self, key: &SlotKey) -> bool {
        self.time_grid
            .iter()
            .any(|col| col.day == key.day && col.slots.iter().any(|t| *t == key.time))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                Candidate {
                    id: "marcus".to_string(),
                    name: "Marcus, 31".to_string(),
                    distance: "3 miles away".to_string(),
                    score: 92,
                    blurb: "Photographer who loves wine bars & Sunday markets.".to_string(),
                    tags: strings(&["Photography", "Wine bars", "Markets"]),
                    image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
                },
                Candidate {
                    id: "alex".to_string(),
                    name: "Alex, 29".to_string(),
                    distance: "2 miles away".to_string(),
                    score: 89,
                    blurb: "Designer, obsessed with cosy corners and long dinners.".to_string(),
                    tags: strings(&["Design", "Red wine", "Live music"]),
                    image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=600".to_string(),
                },
            ],
            restaurants: vec![
                Restaurant {
                    id: "bella".to_string(),
                    name: "Bella Vita".to_string(),
                    category: "Italian · Clifton".to_string(),
                    rating: 4.8,
                    price: "$$$".to_string(),
                    eta_minutes: 25,
                },
                Restaurant {
                    id: "sakura".to_string(),
                    name: "Sakura House".to_string(),
                    category: "Japanese · Harbourside".to_string(),
                    rating: 4.7,
                    price: "$$".to_string(),
                    eta_minutes: 30,
                },
                Restaurant {
                    id: "garden".to_string(),
                    name: "The Garden".to_string(),
                    category: "Farm-to-table · Stokes Croft".to_string(),
                    rating: 4.9,
                    price: "$$$".to_string(),
                    eta_minutes: 45,
                },
            ],
            default_restaurant_id: "bella".to_string(),
            time_grid: vec![
                DayColumn {
                    day: "Friday".to_string(),
                    slots: strings(&["18:30", "20:30"]),
                },
                DayColumn {
                    day: "Saturday".to_string(),
                    slots: strings(&["19:00", "21:00"]),
                },
                DayColumn {
                    day: "Sunday".to_string(),
                    slots: strings(&["17:30", "19:30"]),
                },
            ],
            their_slots: vec![
                SlotKey::new("Friday", "20:30"),
                SlotKey::new("Saturday", "19:00"),
                SlotKey::new("Sunday", "19:30"),
            ],
            profile_tags: strings(&["Foodie", "Traveler", "Dog Lover", "Books", "Outdoors"]),
            default_tags: strings(&["Foodie", "Traveler"]),
            timings: DemoTimings::default(),
        }
    }
}
