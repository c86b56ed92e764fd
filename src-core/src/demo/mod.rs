//! The interactive "see how it works" walkthrough, independent of rendering.

pub mod booking;
pub mod config;
mod controller;
pub mod matches;
pub mod profile;
pub mod restaurant;
pub mod schedule;
pub mod sequencer;
pub mod timers;

pub use booking::{Booking, BookingSummary};
pub use config::{Candidate, DayColumn, DemoConfig, DemoTimings, Restaurant};
pub use controller::{DemoController, DemoView};
pub use profile::LookingFor;
pub use restaurant::Agreement;
pub use schedule::{LockOutcome, SlotKey};
pub use sequencer::Screen;
pub use timers::Millis;
