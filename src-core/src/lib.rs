pub mod config;
pub mod counter;
pub mod demo;
mod error;
pub mod forms;

pub use error::TwoTableError;
