//! Periodic score counting.

pub mod counter;

pub use counter::{ScoreCounter, TaskStatus};
