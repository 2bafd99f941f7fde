//! Classroom material around the lab: explanatory content, quiz and game

pub mod content;
pub mod game;
pub mod quiz;

pub use game::{MatchGame, RoundOutcome};
pub use quiz::{Feedback, Quiz};
