//! HelixLab - an interactive DNA vs. RNA classroom in the terminal
//!
//! This library provides the transcription and translation engine, the
//! helix geometry used by the 3D builder, the lesson content, quiz and
//! matching game, and the terminal UI that ties them together.

pub mod app;
pub mod config;
pub mod helix;
pub mod input;
pub mod lesson;
pub mod logging;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::{Action, App, Tab};
pub use helix::{build_helix, HelixAction, HelixGeometry, HelixSequence, PairTag};
pub use sequence::{transcribe, translate, Transcription};
