//! Reaction game logic, independent of the board

pub mod action;
pub mod events;
pub mod feedback;
pub mod recognizer;
pub mod round;

pub use action::Action;
pub use events::GameEvent;
pub use feedback::{Countdown, FeedbackSink, LedPattern};
pub use recognizer::ActionRecognizer;
pub use round::{Mode, Outcome, Phase, RoundController, RoundState};
