//! Board glue: owns the game and feeds it the real inputs

use crate::drivers::BoardFeedback;
use crate::game::RoundController;
use crate::hal::board::{BTN1, BTN2};
use crate::hal::{Adc, Knob};
use crate::input::PinInputs;
use crate::rng::XorShift32;

pub type BoardInputs = PinInputs<BTN1, BTN2, Adc, Adc, Knob>;

/// Main application state and logic
pub struct Application {
    game: RoundController<XorShift32>,
    inputs: BoardInputs,
    feedback: BoardFeedback,
}

impl Application {
    pub fn new(game: RoundController<XorShift32>, inputs: BoardInputs, feedback: BoardFeedback) -> Self {
        let mut app = Self {
            game,
            inputs,
            feedback,
        };
        app.game.boot(&mut app.feedback);
        app
    }

    /// One pass of the main loop
    pub fn update(&mut self, now: u32) {
        if let Err(e) = self.game.tick(&mut self.inputs, &mut self.feedback, now) {
            // Board pins and the ADC cannot fail
            match e.into_inner() {}
        }
    }
}
