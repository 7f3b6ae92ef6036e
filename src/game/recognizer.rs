use super::action::Action;
use super::events::GameEvent;
use super::feedback::FeedbackSink;
use crate::error::InputError;
use crate::input::{Button, Debouncer, InputSource, KnobGesture, KnobStep};

/// Decides per tick whether a given action has just been performed
pub struct ActionRecognizer {
    debouncer: Debouncer,
    knob: KnobGesture,
}

impl ActionRecognizer {
    pub fn new(debouncer: Debouncer, knob_baseline: u16) -> Self {
        Self {
            debouncer,
            knob: KnobGesture::new(knob_baseline),
        }
    }

    /// Re-arms the knob gesture for a freshly posed action
    pub fn pose<I: InputSource>(&mut self, inputs: &mut I) -> Result<(), InputError<I::Error>> {
        let baseline = inputs.knob_value()?;
        self.knob.arm(baseline);
        Ok(())
    }

    /// Fresh debounced press of `button`
    pub fn pressed<I: InputSource>(
        &mut self,
        inputs: &mut I,
        button: Button,
        now: u32,
    ) -> Result<bool, InputError<I::Error>> {
        let level = inputs.button_level(button)?;
        Ok(self.debouncer.poll(button, level, now))
    }

    pub fn completed<I, S>(
        &mut self,
        action: Action,
        inputs: &mut I,
        sink: &mut S,
        now: u32,
    ) -> Result<bool, InputError<I::Error>>
    where
        I: InputSource,
        S: FeedbackSink,
    {
        if let Some(button) = action.button() {
            return self.pressed(inputs, button, now);
        }

        let value = inputs.knob_value()?;
        let departed = self.knob.has_departed();
        match self.knob.update(value) {
            KnobStep::Hold => Ok(false),
            KnobStep::Departed(value) => {
                sink.record(&GameEvent::KnobDeparted(value));
                Ok(false)
            }
            KnobStep::Rotated { initial, value } => {
                // Leaving the band and reaching the far end can be one sample
                if !departed {
                    sink.record(&GameEvent::KnobDeparted(value));
                }
                sink.record(&GameEvent::KnobRotated { initial, value });
                Ok(true)
            }
        }
    }

    /// Any action other than `correct` completed this tick
    ///
    /// Stops sampling at the first wrong action found.
    pub fn wrong_action<I, S>(
        &mut self,
        correct: Action,
        inputs: &mut I,
        sink: &mut S,
        now: u32,
    ) -> Result<bool, InputError<I::Error>>
    where
        I: InputSource,
        S: FeedbackSink,
    {
        for action in Action::ALL {
            if action != correct && self.completed(action, inputs, sink, now)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn knob(&self) -> &KnobGesture {
        &self.knob
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tone;
    use crate::game::feedback::{Countdown, LedPattern};
    use crate::input::Level;
    use core::convert::Infallible;

    struct Board {
        b1: Level,
        b2: Level,
        knob: u16,
    }

    impl InputSource for Board {
        type Error = Infallible;

        fn button_level(&mut self, button: Button) -> Result<Level, InputError<Infallible>> {
            Ok(match button {
                Button::Button1 => self.b1,
                Button::Button2 => self.b2,
            })
        }

        fn knob_value(&mut self) -> Result<u16, InputError<Infallible>> {
            Ok(self.knob)
        }
    }

    #[derive(Default)]
    struct Log(Vec<GameEvent>);

    impl FeedbackSink for Log {
        fn show_menu(&mut self, _: &str, _: &str) {}
        fn show_prompt(&mut self, _: &str) {}
        fn show_score_line(&mut self, _: u16) {}
        fn show_acknowledgement(&mut self) {}
        fn show_countdown(&mut self, _: Countdown) {}
        fn play_tone(&mut self, _: Tone) {}
        fn set_indicator_leds(&mut self, _: LedPattern) {}

        fn record(&mut self, event: &GameEvent) {
            self.0.push(*event);
        }
    }

    fn board() -> Board {
        Board {
            b1: Level::High,
            b2: Level::High,
            knob: 512,
        }
    }

    #[test]
    fn button_action_needs_a_debounced_edge() {
        let mut rec = ActionRecognizer::new(Debouncer::default(), 512);
        let mut inputs = board();
        let mut log = Log::default();

        inputs.b1 = Level::Low;
        assert!(!rec.completed(Action::PressA, &mut inputs, &mut log, 0).unwrap());
        assert!(!rec.completed(Action::PressA, &mut inputs, &mut log, 50).unwrap());
        assert!(rec.completed(Action::PressA, &mut inputs, &mut log, 51).unwrap());
        assert!(!rec.completed(Action::PressA, &mut inputs, &mut log, 90).unwrap());
    }

    #[test]
    fn other_button_counts_as_wrong() {
        let mut rec = ActionRecognizer::new(Debouncer::default(), 512);
        let mut inputs = board();
        let mut log = Log::default();

        inputs.b2 = Level::Low;
        assert!(!rec.wrong_action(Action::PressA, &mut inputs, &mut log, 0).unwrap());
        assert!(rec.wrong_action(Action::PressA, &mut inputs, &mut log, 60).unwrap());
        assert!(!rec.wrong_action(Action::PressB, &mut inputs, &mut log, 120).unwrap());
    }

    #[test]
    fn knob_is_wrong_for_button_actions() {
        let mut rec = ActionRecognizer::new(Debouncer::default(), 300);
        let mut inputs = board();
        let mut log = Log::default();

        inputs.knob = 1000;
        assert!(rec.wrong_action(Action::PressB, &mut inputs, &mut log, 0).unwrap());
        assert_eq!(
            log.0,
            [
                GameEvent::KnobDeparted(1000),
                GameEvent::KnobRotated { initial: 300, value: 1000 }
            ]
        );
    }

    #[test]
    fn pose_takes_a_new_baseline() {
        let mut rec = ActionRecognizer::new(Debouncer::default(), 100);
        let mut inputs = board();
        let mut log = Log::default();

        inputs.knob = 950;
        assert!(rec.completed(Action::RotateKnob, &mut inputs, &mut log, 0).unwrap());
        // Still latched until the next action is posed
        assert!(rec.completed(Action::RotateKnob, &mut inputs, &mut log, 10).unwrap());

        rec.pose(&mut inputs).unwrap();
        assert_eq!(rec.knob().initial(), 950);
        assert!(!rec.completed(Action::RotateKnob, &mut inputs, &mut log, 20).unwrap());
        assert_eq!(log.0.last(), Some(&GameEvent::KnobDeparted(950)));
    }
}
