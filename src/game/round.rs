//! Round state machine
//!
//! Idle waits for a mode button, Playing poses random actions and scores
//! them until the player is too slow or does the wrong thing. Feedback
//! pauses are phases of their own so `tick` never blocks.

use super::action::Action;
use super::events::GameEvent;
use super::feedback::{Countdown, FeedbackSink, LedPattern};
use super::recognizer::ActionRecognizer;
use crate::config::{
    GameConfig, ATTRACT_MELODY, ATTRACT_NOTE_GAP_MS, GAME_OVER_TONE, SUCCESS_TONE,
};
use crate::error::InputError;
use crate::input::{Button, Debouncer, InputSource};
use crate::rng::RandomSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Fixed budget per action, reset after every success
    Normal,
    /// One budget for the whole session
    Quick,
}

/// How a round ended
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    TimeExpired,
    TooSlow,
    WrongAction,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::TimeExpired => "Time expired!",
            Outcome::TooSlow => "Too slow!",
            Outcome::WrongAction => "Wrong action!",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    Playing,
}

/// Fine-grained position in the state machine
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    /// Normal mode "OK" pause before the next action
    Acknowledging { since: u32 },
    /// Game over screen, back to Idle when it times out
    GameOver { since: u32 },
}

#[derive(Copy, Clone, Debug)]
struct AttractPlayback {
    note: usize,
    note_started: u32,
}

pub struct RoundController<R> {
    config: GameConfig,
    rng: R,
    recognizer: ActionRecognizer,
    phase: Phase,
    mode: Mode,
    action: Action,
    score: u16,
    action_started: u32,
    session_started: u32,
    last_attract: u32,
    attract: Option<AttractPlayback>,
    last_outcome: Option<Outcome>,
}

impl<R: RandomSource> RoundController<R> {
    /// `knob_baseline` is the knob reading at power-up
    pub fn new(config: GameConfig, rng: R, knob_baseline: u16) -> Self {
        Self {
            recognizer: ActionRecognizer::new(Debouncer::new(config.debounce_ms), knob_baseline),
            config,
            rng,
            phase: Phase::Idle,
            mode: Mode::Normal,
            action: Action::PressA,
            score: 0,
            action_started: 0,
            session_started: 0,
            last_attract: 0,
            attract: None,
            last_outcome: None,
        }
    }

    /// Puts the mode menu up, call once after power-up
    pub fn boot<S: FeedbackSink>(&mut self, sink: &mut S) {
        sink.show_menu("Choose mode:", "B1:Norm B2:Quick");
        sink.show_countdown(Countdown::Blank);
        sink.set_indicator_leds(LedPattern::OFF);
    }

    /// One pass of the control loop
    pub fn tick<I, S>(&mut self, inputs: &mut I, sink: &mut S, now: u32) -> Result<(), InputError<I::Error>>
    where
        I: InputSource,
        S: FeedbackSink,
    {
        match self.phase {
            Phase::Idle => self.tick_idle(inputs, sink, now),
            Phase::Playing => self.tick_playing(inputs, sink, now),
            Phase::Acknowledging { since } => {
                if now.wrapping_sub(since) >= self.config.ack_pause_ms {
                    self.phase = Phase::Playing;
                    self.pose(inputs, sink, now)?;
                }
                Ok(())
            }
            Phase::GameOver { since } => {
                if now.wrapping_sub(since) >= self.config.game_over_pause_ms {
                    self.phase = Phase::Idle;
                }
                Ok(())
            }
        }
    }

    fn tick_idle<I, S>(&mut self, inputs: &mut I, sink: &mut S, now: u32) -> Result<(), InputError<I::Error>>
    where
        I: InputSource,
        S: FeedbackSink,
    {
        match self.attract {
            Some(playback) => self.step_attract(playback, sink, now),
            None if now.wrapping_sub(self.last_attract) > self.config.attract_interval_ms => {
                sink.record(&GameEvent::AttractStarted);
                self.play_attract_note(0, sink, now);
            }
            None => {}
        }

        // Both buttons are sampled every tick; quick wins a tie
        let normal = self.recognizer.pressed(inputs, Button::Button1, now)?;
        let quick = self.recognizer.pressed(inputs, Button::Button2, now)?;

        if quick {
            self.start_round(Mode::Quick, inputs, sink, now)
        } else if normal {
            self.start_round(Mode::Normal, inputs, sink, now)
        } else {
            Ok(())
        }
    }

    fn tick_playing<I, S>(&mut self, inputs: &mut I, sink: &mut S, now: u32) -> Result<(), InputError<I::Error>>
    where
        I: InputSource,
        S: FeedbackSink,
    {
        let budget = self.budget();
        let elapsed = now.wrapping_sub(self.clock_start());
        sink.show_countdown(Countdown::from_remaining_ms(budget.saturating_sub(elapsed)));

        if elapsed >= budget {
            let outcome = match self.mode {
                Mode::Quick => Outcome::TimeExpired,
                Mode::Normal => Outcome::TooSlow,
            };
            self.end_round(outcome, sink, now);
            return Ok(());
        }

        // Wrong input beats right input on the same tick
        if self.recognizer.wrong_action(self.action, inputs, sink, now)? {
            self.end_round(Outcome::WrongAction, sink, now);
            return Ok(());
        }

        if self.recognizer.completed(self.action, inputs, sink, now)? {
            self.score = self.score.saturating_add(1);
            sink.record(&GameEvent::ActionCompleted {
                action: self.action,
                score: self.score,
            });

            match self.mode {
                Mode::Quick => {
                    sink.play_tone(SUCCESS_TONE);
                    self.pose(inputs, sink, now)?;
                }
                Mode::Normal => {
                    sink.show_acknowledgement();
                    sink.play_tone(SUCCESS_TONE);
                    self.phase = Phase::Acknowledging { since: now };
                }
            }
        }

        Ok(())
    }

    fn start_round<I, S>(&mut self, mode: Mode, inputs: &mut I, sink: &mut S, now: u32) -> Result<(), InputError<I::Error>>
    where
        I: InputSource,
        S: FeedbackSink,
    {
        if self.attract.take().is_some() {
            sink.set_indicator_leds(LedPattern::OFF);
            self.last_attract = now;
        }

        self.score = 0;
        self.mode = mode;
        self.session_started = now;
        self.last_outcome = None;
        self.phase = Phase::Playing;
        sink.record(&GameEvent::RoundStarted(mode));

        self.pose(inputs, sink, now)
    }

    /// Picks and announces the next action
    fn pose<I, S>(&mut self, inputs: &mut I, sink: &mut S, now: u32) -> Result<(), InputError<I::Error>>
    where
        I: InputSource,
        S: FeedbackSink,
    {
        self.action = Action::random(&mut self.rng);
        self.recognizer.pose(inputs)?;

        sink.show_prompt(self.action.prompt());
        sink.show_score_line(self.score);

        if self.mode == Mode::Normal {
            self.action_started = now;
        }

        sink.record(&GameEvent::ActionPosed(self.action));
        Ok(())
    }

    fn end_round<S: FeedbackSink>(&mut self, outcome: Outcome, sink: &mut S, now: u32) {
        sink.show_prompt(outcome.message());
        sink.show_score_line(self.score);
        sink.show_countdown(Countdown::Blank);
        sink.play_tone(GAME_OVER_TONE);
        sink.record(&GameEvent::RoundEnded {
            outcome,
            score: self.score,
        });

        self.last_outcome = Some(outcome);
        self.phase = Phase::GameOver { since: now };
    }

    fn play_attract_note<S: FeedbackSink>(&mut self, note: usize, sink: &mut S, now: u32) {
        let pattern = if note % 2 == 0 {
            LedPattern::LED1
        } else {
            LedPattern::LED2
        };
        sink.set_indicator_leds(pattern);
        sink.play_tone(ATTRACT_MELODY[note]);
        self.attract = Some(AttractPlayback {
            note,
            note_started: now,
        });
    }

    fn step_attract<S: FeedbackSink>(&mut self, playback: AttractPlayback, sink: &mut S, now: u32) {
        let length = u32::from(ATTRACT_MELODY[playback.note].duration_ms) + ATTRACT_NOTE_GAP_MS;
        if now.wrapping_sub(playback.note_started) < length {
            return;
        }

        let next = playback.note + 1;
        if next < ATTRACT_MELODY.len() {
            self.play_attract_note(next, sink, now);
        } else {
            sink.set_indicator_leds(LedPattern::OFF);
            self.attract = None;
            self.last_attract = now;
        }
    }

    fn budget(&self) -> u32 {
        match self.mode {
            Mode::Normal => self.config.normal_action_ms,
            Mode::Quick => self.config.quick_session_ms,
        }
    }

    fn clock_start(&self) -> u32 {
        match self.mode {
            Mode::Normal => self.action_started,
            Mode::Quick => self.session_started,
        }
    }

    pub fn state(&self) -> RoundState {
        match self.phase {
            Phase::Playing | Phase::Acknowledging { .. } => RoundState::Playing,
            Phase::Idle | Phase::GameOver { .. } => RoundState::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_action(&self) -> Action {
        self.action
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Time left on the running clock, `None` outside active play
    pub fn remaining_ms(&self, now: u32) -> Option<u32> {
        match self.phase {
            Phase::Playing => Some(self.budget().saturating_sub(now.wrapping_sub(self.clock_start()))),
            _ => None,
        }
    }

    pub fn is_attract_playing(&self) -> bool {
        self.attract.is_some()
    }

    pub fn recognizer(&self) -> &ActionRecognizer {
        &self.recognizer
    }
}
