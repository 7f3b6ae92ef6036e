//! Game feedback on the board
//!
//! The character display, the 7-segment digit and the buzzer are driven by
//! their own firmware. Here they get a text rendition on the serial console,
//! the indicator LEDs are driven directly.

use super::{IndicatorLeds, SerialConsole};
use crate::config::Tone;
use crate::game::{Countdown, FeedbackSink, GameEvent, LedPattern};

pub struct BoardFeedback {
    console: SerialConsole,
    leds: IndicatorLeds,
    countdown: Option<Countdown>,
}

impl BoardFeedback {
    pub fn new(console: SerialConsole, leds: IndicatorLeds) -> Self {
        Self {
            console,
            leds,
            countdown: None,
        }
    }
}

impl FeedbackSink for BoardFeedback {
    fn show_menu(&mut self, title: &str, hint: &str) {
        ufmt::uwrite!(self.console, "[LCD] {} | {}\r\n", title, hint).ok();
    }

    fn show_prompt(&mut self, text: &str) {
        ufmt::uwrite!(self.console, "[LCD] {}\r\n", text).ok();
    }

    fn show_score_line(&mut self, score: u16) {
        ufmt::uwrite!(self.console, "[LCD] Score: {}\r\n", score).ok();
    }

    fn show_acknowledgement(&mut self) {
        self.console.write_line("[LCD] OK!");
    }

    fn show_countdown(&mut self, countdown: Countdown) {
        // Called every tick while playing, only report changes
        if self.countdown == Some(countdown) {
            return;
        }
        self.countdown = Some(countdown);

        match countdown {
            Countdown::Digit(d) => ufmt::uwrite!(self.console, "[7SEG] {}\r\n", d).ok(),
            Countdown::Blank => ufmt::uwrite!(self.console, "[7SEG] -\r\n").ok(),
        };
    }

    fn play_tone(&mut self, tone: Tone) {
        ufmt::uwrite!(self.console, "[TONE] {}Hz {}ms\r\n", tone.freq_hz, tone.duration_ms).ok();
    }

    fn set_indicator_leds(&mut self, pattern: LedPattern) {
        self.leds.set_pattern(pattern);
    }

    fn record(&mut self, event: &GameEvent) {
        if cfg!(feature = "debug") {
            self.console.debug("game", event);
        }
    }
}
