//! Side effects the game asks the board for

use super::events::GameEvent;
use crate::config::Tone;

/// What the single-digit display shows
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Countdown {
    Digit(u8),
    Blank,
}

impl Countdown {
    /// Whole seconds left, blank when that does not fit one digit
    pub fn from_remaining_ms(remaining_ms: u32) -> Self {
        match remaining_ms / 1000 {
            s @ 0..=9 => Countdown::Digit(s as u8),
            _ => Countdown::Blank,
        }
    }
}

/// Indicator LED bitmask
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct LedPattern(pub u8);

impl LedPattern {
    pub const OFF: LedPattern = LedPattern(0b00);
    pub const LED1: LedPattern = LedPattern(0b01);
    pub const LED2: LedPattern = LedPattern(0b10);

    #[inline]
    pub fn is_on(self, led: u8) -> bool {
        self.0 & (1 << led) != 0
    }
}

/// Display, buzzer and LEDs as seen from the game
///
/// Every call is a fire-and-forget command. `record` carries diagnostics
/// and is ignored unless the board wants a log.
pub trait FeedbackSink {
    /// Clears the screen and writes the two menu lines
    fn show_menu(&mut self, title: &str, hint: &str);

    /// Clears the screen and writes `text` on the first line
    fn show_prompt(&mut self, text: &str);

    /// Writes "Score: N" on the second line
    fn show_score_line(&mut self, score: u16);

    /// Appends the " OK!" marker after the score
    fn show_acknowledgement(&mut self);

    fn show_countdown(&mut self, countdown: Countdown);

    fn play_tone(&mut self, tone: Tone);

    fn set_indicator_leds(&mut self, pattern: LedPattern);

    fn record(&mut self, _event: &GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_floors_to_whole_seconds() {
        assert_eq!(Countdown::from_remaining_ms(4999), Countdown::Digit(4));
        assert_eq!(Countdown::from_remaining_ms(5000), Countdown::Digit(5));
        assert_eq!(Countdown::from_remaining_ms(999), Countdown::Digit(0));
        assert_eq!(Countdown::from_remaining_ms(0), Countdown::Digit(0));
    }

    #[test]
    fn countdown_blanks_past_nine() {
        assert_eq!(Countdown::from_remaining_ms(9999), Countdown::Digit(9));
        assert_eq!(Countdown::from_remaining_ms(10_000), Countdown::Blank);
    }

    #[test]
    fn led_bits() {
        assert!(LedPattern::LED1.is_on(0));
        assert!(!LedPattern::LED1.is_on(1));
        assert!(LedPattern::LED2.is_on(1));
        assert!(!LedPattern::OFF.is_on(0));
    }
}
