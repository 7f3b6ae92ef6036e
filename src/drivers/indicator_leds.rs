use crate::game::LedPattern;
use crate::hal::board::{LED1, LED2};
use embedded_hal::digital::v2::OutputPin;

/// The two indicator LEDs next to the buttons
pub struct IndicatorLeds {
    led1: LED1,
    led2: LED2,
}

impl IndicatorLeds {
    pub fn new(led1: LED1, led2: LED2) -> Self {
        let mut leds = Self { led1, led2 };
        leds.set_pattern(LedPattern::OFF);
        leds
    }

    pub fn set_pattern(&mut self, pattern: LedPattern) {
        let led1 = if pattern.is_on(0) {
            self.led1.set_high()
        } else {
            self.led1.set_low()
        };
        let led2 = if pattern.is_on(1) {
            self.led2.set_high()
        } else {
            self.led2.set_low()
        };
        if let Err(e) = led1.and(led2) {
            // Board pins cannot fail
            match e {}
        }
    }
}
