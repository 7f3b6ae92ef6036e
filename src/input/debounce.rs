use super::{Button, Level};
use crate::config::BUTTON_DEBOUNCE_MS;

#[derive(Copy, Clone, Debug)]
struct ChannelState {
    level: Level,
    changed_at: u32,
    latched: bool,
}

impl ChannelState {
    const fn new() -> Self {
        Self {
            level: Level::RELEASED,
            changed_at: 0,
            latched: false,
        }
    }
}

/// Turns noisy active-low button samples into one edge per press
///
/// A press is accepted once the line has been low for longer than the
/// debounce window. It then stays latched until the line reads high again,
/// so holding a button never repeats.
pub struct Debouncer {
    channels: [ChannelState; 2],
    window_ms: u32,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            channels: [ChannelState::new(); 2],
            window_ms,
        }
    }

    /// True on the one poll where a press is accepted
    pub fn poll(&mut self, button: Button, level: Level, now: u32) -> bool {
        let ch = &mut self.channels[button.index()];

        if level != ch.level {
            ch.changed_at = now;
            ch.level = level;
        }

        if level == Level::RELEASED {
            ch.latched = false;
            return false;
        }

        if !ch.latched && now.wrapping_sub(ch.changed_at) > self.window_ms {
            ch.latched = true;
            return true;
        }

        false
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(BUTTON_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(db: &mut Debouncer, samples: &[(u32, Level)]) -> usize {
        samples
            .iter()
            .filter(|&&(t, level)| db.poll(Button::Button1, level, t))
            .count()
    }

    #[test]
    fn clean_press_emits_once_after_window() {
        let mut db = Debouncer::default();
        assert!(!db.poll(Button::Button1, Level::Low, 1000));
        assert!(!db.poll(Button::Button1, Level::Low, 1050));
        assert!(db.poll(Button::Button1, Level::Low, 1051));
        assert!(!db.poll(Button::Button1, Level::Low, 1052));
    }

    #[test]
    fn holding_never_repeats() {
        let mut db = Debouncer::default();
        let hold: Vec<_> = (0..200).map(|i| (500 + i * 10, Level::Low)).collect();
        assert_eq!(feed(&mut db, &hold), 1);
    }

    #[test]
    fn bounce_restarts_window() {
        let mut db = Debouncer::default();
        let samples = [
            (100, Level::Low),
            (120, Level::High),
            (130, Level::Low),
            (170, Level::High),
            (175, Level::Low),
            (220, Level::Low),
            (226, Level::Low),
        ];
        let hits: Vec<_> = samples
            .iter()
            .map(|&(t, l)| db.poll(Button::Button1, l, t))
            .collect();
        assert_eq!(hits, [false, false, false, false, false, false, true]);
    }

    #[test]
    fn short_pulses_are_ignored() {
        let mut db = Debouncer::default();
        let mut samples = Vec::new();
        for n in 0..20u32 {
            let t = 1_000 + n * 100;
            samples.push((t, Level::Low));
            samples.push((t + 40, Level::Low));
            samples.push((t + 45, Level::High));
        }
        assert_eq!(feed(&mut db, &samples), 0);
    }

    #[test]
    fn release_rearms_for_next_press() {
        let mut db = Debouncer::default();
        let samples = [
            (0, Level::Low),
            (60, Level::Low),
            (200, Level::High),
            (300, Level::Low),
            (351, Level::Low),
            (400, Level::Low),
        ];
        assert_eq!(feed(&mut db, &samples), 2);
    }

    #[test]
    fn channels_are_independent() {
        let mut db = Debouncer::default();
        db.poll(Button::Button1, Level::Low, 0);
        db.poll(Button::Button2, Level::Low, 40);
        assert!(db.poll(Button::Button1, Level::Low, 60));
        assert!(!db.poll(Button::Button2, Level::Low, 60));
        assert!(db.poll(Button::Button2, Level::Low, 91));
    }

    #[test]
    fn survives_clock_wrap() {
        let mut db = Debouncer::default();
        let start = u32::MAX - 20;
        assert!(!db.poll(Button::Button2, Level::Low, start));
        assert!(db.poll(Button::Button2, Level::Low, start.wrapping_add(51)));
    }
}
