use super::action::Action;
use super::round::{Mode, Outcome};

/// Diagnostic record of something the game did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted(Mode),
    ActionPosed(Action),
    KnobDeparted(u16),
    KnobRotated { initial: u16, value: u16 },
    ActionCompleted { action: Action, score: u16 },
    RoundEnded { outcome: Outcome, score: u16 },
    AttractStarted,
}

impl ufmt::uDisplay for Mode {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        match self {
            Mode::Normal => f.write_str("normal"),
            Mode::Quick => f.write_str("quick"),
        }
    }
}

impl ufmt::uDisplay for Outcome {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.message())
    }
}

impl ufmt::uDisplay for GameEvent {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        match *self {
            GameEvent::RoundStarted(mode) => ufmt::uwrite!(f, "Round started: {}", mode),
            GameEvent::ActionPosed(action) => ufmt::uwrite!(f, "New action: {}", action),
            GameEvent::KnobDeparted(value) => ufmt::uwrite!(f, "Knob val: {}", value),
            GameEvent::KnobRotated { initial, value } => {
                ufmt::uwrite!(f, "Rotation complete: {} Final: {}", initial, value)
            }
            GameEvent::ActionCompleted { action, score } => {
                ufmt::uwrite!(f, "Done: {} score={}", action, score)
            }
            GameEvent::RoundEnded { outcome, score } => {
                ufmt::uwrite!(f, "Round over: {} score={}", outcome, score)
            }
            GameEvent::AttractStarted => f.write_str("Attract sequence"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(String);

    impl ufmt::uWrite for Line {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    fn render(event: GameEvent) -> String {
        let mut line = Line(String::new());
        ufmt::uwrite!(line, "{}", event).ok();
        line.0
    }

    #[test]
    fn events_render_as_log_lines() {
        assert_eq!(render(GameEvent::KnobDeparted(950)), "Knob val: 950");
        assert_eq!(
            render(GameEvent::KnobRotated { initial: 700, value: 42 }),
            "Rotation complete: 700 Final: 42"
        );
        assert_eq!(
            render(GameEvent::RoundEnded { outcome: Outcome::TooSlow, score: 3 }),
            "Round over: Too slow! score=3"
        );
        assert_eq!(render(GameEvent::RoundStarted(Mode::Quick)), "Round started: quick");
    }
}
