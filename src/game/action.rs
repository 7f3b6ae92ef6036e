use crate::input::Button;
use crate::rng::RandomSource;

/// What the player is asked to do
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    PressA,
    PressB,
    RotateKnob,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::PressA, Action::PressB, Action::RotateKnob];

    /// Uniform pick over all actions
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        Self::ALL[rng.next_below(Self::ALL.len() as u32) as usize]
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Action::PressA => "Press button 1!",
            Action::PressB => "Press button 2!",
            Action::RotateKnob => "Rotate!",
        }
    }

    /// Button that performs this action, if it is a button action
    pub fn button(self) -> Option<Button> {
        match self {
            Action::PressA => Some(Button::Button1),
            Action::PressB => Some(Button::Button2),
            Action::RotateKnob => None,
        }
    }
}

impl ufmt::uDisplay for Action {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.prompt())
    }
}
