//! Input failure reporting

use crate::input::Button;

/// A hardware read that did not produce a value
///
/// `E` is the error type of the underlying HAL, `Infallible` on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputError<E> {
    Button(Button, E),
    Knob(E),
}

impl<E> InputError<E> {
    /// Unwraps the HAL error, dropping which input it came from
    pub fn into_inner(self) -> E {
        match self {
            InputError::Button(_, e) | InputError::Knob(e) => e,
        }
    }
}
