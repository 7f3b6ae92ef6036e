//! Player input: buttons, the knob and the debouncing on top of them

pub mod debounce;
pub mod knob;

pub use debounce::Debouncer;
pub use knob::{KnobGesture, KnobStep};

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::digital::v2::InputPin;

use crate::error::InputError;

/// The two push buttons, wired active low with pull-ups
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Button1,
    Button2,
}

impl Button {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Button::Button1 => 0,
            Button::Button2 => 1,
        }
    }
}

impl ufmt::uDisplay for Button {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        match self {
            Button::Button1 => f.write_str("B1"),
            Button::Button2 => f.write_str("B2"),
        }
    }
}

/// Raw logic level of a digital line
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Buttons pull the line low when pressed
    pub const PRESSED: Level = Level::Low;
    pub const RELEASED: Level = Level::High;
}

/// Where raw samples come from, polled once per tick
pub trait InputSource {
    type Error;

    fn button_level(&mut self, button: Button) -> Result<Level, InputError<Self::Error>>;

    /// 10-bit knob reading, 0..=1023
    fn knob_value(&mut self) -> Result<u16, InputError<Self::Error>>;
}

/// `InputSource` over embedded-hal pins and a one-shot ADC channel
pub struct PinInputs<B1, B2, A, ADC, KNOB> {
    button1: B1,
    button2: B2,
    adc: A,
    knob: KNOB,
    _adc: PhantomData<ADC>,
}

impl<B1, B2, A, ADC, KNOB> PinInputs<B1, B2, A, ADC, KNOB> {
    pub fn new(button1: B1, button2: B2, adc: A, knob: KNOB) -> Self {
        Self {
            button1,
            button2,
            adc,
            knob,
            _adc: PhantomData,
        }
    }

    /// Gives the pins and the converter back
    pub fn release(self) -> (B1, B2, A, KNOB) {
        (self.button1, self.button2, self.adc, self.knob)
    }
}

impl<B1, B2, A, ADC, KNOB, E> InputSource for PinInputs<B1, B2, A, ADC, KNOB>
where
    B1: InputPin<Error = E>,
    B2: InputPin<Error = E>,
    A: OneShot<ADC, u16, KNOB, Error = E>,
    KNOB: Channel<ADC>,
{
    type Error = E;

    fn button_level(&mut self, button: Button) -> Result<Level, InputError<E>> {
        let low = match button {
            Button::Button1 => self.button1.is_low(),
            Button::Button2 => self.button2.is_low(),
        }
        .map_err(|e| InputError::Button(button, e))?;

        Ok(if low { Level::Low } else { Level::High })
    }

    fn knob_value(&mut self) -> Result<u16, InputError<E>> {
        nb::block!(self.adc.read(&mut self.knob)).map_err(InputError::Knob)
    }
}
