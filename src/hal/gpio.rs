use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Pin<PORT, P, MODE> {
    const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $port:ident, $ddr:ident, $pin:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::new()
            }

            /// Input with the internal pull-up enabled
            pub fn into_pull_up_input(self) -> Pin<$PORT, P, Input> {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::new()
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            #[inline]
            fn set_high(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Ok(())
            }

            #[inline]
            fn set_low(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Ok(())
            }
        }

        impl<const P: u8> InputPin for Pin<$PORT, P, Input> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Infallible> {
                Ok(unsafe { (*$PORT::ptr()).$pin.read().bits() & (1 << P) != 0 })
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Infallible> {
                self.is_high().map(|high| !high)
            }
        }
    };
}

impl_port!(PORTB, portb, ddrb, pinb);
impl_port!(PORTC, portc, ddrc, pinc);
impl_port!(PORTD, portd, ddrd, pind);

/// Arduino Uno wiring of the game board
pub mod board {
    use super::*;

    // Buttons on A1/A2, active low
    pub type BTN1 = Pin<PORTC, 1, Input>;
    pub type BTN2 = Pin<PORTC, 2, Input>;

    // Indicator LEDs on D3/D4
    pub type LED1 = Pin<PORTD, 3, Output>;
    pub type LED2 = Pin<PORTD, 4, Output>;

    /// Game pins, taking the ports proves nobody else drives them
    pub struct Pins {
        pub btn1: BTN1,
        pub btn2: BTN2,
        pub led1: LED1,
        pub led2: LED2,
    }

    impl Pins {
        pub fn new(_portc: PORTC, _portd: PORTD) -> Self {
            Self {
                btn1: Pin::<PORTC, 1, Output>::new().into_pull_up_input(),
                btn2: Pin::<PORTC, 2, Output>::new().into_pull_up_input(),
                led1: Pin::<PORTD, 3, Input>::new().into_output(),
                led2: Pin::<PORTD, 4, Input>::new().into_output(),
            }
        }
    }
}
