use avr_device::atmega328p::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

/// Single-ended input channel marker, `N` is the mux value
#[derive(Clone, Copy, Debug, Default)]
pub struct AdcChannel<const N: u8>;

/// Knob wiper on A0
pub type Knob = AdcChannel<0>;

/// Unconnected line used as a noise source for the RNG seed
pub type NoisePin = AdcChannel<4>;

impl<const N: u8> Channel<Adc> for AdcChannel<N> {
    type ID = u8;

    fn channel() -> u8 {
        N
    }
}

pub struct Adc {
    adc: ADC,
}

impl Adc {
    pub fn new(adc: ADC) -> Self {
        unsafe {
            // Enable ADC, prescaler div128 (125kHz @ 16MHz)
            adc.adcsra.write(|w| w.bits(0x87));
            // Reference voltage = AVCC
            adc.admux.write(|w| w.bits(0x40));
        }
        Self { adc }
    }

    /// Blocking 10-bit conversion
    pub fn read_channel(&mut self, channel: u8) -> u16 {
        unsafe {
            // Select channel
            self.adc
                .admux
                .modify(|r, w| w.bits((r.bits() & 0xF0) | (channel & 0x0F)));

            // Start conversion
            self.adc.adcsra.modify(|r, w| w.bits(r.bits() | 0x40));
        }

        // Wait for completion
        while self.adc.adcsra.read().bits() & 0x40 != 0 {}

        self.adc.adc.read().bits()
    }

    pub fn sample<const N: u8>(&mut self, _channel: &AdcChannel<N>) -> u16 {
        self.read_channel(N)
    }
}

impl<PIN> OneShot<Adc, u16, PIN> for Adc
where
    PIN: Channel<Adc, ID = u8>,
{
    type Error = Infallible;

    fn read(&mut self, _pin: &mut PIN) -> nb::Result<u16, Infallible> {
        Ok(self.read_channel(PIN::channel()))
    }
}
