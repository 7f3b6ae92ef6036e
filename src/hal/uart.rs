use avr_device::atmega328p::USART0;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// (16_000_000 / (16 * 9600)) - 1 = 103
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

// UCSR0A data register empty flag
const UDRE0: u8 = 1 << 5;

/// Polled transmitter on USART0, 8N1
pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            // Set baud rate
            usart.ubrr0.write(|w| w.bits(UBRR));
            // Enable TX and RX
            usart.ucsr0b.write(|w| w.bits(0x18));
            // 8 data bits, no parity, 1 stop bit
            usart.ucsr0c.write(|w| w.bits(0x06));
        }
        Self { usart }
    }

    pub fn write_byte(&mut self, byte: u8) {
        while self.usart.ucsr0a.read().bits() & UDRE0 == 0 {}
        unsafe {
            self.usart.udr0.write(|w| w.bits(byte));
        }
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }
}
