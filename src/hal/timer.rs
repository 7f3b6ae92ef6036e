//! Millisecond clock on Timer0

use avr_device::atmega328p::TC0;
use avr_device::interrupt::{self, Mutex};
use core::cell::Cell;

use crate::config::CPU_FREQ_HZ;

const PRESCALER: u32 = 64;
const TIMER_COUNTS: u32 = CPU_FREQ_HZ / PRESCALER / 1000;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Free-running millisecond counter, wraps after ~49 days
pub struct Clock {
    _tc0: TC0,
}

impl Clock {
    /// Starts Timer0 in CTC mode firing once per millisecond
    ///
    /// Interrupts still have to be enabled globally afterwards.
    pub fn start(tc0: TC0) -> Self {
        unsafe {
            // CTC mode
            tc0.tccr0a.write(|w| w.bits(0x02));
            tc0.ocr0a.write(|w| w.bits((TIMER_COUNTS - 1) as u8));
            // Clock / 64
            tc0.tccr0b.write(|w| w.bits(0x03));
            // Compare match A interrupt
            tc0.timsk0.write(|w| w.bits(0x02));
        }

        interrupt::free(|cs| MILLIS.borrow(cs).set(0));
        Self { _tc0: tc0 }
    }

    #[inline]
    pub fn millis(&self) -> u32 {
        interrupt::free(|cs| MILLIS.borrow(cs).get())
    }

    /// Busy wait, only used before the game loop runs
    pub fn delay_ms(&self, ms: u32) {
        let start = self.millis();
        while self.millis().wrapping_sub(start) < ms {}
    }
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
    interrupt::free(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get().wrapping_add(1));
    });
}
