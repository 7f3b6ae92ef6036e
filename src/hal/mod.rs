pub mod adc;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, AdcChannel, Knob, NoisePin};
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
pub use timer::Clock;
pub use uart::Uart;
