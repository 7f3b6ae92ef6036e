pub mod board_feedback;
pub mod indicator_leds;
pub mod serial_console;

pub use board_feedback::BoardFeedback;
pub use indicator_leds::IndicatorLeds;
pub use serial_console::SerialConsole;
