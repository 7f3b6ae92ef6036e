//! Configuration constants for the reaction game firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Knob readings below this leave the neutral band on the low side
pub const KNOB_LOW: u16 = 100;

/// Knob readings above this leave the neutral band on the high side
pub const KNOB_HIGH: u16 = 900;

/// Center of the 10-bit knob range, decides which way a rotation must go
pub const KNOB_CENTER: u16 = 512;

/// Per-action budget in normal mode
pub const NORMAL_ACTION_MS: u32 = 5_000;

/// Whole-session budget in quick mode
pub const QUICK_SESSION_MS: u32 = 10_000;

/// Idle time between two attract sequences
pub const ATTRACT_INTERVAL_MS: u32 = 15_000;

/// "OK" acknowledgement pause in normal mode
pub const ACK_PAUSE_MS: u32 = 600;

/// Game over screen hold time
pub const GAME_OVER_PAUSE_MS: u32 = 2_000;

/// Silence appended after every attract note
pub const ATTRACT_NOTE_GAP_MS: u32 = 30;

/// Success beep
pub const SUCCESS_TONE: Tone = Tone { freq_hz: 800, duration_ms: 50 };

/// Descending game over tone
pub const GAME_OVER_TONE: Tone = Tone { freq_hz: 250, duration_ms: 500 };

/// Idle attract melody
pub const ATTRACT_MELODY: [Tone; 16] = [
    Tone { freq_hz: 523, duration_ms: 120 },
    Tone { freq_hz: 659, duration_ms: 120 },
    Tone { freq_hz: 784, duration_ms: 120 },
    Tone { freq_hz: 659, duration_ms: 120 },
    Tone { freq_hz: 523, duration_ms: 200 },
    Tone { freq_hz: 784, duration_ms: 200 },
    Tone { freq_hz: 659, duration_ms: 120 },
    Tone { freq_hz: 523, duration_ms: 120 },
    Tone { freq_hz: 392, duration_ms: 120 },
    Tone { freq_hz: 440, duration_ms: 200 },
    Tone { freq_hz: 392, duration_ms: 120 },
    Tone { freq_hz: 330, duration_ms: 120 },
    Tone { freq_hz: 440, duration_ms: 200 },
    Tone { freq_hz: 392, duration_ms: 120 },
    Tone { freq_hz: 330, duration_ms: 120 },
    Tone { freq_hz: 262, duration_ms: 200 },
];

/// A buzzer note
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

/// Timing knobs of one game, defaults match the constants above
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub debounce_ms: u32,
    pub normal_action_ms: u32,
    pub quick_session_ms: u32,
    pub attract_interval_ms: u32,
    pub ack_pause_ms: u32,
    pub game_over_pause_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            normal_action_ms: NORMAL_ACTION_MS,
            quick_session_ms: QUICK_SESSION_MS,
            attract_interval_ms: ATTRACT_INTERVAL_MS,
            ack_pause_ms: ACK_PAUSE_MS,
            game_over_pause_ms: GAME_OVER_PAUSE_MS,
        }
    }
}
