//! Reaction game firmware for an ATmega328P board
//!
//! The game core (`input`, `game`, `rng`) is plain `no_std` code that runs
//! and is tested on the host. `hal`, `drivers` and `application` only exist
//! when building for AVR.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod rng;

#[cfg(target_arch = "avr")]
pub mod application;
#[cfg(target_arch = "avr")]
pub mod drivers;
#[cfg(target_arch = "avr")]
pub mod hal;

pub use config::GameConfig;
pub use error::InputError;
pub use game::{Action, FeedbackSink, Mode, Outcome, RoundController, RoundState};
pub use input::{Button, InputSource, Level, PinInputs};
pub use rng::{RandomSource, XorShift32};
