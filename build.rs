use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only carry the game core and its tests
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega328P (Arduino Uno class board)
    println!("cargo:rustc-link-arg=-mmcu=atmega328p");

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    if env::var("PROFILE").map(|p| p == "debug").unwrap_or(false) {
        println!("cargo:rustc-cfg=feature=\"debug\"");
    }
}
