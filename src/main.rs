#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
use reaction_game::{
    application::Application,
    drivers::{BoardFeedback, IndicatorLeds, SerialConsole},
    hal::{board::Pins, Adc, Clock, Knob, NoisePin, Uart},
    GameConfig, PinInputs, RoundController, XorShift32,
};

#[cfg(target_arch = "avr")]
const SEED_SAMPLES: usize = 16;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    let dp = avr_device::atmega328p::Peripherals::take().unwrap();

    let pins = Pins::new(dp.PORTC, dp.PORTD);
    let mut adc = Adc::new(dp.ADC);
    let clock = Clock::start(dp.TC0);
    let mut console = SerialConsole::new(Uart::new(dp.USART0));

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    console.write_line("Reaction game v0.1.0");

    // Seed once from a floating input, never from a game input
    let noise_pin = NoisePin::default();
    let mut noise = [0u16; SEED_SAMPLES];
    for sample in noise.iter_mut() {
        *sample = adc.sample(&noise_pin);
        clock.delay_ms(1);
    }
    let rng = XorShift32::from_noise(noise);

    let knob = Knob::default();
    let baseline = adc.sample(&knob);
    console.debug("Knob baseline", &baseline);

    let game = RoundController::new(GameConfig::default(), rng, baseline);
    let inputs = PinInputs::new(pins.btn1, pins.btn2, adc, knob);
    let feedback = BoardFeedback::new(console, IndicatorLeds::new(pins.led1, pins.led2));
    let mut app = Application::new(game, inputs, feedback);

    loop {
        app.update(clock.millis());
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
