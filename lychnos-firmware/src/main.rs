//! Lychnos firmware entry point
//!
//! Startup sequence, in two phases:
//!
//! 1. Hardware initialisation - apply the board's pin table once.
//! 2. Scheduler loop - run the toggle runnable every 10 ms.
//!
//! The tick is a cycle-counted busy wait; swap in a SysTick or OS alarm
//! when this grows beyond one runnable. The core logic never sees timing,
//! so the loop body stays the same.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::info;
use {defmt_rtt as _, panic_probe as _};

use lychnos_core::board;
use lychnos_core::config::apply_startup_config;
use lychnos_core::signal::SignalIo;
use lychnos_core::toggle::EdgeToggle;
use lychnos_hal_cyt2b7::{DirectMmio, Gpio};

/// ~10 ms at the 48 MHz boot clock, one cycle per iteration
const TICK_CYCLES: u32 = 480_000;

#[entry]
fn main() -> ! {
    info!("Lychnos firmware starting...");

    let mut gpio = Gpio::new(DirectMmio);

    // Phase 1: pin configuration, before any other hardware access
    apply_startup_config(&mut gpio, &board::PIN_CONFIG);
    info!("Pins configured (SW1 pull-up, LED1 strong output)");

    let mut io = SignalIo::new(gpio, board::BUTTON, board::LED);
    let mut toggle = EdgeToggle::new();

    // Phase 2: 10 ms polling scheduler
    loop {
        cortex_m::asm::delay(TICK_CYCLES);
        if let Some(led) = toggle.run(&mut io) {
            info!("SW1 press edge: LED1 -> {}", led);
        }
    }
}
