//! CYTVII-B-E-1M-SK board wiring
//!
//! Pin assignments per the starter kit user guide (002-25314 Rev.*B):
//!
//! | Signal | Pin   | Package | Wiring                              |
//! |--------|-------|---------|-------------------------------------|
//! | SW1    | P7.0  | QFP-29  | input, pull-up, active-low          |
//! | LED1   | P19.0 | QFP-77  | output, strong drive, active-low    |
//!
//! Static data only; nothing here executes.

use lychnos_hal::{DriveMode, Level, PinId};

use crate::config::PinConfigEntry;
use crate::signal::SignalDef;

/// USER switch SW1
pub const SW1: PinId = PinId::new(7, 0);

/// USER LED1 (blue)
pub const LED1: PinId = PinId::new(19, 0);

/// Startup table, consumed once by `config::apply_startup_config`
pub const PIN_CONFIG: [PinConfigEntry; 2] = [
    // SW1: pull-up input, latch HIGH (released)
    PinConfigEntry::new(SW1, DriveMode::PullUp, Level::High),
    // LED1: strong output, init HIGH (off, active-low)
    PinConfigEntry::new(LED1, DriveMode::Strong, Level::High),
];

/// SW1 polarity: pressed shorts the pin to ground
pub const BUTTON: SignalDef = SignalDef::active_low(SW1);

/// LED1 polarity: driving LOW sinks current through the LED
pub const LED: SignalDef = SignalDef::active_low(LED1);
