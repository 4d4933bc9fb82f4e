//! Edge-triggered LED toggle runnable
//!
//! Two bits of state: the LED's logical state and the button state sampled
//! on the previous period. Invoked once per scheduling period (10 ms on the
//! reference board); the LED flips only on a released→pressed edge, so a
//! held button toggles exactly once.

use lychnos_hal::DigitalIo;

use crate::signal::{Signal, SignalIo};

/// The toggle state machine
///
/// Owned by whatever drives the periodic loop; independent instances can
/// coexist (each owns its own two bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeToggle {
    led: Signal,
    prev_button: Signal,
}

impl Default for EdgeToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeToggle {
    /// Initial state: LED off, button treated as released
    pub const fn new() -> Self {
        Self {
            led: Signal::Inactive,
            prev_button: Signal::Inactive,
        }
    }

    /// Current LED logical state
    pub const fn led_state(&self) -> Signal {
        self.led
    }

    /// Advance the state machine by one sample.
    ///
    /// Returns the new LED state when a released→pressed edge was observed,
    /// `None` otherwise. Pure transition; the caller performs the write.
    pub fn observe(&mut self, button: Signal) -> Option<Signal> {
        let edge = button == Signal::Active && self.prev_button == Signal::Inactive;
        self.prev_button = button;

        if edge {
            self.led = self.led.toggled();
            Some(self.led)
        } else {
            None
        }
    }

    /// One periodic invocation: sample the button, toggle the LED on a
    /// press edge.
    ///
    /// Returns the new LED state when this invocation toggled, `None`
    /// otherwise, so the caller can report the event.
    pub fn run<D: DigitalIo>(&mut self, io: &mut SignalIo<D>) -> Option<Signal> {
        let button = io.read_button();
        let toggled = self.observe(button);
        if let Some(led) = toggled {
            io.write_led(led);
        }
        toggled
    }
}
