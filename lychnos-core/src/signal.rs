//! Logical signal adapter
//!
//! Maps electrical pin levels to polarity-independent signal states. This
//! module is the single place that knows the board wires both the button
//! and the LED active-low; everything above it deals in [`Signal`] only.

use lychnos_hal::{DigitalIo, Level, PinId};

/// Polarity-independent signal state
///
/// Button: `Active` = pressed. LED: `Active` = lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    Inactive,
    Active,
}

impl Signal {
    /// The opposite state
    pub const fn toggled(self) -> Self {
        match self {
            Signal::Inactive => Signal::Active,
            Signal::Active => Signal::Inactive,
        }
    }
}

/// One named signal: a pin plus its polarity rule
///
/// Adding a third signal to the board is one more of these, not a new type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalDef {
    pin: PinId,
    /// Electrical level meaning `Signal::Active`
    active_level: Level,
}

impl SignalDef {
    pub const fn new(pin: PinId, active_level: Level) -> Self {
        Self { pin, active_level }
    }

    /// An active-low signal (asserted = electrical LOW)
    pub const fn active_low(pin: PinId) -> Self {
        Self::new(pin, Level::Low)
    }

    pub const fn pin(self) -> PinId {
        self.pin
    }

    /// Signal state corresponding to an electrical level
    fn signal_for(self, level: Level) -> Signal {
        if level == self.active_level {
            Signal::Active
        } else {
            Signal::Inactive
        }
    }

    /// Electrical level realizing a signal state
    fn level_for(self, signal: Signal) -> Level {
        match signal {
            Signal::Active => self.active_level,
            Signal::Inactive => self.active_level.invert(),
        }
    }
}

/// The board's logical I/O surface: one button in, one LED out
///
/// Stateless beyond owning the driver; each call is a pure function of the
/// hardware.
pub struct SignalIo<D> {
    pub(crate) driver: D,
    button: SignalDef,
    led: SignalDef,
}

impl<D: DigitalIo> SignalIo<D> {
    pub fn new(driver: D, button: SignalDef, led: SignalDef) -> Self {
        Self {
            driver,
            button,
            led,
        }
    }

    /// Logical state of the button (`Active` = pressed)
    pub fn read_button(&self) -> Signal {
        self.button.signal_for(self.driver.read(self.button.pin))
    }

    /// Drive the LED to a logical state (`Active` = lit)
    pub fn write_led(&mut self, state: Signal) {
        self.driver.write(self.led.pin, self.led.level_for(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock driver exposing raw pin levels for inspection
    struct MockPins {
        button_level: Level,
        led_level: Level,
    }

    const BUTTON_PIN: PinId = PinId::new(7, 0);
    const LED_PIN: PinId = PinId::new(19, 0);

    impl DigitalIo for MockPins {
        fn read(&self, id: PinId) -> Level {
            if id == BUTTON_PIN {
                self.button_level
            } else {
                self.led_level
            }
        }

        fn write(&mut self, id: PinId, level: Level) {
            if id == BUTTON_PIN {
                self.button_level = level;
            } else {
                self.led_level = level;
            }
        }
    }

    fn active_low_io(button_level: Level) -> SignalIo<MockPins> {
        SignalIo::new(
            MockPins {
                button_level,
                led_level: Level::High,
            },
            SignalDef::active_low(BUTTON_PIN),
            SignalDef::active_low(LED_PIN),
        )
    }

    #[test]
    fn test_button_active_exactly_when_pin_low() {
        assert_eq!(active_low_io(Level::Low).read_button(), Signal::Active);
        assert_eq!(active_low_io(Level::High).read_button(), Signal::Inactive);
    }

    #[test]
    fn test_led_active_drives_pin_low() {
        let mut io = active_low_io(Level::High);

        io.write_led(Signal::Active);
        assert_eq!(io.driver.led_level, Level::Low);

        io.write_led(Signal::Inactive);
        assert_eq!(io.driver.led_level, Level::High);
    }

    #[test]
    fn test_active_high_polarity() {
        // The adapter is data-driven; an active-high wiring is just a
        // different SignalDef, no new code path.
        let def = SignalDef::new(LED_PIN, Level::High);
        assert_eq!(def.level_for(Signal::Active), Level::High);
        assert_eq!(def.signal_for(Level::High), Signal::Active);
        assert_eq!(def.signal_for(Level::Low), Signal::Inactive);
    }

    #[test]
    fn test_signal_toggled() {
        assert_eq!(Signal::Inactive.toggled(), Signal::Active);
        assert_eq!(Signal::Active.toggled(), Signal::Inactive);
    }
}
