//! Pin vocabulary types
//!
//! Shared by every layer that names a pin. These are plain value types;
//! nothing here touches hardware.

/// One physical pin, addressed as (port, pin-within-port).
///
/// The pin index is a 4-bit field (`0..=15`); the CYT2B75XX register map
/// strides ports up to index 31. An out-of-range index is a programming
/// error: the set of pins this firmware touches is known at compile time,
/// so the constructor debug-asserts instead of returning a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    port: u8,
    pin: u8,
}

impl PinId {
    /// Create a new pin identifier
    pub const fn new(port: u8, pin: u8) -> Self {
        debug_assert!(port <= 0x1F && pin <= 0x0F);
        Self { port, pin }
    }

    /// GPIO port index
    pub const fn port(self) -> u8 {
        self.port
    }

    /// Pin index within the port
    pub const fn pin(self) -> u8 {
        self.pin
    }
}

/// Electrical level of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// The opposite level
    pub const fn invert(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        matches!(level, Level::High)
    }
}

/// Electrical drive mode of a pin
///
/// Discriminants are the CYT2B75XX PRT_PC 3-bit field values, so the
/// register driver can use them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DriveMode {
    /// High-impedance input, no pull resistor
    HighZ = 0x0,
    /// Resistive pull-up input
    PullUp = 0x2,
    /// Resistive pull-down input
    PullDown = 0x3,
    /// Strong push-pull output
    Strong = 0x6,
}

impl DriveMode {
    /// Raw PRT_PC field value
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
