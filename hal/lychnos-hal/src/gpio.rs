//! GPIO access traits
//!
//! Split in two: [`DigitalIo`] is the runtime surface (safe to call at any
//! time after configuration), [`PinSetup`] is the one-time startup surface.
//! Chip drivers implement both over their register maps.

use crate::pin::{DriveMode, Level, PinId};

/// Runtime digital pin access
///
/// Implementations must confine a write to the addressed bit: pins sharing
/// the same output register are untouched (read-modify-write on one bit).
pub trait DigitalIo {
    /// Sample the current electrical state of the pin. No side effects.
    fn read(&self, id: PinId) -> Level;

    /// Drive the pin's output to `level`.
    fn write(&mut self, id: PinId, level: Level);

    /// Invert the pin and return the new level.
    ///
    /// Equivalent to `write(id, read(id).invert())`; implementations may
    /// combine the register accesses but must keep the observable result.
    fn flip(&mut self, id: PinId) -> Level {
        let next = self.read(id).invert();
        self.write(id, next);
        next
    }
}

/// One-time pin configuration
///
/// Both operations are idempotent: repeating a call with the same arguments
/// leaves the hardware state unchanged.
pub trait PinSetup {
    /// Route the pin to the GPIO function (as opposed to an alternate
    /// peripheral function).
    fn select_gpio(&mut self, id: PinId);

    /// Set the pin's electrical drive characteristic.
    fn set_drive_mode(&mut self, id: PinId, mode: DriveMode);
}
