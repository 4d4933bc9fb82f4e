//! Startup pin configuration
//!
//! An ordered, immutable table of pin setups applied exactly once before
//! the control loop starts. Per entry the order is fixed: route the pin to
//! GPIO first, latch its initial level second, set the drive mode last —
//! the initial level must be in the output latch before a drive mode starts
//! realizing it electrically, or the external circuit can glitch.

use lychnos_hal::{DigitalIo, DriveMode, Level, PinId, PinSetup};

/// One row of the startup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfigEntry {
    pub pin: PinId,
    pub drive_mode: DriveMode,
    pub init_level: Level,
}

impl PinConfigEntry {
    pub const fn new(pin: PinId, drive_mode: DriveMode, init_level: Level) -> Self {
        Self {
            pin,
            drive_mode,
            init_level,
        }
    }
}

/// Apply the startup table, in entry order.
///
/// Must run once, before any other hardware access. There is no recovery
/// path: a pin the driver cannot address is a wiring-table bug, and the
/// driver layer treats it as a programming error.
pub fn apply_startup_config<D>(driver: &mut D, entries: &[PinConfigEntry])
where
    D: DigitalIo + PinSetup,
{
    for entry in entries {
        driver.select_gpio(entry.pin);
        driver.write(entry.pin, entry.init_level);
        driver.set_drive_mode(entry.pin, entry.drive_mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Records every driver call in invocation order
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum Op {
        SelectGpio(PinId),
        Write(PinId, Level),
        SetDriveMode(PinId, DriveMode),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl DigitalIo for Recorder {
        fn read(&self, _id: PinId) -> Level {
            Level::Low
        }

        fn write(&mut self, id: PinId, level: Level) {
            self.ops.push(Op::Write(id, level));
        }
    }

    impl PinSetup for Recorder {
        fn select_gpio(&mut self, id: PinId) {
            self.ops.push(Op::SelectGpio(id));
        }

        fn set_drive_mode(&mut self, id: PinId, mode: DriveMode) {
            self.ops.push(Op::SetDriveMode(id, mode));
        }
    }

    #[test]
    fn test_routing_then_level_then_drive_mode_per_entry() {
        let sw1 = PinId::new(7, 0);
        let led1 = PinId::new(19, 0);
        let table = [
            PinConfigEntry::new(sw1, DriveMode::PullUp, Level::High),
            PinConfigEntry::new(led1, DriveMode::Strong, Level::High),
        ];

        let mut driver = Recorder::default();
        apply_startup_config(&mut driver, &table);

        assert_eq!(
            driver.ops,
            [
                // Entry order is table order; step order is fixed
                Op::SelectGpio(sw1),
                Op::Write(sw1, Level::High),
                Op::SetDriveMode(sw1, DriveMode::PullUp),
                Op::SelectGpio(led1),
                Op::Write(led1, Level::High),
                Op::SetDriveMode(led1, DriveMode::Strong),
            ]
        );
    }

    #[test]
    fn test_empty_table_touches_nothing() {
        let mut driver = Recorder::default();
        apply_startup_config(&mut driver, &[]);
        assert!(driver.ops.is_empty());
    }
}
