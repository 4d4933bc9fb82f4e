//! GPIO / HSIOM register driver
//!
//! Register map (TRAVEO II TRM 002-19314):
//!
//! - GPIO:  one 0x80-stride block per port; `PRT_DR` output data,
//!   `PRT_PS` pin state (input read path), `PRT_PC` drive mode
//!   (3 bits per pin).
//! - HSIOM: one 0x100-stride block per port; `PORT_SEL0` routes pins 0-3,
//!   `PORT_SEL1` pins 4-7, one byte per pin, field value 0 = GPIO.

use lychnos_hal::{DigitalIo, DriveMode, Level, PinId, PinSetup};

use crate::mmio::Mmio;

const GPIO_BASE: u32 = 0x4031_0000;
const HSIOM_BASE: u32 = 0x4030_0000;
const GPIO_PORT_STRIDE: u32 = 0x80;
const HSIOM_PORT_STRIDE: u32 = 0x100;

/// Output data register
const PRT_DR: u32 = 0x00;
/// Pin state (input read)
const PRT_PS: u32 = 0x04;
/// Drive mode, 3 bits per pin
const PRT_PC: u32 = 0x08;

/// HSIOM select, pins 0-3
const HSIOM_PORT_SEL0: u32 = 0x00;
/// HSIOM select, pins 4-7
const HSIOM_PORT_SEL1: u32 = 0x04;
/// Field value routing a pin to GPIO
const HSIOM_GPIO: u32 = 0x00;

/// CYT2B75XX GPIO driver over a register bus
pub struct Gpio<M: Mmio> {
    bus: M,
}

impl<M: Mmio> Gpio<M> {
    pub fn new(bus: M) -> Self {
        Self { bus }
    }

    fn gpio_prt(id: PinId) -> u32 {
        GPIO_BASE + u32::from(id.port()) * GPIO_PORT_STRIDE
    }

    fn hsiom_prt(id: PinId) -> u32 {
        HSIOM_BASE + u32::from(id.port()) * HSIOM_PORT_STRIDE
    }
}

impl<M: Mmio> DigitalIo for Gpio<M> {
    fn read(&self, id: PinId) -> Level {
        let raw = (self.bus.read32(Self::gpio_prt(id) + PRT_PS) >> id.pin()) & 1;
        Level::from(raw != 0)
    }

    fn write(&mut self, id: PinId, level: Level) {
        let dr = Self::gpio_prt(id) + PRT_DR;
        let mask = 1u32 << id.pin();

        // Read-modify-write confined to the addressed bit
        let current = self.bus.read32(dr);
        let next = match level {
            Level::High => current | mask,
            Level::Low => current & !mask,
        };
        self.bus.write32(dr, next);
    }
}

impl<M: Mmio> PinSetup for Gpio<M> {
    fn select_gpio(&mut self, id: PinId) {
        let sel = Self::hsiom_prt(id)
            + if id.pin() < 4 {
                HSIOM_PORT_SEL0
            } else {
                HSIOM_PORT_SEL1
            };
        let shift = u32::from(id.pin() % 4) * 8;

        // Clear the pin's byte field, then write the GPIO routing.
        // HSIOM_GPIO is 0, so the cleared field already routes to GPIO;
        // the explicit write keeps the intent visible.
        let mut value = self.bus.read32(sel);
        value &= !(0xFF << shift);
        value |= HSIOM_GPIO << shift;
        self.bus.write32(sel, value);
    }

    fn set_drive_mode(&mut self, id: PinId, mode: DriveMode) {
        let pc = Self::gpio_prt(id) + PRT_PC;
        let shift = u32::from(id.pin()) * 3;

        let mut value = self.bus.read32(pc);
        value &= !(0x7 << shift);
        value |= u32::from(mode.bits()) << shift;
        self.bus.write32(pc, value);
    }
}
