//! CYT2B75XX (Traveo II) GPIO register driver
//!
//! Implements the `lychnos-hal` traits over the CYT2B75XX GPIO and HSIOM
//! register blocks. Register layout per the TRAVEO II TRM 002-19314.
//!
//! The register bus is behind the small [`mmio::Mmio`] trait so the same
//! driver code runs against the real register space on target and against
//! plain memory in host tests.

#![no_std]

pub mod gpio;
pub mod mmio;

pub use gpio::Gpio;
pub use mmio::{DirectMmio, Mmio};
