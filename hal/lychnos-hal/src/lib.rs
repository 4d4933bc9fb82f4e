//! Lychnos Hardware Abstraction Layer
//!
//! This crate defines the pin vocabulary and the hardware abstraction traits
//! that chip-specific drivers implement. Application logic above this layer
//! never touches a register address.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (lychnos-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lychnos-core (signal adapter, toggle)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lychnos-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lychnos-hal-cyt2b7 (register driver)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalIo`] - read/write/flip one pin by [`pin::PinId`]
//! - [`gpio::PinSetup`] - one-time routing and drive-mode configuration

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pin;

// Re-export key items at crate root for convenience
pub use gpio::{DigitalIo, PinSetup};
pub use pin::{DriveMode, Level, PinId};
