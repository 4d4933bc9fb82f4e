//! Board-agnostic core logic for the push-button LED firmware
//!
//! This crate contains all application logic that does not depend on a
//! specific register map:
//!
//! - Startup pin configuration (ordered table + applier)
//! - Logical signal adapter (the one home of active-low polarity)
//! - Edge-triggered LED toggle runnable
//! - Board wiring constants for the CYTVII-B-E-1M-SK starter kit
//!
//! Everything here is generic over the `lychnos-hal` traits and runs in
//! host tests against mock drivers.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod config;
pub mod signal;
pub mod toggle;
