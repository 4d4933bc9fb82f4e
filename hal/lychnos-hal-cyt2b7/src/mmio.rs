//! Register bus abstraction
//!
//! The GPIO driver addresses registers by absolute address through this
//! trait. On target [`DirectMmio`] performs volatile accesses through raw
//! pointers; host tests substitute a memory-backed implementation.

/// 32-bit register access at absolute addresses
pub trait Mmio {
    /// Read a 32-bit register
    fn read32(&self, addr: u32) -> u32;

    /// Write a 32-bit register
    fn write32(&mut self, addr: u32, value: u32);
}

/// Volatile access to the real register space
///
/// Only meaningful on the CYT2B75XX itself: the addresses handed to it must
/// be valid register addresses from the TRM, and nothing else may alias
/// them. The GPIO driver only produces addresses inside the GPIO/HSIOM
/// blocks, which are always present on this part.
pub struct DirectMmio;

impl Mmio for DirectMmio {
    fn read32(&self, addr: u32) -> u32 {
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    fn write32(&mut self, addr: u32, value: u32) {
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}
