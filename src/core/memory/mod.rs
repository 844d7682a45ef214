// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 ramcheck developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Memory accessor abstraction
//!
//! The diagnostic suite never touches memory directly. Every read and write
//! goes through the [`MemoryAccess`] trait, so the same test logic runs
//! against memory-mapped hardware in firmware and against [`EmulatedRam`]
//! on a host.
//!
//! # Visibility contract
//!
//! Every implementation must guarantee that a write of 1, 2, or 4 bytes is
//! observable by an immediately following read of the same or overlapping
//! bytes. On platforms with a data cache this means the implementation folds
//! the flush/invalidate step into the write itself; the test logic never
//! performs cache maintenance of its own.
//!
//! # Example
//!
//! ```
//! use ramcheck::core::memory::{EmulatedRam, MemoryAccess};
//!
//! let mut ram = EmulatedRam::new(0x1000, 0x100);
//! ram.write32(0x1000, 0x12345678).unwrap();
//! assert_eq!(ram.read32(0x1000).unwrap(), 0x12345678);
//! ```

mod emulated;

pub use emulated::{EmulatedRam, FaultInjection};

use crate::core::error::Result;

/// Word size of the bus under test, in bytes
pub const WORD_SIZE: u32 = 4;

/// Uniform interface to the memory region under test
///
/// Addresses are absolute. Values are little-endian. 16-bit and 32-bit
/// accesses require natural alignment; implementations reject unaligned
/// addresses with [`RamcheckError::UnalignedAccess`] and addresses outside
/// the backing region with [`RamcheckError::InvalidMemoryAccess`].
///
/// Reads take `&mut self`: hardware-backed implementations may have read
/// side effects, and fault models used in testing may be stateful.
///
/// [`RamcheckError::UnalignedAccess`]: crate::core::error::RamcheckError::UnalignedAccess
/// [`RamcheckError::InvalidMemoryAccess`]: crate::core::error::RamcheckError::InvalidMemoryAccess
pub trait MemoryAccess {
    /// Read an 8-bit value. No alignment requirement.
    fn read8(&mut self, addr: u32) -> Result<u8>;

    /// Read a 16-bit value from a 2-byte-aligned address.
    fn read16(&mut self, addr: u32) -> Result<u16>;

    /// Read a 32-bit value from a 4-byte-aligned address.
    fn read32(&mut self, addr: u32) -> Result<u32>;

    /// Write an 8-bit value. No alignment requirement.
    fn write8(&mut self, addr: u32, value: u8) -> Result<()>;

    /// Write a 16-bit value to a 2-byte-aligned address.
    fn write16(&mut self, addr: u32, value: u16) -> Result<()>;

    /// Write a 32-bit value to a 4-byte-aligned address.
    fn write32(&mut self, addr: u32, value: u32) -> Result<()>;

    /// Human-readable name for log lines
    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests;
