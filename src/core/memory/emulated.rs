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

//! Emulated RAM with fault injection
//!
//! A `Vec<u8>`-backed implementation of [`MemoryAccess`] used by the unit
//! tests and by the CLI harness. Besides behaving as ideal little-endian
//! RAM, it can model the wiring and storage faults the diagnostic suite is
//! designed to catch:
//!
//! - a data line stuck high or low,
//! - an address line stuck or shorted to another line (aliasing),
//! - a storage cell that always reads the same byte.
//!
//! Address-line faults distort the region-relative offset of every access,
//! exactly as a wiring fault distorts the address presented to the memory
//! device. Data-line faults corrupt the transferred value on both the write
//! and the read path, since a stuck line affects both directions.

use log::trace;

use super::MemoryAccess;
use crate::core::error::{RamcheckError, Result};

/// A wiring or storage fault wired into an [`EmulatedRam`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultInjection {
    /// Data line `bit` always carries `level`, regardless of the value driven.
    StuckDataBit { bit: u8, level: bool },

    /// Address line `victim` follows address line `driver` instead of the
    /// address actually presented. Writing to an offset with only the victim
    /// bit set therefore lands at offset 0 (aliasing).
    BridgedAddressLines { driver: u8, victim: u8 },

    /// Address line `bit` is wedged at `level`.
    StuckAddressLine { bit: u8, level: bool },

    /// The byte cell at the given absolute address always reads `value`;
    /// writes to it are lost.
    StuckByte { address: u32, value: u8 },
}

/// In-memory RAM region implementing [`MemoryAccess`]
///
/// The region covers the absolute addresses `base..base + size`. Values are
/// little-endian and 16/32-bit accesses must be naturally aligned, matching
/// the behavior the suite expects from a hardware-backed accessor.
pub struct EmulatedRam {
    /// Absolute address of the first byte
    base: u32,
    /// Backing storage, one byte per cell
    data: Vec<u8>,
    /// Injected wiring and storage faults
    faults: Vec<FaultInjection>,
}

impl EmulatedRam {
    /// Create a fault-free RAM region of `size` bytes starting at `base`
    ///
    /// All cells are initialized to zero.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `base + size - 1` overflows the 32-bit
    /// address space.
    pub fn new(base: u32, size: u32) -> Self {
        assert!(size > 0, "region size must be nonzero");
        assert!(
            base.checked_add(size - 1).is_some(),
            "region exceeds the address space"
        );
        Self {
            base,
            data: vec![0u8; size as usize],
            faults: Vec::new(),
        }
    }

    /// Wire a fault into the region
    ///
    /// Faults accumulate; each access applies all of them. Address and data
    /// line indices must be below 32.
    pub fn inject(&mut self, fault: FaultInjection) {
        match fault {
            FaultInjection::StuckDataBit { bit, .. } => assert!(bit < 32, "data line out of range"),
            FaultInjection::BridgedAddressLines { driver, victim } => {
                assert!(driver < 32 && victim < 32, "address line out of range");
            }
            FaultInjection::StuckAddressLine { bit, .. } => {
                assert!(bit < 32, "address line out of range");
            }
            FaultInjection::StuckByte { .. } => {}
        }
        self.faults.push(fault);
    }

    /// Builder-style variant of [`inject`](Self::inject)
    pub fn with_fault(mut self, fault: FaultInjection) -> Self {
        self.inject(fault);
        self
    }

    /// Absolute address of the first byte
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Region size in bytes
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// Inclusive absolute address bounds of the region
    pub fn address_range(&self) -> (u32, u32) {
        // Construction guarantees this cannot overflow, even for a region
        // ending at the top of the address space.
        (self.base, self.base + (self.size() - 1))
    }

    /// Resolve an access to a region-relative offset
    ///
    /// Checks alignment and bounds, then applies address-line faults to the
    /// offset the way a wiring fault distorts the address presented to the
    /// device. The distorted offset is bounds-checked again since a fault on
    /// a line above the region's address width can point outside it.
    fn resolve(&self, addr: u32, width: u32) -> Result<usize> {
        if addr & (width - 1) != 0 {
            return Err(RamcheckError::UnalignedAccess {
                address: addr,
                size: width as u8,
            });
        }

        let end = addr
            .checked_add(width - 1)
            .ok_or(RamcheckError::InvalidMemoryAccess { address: addr })?;
        let (lo, hi) = self.address_range();
        if addr < lo || end > hi {
            return Err(RamcheckError::InvalidMemoryAccess { address: addr });
        }

        let mut offset = addr - self.base;
        for fault in &self.faults {
            match *fault {
                FaultInjection::BridgedAddressLines { driver, victim } => {
                    let driven = (offset >> driver) & 1;
                    offset = (offset & !(1 << victim)) | (driven << victim);
                }
                FaultInjection::StuckAddressLine { bit, level } => {
                    offset = (offset & !(1 << bit)) | (u32::from(level) << bit);
                }
                _ => {}
            }
        }
        if offset != addr - self.base {
            trace!(
                "address fault: access at 0x{:08X} resolved to offset 0x{:X}",
                addr,
                offset
            );
        }

        if offset as usize + width as usize > self.data.len() {
            return Err(RamcheckError::InvalidMemoryAccess { address: addr });
        }
        Ok(offset as usize)
    }

    /// Apply stuck data lines to a transferred value of `width` bytes
    fn distort(&self, value: u32, width: u32) -> u32 {
        let lines = width * 8;
        let mut value = value;
        for fault in &self.faults {
            if let FaultInjection::StuckDataBit { bit, level } = *fault {
                if u32::from(bit) < lines {
                    if level {
                        value |= 1 << bit;
                    } else {
                        value &= !(1 << bit);
                    }
                }
            }
        }
        value
    }

    /// Read one stored byte, honoring stuck cells
    fn load_byte(&self, offset: usize) -> u8 {
        let addr = self.base + offset as u32;
        for fault in &self.faults {
            if let FaultInjection::StuckByte { address, value } = *fault {
                if address == addr {
                    return value;
                }
            }
        }
        self.data[offset]
    }

    /// Store one byte, dropping writes to stuck cells
    fn store_byte(&mut self, offset: usize, value: u8) {
        let addr = self.base + offset as u32;
        for fault in &self.faults {
            if let FaultInjection::StuckByte { address, .. } = *fault {
                if address == addr {
                    trace!("write to stuck cell 0x{:08X} dropped", addr);
                    return;
                }
            }
        }
        self.data[offset] = value;
    }

    /// Little-endian load of `width` bytes
    fn load(&self, offset: usize, width: u32) -> u32 {
        let mut value = 0u32;
        for i in (0..width as usize).rev() {
            value = value << 8 | u32::from(self.load_byte(offset + i));
        }
        value
    }

    /// Little-endian store of `width` bytes
    fn store(&mut self, offset: usize, width: u32, value: u32) {
        for i in 0..width as usize {
            self.store_byte(offset + i, (value >> (8 * i)) as u8);
        }
    }
}

impl MemoryAccess for EmulatedRam {
    fn read8(&mut self, addr: u32) -> Result<u8> {
        let offset = self.resolve(addr, 1)?;
        Ok(self.distort(u32::from(self.load_byte(offset)), 1) as u8)
    }

    fn read16(&mut self, addr: u32) -> Result<u16> {
        let offset = self.resolve(addr, 2)?;
        Ok(self.distort(self.load(offset, 2), 2) as u16)
    }

    fn read32(&mut self, addr: u32) -> Result<u32> {
        let offset = self.resolve(addr, 4)?;
        Ok(self.distort(self.load(offset, 4), 4))
    }

    fn write8(&mut self, addr: u32, value: u8) -> Result<()> {
        let offset = self.resolve(addr, 1)?;
        let value = self.distort(u32::from(value), 1);
        self.store_byte(offset, value as u8);
        Ok(())
    }

    fn write16(&mut self, addr: u32, value: u16) -> Result<()> {
        let offset = self.resolve(addr, 2)?;
        let value = self.distort(u32::from(value), 2);
        self.store(offset, 2, value);
        Ok(())
    }

    fn write32(&mut self, addr: u32, value: u32) -> Result<()> {
        let offset = self.resolve(addr, 4)?;
        let value = self.distort(value, 4);
        self.store(offset, 4, value);
        Ok(())
    }

    fn name(&self) -> &str {
        "emulated RAM"
    }
}
