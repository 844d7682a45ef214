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

//! Diagnostic error and fault types

use thiserror::Error;

/// Result type for diagnostic operations
pub type Result<T> = std::result::Result<T, RamcheckError>;

/// Errors caused by misusing the suite or its collaborators
///
/// These are configuration and accessor errors, not hardware findings.
/// A hardware finding is a [`MemoryFault`] and is reported through a
/// test outcome, never through this enum.
#[derive(Error, Debug)]
pub enum RamcheckError {
    #[error("invalid memory access at 0x{address:08X}")]
    InvalidMemoryAccess { address: u32 },

    #[error("unaligned memory access: {size}-byte access at 0x{address:08X}")]
    UnalignedAccess { address: u32, size: u8 },

    #[error("region size 0x{size:X} is not a power of two")]
    SizeNotPowerOfTwo { size: u32 },

    #[error("region too small: {size} bytes (minimum 4)")]
    RegionTooSmall { size: u32 },

    #[error("invalid region bounds: base 0x{base:08X}, end 0x{end:08X}")]
    InvalidBounds { base: u32, end: u32 },

    #[error("region base 0x{base:08X} is not word aligned")]
    UnalignedBase { base: u32 },

    #[error("region plan not found: {0}")]
    PlanNotFound(String),

    #[error("invalid region plan: {0}")]
    InvalidPlan(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A hardware fault detected by one of the memory sub-tests
///
/// Each variant corresponds to one sub-test and carries the single piece of
/// localization data that test can produce: the failing walking-ones pattern
/// for the data bus, or the first faulting address for the other three.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryFault {
    /// A data line failed to read back the walking-ones pattern.
    #[error("data bus fault: bit pattern 0x{pattern:08X} did not read back")]
    DataBus { pattern: u32 },

    /// An address line is stuck, shorted, or aliases another line.
    #[error("address bus fault at 0x{address:08X}")]
    AddressBus { address: u32 },

    /// Byte or half-word accesses are inconsistent with the word view.
    #[error("byte/half-word access fault at 0x{address:08X}")]
    NarrowAccess { address: u32 },

    /// A storage cell failed to hold a pattern or its complement.
    #[error("device fault at 0x{address:08X}")]
    Device { address: u32 },
}
