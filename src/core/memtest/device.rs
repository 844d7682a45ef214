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

//! Full-device storage test
//!
//! Exhaustive sweep over the whole region to catch faults the localized
//! tests cannot reach: stuck bits in individual cells, coupling between
//! adjacent cells, and decoder faults deep in the device. The pattern
//! increments per word, so neighboring cells always hold different values
//! and a write that disturbs its neighbor is visible.
//!
//! A fault-free run leaves the region zero-filled; an aborted run leaves it
//! in an undefined pattern.

use log::debug;

use super::TestOutcome;
use crate::core::error::{MemoryFault, Result};
use crate::core::memory::{MemoryAccess, WORD_SIZE};

/// Verify that every cell in `base..base + size` stores both polarities
///
/// Three full sweeps with an incrementing per-word pattern starting at 1:
///
/// 1. Fill every word (writes only).
/// 2. Verify each word, then overwrite it with the bitwise complement.
/// 3. Verify each complement, then zero the word.
///
/// The first mismatch aborts with [`MemoryFault::Device`] at `base + offset`.
pub fn test_device<M: MemoryAccess>(mem: &mut M, base: u32, size: u32) -> Result<TestOutcome> {
    // Fill memory with the known pattern.
    let mut pattern: u32 = 1;
    let mut offset: u32 = 0;
    while offset < size {
        mem.write32(base + offset, pattern)?;
        pattern = pattern.wrapping_add(1);
        offset += WORD_SIZE;
    }
    debug!("device test: fill pass complete");

    // Check each location and invert it for the second pass.
    let mut pattern: u32 = 1;
    let mut offset: u32 = 0;
    while offset < size {
        if mem.read32(base + offset)? != pattern {
            return Ok(TestOutcome::Faulted(MemoryFault::Device {
                address: base + offset,
            }));
        }
        mem.write32(base + offset, !pattern)?;
        pattern = pattern.wrapping_add(1);
        offset += WORD_SIZE;
    }
    debug!("device test: invert pass complete");

    // Check each location for the inverted pattern and zero it.
    let mut pattern: u32 = 1;
    let mut offset: u32 = 0;
    while offset < size {
        if mem.read32(base + offset)? != !pattern {
            return Ok(TestOutcome::Faulted(MemoryFault::Device {
                address: base + offset,
            }));
        }
        mem.write32(base + offset, 0)?;
        pattern = pattern.wrapping_add(1);
        offset += WORD_SIZE;
    }
    debug!("device test: zero pass complete");

    Ok(TestOutcome::Passed)
}
