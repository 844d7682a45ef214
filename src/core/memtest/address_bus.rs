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

//! Address bus test
//!
//! Power-of-two offset aliasing test. Each address line of the region
//! corresponds to one power-of-two offset; a line that is stuck or shorted
//! to another line makes two distinct offsets select the same cell, which a
//! single-address data test can never see.
//!
//! `size` must be a power of two for the offset mask to enumerate the
//! address lines; the orchestrator validates this before calling in.

use super::TestOutcome;
use crate::core::error::{MemoryFault, Result};
use crate::core::memory::{MemoryAccess, WORD_SIZE};

/// Reference pattern laid down at every power-of-two offset
const PATTERN: u32 = 0xAAAA_AAAA;
/// Complement written to the offset under test
const ANTIPATTERN: u32 = 0x5555_5555;

/// Verify that every address line selects a distinct cell
///
/// Three passes, first fault wins, offsets in increasing power-of-two order:
///
/// 1. Write [`PATTERN`] at every power-of-two offset inside the region.
/// 2. Write [`ANTIPATTERN`] at offset 0; any power-of-two offset that no
///    longer holds [`PATTERN`] exposes a line stuck high or shorted to
///    line 0, reported at `base + offset`.
/// 3. Restore offset 0, then for each power-of-two `test_offset` write
///    [`ANTIPATTERN`] there and verify every other power-of-two offset is
///    untouched; corruption elsewhere exposes a line stuck low or shorted,
///    reported at `base + test_offset`. The offset is restored before
///    moving on.
pub fn test_address_bus<M: MemoryAccess>(mem: &mut M, base: u32, size: u32) -> Result<TestOutcome> {
    let address_mask = size - 1;

    // Lay down the reference pattern at each power-of-two offset.
    let mut offset = WORD_SIZE;
    while offset & address_mask != 0 {
        mem.write32(base + offset, PATTERN)?;
        offset <<= 1;
    }

    // Check for address lines stuck high.
    mem.write32(base, ANTIPATTERN)?;
    let mut offset = WORD_SIZE;
    while offset & address_mask != 0 {
        if mem.read32(base + offset)? != PATTERN {
            return Ok(TestOutcome::Faulted(MemoryFault::AddressBus {
                address: base + offset,
            }));
        }
        offset <<= 1;
    }

    // Check for address lines stuck low or shorted together.
    mem.write32(base, PATTERN)?;
    let mut test_offset = WORD_SIZE;
    while test_offset & address_mask != 0 {
        mem.write32(base + test_offset, ANTIPATTERN)?;
        let mut offset = WORD_SIZE;
        while offset & address_mask != 0 {
            if mem.read32(base + offset)? != PATTERN && offset != test_offset {
                return Ok(TestOutcome::Faulted(MemoryFault::AddressBus {
                    address: base + test_offset,
                }));
            }
            offset <<= 1;
        }
        mem.write32(base + test_offset, PATTERN)?;
        test_offset <<= 1;
    }

    Ok(TestOutcome::Passed)
}
