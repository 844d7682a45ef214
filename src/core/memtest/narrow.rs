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

//! Byte and half-word access test
//!
//! Verifies that byte and half-word views of one 4-byte cell agree with the
//! word view, in both directions. A memory interface behind a bridged or
//! packed bus can handle word accesses correctly while miswiring the byte
//! lanes; this test catches exactly that.
//!
//! All mutations stay inside the 4-byte cell at `base`, and a fault is
//! always reported at `base` itself: the test does not localize further
//! within the cell.

use super::TestOutcome;
use crate::core::error::{MemoryFault, Result};
use crate::core::memory::MemoryAccess;

/// Verify byte/half-word/word consistency at `base`
///
/// 1. Write the four bytes `0x0A, 0x05, 0xA0, 0x50`; the word view must be
///    `0x50A0050A` and the half-word views `0x050A` / `0x50A0`.
/// 2. Read the four bytes back individually.
/// 3. Write the half-words `0x50A0` / `0x050A`; the word view must be
///    `0x050A50A0`, and the half-word and byte views its decomposition.
pub fn test_narrow_access<M: MemoryAccess>(mem: &mut M, base: u32) -> Result<TestOutcome> {
    let fault = TestOutcome::Faulted(MemoryFault::NarrowAccess { address: base });

    // Write 4 bytes, read back as one word.
    mem.write8(base, 0x0A)?;
    mem.write8(base + 1, 0x05)?;
    mem.write8(base + 2, 0xA0)?;
    mem.write8(base + 3, 0x50)?;
    if mem.read32(base)? != 0x50A0_050A {
        return Ok(fault);
    }

    // Read it back as two half-words.
    if mem.read16(base + 2)? != 0x50A0 || mem.read16(base)? != 0x050A {
        return Ok(fault);
    }

    // Read it back as 4 bytes.
    if mem.read8(base + 3)? != 0x50
        || mem.read8(base + 2)? != 0xA0
        || mem.read8(base + 1)? != 0x05
        || mem.read8(base)? != 0x0A
    {
        return Ok(fault);
    }

    // Write 2 half-words, read back as one word.
    mem.write16(base, 0x50A0)?;
    mem.write16(base + 2, 0x050A)?;
    if mem.read32(base)? != 0x050A_50A0 {
        return Ok(fault);
    }

    // Read it back as two half-words.
    if mem.read16(base + 2)? != 0x050A || mem.read16(base)? != 0x50A0 {
        return Ok(fault);
    }

    // Read it back as 4 bytes.
    if mem.read8(base + 3)? != 0x05
        || mem.read8(base + 2)? != 0x0A
        || mem.read8(base + 1)? != 0x50
        || mem.read8(base)? != 0xA0
    {
        return Ok(fault);
    }

    Ok(TestOutcome::Passed)
}
