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

//! Data bus test
//!
//! Walking-ones test at a single fixed address. Because it targets the bus
//! wiring rather than storage cells, one address is enough: a stuck-at,
//! shorted, or open data line corrupts the transferred pattern no matter
//! which cell it is written to.

use super::TestOutcome;
use crate::core::error::{MemoryFault, Result};
use crate::core::memory::MemoryAccess;

/// Verify that every data line toggles independently
///
/// Writes each of the 32 walking-ones patterns to `address` and reads it
/// straight back. The first pattern that does not read back identically is
/// reported as [`MemoryFault::DataBus`].
pub fn test_data_bus<M: MemoryAccess>(mem: &mut M, address: u32) -> Result<TestOutcome> {
    let mut pattern: u32 = 1;
    while pattern != 0 {
        mem.write32(address, pattern)?;
        if mem.read32(address)? != pattern {
            return Ok(TestOutcome::Faulted(MemoryFault::DataBus { pattern }));
        }
        pattern <<= 1;
    }
    Ok(TestOutcome::Passed)
}
