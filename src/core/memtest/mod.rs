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

//! Memory test suite orchestration
//!
//! Runs the four sub-tests against one memory region in a fixed order, each
//! gated on the previous stage passing:
//!
//! 1. Data bus (walking ones at the base address)
//! 2. Address bus (power-of-two offset aliasing)
//! 3. Byte and half-word access consistency
//! 4. Full-device fill/invert/zero sweep
//!
//! The diagnostic philosophy is stop at first fault: a wiring or storage
//! fault is not transient, and later stages are meaningless once an earlier
//! one has failed. [`RunMode::RunAll`] is available for callers that want
//! every stage's verdict anyway.
//!
//! The suite is destructive. The tested region is left zero-filled after a
//! clean run and in an undefined pattern after an aborted one; it must be
//! exclusively owned by the test for its duration.
//!
//! # Example
//!
//! ```
//! use ramcheck::core::memory::EmulatedRam;
//! use ramcheck::core::memtest::MemTest;
//!
//! let mut ram = EmulatedRam::new(0x1000, 0x1000);
//! let report = MemTest::new(0x1000, 0x1FFF).unwrap().run(&mut ram).unwrap();
//! assert!(report.passed());
//! ```

pub mod address_bus;
pub mod data_bus;
pub mod device;
pub mod narrow;

pub use address_bus::test_address_bus;
pub use data_bus::test_data_bus;
pub use device::test_device;
pub use narrow::test_narrow_access;

use std::fmt;

use log::{error, info};
use serde::Deserialize;

use crate::core::error::{MemoryFault, RamcheckError, Result};
use crate::core::memory::{MemoryAccess, WORD_SIZE};

/// Outcome of a single sub-test
///
/// A fault is a successful diagnosis, not an error: accessor failures
/// (out-of-range or unaligned accesses) surface as `Err` and abort the whole
/// run, since they mean the suite was pointed at the wrong region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    /// The sub-test found no fault.
    Passed,
    /// The sub-test detected a hardware fault and aborted.
    Faulted(MemoryFault),
}

impl TestOutcome {
    /// `true` if no fault was found
    pub fn passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    /// The detected fault, if any
    pub fn fault(&self) -> Option<MemoryFault> {
        match *self {
            TestOutcome::Passed => None,
            TestOutcome::Faulted(fault) => Some(fault),
        }
    }
}

/// The four suite stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DataBus,
    AddressBus,
    NarrowAccess,
    Device,
}

impl Stage {
    /// All stages in the fixed execution order
    pub const ALL: [Stage; 4] = [
        Stage::DataBus,
        Stage::AddressBus,
        Stage::NarrowAccess,
        Stage::Device,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::DataBus => "data bus",
            Stage::AddressBus => "address bus",
            Stage::NarrowAccess => "byte and half-word access",
            Stage::Device => "device",
        };
        write!(f, "{}", name)
    }
}

/// Behavior after a stage reports a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Skip all remaining stages after the first fault (the default).
    #[default]
    StopAtFirstFault,
    /// Run every stage and record every verdict.
    RunAll,
}

/// Verdict of one executed stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageResult {
    /// Which stage ran
    pub stage: Stage,
    /// What it found
    pub outcome: TestOutcome,
}

/// Results of a suite run
///
/// Contains one [`StageResult`] per executed stage. Under the default
/// [`RunMode::StopAtFirstFault`], stages after the first fault do not run
/// and are not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    stages: Vec<StageResult>,
}

impl TestReport {
    /// `true` if every executed stage passed
    pub fn passed(&self) -> bool {
        self.stages.iter().all(|s| s.outcome.passed())
    }

    /// Per-stage verdicts in execution order
    pub fn stages(&self) -> &[StageResult] {
        &self.stages
    }

    /// The first detected fault, if any
    pub fn first_fault(&self) -> Option<MemoryFault> {
        self.faults().next()
    }

    /// All detected faults in stage order
    pub fn faults(&self) -> impl Iterator<Item = MemoryFault> + '_ {
        self.stages.iter().filter_map(|s| s.outcome.fault())
    }
}

/// Memory test suite for one contiguous region
///
/// Validates the region bounds up front: the base must be word aligned and
/// the size a power of two of at least one word, since the address bus
/// test's aliasing logic is only valid for power-of-two sizes. A region that
/// fails validation is rejected with a [`RamcheckError`] before any memory
/// is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemTest {
    base: u32,
    end: u32,
    mode: RunMode,
}

impl MemTest {
    /// Create a suite for the inclusive address range `base..=end`
    ///
    /// # Errors
    ///
    /// - [`RamcheckError::InvalidBounds`] if `end < base` or the region
    ///   covers the entire address space
    /// - [`RamcheckError::UnalignedBase`] if `base` is not word aligned
    /// - [`RamcheckError::RegionTooSmall`] if the region is under one word
    /// - [`RamcheckError::SizeNotPowerOfTwo`] otherwise, when
    ///   `end - base + 1` is not a power of two
    pub fn new(base: u32, end: u32) -> Result<Self> {
        if end < base {
            return Err(RamcheckError::InvalidBounds { base, end });
        }
        if base & (WORD_SIZE - 1) != 0 {
            return Err(RamcheckError::UnalignedBase { base });
        }
        let size = (end - base)
            .checked_add(1)
            .ok_or(RamcheckError::InvalidBounds { base, end })?;
        if size < WORD_SIZE {
            return Err(RamcheckError::RegionTooSmall { size });
        }
        if !size.is_power_of_two() {
            return Err(RamcheckError::SizeNotPowerOfTwo { size });
        }
        Ok(Self {
            base,
            end,
            mode: RunMode::default(),
        })
    }

    /// Select what happens after a stage faults
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Base address of the region under test
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Inclusive end address of the region under test
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Region size in bytes
    pub fn size(&self) -> u32 {
        self.end - self.base + 1
    }

    /// Run the suite against `mem`
    ///
    /// Destroys the region's contents. Emits one log line per executed
    /// stage; the structured verdicts are in the returned [`TestReport`].
    ///
    /// # Errors
    ///
    /// Propagates accessor errors, which indicate the region is not fully
    /// backed by `mem` rather than a hardware fault.
    pub fn run<M: MemoryAccess>(&self, mem: &mut M) -> Result<TestReport> {
        info!(
            "testing RAM from 0x{:08X} to 0x{:08X} ({})",
            self.base,
            self.end,
            mem.name()
        );

        let mut stages = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let outcome = match stage {
                Stage::DataBus => test_data_bus(mem, self.base)?,
                Stage::AddressBus => test_address_bus(mem, self.base, self.size())?,
                Stage::NarrowAccess => test_narrow_access(mem, self.base)?,
                Stage::Device => test_device(mem, self.base, self.size())?,
            };

            match outcome {
                TestOutcome::Passed => info!("{} test passed", stage),
                TestOutcome::Faulted(fault) => error!("{} test failed: {}", stage, fault),
            }

            let faulted = !outcome.passed();
            stages.push(StageResult { stage, outcome });
            if faulted && self.mode == RunMode::StopAtFirstFault {
                break;
            }
        }

        Ok(TestReport { stages })
    }
}

/// Run the full suite over the inclusive address range `base..=end`
///
/// Convenience entry point with the default stop-at-first-fault behavior.
///
/// # Errors
///
/// Returns region validation errors from [`MemTest::new`] and accessor
/// errors from the run itself.
pub fn run_memory_test<M: MemoryAccess>(mem: &mut M, base: u32, end: u32) -> Result<TestReport> {
    MemTest::new(base, end)?.run(mem)
}
