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

//! Core diagnostic components
//!
//! This module contains everything the diagnostic suite is built from:
//! - Memory accessor abstraction and the emulated RAM used for host runs
//! - The four memory sub-tests and their orchestrator
//! - Region plan configuration
//! - Error and fault types

pub mod config;
pub mod error;
pub mod memory;
pub mod memtest;

// Re-export commonly used types
pub use config::{RegionPlan, TestPlan};
pub use error::{MemoryFault, RamcheckError, Result};
pub use memory::{EmulatedRam, MemoryAccess};
pub use memtest::{run_memory_test, MemTest, RunMode, TestReport};
