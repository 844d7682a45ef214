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

//! RAM diagnostic library for embedded memory bring-up
//!
//! This library implements the classic four-stage destructive memory test:
//! a walking-ones data bus test, a power-of-two address bus aliasing test,
//! a byte/half-word access consistency test, and an exhaustive device test.
//! It is intended to run against memory that no allocator or OS currently
//! owns, for example early in boot or in a standalone diagnostic mode.
//!
//! The tests are generic over a [`core::memory::MemoryAccess`] collaborator,
//! so the same suite runs against memory-mapped hardware in firmware and
//! against the bundled [`core::memory::EmulatedRam`] on a host.
//!
//! # Example
//!
//! ```
//! use ramcheck::core::memory::EmulatedRam;
//! use ramcheck::core::memtest::run_memory_test;
//!
//! let mut ram = EmulatedRam::new(0x1000, 0x1000);
//! let report = run_memory_test(&mut ram, 0x1000, 0x1FFF).unwrap();
//! assert!(report.passed());
//! ```

pub mod core;
