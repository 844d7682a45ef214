// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 ramcheck developers

//! Emulated RAM tests
//!
//! This module contains tests for the emulated memory region, organized
//! into logical categories:
//!
//! - `basic`: Construction, bounds, and initial state
//! - `access`: Read/write operations with various data sizes
//! - `faults`: Injected wiring and storage faults
//!
//! Tests cover:
//! - Little-endian byte composition across all access widths
//! - Alignment requirements
//! - Boundary conditions
//! - Each fault injection model the diagnostic suite is designed to catch

use super::*;

mod basic;
mod faults;
