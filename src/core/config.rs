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

//! Region plan configuration
//!
//! A plan file describes the regions a diagnostic run should cover and the
//! run mode, in TOML:
//!
//! ```toml
//! mode = "stop-at-first-fault"
//!
//! [[regions]]
//! name = "sdram"
//! base = 0x1000
//! size = 0x1000
//!
//! [[regions]]
//! name = "sram"
//! base = 0x8000
//! size = 0x400
//! ```
//!
//! `mode` is optional and defaults to stop-at-first-fault. Region bounds are
//! validated when the suite is built from the plan, not at load time.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{RamcheckError, Result};
use crate::core::memtest::RunMode;

/// One region entry in a plan file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionPlan {
    /// Name used in log lines
    pub name: String,
    /// Absolute base address
    pub base: u32,
    /// Region size in bytes
    pub size: u32,
}

impl RegionPlan {
    /// Inclusive end address of the region
    ///
    /// Wraps for a zero-size or overflowing entry, which region validation
    /// then rejects as inverted bounds.
    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.size).wrapping_sub(1)
    }
}

/// A diagnostic run plan loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestPlan {
    /// What to do after a stage faults
    #[serde(default)]
    pub mode: RunMode,
    /// Regions to test, in order
    pub regions: Vec<RegionPlan>,
}

impl TestPlan {
    /// Load a plan from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`RamcheckError::PlanNotFound`] if the file cannot be opened
    /// and [`RamcheckError::InvalidPlan`] if it is not a valid plan.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|_| RamcheckError::PlanNotFound(path.display().to_string()))?;
        Self::parse(&text)
    }

    /// Parse a plan from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RamcheckError::InvalidPlan(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_with_hex_literals() {
        let plan = TestPlan::parse(
            r#"
            mode = "run-all"

            [[regions]]
            name = "sdram"
            base = 0x1000
            size = 0x1000
            "#,
        )
        .unwrap();

        assert_eq!(plan.mode, RunMode::RunAll);
        assert_eq!(plan.regions.len(), 1);
        assert_eq!(plan.regions[0].name, "sdram");
        assert_eq!(plan.regions[0].base, 0x1000);
        assert_eq!(plan.regions[0].size, 0x1000);
        assert_eq!(plan.regions[0].end(), 0x1FFF);
    }

    #[test]
    fn test_mode_defaults_to_stop_at_first_fault() {
        let plan = TestPlan::parse(
            r#"
            [[regions]]
            name = "sram"
            base = 0
            size = 16
            "#,
        )
        .unwrap();

        assert_eq!(plan.mode, RunMode::StopAtFirstFault);
    }

    #[test]
    fn test_invalid_plan_is_rejected() {
        let err = TestPlan::parse("regions = 3").unwrap_err();
        assert!(matches!(err, RamcheckError::InvalidPlan(_)));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[[regions]]\nname = \"sdram\"\nbase = 0x1000\nsize = 0x100\n"
        )
        .unwrap();

        let plan = TestPlan::load(file.path()).unwrap();
        assert_eq!(plan.regions[0].base, 0x1000);
        assert_eq!(plan.regions[0].size, 0x100);
    }

    #[test]
    fn test_missing_file() {
        let err = TestPlan::load("/nonexistent/plan.toml").unwrap_err();
        assert!(matches!(err, RamcheckError::PlanNotFound(_)));
    }
}
