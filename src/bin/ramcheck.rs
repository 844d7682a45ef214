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

use clap::Parser;
use log::{error, info};
use ramcheck::core::config::{RegionPlan, TestPlan};
use ramcheck::core::error::Result;
use ramcheck::core::memory::{EmulatedRam, FaultInjection};
use ramcheck::core::memtest::{MemTest, RunMode};

/// RAM diagnostic suite
///
/// Runs the four-stage destructive memory test against emulated RAM. On
/// real hardware the library is driven with a memory-mapped accessor from
/// the firmware; this binary is the standalone harness, with optional fault
/// injection to demonstrate each failure mode.
#[derive(Parser)]
#[command(name = "ramcheck")]
#[command(about = "Destructive RAM diagnostic suite", long_about = None)]
struct Args {
    /// Base address of the region to test (hex or decimal)
    #[arg(long, value_parser = parse_address, default_value = "0x1000")]
    base: u32,

    /// Region size in bytes, a power of two (hex or decimal)
    #[arg(long, value_parser = parse_address, default_value = "0x1000")]
    size: u32,

    /// TOML plan file describing the regions to test (overrides --base/--size)
    #[arg(short, long)]
    plan: Option<String>,

    /// Run every stage even after a fault
    #[arg(long)]
    run_all: bool,

    /// Inject a data line stuck at zero at this bit position
    #[arg(long, value_name = "BIT", value_parser = clap::value_parser!(u8).range(..32))]
    stuck_data_bit: Option<u8>,

    /// Inject a storage cell stuck at zero at this address
    #[arg(long, value_parser = parse_address, value_name = "ADDR")]
    stuck_byte: Option<u32>,

    /// Bridge two address lines, e.g. "2,5" (victim follows driver)
    #[arg(long, value_parser = parse_line_pair, value_name = "DRIVER,VICTIM")]
    bridge_lines: Option<(u8, u8)>,
}

/// Parse an address or size, accepting a 0x prefix
fn parse_address(s: &str) -> std::result::Result<u32, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else {
        s.parse::<u32>().map_err(|e| e.to_string())
    }
}

/// Parse a "driver,victim" address line pair
fn parse_line_pair(s: &str) -> std::result::Result<(u8, u8), String> {
    let (driver, victim) = s
        .split_once(',')
        .ok_or_else(|| "expected DRIVER,VICTIM".to_string())?;
    let driver = driver.trim().parse::<u8>().map_err(|e| e.to_string())?;
    let victim = victim.trim().parse::<u8>().map_err(|e| e.to_string())?;
    if driver >= 32 || victim >= 32 {
        return Err("address lines must be below 32".to_string());
    }
    Ok((driver, victim))
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("ramcheck v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // A plan file supplies the regions and mode; otherwise test the single
    // region given on the command line.
    let (mode, regions) = if let Some(path) = &args.plan {
        info!("loading region plan from: {}", path);
        let plan = TestPlan::load(path)?;
        let mode = if args.run_all {
            RunMode::RunAll
        } else {
            plan.mode
        };
        (mode, plan.regions)
    } else {
        let mode = if args.run_all {
            RunMode::RunAll
        } else {
            RunMode::StopAtFirstFault
        };
        let region = RegionPlan {
            name: "region".to_string(),
            base: args.base,
            size: args.size,
        };
        (mode, vec![region])
    };

    let mut all_passed = true;
    for region in &regions {
        info!(
            "region '{}': base 0x{:08X}, size 0x{:X}",
            region.name, region.base, region.size
        );

        // Validate the region before backing it: a zero-size or overflowing
        // plan entry is a configuration error, not a panic.
        let suite = MemTest::new(region.base, region.end())?.with_mode(mode);

        let mut ram = EmulatedRam::new(region.base, region.size);
        if let Some(bit) = args.stuck_data_bit {
            info!("injecting data line {} stuck at zero", bit);
            ram.inject(FaultInjection::StuckDataBit { bit, level: false });
        }
        if let Some(address) = args.stuck_byte {
            info!("injecting cell stuck at zero at 0x{:08X}", address);
            ram.inject(FaultInjection::StuckByte { address, value: 0 });
        }
        if let Some((driver, victim)) = args.bridge_lines {
            info!("injecting address line bridge: {} drives {}", driver, victim);
            ram.inject(FaultInjection::BridgedAddressLines { driver, victim });
        }

        let report = suite.run(&mut ram)?;

        if report.passed() {
            info!("region '{}' passed", region.name);
        } else {
            for fault in report.faults() {
                error!("region '{}': {}", region.name, fault);
            }
            all_passed = false;
        }
    }

    if !all_passed {
        std::process::exit(1);
    }
    Ok(())
}
