// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 ramcheck developers

//! Fault injection tests
//!
//! Each injection model must distort accesses the way the corresponding
//! hardware fault would, since the diagnostic suite's own tests rely on it.

use super::*;

#[test]
fn test_stuck_data_bit_low() {
    let mut ram =
        EmulatedRam::new(0x1000, 0x100).with_fault(FaultInjection::StuckDataBit {
            bit: 5,
            level: false,
        });

    ram.write32(0x1000, 0xFFFF_FFFF).unwrap();
    assert_eq!(ram.read32(0x1000).unwrap(), 0xFFFF_FFDF);
}

#[test]
fn test_stuck_data_bit_high() {
    let mut ram =
        EmulatedRam::new(0x1000, 0x100).with_fault(FaultInjection::StuckDataBit {
            bit: 0,
            level: true,
        });

    ram.write32(0x1000, 0).unwrap();
    assert_eq!(ram.read32(0x1000).unwrap(), 1);
}

#[test]
fn test_stuck_data_bit_only_affects_wide_enough_transfers() {
    // Line 20 only exists on 32-bit transfers
    let mut ram =
        EmulatedRam::new(0x1000, 0x100).with_fault(FaultInjection::StuckDataBit {
            bit: 20,
            level: false,
        });

    ram.write8(0x1000, 0xFF).unwrap();
    ram.write8(0x1001, 0xFF).unwrap();
    assert_eq!(ram.read8(0x1000).unwrap(), 0xFF);
    assert_eq!(ram.read16(0x1000).unwrap(), 0xFFFF);

    ram.write32(0x1004, 0xFFFF_FFFF).unwrap();
    assert_eq!(ram.read32(0x1004).unwrap(), 0xFFEF_FFFF);
}

#[test]
fn test_bridged_address_lines_alias() {
    // Line 5 follows line 2: offset 0x20 aliases offset 0
    let mut ram =
        EmulatedRam::new(0x1000, 0x1000).with_fault(FaultInjection::BridgedAddressLines {
            driver: 2,
            victim: 5,
        });

    ram.write32(0x1020, 0xDEADBEEF).unwrap();
    assert_eq!(ram.read32(0x1000).unwrap(), 0xDEADBEEF);
    assert_eq!(ram.read32(0x1020).unwrap(), 0xDEADBEEF);

    // An offset with both lines set is unaffected
    ram.write32(0x1024, 0x11111111).unwrap();
    assert_eq!(ram.read32(0x1024).unwrap(), 0x11111111);
    assert_eq!(ram.read32(0x1000).unwrap(), 0xDEADBEEF);
}

#[test]
fn test_stuck_address_line_low() {
    // Offset 0x10 collapses onto offset 0
    let mut ram =
        EmulatedRam::new(0x1000, 0x1000).with_fault(FaultInjection::StuckAddressLine {
            bit: 4,
            level: false,
        });

    ram.write32(0x1010, 0xCAFEBABE).unwrap();
    assert_eq!(ram.read32(0x1000).unwrap(), 0xCAFEBABE);
}

#[test]
fn test_stuck_address_line_high() {
    // Offset 0 is forced up to offset 0x10
    let mut ram =
        EmulatedRam::new(0x1000, 0x1000).with_fault(FaultInjection::StuckAddressLine {
            bit: 4,
            level: true,
        });

    ram.write32(0x1000, 0x55AA55AA).unwrap();
    assert_eq!(ram.read32(0x1010).unwrap(), 0x55AA55AA);
}

#[test]
fn test_stuck_byte_reads_constant() {
    let mut ram = EmulatedRam::new(0x1000, 0x1000).with_fault(FaultInjection::StuckByte {
        address: 0x1200,
        value: 0,
    });

    ram.write32(0x1200, 0xFFFF_FFFF).unwrap();
    assert_eq!(ram.read32(0x1200).unwrap(), 0xFFFF_FF00);
    assert_eq!(ram.read8(0x1200).unwrap(), 0x00);

    // Neighboring bytes are intact
    assert_eq!(ram.read8(0x1201).unwrap(), 0xFF);
}

#[test]
fn test_stuck_byte_drops_writes() {
    let mut ram = EmulatedRam::new(0x1000, 0x100).with_fault(FaultInjection::StuckByte {
        address: 0x1000,
        value: 0x42,
    });

    ram.write8(0x1000, 0xAA).unwrap();
    assert_eq!(ram.read8(0x1000).unwrap(), 0x42);
}

#[test]
fn test_faults_accumulate() {
    let mut ram = EmulatedRam::new(0x1000, 0x100);
    ram.inject(FaultInjection::StuckDataBit { bit: 0, level: false });
    ram.inject(FaultInjection::StuckDataBit { bit: 1, level: false });

    ram.write32(0x1000, 0xF).unwrap();
    assert_eq!(ram.read32(0x1000).unwrap(), 0xC);
}
