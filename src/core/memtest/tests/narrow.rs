// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 ramcheck developers

//! Byte and half-word access test tests

use super::*;

#[test]
fn test_passes_on_consistent_memory() {
    let mut ram = EmulatedRam::new(0x1000, 0x10);
    let outcome = test_narrow_access(&mut ram, 0x1000).unwrap();
    assert_eq!(outcome, TestOutcome::Passed);
}

#[test]
fn test_leaves_half_word_fixture_in_cell() {
    let mut ram = EmulatedRam::new(0x1000, 0x10);
    test_narrow_access(&mut ram, 0x1000).unwrap();

    // The final step leaves the half-word fixture in place
    assert_eq!(ram.read32(0x1000).unwrap(), 0x050A_50A0);
}

#[test]
fn test_detects_miswired_byte_lane() {
    // A byte lane forced high corrupts narrow writes; the word read-back of
    // the byte fixture no longer matches.
    let mut ram =
        EmulatedRam::new(0x1000, 0x10).with_fault(FaultInjection::StuckDataBit {
            bit: 1,
            level: true,
        });

    let outcome = test_narrow_access(&mut ram, 0x1000).unwrap();
    assert_eq!(
        outcome,
        TestOutcome::Faulted(MemoryFault::NarrowAccess { address: 0x1000 })
    );
}

#[test]
fn test_fault_is_reported_at_base() {
    let mut ram =
        EmulatedRam::new(0x2000, 0x10).with_fault(FaultInjection::StuckByte {
            address: 0x2003,
            value: 0xEE,
        });

    let outcome = test_narrow_access(&mut ram, 0x2000).unwrap();
    assert_eq!(
        outcome,
        TestOutcome::Faulted(MemoryFault::NarrowAccess { address: 0x2000 })
    );
}

#[test]
fn test_only_touches_its_cell() {
    let mut ram = EmulatedRam::new(0x1000, 0x10);
    ram.write32(0x1004, 0x5EA1_ED00).unwrap();

    test_narrow_access(&mut ram, 0x1000).unwrap();

    assert_eq!(ram.read32(0x1004).unwrap(), 0x5EA1_ED00);
}
