// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 ramcheck developers

//! Basic emulated RAM tests
//!
//! Construction, bounds reporting, and initial state.

use super::*;

#[test]
fn test_region_bounds() {
    let ram = EmulatedRam::new(0x1000, 0x1000);

    assert_eq!(ram.base(), 0x1000);
    assert_eq!(ram.size(), 0x1000);
    assert_eq!(ram.address_range(), (0x1000, 0x1FFF));
}

#[test]
fn test_initial_state_is_zero() {
    let mut ram = EmulatedRam::new(0x1000, 0x100);

    assert_eq!(ram.read32(0x1000).unwrap(), 0);
    assert_eq!(ram.read32(0x10FC).unwrap(), 0);
}

#[test]
fn test_accessor_name() {
    let ram = EmulatedRam::new(0, 16);
    assert_eq!(ram.name(), "emulated RAM");
}

#[test]
fn test_access_below_base() {
    let mut ram = EmulatedRam::new(0x1000, 0x100);

    assert!(ram.read8(0x0FFF).is_err());
    assert!(ram.read32(0x0FFC).is_err());
}

#[test]
fn test_access_past_end() {
    let mut ram = EmulatedRam::new(0x1000, 0x100);

    // Last valid word
    assert!(ram.read32(0x10FC).is_ok());

    // One past the end
    assert!(ram.read8(0x1100).is_err());
    assert!(ram.read32(0x1100).is_err());
}

#[test]
fn test_region_may_end_at_the_address_space_limit() {
    let mut ram = EmulatedRam::new(0xFFFF_FF00, 0x100);

    assert_eq!(ram.address_range(), (0xFFFF_FF00, 0xFFFF_FFFF));
    ram.write32(0xFFFF_FFFC, 0x12345678).unwrap();
    assert_eq!(ram.read32(0xFFFF_FFFC).unwrap(), 0x12345678);
}

#[test]
#[should_panic(expected = "region exceeds the address space")]
fn test_rejects_region_past_the_address_space() {
    let _ = EmulatedRam::new(0xFFFF_FFFC, 8);
}

#[test]
#[should_panic(expected = "region size must be nonzero")]
fn test_rejects_empty_region() {
    let _ = EmulatedRam::new(0x1000, 0);
}

#[test]
fn test_word_straddling_end() {
    let mut ram = EmulatedRam::new(0x1000, 6);

    // Aligned but extends past the last byte
    assert!(ram.read16(0x1004).is_ok());
    assert!(ram.write32(0x1004, 0).is_err());
}
