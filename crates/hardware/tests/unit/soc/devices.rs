//! Accelerator device model tests.
//!
//! The device models are independent implementations of the reference
//! algorithms, so they are checked against them across their input space.

use hdlbench_core::common::constants::{ACCEL_WINDOW_SIZE, CRC32_IEEE_REFLECTED};
use hdlbench_core::reference::{software_crc32, software_isqrt};
use hdlbench_core::soc::devices::{Crc32Unit, Device, FpSqrt};
use proptest::prelude::*;
use rstest::rstest;

const CRC_DATA: u64 = 0x0;
const CRC_POLY: u64 = 0x4;

fn sqrt_unit() -> FpSqrt {
    FpSqrt::new(0x4000_0000, ACCEL_WINDOW_SIZE, 0)
}

fn crc_unit() -> Crc32Unit {
    Crc32Unit::new(0x6000_0000, ACCEL_WINDOW_SIZE, CRC32_IEEE_REFLECTED, 0)
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(144, 12)]
#[case(123_456, 351)]
#[case(u32::MAX, 65_535)]
fn test_fpsqrt_latches_root(#[case] radicand: u32, #[case] root: u32) {
    let mut unit = sqrt_unit();
    unit.write_u32(0, radicand);
    assert_eq!(unit.read_u32(0), root);
    // Reading does not consume the result.
    assert_eq!(unit.read_u32(0), root);
}

#[test]
fn test_fpsqrt_fault_mask_flips_result() {
    let mut unit = FpSqrt::new(0x4000_0000, ACCEL_WINDOW_SIZE, 0x1);
    unit.write_u32(0, 144);
    assert_eq!(unit.read_u32(0), 13);
}

#[test]
fn test_fpsqrt_ignores_other_offsets_and_resets() {
    let mut unit = sqrt_unit();
    unit.write_u32(0, 49);
    unit.write_u32(0x8, 10_000);
    assert_eq!(unit.read_u32(0x8), 0);
    assert_eq!(unit.read_u32(0), 7);

    unit.reset();
    assert_eq!(unit.read_u32(0), 0);
}

#[test]
fn test_device_identity() {
    assert_eq!(sqrt_unit().name(), "FPSQRT");
    assert_eq!(sqrt_unit().address_range(), (0x4000_0000, ACCEL_WINDOW_SIZE));
    assert_eq!(crc_unit().name(), "CRC32");
    assert_eq!(crc_unit().address_range(), (0x6000_0000, ACCEL_WINDOW_SIZE));
}

#[test]
fn test_crc_unit_reset_polynomial() {
    let mut unit = crc_unit();
    assert_eq!(unit.read_u32(CRC_POLY), CRC32_IEEE_REFLECTED);

    unit.write_u32(CRC_POLY, 0x04C1_1DB7);
    assert_eq!(unit.polynomial(), 0x04C1_1DB7);
    unit.write_u32(CRC_DATA, 1);
    assert_eq!(unit.read_u32(CRC_DATA), software_crc32(1, 0x04C1_1DB7));

    unit.reset();
    assert_eq!(unit.read_u32(CRC_POLY), CRC32_IEEE_REFLECTED);
    assert_eq!(unit.read_u32(CRC_DATA), 0);
}

#[test]
fn test_crc_unit_fault_mask() {
    let mut unit = Crc32Unit::new(0x6000_0000, ACCEL_WINDOW_SIZE, CRC32_IEEE_REFLECTED, 0xFF00);
    unit.write_u32(CRC_DATA, 0xDEAD_BEEF);
    assert_eq!(
        unit.read_u32(CRC_DATA),
        software_crc32(0xDEAD_BEEF, CRC32_IEEE_REFLECTED) ^ 0xFF00
    );
}

proptest! {
    #[test]
    fn prop_fpsqrt_matches_reference(n in any::<u32>()) {
        let mut unit = sqrt_unit();
        unit.write_u32(0, n);
        prop_assert_eq!(unit.read_u32(0), software_isqrt(n));
    }

    #[test]
    fn prop_crc_unit_matches_reference(data in any::<u32>(), poly in any::<u32>()) {
        let mut unit = crc_unit();
        unit.write_u32(CRC_POLY, poly);
        unit.write_u32(CRC_DATA, data);
        prop_assert_eq!(unit.read_u32(CRC_DATA), software_crc32(data, poly));
    }
}
