//! The ICM-20649 shares the ICM-20948 register block and filters but trades
//! the magnetometer for wider ranges.

use super::icm20948::{ACCEL_DLPFS, GYRO_DLPFS, TEMP_DLPFS};
use super::{
    AxisMap, AxisTerm, BurstLayout, ChipSpec, Defaults, RangeEntry, Units, DEG_TO_RAD,
    STANDARD_GRAVITY,
};
use crate::sensors::{AccelDlpf, AccelRange, GyroDlpf, GyroRange, TempModel};

const ACCEL_RANGES: [RangeEntry<AccelRange>; 4] = [
    RangeEntry { range: AccelRange::G4, bits: 0 },
    RangeEntry { range: AccelRange::G8, bits: 1 },
    RangeEntry { range: AccelRange::G16, bits: 2 },
    RangeEntry { range: AccelRange::G30, bits: 3 },
];

const GYRO_RANGES: [RangeEntry<GyroRange>; 4] = [
    RangeEntry { range: GyroRange::Dps500, bits: 0 },
    RangeEntry { range: GyroRange::Dps1000, bits: 1 },
    RangeEntry { range: GyroRange::Dps2000, bits: 2 },
    RangeEntry { range: GyroRange::Dps4000, bits: 3 },
];

pub(super) const SPEC: ChipSpec = ChipSpec {
    name: "ICM-20649",
    who_am_i: 0xE1,
    accel_ranges: &ACCEL_RANGES,
    gyro_ranges: &GYRO_RANGES,
    accel_dlpfs: &ACCEL_DLPFS,
    gyro_dlpfs: &GYRO_DLPFS,
    temp_dlpfs: &TEMP_DLPFS,
    internal_rate_hz: 1125,
    layout: BurstLayout {
        len: 14,
        accel: 0,
        gyro: 6,
        temp: 12,
        mag: None,
    },
    accel_axes: AxisMap([AxisTerm::pos(0), AxisTerm::neg(1), AxisTerm::neg(2)]),
    gyro_axes: AxisMap([AxisTerm::pos(0), AxisTerm::neg(1), AxisTerm::neg(2)]),
    mag_axes: AxisMap::IDENTITY,
    units: Units {
        accel_per_g: STANDARD_GRAVITY,
        gyro_per_dps: DEG_TO_RAD,
        temp: TempModel::INVENSENSE,
        mag_per_count: 0.0,
    },
    defaults: Defaults {
        accel_range: AccelRange::G30,
        gyro_range: GyroRange::Dps4000,
        accel_dlpf: AccelDlpf::Hz111,
        gyro_dlpf: GyroDlpf::Hz119,
        temp_dlpf: None,
        srd: 0,
        mag_mode: None,
    },
    aux: None,
};
