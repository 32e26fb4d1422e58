use super::{AxisMap, BurstLayout, ChipSpec, Defaults, DlpfEntry, RangeEntry, Units};
use crate::sensors::{AccelDlpf, AccelRange, GyroDlpf, GyroRange, TempModel};

/// Standard gravity as the MPU-9250 conversion has always used it
const GRAVITY: f32 = 9.807;

const ACCEL_RANGES: [RangeEntry<AccelRange>; 4] = [
    RangeEntry { range: AccelRange::G2, bits: 0 },
    RangeEntry { range: AccelRange::G4, bits: 1 },
    RangeEntry { range: AccelRange::G8, bits: 2 },
    RangeEntry { range: AccelRange::G16, bits: 3 },
];

const GYRO_RANGES: [RangeEntry<GyroRange>; 4] = [
    RangeEntry { range: GyroRange::Dps250, bits: 0 },
    RangeEntry { range: GyroRange::Dps500, bits: 1 },
    RangeEntry { range: GyroRange::Dps1000, bits: 2 },
    RangeEntry { range: GyroRange::Dps2000, bits: 3 },
];

const ACCEL_DLPFS: [DlpfEntry<AccelDlpf>; 6] = [
    DlpfEntry { bandwidth: AccelDlpf::Hz184, bits: 1 },
    DlpfEntry { bandwidth: AccelDlpf::Hz92, bits: 2 },
    DlpfEntry { bandwidth: AccelDlpf::Hz41, bits: 3 },
    DlpfEntry { bandwidth: AccelDlpf::Hz20, bits: 4 },
    DlpfEntry { bandwidth: AccelDlpf::Hz10, bits: 5 },
    DlpfEntry { bandwidth: AccelDlpf::Hz5, bits: 6 },
];

const GYRO_DLPFS: [DlpfEntry<GyroDlpf>; 6] = [
    DlpfEntry { bandwidth: GyroDlpf::Hz184, bits: 1 },
    DlpfEntry { bandwidth: GyroDlpf::Hz92, bits: 2 },
    DlpfEntry { bandwidth: GyroDlpf::Hz41, bits: 3 },
    DlpfEntry { bandwidth: GyroDlpf::Hz20, bits: 4 },
    DlpfEntry { bandwidth: GyroDlpf::Hz10, bits: 5 },
    DlpfEntry { bandwidth: GyroDlpf::Hz5, bits: 6 },
];

pub(super) const SPEC: ChipSpec = ChipSpec {
    name: "MPU-9250",
    who_am_i: 0x71,
    accel_ranges: &ACCEL_RANGES,
    gyro_ranges: &GYRO_RANGES,
    accel_dlpfs: &ACCEL_DLPFS,
    gyro_dlpfs: &GYRO_DLPFS,
    // The temperature path follows DLPF_CFG
    temp_dlpfs: &[],
    internal_rate_hz: 1000,
    layout: BurstLayout {
        len: 14,
        accel: 0,
        temp: 6,
        gyro: 8,
        mag: None,
    },
    accel_axes: AxisMap::IDENTITY,
    gyro_axes: AxisMap::IDENTITY,
    mag_axes: AxisMap::IDENTITY,
    units: Units {
        accel_per_g: GRAVITY,
        gyro_per_dps: 1.0,
        temp: TempModel::INVENSENSE,
        mag_per_count: 0.0,
    },
    defaults: Defaults {
        accel_range: AccelRange::G16,
        gyro_range: GyroRange::Dps2000,
        accel_dlpf: AccelDlpf::Hz184,
        gyro_dlpf: GyroDlpf::Hz184,
        temp_dlpf: None,
        srd: 0,
        mag_mode: None,
    },
    aux: None,
};
