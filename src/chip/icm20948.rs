use super::{
    AuxMaster, AxisMap, AxisTerm, BurstLayout, ChipSpec, Defaults, DlpfEntry, MagLayout,
    RangeEntry, Units, DEG_TO_RAD, STANDARD_GRAVITY,
};
use crate::sensors::magnetometer::{
    AK09916_BLOCK_LEN, AK09916_I2C_ADDRESS, AK09916_REG_HXL, AK09916_REG_ST1, AK09916_REG_ST2,
    AK09916_REG_WIA2, AK09916_UT_PER_COUNT, AK09916_WIA2_VALUE,
};
use crate::sensors::{AccelDlpf, AccelRange, GyroDlpf, GyroRange, MagMode, TempDlpf, TempModel};

/// `EXT_SLV_SENS_DATA_00` follows `TEMP_OUT_L` directly
const MAG_OFFSET: usize = 14;

pub(super) const ACCEL_RANGES: [RangeEntry<AccelRange>; 4] = [
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

pub(super) const ACCEL_DLPFS: [DlpfEntry<AccelDlpf>; 7] = [
    DlpfEntry { bandwidth: AccelDlpf::Hz246, bits: 1 },
    DlpfEntry { bandwidth: AccelDlpf::Hz111, bits: 2 },
    DlpfEntry { bandwidth: AccelDlpf::Hz50, bits: 3 },
    DlpfEntry { bandwidth: AccelDlpf::Hz23, bits: 4 },
    DlpfEntry { bandwidth: AccelDlpf::Hz11, bits: 5 },
    DlpfEntry { bandwidth: AccelDlpf::Hz5, bits: 6 },
    DlpfEntry { bandwidth: AccelDlpf::Hz473, bits: 7 },
];

pub(super) const GYRO_DLPFS: [DlpfEntry<GyroDlpf>; 8] = [
    DlpfEntry { bandwidth: GyroDlpf::Hz196, bits: 0 },
    DlpfEntry { bandwidth: GyroDlpf::Hz151, bits: 1 },
    DlpfEntry { bandwidth: GyroDlpf::Hz119, bits: 2 },
    DlpfEntry { bandwidth: GyroDlpf::Hz51, bits: 3 },
    DlpfEntry { bandwidth: GyroDlpf::Hz23, bits: 4 },
    DlpfEntry { bandwidth: GyroDlpf::Hz11, bits: 5 },
    DlpfEntry { bandwidth: GyroDlpf::Hz5, bits: 6 },
    DlpfEntry { bandwidth: GyroDlpf::Hz361, bits: 7 },
];

pub(super) const TEMP_DLPFS: [DlpfEntry<TempDlpf>; 7] = [
    DlpfEntry { bandwidth: TempDlpf::Hz7932, bits: 0 },
    DlpfEntry { bandwidth: TempDlpf::Hz217, bits: 1 },
    DlpfEntry { bandwidth: TempDlpf::Hz123, bits: 2 },
    DlpfEntry { bandwidth: TempDlpf::Hz65, bits: 3 },
    DlpfEntry { bandwidth: TempDlpf::Hz34, bits: 4 },
    DlpfEntry { bandwidth: TempDlpf::Hz17, bits: 5 },
    DlpfEntry { bandwidth: TempDlpf::Hz8, bits: 6 },
];

pub(super) const SPEC: ChipSpec = ChipSpec {
    name: "ICM-20948",
    who_am_i: 0xEA,
    accel_ranges: &ACCEL_RANGES,
    gyro_ranges: &GYRO_RANGES,
    accel_dlpfs: &ACCEL_DLPFS,
    gyro_dlpfs: &GYRO_DLPFS,
    temp_dlpfs: &TEMP_DLPFS,
    internal_rate_hz: 1125,
    layout: BurstLayout {
        len: MAG_OFFSET + AK09916_BLOCK_LEN,
        accel: 0,
        gyro: 6,
        temp: 12,
        mag: Some(MagLayout {
            st1: MAG_OFFSET,
            data: MAG_OFFSET + (AK09916_REG_HXL - AK09916_REG_ST1) as usize,
            st2: MAG_OFFSET + (AK09916_REG_ST2 - AK09916_REG_ST1) as usize,
        }),
    },
    accel_axes: AxisMap([AxisTerm::pos(1), AxisTerm::pos(0), AxisTerm::neg(2)]),
    gyro_axes: AxisMap([AxisTerm::pos(1), AxisTerm::pos(0), AxisTerm::neg(2)]),
    mag_axes: AxisMap([AxisTerm::neg(1), AxisTerm::pos(0), AxisTerm::pos(2)]),
    units: Units {
        accel_per_g: STANDARD_GRAVITY,
        gyro_per_dps: DEG_TO_RAD,
        temp: TempModel::INVENSENSE,
        mag_per_count: AK09916_UT_PER_COUNT,
    },
    defaults: Defaults {
        accel_range: AccelRange::G16,
        gyro_range: GyroRange::Dps2000,
        accel_dlpf: AccelDlpf::Hz473,
        gyro_dlpf: GyroDlpf::Hz361,
        temp_dlpf: Some(TempDlpf::Hz7932),
        srd: 0,
        mag_mode: Some(MagMode::Continuous10Hz),
    },
    aux: Some(AuxMaster {
        mst_clock_400khz: 0x07,
        device_address: AK09916_I2C_ADDRESS,
        identity_register: AK09916_REG_WIA2,
        identity: AK09916_WIA2_VALUE,
    }),
};
