//! Chip descriptors
//!
//! Every supported part is described by one [`ChipSpec`] constant: which
//! ranges and filter bandwidths it accepts and the field values selecting
//! them, how a burst read is laid out and how the raw axes map onto the
//! output frame. The driver itself is written once against this description.
//!
//! The marker types [`Mpu9250`], [`Icm20649`] and [`Icm20948`] pick a
//! descriptor and a register block at compile time through the sealed
//! [`Chip`] trait.

mod icm20649;
mod icm20948;
mod mpu9250;

use device_driver::RegisterInterface;

use crate::bank::BankedRegisters;
use crate::block::ChipRegisters;
use crate::registers::icm20x48::Icm20x48Registers;
use crate::registers::mpu9250::Mpu9250Registers;
use crate::sensors::{AccelDlpf, AccelRange, GyroDlpf, GyroRange, MagMode, TempDlpf, TempModel};

/// Counts spanning one full-scale range on a signed 16-bit output
pub const FULL_SCALE_COUNTS: f32 = 32767.5;

/// Longest burst read of any supported chip
pub const MAX_BURST_LEN: usize = 23;

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Degrees to radians
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Supported range and the field bits that select it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry<R> {
    /// Range setting
    pub range: R,
    /// Value of the range field
    pub bits: u8,
}

/// Supported filter bandwidth and the field bits that select it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DlpfEntry<B> {
    /// Bandwidth setting
    pub bandwidth: B,
    /// Value of the DLPF field
    pub bits: u8,
}

/// Offsets of the magnetometer block inside a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagLayout {
    /// `ST1`
    pub st1: usize,
    /// `HXL`, start of three little-endian words
    pub data: usize,
    /// `ST2`
    pub st2: usize,
}

/// Byte offsets of each quantity inside one burst read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstLayout {
    /// Total burst length
    pub len: usize,
    /// Accelerometer X high byte
    pub accel: usize,
    /// Gyroscope X high byte
    pub gyro: usize,
    /// Temperature high byte
    pub temp: usize,
    /// Magnetometer block, if mirrored into the burst
    pub mag: Option<MagLayout>,
}

/// One output axis expressed as a signed raw axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisTerm {
    /// Raw axis index (0 = x, 1 = y, 2 = z)
    pub source: usize,
    /// Whether the raw axis is inverted
    pub negate: bool,
}

impl AxisTerm {
    /// Raw axis taken as is
    #[must_use]
    pub const fn pos(source: usize) -> Self {
        Self {
            source,
            negate: false,
        }
    }

    /// Raw axis inverted
    #[must_use]
    pub const fn neg(source: usize) -> Self {
        Self {
            source,
            negate: true,
        }
    }
}

/// Mapping from the sensor frame to the output frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap(pub [AxisTerm; 3]);

impl AxisMap {
    /// Output frame equals the sensor frame
    pub const IDENTITY: Self = Self([AxisTerm::pos(0), AxisTerm::pos(1), AxisTerm::pos(2)]);

    /// Rotate `raw` into the output frame, scaling every axis by `scale`
    #[must_use]
    pub fn apply(&self, raw: [i16; 3], scale: f32) -> [f32; 3] {
        self.0.map(|term| {
            let value = f32::from(raw[term.source]) * scale;
            if term.negate {
                -value
            } else {
                value
            }
        })
    }
}

/// Conversion constants from counts to physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Units {
    /// Output acceleration unit per g
    pub accel_per_g: f32,
    /// Output angular rate unit per °/s
    pub gyro_per_dps: f32,
    /// Die temperature model
    pub temp: TempModel,
    /// µT per magnetometer count
    pub mag_per_count: f32,
}

/// Settings applied by `begin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Accelerometer range
    pub accel_range: AccelRange,
    /// Gyroscope range
    pub gyro_range: GyroRange,
    /// Accelerometer DLPF
    pub accel_dlpf: AccelDlpf,
    /// Gyroscope DLPF
    pub gyro_dlpf: GyroDlpf,
    /// Temperature DLPF, where the chip has one worth setting
    pub temp_dlpf: Option<TempDlpf>,
    /// Sample rate divider
    pub srd: u8,
    /// Magnetometer mode, for chips with an auxiliary magnetometer
    pub mag_mode: Option<MagMode>,
}

/// Auxiliary I2C master and the magnetometer wired to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxMaster {
    /// `I2C_MST_CLK` value selecting a 400 kHz master clock
    pub mst_clock_400khz: u8,
    /// 7-bit address of the auxiliary device
    pub device_address: u8,
    /// Identity register of the auxiliary device
    pub identity_register: u8,
    /// Expected identity value
    pub identity: u8,
}

/// Longest transfer `I2C_SLV0_CTRL` can express
pub const SLV0_MAX_LEN: usize = 0x0F;

/// Complete description of one chip variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipSpec {
    /// Human readable part name
    pub name: &'static str,
    /// Expected identity byte
    pub who_am_i: u8,
    /// Supported accelerometer ranges
    pub accel_ranges: &'static [RangeEntry<AccelRange>],
    /// Supported gyroscope ranges
    pub gyro_ranges: &'static [RangeEntry<GyroRange>],
    /// Supported accelerometer bandwidths
    pub accel_dlpfs: &'static [DlpfEntry<AccelDlpf>],
    /// Supported gyroscope bandwidths
    pub gyro_dlpfs: &'static [DlpfEntry<GyroDlpf>],
    /// Supported temperature bandwidths, empty when the chip has no
    /// separate temperature filter
    pub temp_dlpfs: &'static [DlpfEntry<TempDlpf>],
    /// Internal sample rate that the divider scales down
    pub internal_rate_hz: u16,
    /// Burst read layout
    pub layout: BurstLayout,
    /// Accelerometer axis remap
    pub accel_axes: AxisMap,
    /// Gyroscope axis remap
    pub gyro_axes: AxisMap,
    /// Magnetometer axis remap
    pub mag_axes: AxisMap,
    /// Unit conversion
    pub units: Units,
    /// Bring-up defaults
    pub defaults: Defaults,
    /// Auxiliary I2C master, if the chip carries a magnetometer behind one
    pub aux: Option<AuxMaster>,
}

impl ChipSpec {
    /// Field bits for an accelerometer range, if supported
    #[must_use]
    pub fn accel_range_bits(&self, range: AccelRange) -> Option<u8> {
        lookup(self.accel_ranges, |e| e.range == range).map(|e| e.bits)
    }

    /// Field bits for a gyroscope range, if supported
    #[must_use]
    pub fn gyro_range_bits(&self, range: GyroRange) -> Option<u8> {
        lookup(self.gyro_ranges, |e| e.range == range).map(|e| e.bits)
    }

    /// Accelerometer range encoded by the power-on field value
    #[must_use]
    pub fn power_on_accel_range(&self) -> AccelRange {
        lookup(self.accel_ranges, |e| e.bits == 0).map_or(self.defaults.accel_range, |e| e.range)
    }

    /// Gyroscope range encoded by the power-on field value
    #[must_use]
    pub fn power_on_gyro_range(&self) -> GyroRange {
        lookup(self.gyro_ranges, |e| e.bits == 0).map_or(self.defaults.gyro_range, |e| e.range)
    }

    /// Field bits for an accelerometer bandwidth, if supported
    #[must_use]
    pub fn accel_dlpf_bits(&self, bandwidth: AccelDlpf) -> Option<u8> {
        lookup(self.accel_dlpfs, |e| e.bandwidth == bandwidth).map(|e| e.bits)
    }

    /// Field bits for a gyroscope bandwidth, if supported
    #[must_use]
    pub fn gyro_dlpf_bits(&self, bandwidth: GyroDlpf) -> Option<u8> {
        lookup(self.gyro_dlpfs, |e| e.bandwidth == bandwidth).map(|e| e.bits)
    }

    /// Field bits for a temperature bandwidth, if supported
    #[must_use]
    pub fn temp_dlpf_bits(&self, bandwidth: TempDlpf) -> Option<u8> {
        lookup(self.temp_dlpfs, |e| e.bandwidth == bandwidth).map(|e| e.bits)
    }

    /// Divider that yields `rate_hz`, if the rate is reachable
    #[must_use]
    pub fn srd_for_rate(&self, rate_hz: u16) -> Option<u8> {
        if rate_hz == 0 || rate_hz > self.internal_rate_hz {
            return None;
        }
        u8::try_from(self.internal_rate_hz / rate_hz - 1).ok()
    }

    /// Output data rate produced by `srd`
    #[must_use]
    pub fn output_rate_hz(&self, srd: u8) -> f32 {
        f32::from(self.internal_rate_hz) / (1.0 + f32::from(srd))
    }
}

fn lookup<T: Copy>(table: &[T], predicate: impl Fn(&T) -> bool) -> Option<T> {
    table.iter().copied().find(|entry| predicate(entry))
}

mod sealed {
    pub trait Sealed {}
}

/// Chip variant marker
///
/// Implemented only by the marker types in this crate.
pub trait Chip: sealed::Sealed {
    /// Descriptor of this variant
    const SPEC: &'static ChipSpec;

    /// Register block of this variant over transport `I`
    type Registers<I: RegisterInterface<AddressType = u8>>: ChipRegisters<Interface = I>;
}

/// InvenSense MPU-9250
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mpu9250;

/// TDK InvenSense ICM-20649 (high-g, high-rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Icm20649;

/// TDK InvenSense ICM-20948 with AK09916 magnetometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Icm20948;

impl sealed::Sealed for Mpu9250 {}
impl sealed::Sealed for Icm20649 {}
impl sealed::Sealed for Icm20948 {}

impl Chip for Mpu9250 {
    const SPEC: &'static ChipSpec = &mpu9250::SPEC;

    type Registers<I: RegisterInterface<AddressType = u8>> = Mpu9250Registers<I>;
}

impl Chip for Icm20649 {
    const SPEC: &'static ChipSpec = &icm20649::SPEC;

    type Registers<I: RegisterInterface<AddressType = u8>> =
        BankedRegisters<Icm20x48Registers<I>>;
}

impl Chip for Icm20948 {
    const SPEC: &'static ChipSpec = &icm20948::SPEC;

    type Registers<I: RegisterInterface<AddressType = u8>> =
        BankedRegisters<Icm20x48Registers<I>>;
}
