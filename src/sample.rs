//! Sample types and burst decoding
//!
//! A burst read is decoded in two steps. [`RawSample::decode`] pulls the
//! counts out of the buffer at the chip's offsets: inertial words are
//! big-endian, magnetometer words little-endian. [`ScaledSample`] is then
//! produced by scaling each vector and rotating it into the output frame.

use crate::chip::{BurstLayout, ChipSpec};
use crate::sensors::MagStatus;
use crate::state::DeviceState;

/// Three-axis measurement in physical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    /// X axis
    pub x: f32,
    /// Y axis
    pub y: f32,
    /// Z axis
    pub z: f32,
}

impl Vector3 {
    /// Create a vector
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Sign-extended counts of one burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Accelerometer counts in the sensor frame
    pub accel: [i16; 3],
    /// Gyroscope counts in the sensor frame
    pub gyro: [i16; 3],
    /// Temperature counts
    pub temp: i16,
    /// Magnetometer counts in the magnetometer frame
    pub mag: [i16; 3],
    /// Magnetometer status captured with the burst
    pub mag_status: MagStatus,
}

/// Calibrated sample in the output frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaledSample {
    /// Acceleration in m/s²
    pub accel: Vector3,
    /// Angular rate in rad/s (ICM parts) or °/s (MPU-9250)
    pub gyro: Vector3,
    /// Die temperature in °C
    pub temperature: f32,
    /// Magnetic flux density in µT
    pub mag: Vector3,
}

/// Big-endian signed word at `offset`
#[must_use]
pub fn be_i16(buffer: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes([buffer[offset], buffer[offset + 1]])
}

/// Little-endian signed word at `offset`
#[must_use]
pub fn le_i16(buffer: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([buffer[offset], buffer[offset + 1]])
}

fn be_triplet(buffer: &[u8], offset: usize) -> [i16; 3] {
    [
        be_i16(buffer, offset),
        be_i16(buffer, offset + 2),
        be_i16(buffer, offset + 4),
    ]
}

impl RawSample {
    /// Decode a burst buffer
    ///
    /// `buffer` must be at least `layout.len` bytes. When the layout has no
    /// magnetometer block, `previous` supplies the magnetometer fields. When
    /// it does, the new counts are taken only if the status bytes mark them
    /// fresh and in range; otherwise `previous` counts are kept alongside
    /// the new status.
    #[must_use]
    pub fn decode(layout: &BurstLayout, buffer: &[u8], previous: &Self) -> Self {
        let mut sample = Self {
            accel: be_triplet(buffer, layout.accel),
            gyro: be_triplet(buffer, layout.gyro),
            temp: be_i16(buffer, layout.temp),
            mag: previous.mag,
            mag_status: previous.mag_status,
        };

        if let Some(mag) = layout.mag {
            sample.mag_status = MagStatus {
                st1: buffer[mag.st1],
                st2: buffer[mag.st2],
            };
            if sample.mag_status.is_valid() {
                sample.mag = [
                    le_i16(buffer, mag.data),
                    le_i16(buffer, mag.data + 2),
                    le_i16(buffer, mag.data + 4),
                ];
            }
        }

        sample
    }
}

impl ScaledSample {
    /// Convert the inertial part of `raw`, keeping the magnetometer from `previous`
    #[must_use]
    pub fn inertial(
        spec: &ChipSpec,
        state: &DeviceState,
        raw: &RawSample,
        previous: &Self,
    ) -> Self {
        let units = &spec.units;
        Self {
            accel: spec
                .accel_axes
                .apply(raw.accel, state.accel.scale * units.accel_per_g)
                .into(),
            gyro: spec
                .gyro_axes
                .apply(raw.gyro, state.gyro.scale * units.gyro_per_dps)
                .into(),
            temperature: units.temp.celsius(raw.temp),
            mag: previous.mag,
        }
    }

    /// Convert magnetometer counts to µT in the output frame
    #[must_use]
    pub fn magnetic(spec: &ChipSpec, mag: [i16; 3]) -> Vector3 {
        spec.mag_axes.apply(mag, spec.units.mag_per_count).into()
    }
}
