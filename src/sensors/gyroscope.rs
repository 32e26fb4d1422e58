//! Gyroscope range and filter settings

use crate::chip::FULL_SCALE_COUNTS;

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250 °/s (MPU-9250, ICM-20948)
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s
    Dps2000,
    /// ±4000 °/s (ICM-20649)
    Dps4000,
}

impl GyroRange {
    /// Every range, in ascending order
    pub const ALL: [Self; 5] = [
        Self::Dps250,
        Self::Dps500,
        Self::Dps1000,
        Self::Dps2000,
        Self::Dps4000,
    ];

    /// Full-scale value in degrees per second
    #[must_use]
    pub const fn full_scale_dps(self) -> f32 {
        match self {
            Self::Dps250 => 250.0,
            Self::Dps500 => 500.0,
            Self::Dps1000 => 1000.0,
            Self::Dps2000 => 2000.0,
            Self::Dps4000 => 4000.0,
        }
    }

    /// Scale factor in °/s per count
    #[must_use]
    pub fn scale(self) -> f32 {
        self.full_scale_dps() / FULL_SCALE_COUNTS
    }
}

/// Gyroscope digital low-pass filter bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroDlpf {
    /// 361 Hz (ICM)
    Hz361,
    /// 196 Hz (ICM)
    Hz196,
    /// 184 Hz (MPU-9250)
    Hz184,
    /// 151 Hz (ICM)
    Hz151,
    /// 119 Hz (ICM)
    Hz119,
    /// 92 Hz (MPU-9250)
    Hz92,
    /// 51 Hz (ICM)
    Hz51,
    /// 41 Hz (MPU-9250)
    Hz41,
    /// 23 Hz (ICM)
    Hz23,
    /// 20 Hz (MPU-9250)
    Hz20,
    /// 11 Hz (ICM)
    Hz11,
    /// 10 Hz (MPU-9250)
    Hz10,
    /// 5 Hz
    Hz5,
}

impl GyroDlpf {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz361 => 361,
            Self::Hz196 => 196,
            Self::Hz184 => 184,
            Self::Hz151 => 151,
            Self::Hz119 => 119,
            Self::Hz92 => 92,
            Self::Hz51 => 51,
            Self::Hz41 => 41,
            Self::Hz23 => 23,
            Self::Hz20 => 20,
            Self::Hz11 => 11,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }
}
