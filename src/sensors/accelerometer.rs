//! Accelerometer range and filter settings
//!
//! The enumerations cover every setting across the supported chips. Each
//! chip's descriptor lists the subset it accepts together with the field
//! bits that encode it; anything outside that subset is rejected before a
//! register is touched.

use crate::chip::FULL_SCALE_COUNTS;

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g (MPU-9250, ICM-20948)
    G2,
    /// ±4g
    G4,
    /// ±8g
    G8,
    /// ±16g
    G16,
    /// ±30g (ICM-20649)
    G30,
}

impl AccelRange {
    /// Every range, in ascending order
    pub const ALL: [Self; 5] = [Self::G2, Self::G4, Self::G8, Self::G16, Self::G30];

    /// Full-scale value in g that maps onto the signed 16-bit output
    ///
    /// The ±30g setting is a nominal label; the ICM-20649 outputs 1024 LSB/g
    /// there, so the converter span is 32g.
    #[must_use]
    pub const fn full_scale_g(self) -> f32 {
        match self {
            Self::G2 => 2.0,
            Self::G4 => 4.0,
            Self::G8 => 8.0,
            Self::G16 => 16.0,
            Self::G30 => 32.0,
        }
    }

    /// Scale factor in g per count
    #[must_use]
    pub fn scale(self) -> f32 {
        self.full_scale_g() / FULL_SCALE_COUNTS
    }
}

/// Accelerometer digital low-pass filter bandwidth
///
/// Bandwidths are the 3dB points rounded down to whole hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelDlpf {
    /// 473 Hz (ICM)
    Hz473,
    /// 246 Hz (ICM)
    Hz246,
    /// 184 Hz (MPU-9250)
    Hz184,
    /// 111 Hz (ICM)
    Hz111,
    /// 92 Hz (MPU-9250)
    Hz92,
    /// 50 Hz (ICM)
    Hz50,
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

impl AccelDlpf {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz473 => 473,
            Self::Hz246 => 246,
            Self::Hz184 => 184,
            Self::Hz111 => 111,
            Self::Hz92 => 92,
            Self::Hz50 => 50,
            Self::Hz41 => 41,
            Self::Hz23 => 23,
            Self::Hz20 => 20,
            Self::Hz11 => 11,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }
}
