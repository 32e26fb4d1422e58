//! Die temperature sensor

/// Temperature sensor low-pass filter bandwidth (ICM parts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempDlpf {
    /// 7932 Hz (filter bypassed)
    Hz7932,
    /// 217 Hz
    Hz217,
    /// 123 Hz
    Hz123,
    /// 65 Hz
    Hz65,
    /// 34 Hz
    Hz34,
    /// 17 Hz
    Hz17,
    /// 8 Hz
    Hz8,
}

impl TempDlpf {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz7932 => 7932,
            Self::Hz217 => 217,
            Self::Hz123 => 123,
            Self::Hz65 => 65,
            Self::Hz34 => 34,
            Self::Hz17 => 17,
            Self::Hz8 => 8,
        }
    }
}

/// Linear temperature model of the die sensor
///
/// `°C = (counts - offset) / sensitivity + reference`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempModel {
    /// Count offset at the reference temperature
    pub offset: f32,
    /// Counts per °C
    pub sensitivity: f32,
    /// Reference temperature in °C
    pub reference: f32,
}

impl TempModel {
    /// Model shared by the MPU-9250 and ICM-20x48 families
    pub const INVENSENSE: Self = Self {
        offset: 21.0,
        sensitivity: 333.87,
        reference: 21.0,
    };

    /// Convert raw counts to °C
    #[must_use]
    pub fn celsius(&self, raw: i16) -> f32 {
        (f32::from(raw) - self.offset) / self.sensitivity + self.reference
    }
}
