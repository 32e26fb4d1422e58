//! AK09916 magnetometer
//!
//! The AK09916 sits behind the ICM-20948's auxiliary I2C master and is only
//! reachable through the I2C_SLV0 bridge. Its measurement block (ST1 through
//! ST2) is mirrored into the ICM's external sensor data registers, so a
//! single burst read returns inertial and magnetic data together.

/// AK09916 magnetometer I2C address
pub const AK09916_I2C_ADDRESS: u8 = 0x0C;

/// AK09916 `WHO_AM_I` register address
pub const AK09916_REG_WIA2: u8 = 0x01;

/// Expected `WHO_AM_I` value for AK09916
pub const AK09916_WIA2_VALUE: u8 = 0x09;

/// AK09916 Status 1 register address
pub const AK09916_REG_ST1: u8 = 0x10;

/// AK09916 measurement data start register (HXL)
pub const AK09916_REG_HXL: u8 = 0x11;

/// AK09916 dummy temperature register, read to keep the block contiguous
pub const AK09916_REG_TMPS: u8 = 0x17;

/// AK09916 Status 2 register address
pub const AK09916_REG_ST2: u8 = 0x18;

/// AK09916 Control 2 register address (mode control)
pub const AK09916_REG_CNTL2: u8 = 0x31;

/// AK09916 Control 3 register address (reset)
pub const AK09916_REG_CNTL3: u8 = 0x32;

/// `CNTL3` soft reset bit; clears itself once the reset completes
pub const AK09916_CNTL3_SRST: u8 = 0x01;

/// `ST1` data ready bit
pub const AK09916_ST1_DRDY: u8 = 0x01;

/// `ST1` data overrun bit
pub const AK09916_ST1_DOR: u8 = 0x02;

/// `ST2` magnetic sensor overflow bit
pub const AK09916_ST2_HOFL: u8 = 0x08;

/// Length of the measurement block from `ST1` through `ST2`
pub const AK09916_BLOCK_LEN: usize = 9;

/// Flux density per count in µT (±4912 µT over ±32752 counts)
pub const AK09916_UT_PER_COUNT: f32 = 4912.0 / 32752.0;

/// Magnetometer operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagMode {
    /// Power-down mode
    PowerDown = 0x00,
    /// Single measurement mode
    Single = 0x01,
    /// Continuous measurement mode 1 (10 Hz)
    Continuous10Hz = 0x02,
    /// Continuous measurement mode 2 (20 Hz)
    Continuous20Hz = 0x04,
    /// Continuous measurement mode 3 (50 Hz)
    Continuous50Hz = 0x06,
    /// Continuous measurement mode 4 (100 Hz)
    Continuous100Hz = 0x08,
    /// Self-test mode
    SelfTest = 0x10,
}

impl MagMode {
    /// `CNTL2` register value for this mode
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Get the sample rate in Hz for continuous modes
    #[must_use]
    pub const fn sample_rate_hz(self) -> Option<u8> {
        match self {
            Self::Continuous10Hz => Some(10),
            Self::Continuous20Hz => Some(20),
            Self::Continuous50Hz => Some(50),
            Self::Continuous100Hz => Some(100),
            _ => None,
        }
    }

    /// Check if this is a continuous measurement mode
    #[must_use]
    pub const fn is_continuous(self) -> bool {
        matches!(
            self,
            Self::Continuous10Hz
                | Self::Continuous20Hz
                | Self::Continuous50Hz
                | Self::Continuous100Hz
        )
    }
}

/// Status bits captured with a magnetometer measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagStatus {
    /// Raw `ST1` byte
    pub st1: u8,
    /// Raw `ST2` byte
    pub st2: u8,
}

impl MagStatus {
    /// A new measurement was latched
    #[must_use]
    pub const fn data_ready(self) -> bool {
        self.st1 & AK09916_ST1_DRDY != 0
    }

    /// At least one measurement was skipped since the last read
    #[must_use]
    pub const fn data_overrun(self) -> bool {
        self.st1 & AK09916_ST1_DOR != 0
    }

    /// The field exceeded the measurement range on some axis
    #[must_use]
    pub const fn overflow(self) -> bool {
        self.st2 & AK09916_ST2_HOFL != 0
    }

    /// The measurement is fresh and in range
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.data_ready() && !self.overflow()
    }
}
