//! Mirrored device configuration
//!
//! [`DeviceState`] mirrors what the driver has written to the chip. It is a
//! plain `Copy` value: a configuration change stages a modified copy, writes
//! the register, and replaces the mirror only once the write succeeded. A
//! failed write therefore leaves the previous, still accurate, state behind.

use crate::chip::ChipSpec;
use crate::interface::InterfaceMode;
use crate::sensors::{AccelDlpf, AccelRange, GyroDlpf, GyroRange, MagMode, TempDlpf};

/// A full-scale range together with its count scale
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeSetting<R> {
    /// Selected range
    pub range: R,
    /// Physical units (g or °/s) per count
    pub scale: f32,
}

impl RangeSetting<AccelRange> {
    /// Accelerometer range with its derived scale
    #[must_use]
    pub fn accel(range: AccelRange) -> Self {
        Self {
            range,
            scale: range.scale(),
        }
    }
}

impl RangeSetting<GyroRange> {
    /// Gyroscope range with its derived scale
    #[must_use]
    pub fn gyro(range: GyroRange) -> Self {
        Self {
            range,
            scale: range.scale(),
        }
    }
}

/// Software mirror of the device configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Bus the driver talks over
    pub interface: InterfaceMode,
    /// Identity byte read during the last bring-up
    pub who_am_i: Option<u8>,
    /// Bring-up completed successfully
    pub begun: bool,
    /// Accelerometer range
    pub accel: RangeSetting<AccelRange>,
    /// Gyroscope range
    pub gyro: RangeSetting<GyroRange>,
    /// Accelerometer filter, unknown until configured
    pub accel_dlpf: Option<AccelDlpf>,
    /// Gyroscope filter, unknown until configured
    pub gyro_dlpf: Option<GyroDlpf>,
    /// Temperature filter, unknown until configured
    pub temp_dlpf: Option<TempDlpf>,
    /// Sample rate divider
    pub srd: u8,
    /// Magnetometer operating mode
    pub mag_mode: Option<MagMode>,
    /// Data ready interrupt routed to the INT pin
    pub data_ready_interrupt: bool,
}

impl DeviceState {
    /// Power-on state of a chip
    ///
    /// Ranges start at whatever the all-zero field encodes, which is what the
    /// silicon comes up with after reset.
    #[must_use]
    pub fn power_on(spec: &ChipSpec, interface: InterfaceMode) -> Self {
        Self {
            interface,
            who_am_i: None,
            begun: false,
            accel: RangeSetting::accel(spec.power_on_accel_range()),
            gyro: RangeSetting::gyro(spec.power_on_gyro_range()),
            accel_dlpf: None,
            gyro_dlpf: None,
            temp_dlpf: None,
            srd: 0,
            mag_mode: None,
            data_ready_interrupt: false,
        }
    }

    /// State after a hard reset: configuration forgotten, identity kept
    #[must_use]
    pub fn after_reset(self, spec: &ChipSpec) -> Self {
        Self {
            who_am_i: self.who_am_i,
            ..Self::power_on(spec, self.interface)
        }
    }

    /// Stage a new accelerometer range
    #[must_use]
    pub fn with_accel_range(self, range: AccelRange) -> Self {
        Self {
            accel: RangeSetting::accel(range),
            ..self
        }
    }

    /// Stage a new gyroscope range
    #[must_use]
    pub fn with_gyro_range(self, range: GyroRange) -> Self {
        Self {
            gyro: RangeSetting::gyro(range),
            ..self
        }
    }
}
