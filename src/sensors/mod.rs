//! Sensor settings shared by every supported chip
//!
//! - Accelerometer (3-axis)
//! - Gyroscope (3-axis)
//! - Die temperature
//! - Magnetometer (3-axis AK09916, ICM-20948 only)
//!
//! All sensor operations are performed through methods on [`crate::Imu`].

pub mod accelerometer;
pub mod gyroscope;
pub mod magnetometer;
pub mod temperature;

// Re-export main types
pub use accelerometer::{AccelDlpf, AccelRange};
pub use gyroscope::{GyroDlpf, GyroRange};
pub use magnetometer::{MagMode, MagStatus};
pub use temperature::{TempDlpf, TempModel};
