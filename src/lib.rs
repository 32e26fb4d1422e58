#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod aux_bus;
pub mod bank;
pub mod block;
pub mod chip;
pub mod device;
pub mod interface;
pub mod registers;
pub mod sample;
pub mod sensors;
pub mod state;

// Re-export main types
pub use bank::{BankSelect, BankedRegisters};
pub use block::{BusError, ChipRegisters};
pub use chip::{Chip, ChipSpec, Icm20649, Icm20948, Mpu9250};
pub use device::{Icm20649Driver, Icm20948Driver, Imu, Mpu9250Driver};
pub use interface::{I2cInterface, InterfaceMode, SpiInterface, Transport};
pub use sample::{RawSample, ScaledSample, Vector3};
pub use sensors::{
    AccelDlpf, AccelRange, GyroDlpf, GyroRange, MagMode, MagStatus, TempDlpf,
};
pub use state::{DeviceState, RangeSetting};

/// Register bank identifiers
///
/// Multi-bank parts select a bank by writing `bank << 4` to `REG_BANK_SEL`
/// (0x7F). Single-bank parts keep every register in [`Bank::Bank0`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// Bank 0 - Identity, power, interrupt status and sensor data
    Bank0 = 0,
    /// Bank 1 - Self-test and offsets
    Bank1 = 1,
    /// Bank 2 - Gyro and accelerometer configuration
    Bank2 = 2,
    /// Bank 3 - I2C master configuration
    Bank3 = 3,
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Invalid identity byte from the device behind the auxiliary I2C master
    InvalidAuxDevice(u8),
    /// Requested setting is not supported by this chip
    InvalidConfig,
    /// Indirect write was not confirmed by reading the register back
    VerificationFailed {
        /// Byte that was written
        expected: u8,
        /// Byte that was read back
        actual: u8,
    },
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
