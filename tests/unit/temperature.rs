//! Unit tests for temperature sensor functionality

use crate::common::{
    assert_float_eq, create_begun_icm20649, create_begun_icm20948, create_begun_mpu9250,
};
use invensense_imu::{Bank, Error, TempDlpf};

const TEMP_CONFIG: u8 = 0x53;

#[test]
fn test_temperature_read_basic() {
    let (mut imu, interface) = create_begun_icm20948();

    // (25 - 21) * 333.87 + 21 = 1356.48
    interface.set_temperature_data(1356);
    imu.read().unwrap();

    assert_float_eq(imu.temperature(), 25.0, 0.01);
    assert_eq!(imu.raw().temp, 1356);
}

#[test]
fn test_temperature_read_range() {
    let (mut imu, interface) = create_begun_icm20649();

    // -40 °C
    interface.set_temperature_data(-20345);
    imu.read().unwrap();
    assert_float_eq(imu.temperature(), -40.0, 0.01);

    // 85 °C
    interface.set_temperature_data(21389);
    imu.read().unwrap();
    assert_float_eq(imu.temperature(), 85.0, 0.01);
}

#[test]
fn test_temperature_same_model_on_mpu9250() {
    let (mut imu, interface) = create_begun_mpu9250();

    interface.set_temperature_data(21 + 3339);
    imu.read().unwrap();

    assert_float_eq(imu.temperature(), 31.0, 0.01);
}

#[test]
fn test_temperature_held_while_not_ready() {
    let (mut imu, interface) = create_begun_icm20948();
    interface.set_temperature_data(21);
    imu.read().unwrap();

    interface.set_data_ready(false);
    interface.set_temperature_data(5000);
    imu.read().unwrap();

    assert_float_eq(imu.temperature(), 21.0, 1e-4);
}

#[test]
fn test_temp_dlpf_default_on_icm20948() {
    let (imu, interface) = create_begun_icm20948();

    assert_eq!(imu.state().temp_dlpf, Some(TempDlpf::Hz7932));
    assert!(interface.verify_register(Bank::Bank2, TEMP_CONFIG, 0x00));
}

#[test]
fn test_temp_dlpf_preserves_upper_bits() {
    let (mut imu, interface) = create_begun_icm20948();
    interface.set_register(Bank::Bank2, TEMP_CONFIG, 0xF8);

    imu.configure_temp_dlpf(TempDlpf::Hz17).unwrap();

    assert!(interface.verify_register(Bank::Bank2, TEMP_CONFIG, 0xFD));
}

#[test]
fn test_temp_dlpf_unavailable_on_mpu9250() {
    let (mut imu, _interface) = create_begun_mpu9250();

    for bandwidth in [TempDlpf::Hz7932, TempDlpf::Hz8] {
        assert_eq!(imu.configure_temp_dlpf(bandwidth), Err(Error::InvalidConfig));
    }
    assert_eq!(imu.state().temp_dlpf, None);
}
