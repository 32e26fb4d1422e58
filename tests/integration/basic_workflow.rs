//! Integration tests for basic workflow scenarios

use crate::common::{
    assert_float_eq, create_icm20649, create_icm20948, create_mpu9250, create_spi_icm20948,
    MockDelay, Operation,
};
use invensense_imu::{
    AccelDlpf, AccelRange, Bank, GyroDlpf, GyroRange, InterfaceMode, MagMode,
};

#[test]
fn test_complete_icm20948_session() {
    let (mut imu, interface) = create_icm20948();
    let mut delay = MockDelay::default();

    imu.begin(&mut delay).unwrap();
    assert!(imu.state().begun);
    assert_eq!(imu.state().who_am_i, Some(0xEA));
    assert_eq!(imu.state().interface, InterfaceMode::I2c);
    assert_eq!(interface.reset_count(), 1);
    assert!(delay.total_ms() >= 100);

    // Defaults
    assert!(interface.verify_register(Bank::Bank2, 0x14, 0x3F));
    assert!(interface.verify_register(Bank::Bank2, 0x01, 0x3F));
    assert!(interface.verify_register(Bank::Bank2, 0x09, 0x01));
    assert_eq!(interface.get_register(Bank::Bank0, 0x03), 0x20);
    assert_eq!(imu.current_bank(), Some(Bank::Bank0));

    imu.configure_accel_range(AccelRange::G4).unwrap();
    imu.configure_gyro_range(GyroRange::Dps500).unwrap();
    imu.configure_accel_dlpf(AccelDlpf::Hz50).unwrap();
    imu.configure_gyro_dlpf(GyroDlpf::Hz51).unwrap();
    imu.configure_output_rate(100).unwrap();
    imu.enable_data_ready_interrupt().unwrap();

    assert!(interface.verify_register(Bank::Bank2, 0x14, 0x1B));
    assert!(interface.verify_register(Bank::Bank2, 0x01, 0x1B));
    assert_eq!(imu.state().srd, 10);

    interface.set_accel_data(0, 8192, 0);
    interface.set_gyro_data(0, 0, 0);
    interface.set_temperature_data(21);
    interface.set_mag_data(0, 0, 1000);

    assert!(imu.read().unwrap());
    assert!(imu.new_imu_data());
    assert!(imu.new_mag_data());
    assert_float_eq(imu.accel().x, 9.80665, 0.01);
    assert_float_eq(imu.temperature(), 21.0, 1e-3);
    assert_float_eq(imu.mag().z, 1000.0 * 4912.0 / 32752.0, 1e-2);
}

#[test]
fn test_spi_begin_disables_i2c_slave() {
    let (mut imu, interface) = create_spi_icm20948();

    imu.begin(&mut MockDelay::default()).unwrap();

    assert_eq!(imu.state().interface, InterfaceMode::Spi);
    assert_eq!(interface.get_register(Bank::Bank0, 0x03), 0x30);
}

#[test]
fn test_icm20649_defaults() {
    let (mut imu, interface) = create_icm20649();

    imu.begin(&mut MockDelay::default()).unwrap();

    assert_eq!(imu.state().accel.range, AccelRange::G30);
    assert_eq!(imu.state().gyro.range, GyroRange::Dps4000);
    assert_eq!(imu.state().accel_dlpf, Some(AccelDlpf::Hz111));
    assert_eq!(imu.state().gyro_dlpf, Some(GyroDlpf::Hz119));
    assert_eq!(imu.state().mag_mode, None);
    assert!(interface.verify_register(Bank::Bank2, 0x14, 0x17));
    assert!(interface.verify_register(Bank::Bank2, 0x01, 0x17));

    // No auxiliary master on this part
    assert!(interface.writes_to(Bank::Bank3, 0x05).is_empty());
    assert_eq!(interface.get_register(Bank::Bank0, 0x03), 0x00);
}

#[test]
fn test_mpu9250_defaults() {
    let (mut imu, interface) = create_mpu9250();

    imu.begin(&mut MockDelay::default()).unwrap();

    assert!(interface.verify_register(Bank::Bank0, 0x1C, 0x18));
    assert!(interface.verify_register(Bank::Bank0, 0x1B, 0x18));
    assert!(interface.verify_register(Bank::Bank0, 0x1A, 0x01));
    assert!(interface.verify_register(Bank::Bank0, 0x1D, 0x01));
    assert!(interface.verify_register(Bank::Bank0, 0x6B, 0x01));
    assert_eq!(interface.bank_switch_count(), 0);
    assert_eq!(imu.current_bank(), None);
    assert!(!interface
        .operations()
        .iter()
        .any(|op| matches!(op, Operation::WriteRegister { address: 0x7F, .. })));
}

#[test]
fn test_reset_forgets_configuration() {
    let (mut imu, interface) = create_icm20948();
    imu.begin(&mut MockDelay::default()).unwrap();
    imu.configure_accel_range(AccelRange::G2).unwrap();

    imu.reset(&mut MockDelay::default()).unwrap();

    assert!(!imu.state().begun);
    assert_eq!(imu.state().who_am_i, Some(0xEA));
    assert_eq!(imu.state().accel_dlpf, None);
    assert_eq!(imu.state().mag_mode, None);
    assert_eq!(interface.reset_count(), 2);

    // begin brings it back
    imu.begin(&mut MockDelay::default()).unwrap();
    assert_eq!(imu.state().accel.range, AccelRange::G16);
    assert_eq!(imu.state().mag_mode, Some(MagMode::Continuous10Hz));
}

#[test]
fn test_polling_loop() {
    let (mut imu, interface) = create_mpu9250();
    imu.begin(&mut MockDelay::default()).unwrap();
    imu.configure_filter(GyroDlpf::Hz20, 50).unwrap();

    let mut fresh = 0;
    for i in 0..10i16 {
        interface.set_data_ready(i % 2 == 0);
        interface.set_accel_data(i, 0, 0);
        if imu.read().unwrap() {
            fresh += 1;
            assert_eq!(imu.raw().accel[0], i);
        }
    }
    assert_eq!(fresh, 5);
}

#[test]
fn test_release_returns_transport() {
    let (mut imu, _interface) = create_icm20948();
    imu.begin(&mut MockDelay::default()).unwrap();

    let released = imu.release();

    assert_eq!(released.get_register(Bank::Bank0, 0x00), 0xEA);
}
