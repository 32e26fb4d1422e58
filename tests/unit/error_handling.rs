//! Unit tests for error propagation and recovery

use crate::common::{
    create_begun_icm20948, create_begun_mpu9250, create_icm20649, create_icm20948,
    create_mpu9250, MockDelay, MockError,
};
use invensense_imu::{AccelRange, Bank, Error};

#[test]
fn test_error_from_bus_error() {
    let error: Error<MockError> = MockError::Communication.into();
    assert_eq!(error, Error::Bus(MockError::Communication));
}

#[test]
fn test_wrong_who_am_i() {
    let (mut imu, interface) = create_icm20948();
    interface.set_who_am_i(0x12);

    let result = imu.begin(&mut MockDelay::default());

    assert_eq!(result, Err(Error::InvalidDevice(0x12)));
    assert!(!imu.state().begun);
    assert_eq!(imu.state().who_am_i, Some(0x12));
}

#[test]
fn test_wrong_who_am_i_per_chip() {
    // An ICM-20948 answering on an ICM-20649 driver is still the wrong part
    let (mut imu, interface) = create_icm20649();
    interface.set_who_am_i(0xEA);
    assert_eq!(
        imu.begin(&mut MockDelay::default()),
        Err(Error::InvalidDevice(0xEA))
    );

    let (mut imu, interface) = create_mpu9250();
    interface.set_who_am_i(0x73);
    assert_eq!(
        imu.begin(&mut MockDelay::default()),
        Err(Error::InvalidDevice(0x73))
    );
}

#[test]
fn test_wrong_magnetometer_identity() {
    let (mut imu, interface) = create_icm20948();
    interface.set_mag_register(0x01, 0x48);

    let result = imu.begin(&mut MockDelay::default());

    assert_eq!(result, Err(Error::InvalidAuxDevice(0x48)));
    assert!(!imu.state().begun);
}

#[test]
fn test_begin_retry_after_failure() {
    let (mut imu, interface) = create_mpu9250();
    interface.set_who_am_i(0x00);
    assert!(imu.begin(&mut MockDelay::default()).is_err());

    interface.set_who_am_i(0x71);
    imu.begin(&mut MockDelay::default()).unwrap();
    assert!(imu.state().begun);
}

#[test]
fn test_begin_bus_failure() {
    let (mut imu, interface) = create_icm20948();
    interface.fail_next_write();

    let result = imu.begin(&mut MockDelay::default());

    assert_eq!(result, Err(Error::Bus(MockError::Communication)));
    assert!(!imu.state().begun);
}

#[test]
fn test_read_failure_and_recovery() {
    let (mut imu, interface) = create_begun_icm20948();
    interface.set_accel_data(1, 2, 3);

    interface.fail_next_read();
    assert_eq!(imu.read(), Err(Error::Bus(MockError::Communication)));
    assert!(!imu.new_imu_data());

    assert_eq!(imu.read(), Ok(true));
    assert_eq!(imu.raw().accel, [1, 2, 3]);
}

#[test]
fn test_bank_switch_failure() {
    let (mut imu, interface) = create_begun_icm20948();
    let before = *imu.state();

    interface.fail_bank_switch(true);
    let result = imu.configure_accel_range(AccelRange::G8);

    assert_eq!(result, Err(Error::Bus(MockError::BankSwitch)));
    assert_eq!(*imu.state(), before);
    assert_eq!(imu.current_bank(), Some(Bank::Bank0));

    // Bank 0 work carries on without another switch
    assert_eq!(imu.read(), Ok(true));
}

#[test]
fn test_reset_write_failure() {
    let (mut imu, interface) = create_begun_mpu9250();
    let mut delay = MockDelay::default();

    interface.fail_next_write();
    assert!(imu.reset(&mut delay).is_err());

    assert_eq!(delay.total_ns, 0);
    assert_eq!(interface.reset_count(), 1, "only the reset from begin");
    assert!(imu.state().begun);
}

#[test]
fn test_mag_write_not_confirmed() {
    let (mut imu, interface) = create_begun_icm20948();
    interface.ignore_aux_writes(true);

    let result = imu.write_mag_register(0x31, 0x08);

    assert_eq!(
        result,
        Err(Error::VerificationFailed {
            expected: 0x08,
            actual: 0x02
        })
    );
}

#[test]
fn test_srd_mag_failure_keeps_divider() {
    let (mut imu, interface) = create_begun_icm20948();
    imu.configure_srd(9).unwrap();
    interface.set_mag_register(0x31, 0x00);
    interface.ignore_aux_writes(true);

    let result = imu.configure_srd(4);

    assert_eq!(
        result,
        Err(Error::VerificationFailed {
            expected: 0x02,
            actual: 0x00
        })
    );
    // The dividers already hold the new value, the mirror keeps the old one
    assert_eq!(interface.get_register(Bank::Bank2, 0x11), 4);
    assert_eq!(interface.get_register(Bank::Bank2, 0x00), 4);
    assert_eq!(imu.state().srd, 9);
}

#[test]
fn test_aux_transfer_length_bounds() {
    let (mut imu, interface) = create_begun_icm20948();

    assert_eq!(
        imu.read_mag_registers(0x11, &mut [0u8; 0]),
        Err(Error::InvalidConfig)
    );
    assert_eq!(
        imu.read_mag_registers(0x11, &mut [0u8; 16]),
        Err(Error::InvalidConfig)
    );
    assert!(interface.operations().is_empty());

    let mut buffer = [0u8; 15];
    assert_eq!(imu.read_mag_registers(0x10, &mut buffer), Ok(()));
}

#[test]
fn test_failed_status_read_clears_flags() {
    let (mut imu, interface) = create_begun_icm20948();
    interface.set_mag_data(10, 20, 30);
    imu.read().unwrap();
    assert!(imu.new_mag_data());

    interface.fail_next_read();
    assert!(imu.read().is_err());
    assert!(!imu.new_imu_data());
    assert!(!imu.new_mag_data());
}
