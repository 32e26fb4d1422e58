//! Unit tests for bank switching functionality

use crate::common::{
    create_begun_icm20948, create_begun_mpu9250, MockChip, MockError, MockInterface, Operation,
};
use invensense_imu::registers::icm20x48::Icm20x48Registers;
use invensense_imu::registers::mpu9250::Mpu9250Registers;
use invensense_imu::{Bank, BankedRegisters, ChipRegisters};

fn banked(interface: &MockInterface) -> BankedRegisters<Icm20x48Registers<MockInterface>> {
    BankedRegisters::new(Icm20x48Registers::new(interface.clone()))
}

#[test]
fn test_first_selection_always_writes() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);

    // Cache starts unknown, so even bank 0 has to be written
    assert_eq!(registers.current_bank(), None);
    registers.select_bank(Bank::Bank0).unwrap();

    assert_eq!(interface.bank_switch_count(), 1);
    assert_eq!(registers.current_bank(), Some(Bank::Bank0));
}

#[test]
fn test_bank_switch_noop() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);

    registers.select_bank(Bank::Bank2).unwrap();
    registers.select_bank(Bank::Bank2).unwrap();
    registers
        .in_bank(Bank::Bank2)
        .unwrap()
        .bank_2_accel_config()
        .read()
        .unwrap();

    assert_eq!(
        interface.bank_switch_count(),
        1,
        "No bank switch should occur for same bank"
    );
}

#[test]
fn test_bank_switch_sequence() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);

    registers.select_bank(Bank::Bank1).unwrap();
    registers.select_bank(Bank::Bank2).unwrap();
    registers.select_bank(Bank::Bank3).unwrap();
    registers.select_bank(Bank::Bank0).unwrap();

    let bank_switches: Vec<_> = interface
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::BankSwitch { to, .. } => Some(*to),
            _ => None,
        })
        .collect();

    assert_eq!(
        bank_switches,
        vec![Bank::Bank1, Bank::Bank2, Bank::Bank3, Bank::Bank0]
    );
}

#[test]
fn test_bank_switch_failure_keeps_cache() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);

    registers.select_bank(Bank::Bank2).unwrap();

    interface.fail_bank_switch(true);
    let result = registers.select_bank(Bank::Bank3);
    assert_eq!(result, Err(MockError::BankSwitch));
    assert_eq!(registers.current_bank(), Some(Bank::Bank2));

    // Still in bank 2, so going back there costs nothing
    interface.fail_bank_switch(false);
    interface.clear_operations();
    registers.select_bank(Bank::Bank2).unwrap();
    assert_eq!(interface.bank_switch_count(), 0);
}

#[test]
fn test_failed_switch_blocks_access() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);
    interface.set_register(Bank::Bank3, 0x01, 0x07);

    interface.fail_bank_switch(true);
    assert!(registers.in_bank(Bank::Bank3).is_err());

    // Nothing was read from whichever bank happened to be active
    assert!(!interface
        .operations()
        .iter()
        .any(|op| matches!(op, Operation::ReadRegister { .. })));
}

#[test]
fn test_single_bank_block_never_switches() {
    let interface = MockInterface::new(MockChip::Mpu9250);
    let mut registers = Mpu9250Registers::new(interface.clone());

    registers
        .smplrt_div()
        .write(|w| {
            w.set_smplrt_div(9);
        })
        .unwrap();

    assert_eq!(interface.bank_switch_count(), 0);
    assert_eq!(ChipRegisters::current_bank(&registers), None);
    assert!(interface.verify_register(Bank::Bank0, 0x19, 9));
}

#[test]
fn test_access_lands_in_register_bank() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);

    registers
        .in_bank(Bank::Bank2)
        .unwrap()
        .bank_2_accel_smplrt_div_2()
        .write(|w| {
            w.set_accel_smplrt_div_2(0x42);
        })
        .unwrap();
    registers
        .in_bank(Bank::Bank3)
        .unwrap()
        .bank_3_i_2_c_mst_ctrl()
        .write(|w| {
            w.set_i_2_c_mst_clk(0x07);
        })
        .unwrap();

    assert!(interface.verify_register(Bank::Bank2, 0x11, 0x42));
    assert!(interface.verify_register(Bank::Bank3, 0x01, 0x07));
    assert!(interface.verify_register(Bank::Bank0, 0x11, 0x00));
    assert!(interface.verify_register(Bank::Bank0, 0x01, 0x00));
}

#[test]
fn test_sensor_burst_is_contiguous() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);
    registers.select_bank(Bank::Bank2).unwrap();
    interface.set_register(Bank::Bank0, 0x2D, 0x12);
    interface.set_register(Bank::Bank0, 0x2E, 0x34);
    interface.set_register(Bank::Bank0, 0x2F, 0x56);

    let mut buffer = [0u8; 3];
    registers.read_sensor_data(&mut buffer).unwrap();

    assert_eq!(buffer, [0x12, 0x34, 0x56]);
    assert_eq!(registers.current_bank(), Some(Bank::Bank0));
}

#[test]
fn test_modify_preserves_neighbouring_fields() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);
    interface.set_register(Bank::Bank2, 0x14, 0b0011_1001);

    registers
        .in_bank(Bank::Bank2)
        .unwrap()
        .bank_2_accel_config()
        .modify(|w| {
            w.set_accel_fs_sel(0b01);
        })
        .unwrap();

    assert!(interface.verify_register(Bank::Bank2, 0x14, 0b0011_1011));
}

#[test]
fn test_modify_skips_write_after_failed_read() {
    let interface = MockInterface::new(MockChip::Icm20948);
    let mut registers = banked(&interface);
    registers.select_bank(Bank::Bank2).unwrap();
    interface.set_register(Bank::Bank2, 0x14, 0x39);

    interface.fail_next_read();
    assert!(registers.write_accel_range(3).is_err());

    assert!(interface.writes_to(Bank::Bank2, 0x14).is_empty());
    assert!(interface.verify_register(Bank::Bank2, 0x14, 0x39));
}

#[test]
fn test_driver_reads_stay_in_bank_0() {
    let (mut imu, interface) = create_begun_icm20948();
    assert_eq!(imu.current_bank(), Some(Bank::Bank0));

    imu.read().unwrap();
    imu.read().unwrap();

    assert_eq!(interface.bank_switch_count(), 0);
}

#[test]
fn test_driver_config_batches_bank_2() {
    let (mut imu, interface) = create_begun_icm20948();

    imu.configure_accel_range(invensense_imu::AccelRange::G8)
        .unwrap();
    imu.configure_gyro_range(invensense_imu::GyroRange::Dps1000)
        .unwrap();

    assert_eq!(interface.bank_switch_count(), 1);
    assert_eq!(imu.current_bank(), Some(Bank::Bank2));
}

#[test]
fn test_single_bank_driver() {
    let (mut imu, interface) = create_begun_mpu9250();

    imu.configure_accel_range(invensense_imu::AccelRange::G4)
        .unwrap();
    imu.read().unwrap();

    assert_eq!(interface.bank_switch_count(), 0);
    assert_eq!(imu.current_bank(), None);
}
