//! Register definitions
//!
//! Two register blocks cover the supported parts:
//!
//! - [`icm20x48`]: the banked map shared by the ICM-20649 and ICM-20948.
//!   Addresses 0x00-0x7E mean something different per bank, selected through
//!   `REG_BANK_SEL` (0x7F), so every register carries
//!   `ALLOW_ADDRESS_OVERLAP = true` and a `Bank<N>` prefix outside bank 0.
//! - [`mpu9250`]: the flat MPU-9250 map.
//!
//! Only the registers the driver touches are declared. Burst windows such
//! as the sensor data block and `EXT_SLV_SENS_DATA` are read through the
//! transport directly.

/// Banked register map of the ICM-20649 and ICM-20948
pub mod icm20x48 {
    device_driver::create_device!(
        device_name: Icm20x48Registers,
        dsl: {
            config {
                type RegisterAddressType = u8;
                type DefaultByteOrder = BE;
            }

            // ==================== BANK 0 REGISTERS ====================

            /// WHO_AM_I - Device ID Register (Bank 0, 0x00)
            register WhoAmI {
                const ADDRESS = 0x00;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Device ID (0xEA on the ICM-20948, 0xE1 on the ICM-20649)
                who_am_i: uint = 0..8,
            },

            /// USER_CTRL - User Control (Bank 0, 0x03)
            register UserCtrl {
                const ADDRESS = 0x03;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                reserved_0: uint = 0..1,
                /// I2C master reset
                i2c_mst_rst: bool = 1,
                /// SRAM reset
                sram_rst: bool = 2,
                /// DMP reset
                dmp_rst: bool = 3,
                /// I2C slave interface disable (SPI only)
                i2c_if_dis: bool = 4,
                /// Auxiliary I2C master enable
                i2c_mst_en: bool = 5,
                /// FIFO enable
                fifo_en: bool = 6,
                /// DMP enable
                dmp_en: bool = 7,
            },

            /// PWR_MGMT_1 - Power Management 1 (Bank 0, 0x06)
            register PwrMgmt1 {
                const ADDRESS = 0x06;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Clock source select (1 = auto select best)
                clksel: uint = 0..3,
                /// Temperature sensor disable
                temp_dis: bool = 3,
                reserved_4: uint = 4..5,
                /// Low power mode enable
                lp_en: bool = 5,
                /// Sleep mode enable
                sleep: bool = 6,
                /// Device reset, clears itself
                device_reset: bool = 7,
            },

            /// INT_ENABLE_1 - Raw Data Ready Interrupt Enable (Bank 0, 0x11)
            register IntEnable1 {
                const ADDRESS = 0x11;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Raw data ready interrupt enable
                raw_data_0_rdy_en: bool = 0,
                reserved_7_1: uint = 1..8,
            },

            /// INT_STATUS_1 - Raw Data Ready Status (Bank 0, 0x1A)
            register IntStatus1 {
                const ADDRESS = 0x1A;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Raw data ready
                raw_data_0_rdy_int: bool = 0,
                reserved_7_1: uint = 1..8,
            },

            /// REG_BANK_SEL - Register Bank Selection (All Banks, 0x7F)
            register RegBankSel {
                const ADDRESS = 0x7F;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                reserved_3_0: uint = 0..4,
                /// User bank selection (0-3)
                user_bank: uint = 4..6,
                reserved_7_6: uint = 6..8,
            },

            // ==================== BANK 2 REGISTERS ====================

            /// GYRO_SMPLRT_DIV (Bank 2, 0x00)
            register Bank2GyroSmplrtDiv {
                const ADDRESS = 0x00;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Gyroscope sample rate divider
                gyro_smplrt_div: uint = 0..8,
            },

            /// GYRO_CONFIG_1 (Bank 2, 0x01)
            register Bank2GyroConfig1 {
                const ADDRESS = 0x01;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Route samples through the gyroscope DLPF
                gyro_fchoice: bool = 0,
                /// Gyroscope full scale select
                gyro_fs_sel: uint = 1..3,
                /// Gyroscope DLPF configuration
                gyro_dlpfcfg: uint = 3..6,
                reserved_7_6: uint = 6..8,
            },

            /// ODR_ALIGN_EN (Bank 2, 0x09)
            register Bank2OdrAlignEn {
                const ADDRESS = 0x09;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Align accel, gyro and I2C master output data rates
                odr_align_en: bool = 0,
                reserved_7_1: uint = 1..8,
            },

            /// ACCEL_SMPLRT_DIV_2 (Bank 2, 0x11)
            register Bank2AccelSmplrtDiv2 {
                const ADDRESS = 0x11;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Accelerometer sample rate divider low byte
                accel_smplrt_div_2: uint = 0..8,
            },

            /// ACCEL_CONFIG (Bank 2, 0x14)
            register Bank2AccelConfig {
                const ADDRESS = 0x14;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Route samples through the accelerometer DLPF
                accel_fchoice: bool = 0,
                /// Accelerometer full scale select
                accel_fs_sel: uint = 1..3,
                /// Accelerometer DLPF configuration
                accel_dlpfcfg: uint = 3..6,
                reserved_7_6: uint = 6..8,
            },

            /// TEMP_CONFIG (Bank 2, 0x53)
            register Bank2TempConfig {
                const ADDRESS = 0x53;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// Temperature sensor DLPF configuration
                temp_dlpfcfg: uint = 0..3,
                reserved_7_3: uint = 3..8,
            },

            // ==================== BANK 3 REGISTERS ====================

            /// I2C_MST_CTRL (Bank 3, 0x01)
            register Bank3I2cMstCtrl {
                const ADDRESS = 0x01;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// I2C master clock speed
                i2c_mst_clk: uint = 0..4,
                /// Stop between reads instead of a restart
                i2c_mst_p_nsr: bool = 4,
                reserved_6_5: uint = 5..7,
                /// Multi-master enable
                mult_mst_en: bool = 7,
            },

            /// I2C_SLV0_ADDR (Bank 3, 0x03)
            register Bank3I2cSlv0Addr {
                const ADDRESS = 0x03;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// I2C slave 0 physical address
                i2c_id_0: uint = 0..7,
                /// I2C slave 0 read/write (1=read, 0=write)
                i2c_slv0_rnw: bool = 7,
            },

            /// I2C_SLV0_REG (Bank 3, 0x04)
            register Bank3I2cSlv0Reg {
                const ADDRESS = 0x04;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// I2C slave 0 register address
                i2c_slv0_reg: uint = 0..8,
            },

            /// I2C_SLV0_CTRL (Bank 3, 0x05)
            register Bank3I2cSlv0Ctrl {
                const ADDRESS = 0x05;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// I2C slave 0 number of bytes to read/write
                i2c_slv0_leng: uint = 0..4,
                /// I2C slave 0 group
                i2c_slv0_grp: bool = 4,
                /// I2C slave 0 register disable
                i2c_slv0_reg_dis: bool = 5,
                /// I2C slave 0 byte swap
                i2c_slv0_byte_sw: bool = 6,
                /// I2C slave 0 enable
                i2c_slv0_en: bool = 7,
            },

            /// I2C_SLV0_DO (Bank 3, 0x06)
            register Bank3I2cSlv0Do {
                const ADDRESS = 0x06;
                const SIZE_BITS = 8;
                const ALLOW_ADDRESS_OVERLAP = true;

                /// I2C slave 0 data out
                i2c_slv0_do: uint = 0..8,
            }
        }
    );
}

/// Register map of the MPU-9250
pub mod mpu9250 {
    device_driver::create_device!(
        device_name: Mpu9250Registers,
        dsl: {
            config {
                type RegisterAddressType = u8;
                type DefaultByteOrder = BE;
            }

            /// SMPLRT_DIV - Sample Rate Divider (0x19)
            register SmplrtDiv {
                const ADDRESS = 0x19;
                const SIZE_BITS = 8;

                /// Sample rate divider
                smplrt_div: uint = 0..8,
            },

            /// CONFIG - Configuration (0x1A)
            register Config {
                const ADDRESS = 0x1A;
                const SIZE_BITS = 8;

                /// Gyroscope and temperature DLPF configuration
                dlpf_cfg: uint = 0..3,
                /// FSYNC pin sampling
                ext_sync_set: uint = 3..6,
                /// Do not overwrite a full FIFO
                fifo_mode: bool = 6,
                reserved_7: uint = 7..8,
            },

            /// GYRO_CONFIG - Gyroscope Configuration (0x1B)
            register GyroConfig {
                const ADDRESS = 0x1B;
                const SIZE_BITS = 8;

                /// Inverted filter choice, 0 routes samples through the DLPF
                fchoice_b: uint = 0..2,
                reserved_2: uint = 2..3,
                /// Gyroscope full scale select
                gyro_fs_sel: uint = 3..5,
                /// Z-axis self-test
                zgyro_cten: bool = 5,
                /// Y-axis self-test
                ygyro_cten: bool = 6,
                /// X-axis self-test
                xgyro_cten: bool = 7,
            },

            /// ACCEL_CONFIG - Accelerometer Configuration (0x1C)
            register AccelConfig {
                const ADDRESS = 0x1C;
                const SIZE_BITS = 8;

                reserved_2_0: uint = 0..3,
                /// Accelerometer full scale select
                accel_fs_sel: uint = 3..5,
                /// Z-axis self-test
                az_st_en: bool = 5,
                /// Y-axis self-test
                ay_st_en: bool = 6,
                /// X-axis self-test
                ax_st_en: bool = 7,
            },

            /// ACCEL_CONFIG2 - Accelerometer Configuration 2 (0x1D)
            register AccelConfig2 {
                const ADDRESS = 0x1D;
                const SIZE_BITS = 8;

                /// Accelerometer DLPF configuration
                a_dlpfcfg: uint = 0..3,
                /// Inverted filter choice, clear to route samples through the DLPF
                accel_fchoice_b: bool = 3,
                reserved_7_4: uint = 4..8,
            },

            /// I2C_MST_CTRL - I2C Master Control (0x24)
            register I2cMstCtrl {
                const ADDRESS = 0x24;
                const SIZE_BITS = 8;

                /// I2C master clock speed
                i2c_mst_clk: uint = 0..4,
                /// Stop between reads instead of a restart
                i2c_mst_p_nsr: bool = 4,
                /// Slave 3 data to FIFO
                slv_3_fifo_en: bool = 5,
                /// Delay data ready until external sensor data is loaded
                wait_for_es: bool = 6,
                /// Multi-master enable
                mult_mst_en: bool = 7,
            },

            /// I2C_SLV0_ADDR (0x25)
            register I2cSlv0Addr {
                const ADDRESS = 0x25;
                const SIZE_BITS = 8;

                /// I2C slave 0 physical address
                i2c_id_0: uint = 0..7,
                /// I2C slave 0 read/write (1=read, 0=write)
                i2c_slv0_rnw: bool = 7,
            },

            /// I2C_SLV0_REG (0x26)
            register I2cSlv0Reg {
                const ADDRESS = 0x26;
                const SIZE_BITS = 8;

                /// I2C slave 0 register address
                i2c_slv0_reg: uint = 0..8,
            },

            /// I2C_SLV0_CTRL (0x27)
            register I2cSlv0Ctrl {
                const ADDRESS = 0x27;
                const SIZE_BITS = 8;

                /// I2C slave 0 number of bytes to read/write
                i2c_slv0_leng: uint = 0..4,
                /// I2C slave 0 group
                i2c_slv0_grp: bool = 4,
                /// I2C slave 0 register disable
                i2c_slv0_reg_dis: bool = 5,
                /// I2C slave 0 byte swap
                i2c_slv0_byte_sw: bool = 6,
                /// I2C slave 0 enable
                i2c_slv0_en: bool = 7,
            },

            /// INT_PIN_CFG - Interrupt Pin Configuration (0x37)
            register IntPinCfg {
                const ADDRESS = 0x37;
                const SIZE_BITS = 8;

                reserved_0: uint = 0..1,
                /// Auxiliary bus bypass
                bypass_en: bool = 1,
                /// FSYNC as interrupt
                fsync_int_mode_en: bool = 2,
                /// FSYNC active low
                actl_fsync: bool = 3,
                /// Clear status on any read
                int_anyrd_2clear: bool = 4,
                /// Hold INT until cleared instead of a 50 us pulse
                latch_int_en: bool = 5,
                /// INT open drain
                open: bool = 6,
                /// INT active low
                actl: bool = 7,
            },

            /// INT_ENABLE - Interrupt Enable (0x38)
            register IntEnable {
                const ADDRESS = 0x38;
                const SIZE_BITS = 8;

                /// Raw data ready interrupt enable
                raw_rdy_en: bool = 0,
                reserved_2_1: uint = 1..3,
                /// FSYNC interrupt enable
                fsync_int_en: bool = 3,
                /// FIFO overflow interrupt enable
                fifo_overflow_en: bool = 4,
                reserved_5: uint = 5..6,
                /// Wake on motion interrupt enable
                wom_en: bool = 6,
                reserved_7: uint = 7..8,
            },

            /// INT_STATUS - Interrupt Status (0x3A)
            register IntStatus {
                const ADDRESS = 0x3A;
                const SIZE_BITS = 8;

                /// Raw data ready
                raw_data_rdy_int: bool = 0,
                reserved_2_1: uint = 1..3,
                /// FSYNC interrupt
                fsync_int: bool = 3,
                /// FIFO overflow
                fifo_overflow_int: bool = 4,
                reserved_5: uint = 5..6,
                /// Wake on motion
                wom_int: bool = 6,
                reserved_7: uint = 7..8,
            },

            /// I2C_SLV0_DO (0x63)
            register I2cSlv0Do {
                const ADDRESS = 0x63;
                const SIZE_BITS = 8;

                /// I2C slave 0 data out
                i2c_slv0_do: uint = 0..8,
            },

            /// USER_CTRL - User Control (0x6A)
            register UserCtrl {
                const ADDRESS = 0x6A;
                const SIZE_BITS = 8;

                /// Reset signal paths
                sig_cond_rst: bool = 0,
                /// I2C master reset
                i2c_mst_rst: bool = 1,
                /// FIFO reset
                fifo_rst: bool = 2,
                reserved_3: uint = 3..4,
                /// I2C slave interface disable (SPI only)
                i2c_if_dis: bool = 4,
                /// Auxiliary I2C master enable
                i2c_mst_en: bool = 5,
                /// FIFO enable
                fifo_en: bool = 6,
                reserved_7: uint = 7..8,
            },

            /// PWR_MGMT_1 - Power Management 1 (0x6B)
            register PwrMgmt1 {
                const ADDRESS = 0x6B;
                const SIZE_BITS = 8;

                /// Clock source select (1 = auto select best)
                clksel: uint = 0..3,
                /// PTAT voltage generator power down
                pd_ptat: bool = 3,
                /// Gyroscope standby
                gyro_standby: bool = 4,
                /// Cycle between sleep and one sample
                cycle: bool = 5,
                /// Sleep mode enable
                sleep: bool = 6,
                /// Hard reset, clears itself
                h_reset: bool = 7,
            },

            /// WHO_AM_I - Device ID Register (0x75)
            register WhoAmI {
                const ADDRESS = 0x75;
                const SIZE_BITS = 8;

                /// Device ID (0x71)
                who_am_i: uint = 0..8,
            }
        }
    );
}
