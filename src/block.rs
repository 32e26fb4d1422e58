//! Per-chip register access
//!
//! [`ChipRegisters`] is the seam between the chip-independent driver and
//! the generated register blocks in [`crate::registers`]. Each operation
//! maps onto the typed accessors of one block: field updates go through
//! the generated `modify`, whole-register writes through `write`. Field
//! values come from the [`ChipSpec`](crate::chip::ChipSpec) tables.
//!
//! The ICM block is wrapped in [`BankedRegisters`] so every access selects
//! its bank first. The MPU-9250 block is used as is.

use device_driver::RegisterInterface;

use crate::bank::{BankSelect, BankedRegisters};
use crate::registers::icm20x48::Icm20x48Registers;
use crate::registers::mpu9250::Mpu9250Registers;
use crate::Bank;

/// `CLKSEL` value that picks the best available clock source
const CLKSEL_AUTO: u8 = 1;

/// Transport error of a register block
pub type BusError<R> = <<R as ChipRegisters>::Interface as RegisterInterface>::Error;

/// Register operations the driver needs from a chip
pub trait ChipRegisters: Sized {
    /// Transport underneath the block
    type Interface: RegisterInterface<AddressType = u8>;

    /// Wrap a transport
    fn new(interface: Self::Interface) -> Self;

    /// Return the transport
    fn release(self) -> Self::Interface;

    /// Bank known to be selected, always `None` on single-bank parts
    fn current_bank(&self) -> Option<Bank>;

    /// Read the identity register
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn read_who_am_i(&mut self) -> Result<u8, BusError<Self>>;

    /// Set the self-clearing hard reset bit in `PWR_MGMT_1`
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn hard_reset(&mut self) -> Result<(), BusError<Self>>;

    /// Wake the chip on the best available clock
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn select_auto_clock(&mut self) -> Result<(), BusError<Self>>;

    /// Set `USER_CTRL.I2C_IF_DIS`
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn disable_i2c_slave(&mut self) -> Result<(), BusError<Self>>;

    /// Set `USER_CTRL.I2C_MST_EN` and program the master clock
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn enable_aux_master(&mut self, clock: u8) -> Result<(), BusError<Self>>;

    /// Align the output data rates of all sensors, where the chip can
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn align_output_rates(&mut self) -> Result<(), BusError<Self>>;

    /// Update the accelerometer full scale field
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure. Nothing is written when the
    /// read half of the update fails.
    fn write_accel_range(&mut self, bits: u8) -> Result<(), BusError<Self>>;

    /// Update the gyroscope full scale field
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn write_gyro_range(&mut self, bits: u8) -> Result<(), BusError<Self>>;

    /// Select an accelerometer bandwidth and route samples through the filter
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn write_accel_dlpf(&mut self, bits: u8) -> Result<(), BusError<Self>>;

    /// Select a gyroscope bandwidth and route samples through the filter
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn write_gyro_dlpf(&mut self, bits: u8) -> Result<(), BusError<Self>>;

    /// Select a temperature bandwidth
    ///
    /// Chips whose descriptor lists no temperature bandwidths never get here.
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn write_temp_dlpf(&mut self, bits: u8) -> Result<(), BusError<Self>>;

    /// Write every sample rate divider
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn write_srd(&mut self, srd: u8) -> Result<(), BusError<Self>>;

    /// Enable or disable the raw data ready interrupt
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn write_data_ready_interrupt(&mut self, enable: bool) -> Result<(), BusError<Self>>;

    /// Whether a new sample is waiting
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn data_ready(&mut self) -> Result<bool, BusError<Self>>;

    /// Burst-read the sensor data block starting at `ACCEL_XOUT_H`
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn read_sensor_data(&mut self, buffer: &mut [u8]) -> Result<(), BusError<Self>>;

    /// Program slave 0 to read `len` registers of the auxiliary device
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn start_slv0_read(&mut self, address: u8, register: u8, len: u8)
        -> Result<(), BusError<Self>>;

    /// Program slave 0 to write one register of the auxiliary device
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn start_slv0_write(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> Result<(), BusError<Self>>;

    /// Burst-read the external sensor data window
    ///
    /// # Errors
    ///
    /// Returns the transport error on failure.
    fn read_ext_sens_data(&mut self, buffer: &mut [u8]) -> Result<(), BusError<Self>>;
}

#[allow(clippy::cast_possible_truncation)]
const fn burst_bits(buffer: &[u8]) -> u32 {
    (buffer.len() * 8) as u32
}

impl<I> BankSelect for Icm20x48Registers<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    type Error = I::Error;

    fn write_bank_select(&mut self, bank: Bank) -> Result<(), I::Error> {
        self.reg_bank_sel().write(|w| {
            w.set_user_bank(bank as u8);
        })?;
        Ok(())
    }
}

impl<I> ChipRegisters for BankedRegisters<Icm20x48Registers<I>>
where
    I: RegisterInterface<AddressType = u8>,
{
    type Interface = I;

    fn new(interface: I) -> Self {
        BankedRegisters::new(Icm20x48Registers::new(interface))
    }

    fn release(self) -> I {
        BankedRegisters::release(self).interface
    }

    fn current_bank(&self) -> Option<Bank> {
        BankedRegisters::current_bank(self)
    }

    fn read_who_am_i(&mut self) -> Result<u8, I::Error> {
        let reg = self.in_bank(Bank::Bank0)?.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    fn hard_reset(&mut self) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank0)?.pwr_mgmt_1().write(|w| {
            w.set_device_reset(true);
        })?;
        Ok(())
    }

    fn select_auto_clock(&mut self) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank0)?.pwr_mgmt_1().write(|w| {
            w.set_clksel(CLKSEL_AUTO);
        })?;
        Ok(())
    }

    fn disable_i2c_slave(&mut self) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank0)?.user_ctrl().modify(|w| {
            w.set_i_2_c_if_dis(true);
        })?;
        Ok(())
    }

    fn enable_aux_master(&mut self, clock: u8) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank0)?.user_ctrl().modify(|w| {
            w.set_i_2_c_mst_en(true);
        })?;
        self.in_bank(Bank::Bank3)?.bank_3_i_2_c_mst_ctrl().write(|w| {
            w.set_i_2_c_mst_clk(clock);
        })?;
        Ok(())
    }

    fn align_output_rates(&mut self) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank2)?.bank_2_odr_align_en().write(|w| {
            w.set_odr_align_en(true);
        })?;
        Ok(())
    }

    fn write_accel_range(&mut self, bits: u8) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank2)?.bank_2_accel_config().modify(|w| {
            w.set_accel_fs_sel(bits);
        })?;
        Ok(())
    }

    fn write_gyro_range(&mut self, bits: u8) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank2)?.bank_2_gyro_config_1().modify(|w| {
            w.set_gyro_fs_sel(bits);
        })?;
        Ok(())
    }

    fn write_accel_dlpf(&mut self, bits: u8) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank2)?.bank_2_accel_config().modify(|w| {
            w.set_accel_dlpfcfg(bits);
            w.set_accel_fchoice(true);
        })?;
        Ok(())
    }

    fn write_gyro_dlpf(&mut self, bits: u8) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank2)?.bank_2_gyro_config_1().modify(|w| {
            w.set_gyro_dlpfcfg(bits);
            w.set_gyro_fchoice(true);
        })?;
        Ok(())
    }

    fn write_temp_dlpf(&mut self, bits: u8) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank2)?.bank_2_temp_config().modify(|w| {
            w.set_temp_dlpfcfg(bits);
        })?;
        Ok(())
    }

    fn write_srd(&mut self, srd: u8) -> Result<(), I::Error> {
        let device = self.in_bank(Bank::Bank2)?;
        device.bank_2_accel_smplrt_div_2().write(|w| {
            w.set_accel_smplrt_div_2(srd);
        })?;
        device.bank_2_gyro_smplrt_div().write(|w| {
            w.set_gyro_smplrt_div(srd);
        })?;
        Ok(())
    }

    fn write_data_ready_interrupt(&mut self, enable: bool) -> Result<(), I::Error> {
        self.in_bank(Bank::Bank0)?.int_enable_1().write(|w| {
            w.set_raw_data_0_rdy_en(enable);
        })?;
        Ok(())
    }

    fn data_ready(&mut self) -> Result<bool, I::Error> {
        let status = self.in_bank(Bank::Bank0)?.int_status_1().read()?;
        Ok(status.raw_data_0_rdy_int())
    }

    fn read_sensor_data(&mut self, buffer: &mut [u8]) -> Result<(), I::Error> {
        const ACCEL_XOUT_H: u8 = 0x2D;
        self.in_bank(Bank::Bank0)?
            .interface
            .read_register(ACCEL_XOUT_H, burst_bits(buffer), buffer)
    }

    fn start_slv0_read(&mut self, address: u8, register: u8, len: u8) -> Result<(), I::Error> {
        let device = self.in_bank(Bank::Bank3)?;
        device.bank_3_i_2_c_slv_0_addr().write(|w| {
            w.set_i_2_c_id_0(address);
            w.set_i_2_c_slv_0_rnw(true);
        })?;
        device.bank_3_i_2_c_slv_0_reg().write(|w| {
            w.set_i_2_c_slv_0_reg(register);
        })?;
        device.bank_3_i_2_c_slv_0_ctrl().write(|w| {
            w.set_i_2_c_slv_0_leng(len);
            w.set_i_2_c_slv_0_en(true);
        })?;
        Ok(())
    }

    fn start_slv0_write(&mut self, address: u8, register: u8, value: u8) -> Result<(), I::Error> {
        let device = self.in_bank(Bank::Bank3)?;
        device.bank_3_i_2_c_slv_0_addr().write(|w| {
            w.set_i_2_c_id_0(address);
            w.set_i_2_c_slv_0_rnw(false);
        })?;
        device.bank_3_i_2_c_slv_0_reg().write(|w| {
            w.set_i_2_c_slv_0_reg(register);
        })?;
        device.bank_3_i_2_c_slv_0_do().write(|w| {
            w.set_i_2_c_slv_0_do(value);
        })?;
        device.bank_3_i_2_c_slv_0_ctrl().write(|w| {
            w.set_i_2_c_slv_0_leng(1);
            w.set_i_2_c_slv_0_en(true);
        })?;
        Ok(())
    }

    fn read_ext_sens_data(&mut self, buffer: &mut [u8]) -> Result<(), I::Error> {
        const EXT_SLV_SENS_DATA_00: u8 = 0x3B;
        self.in_bank(Bank::Bank0)?
            .interface
            .read_register(EXT_SLV_SENS_DATA_00, burst_bits(buffer), buffer)
    }
}

impl<I> ChipRegisters for Mpu9250Registers<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    type Interface = I;

    fn new(interface: I) -> Self {
        Mpu9250Registers::new(interface)
    }

    fn release(self) -> I {
        self.interface
    }

    fn current_bank(&self) -> Option<Bank> {
        None
    }

    fn read_who_am_i(&mut self) -> Result<u8, I::Error> {
        let reg = self.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    fn hard_reset(&mut self) -> Result<(), I::Error> {
        self.pwr_mgmt_1().write(|w| {
            w.set_h_reset(true);
        })?;
        Ok(())
    }

    fn select_auto_clock(&mut self) -> Result<(), I::Error> {
        self.pwr_mgmt_1().write(|w| {
            w.set_clksel(CLKSEL_AUTO);
        })?;
        Ok(())
    }

    fn disable_i2c_slave(&mut self) -> Result<(), I::Error> {
        self.user_ctrl().modify(|w| {
            w.set_i_2_c_if_dis(true);
        })?;
        Ok(())
    }

    fn enable_aux_master(&mut self, clock: u8) -> Result<(), I::Error> {
        self.user_ctrl().modify(|w| {
            w.set_i_2_c_mst_en(true);
        })?;
        self.i_2_c_mst_ctrl().write(|w| {
            w.set_i_2_c_mst_clk(clock);
        })?;
        Ok(())
    }

    fn align_output_rates(&mut self) -> Result<(), I::Error> {
        // One shared divider, nothing to align
        Ok(())
    }

    fn write_accel_range(&mut self, bits: u8) -> Result<(), I::Error> {
        self.accel_config().modify(|w| {
            w.set_accel_fs_sel(bits);
        })?;
        Ok(())
    }

    fn write_gyro_range(&mut self, bits: u8) -> Result<(), I::Error> {
        self.gyro_config().modify(|w| {
            w.set_gyro_fs_sel(bits);
        })?;
        Ok(())
    }

    fn write_accel_dlpf(&mut self, bits: u8) -> Result<(), I::Error> {
        self.accel_config_2().modify(|w| {
            w.set_a_dlpfcfg(bits);
            w.set_accel_fchoice_b(false);
        })?;
        Ok(())
    }

    fn write_gyro_dlpf(&mut self, bits: u8) -> Result<(), I::Error> {
        self.config().modify(|w| {
            w.set_dlpf_cfg(bits);
        })?;
        self.gyro_config().modify(|w| {
            w.set_fchoice_b(0);
        })?;
        Ok(())
    }

    fn write_temp_dlpf(&mut self, _bits: u8) -> Result<(), I::Error> {
        // The temperature path follows CONFIG.DLPF_CFG
        Ok(())
    }

    fn write_srd(&mut self, srd: u8) -> Result<(), I::Error> {
        self.smplrt_div().write(|w| {
            w.set_smplrt_div(srd);
        })?;
        Ok(())
    }

    fn write_data_ready_interrupt(&mut self, enable: bool) -> Result<(), I::Error> {
        if enable {
            // 50 us pulse, active high, push-pull
            self.int_pin_cfg().write(|w| {
                w.set_actl(false);
                w.set_open(false);
                w.set_latch_int_en(false);
            })?;
        }
        self.int_enable().write(|w| {
            w.set_raw_rdy_en(enable);
        })?;
        Ok(())
    }

    fn data_ready(&mut self) -> Result<bool, I::Error> {
        let status = self.int_status().read()?;
        Ok(status.raw_data_rdy_int())
    }

    fn read_sensor_data(&mut self, buffer: &mut [u8]) -> Result<(), I::Error> {
        const ACCEL_XOUT_H: u8 = 0x3B;
        self.interface
            .read_register(ACCEL_XOUT_H, burst_bits(buffer), buffer)
    }

    fn start_slv0_read(&mut self, address: u8, register: u8, len: u8) -> Result<(), I::Error> {
        self.i_2_c_slv_0_addr().write(|w| {
            w.set_i_2_c_id_0(address);
            w.set_i_2_c_slv_0_rnw(true);
        })?;
        self.i_2_c_slv_0_reg().write(|w| {
            w.set_i_2_c_slv_0_reg(register);
        })?;
        self.i_2_c_slv_0_ctrl().write(|w| {
            w.set_i_2_c_slv_0_leng(len);
            w.set_i_2_c_slv_0_en(true);
        })?;
        Ok(())
    }

    fn start_slv0_write(&mut self, address: u8, register: u8, value: u8) -> Result<(), I::Error> {
        self.i_2_c_slv_0_addr().write(|w| {
            w.set_i_2_c_id_0(address);
            w.set_i_2_c_slv_0_rnw(false);
        })?;
        self.i_2_c_slv_0_reg().write(|w| {
            w.set_i_2_c_slv_0_reg(register);
        })?;
        self.i_2_c_slv_0_do().write(|w| {
            w.set_i_2_c_slv_0_do(value);
        })?;
        self.i_2_c_slv_0_ctrl().write(|w| {
            w.set_i_2_c_slv_0_leng(1);
            w.set_i_2_c_slv_0_en(true);
        })?;
        Ok(())
    }

    fn read_ext_sens_data(&mut self, buffer: &mut [u8]) -> Result<(), I::Error> {
        const EXT_SENS_DATA_00: u8 = 0x49;
        self.interface
            .read_register(EXT_SENS_DATA_00, burst_bits(buffer), buffer)
    }
}
