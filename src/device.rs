//! High-level driver API
//!
//! [`Imu`] is written once against the [`ChipSpec`] and the register block
//! of its chip parameter. It owns the register block, mirrors the configuration in a
//! [`DeviceState`] and keeps the most recent sample.
//!
//! A typical session is `new`, `begin`, any `configure_*` calls, then
//! `read` in a loop:
//!
//! ```ignore
//! let mut imu = Icm20948Driver::new(I2cInterface::default(i2c));
//! imu.begin(&mut delay)?;
//! imu.configure_accel_range(AccelRange::G4)?;
//! loop {
//!     if imu.read()? {
//!         let accel = imu.accel();
//!     }
//! }
//! ```

use embedded_hal::delay::DelayNs;

use crate::aux_bus::AuxBus;
use crate::block::ChipRegisters;
use crate::chip::{Chip, ChipSpec, Icm20649, Icm20948, Mpu9250, MAX_BURST_LEN};
use crate::interface::{InterfaceMode, Transport};
use crate::sample::{RawSample, ScaledSample, Vector3};
use crate::sensors::magnetometer::{
    AK09916_BLOCK_LEN, AK09916_CNTL3_SRST, AK09916_REG_CNTL2, AK09916_REG_CNTL3, AK09916_REG_ST1,
};
use crate::sensors::{AccelDlpf, AccelRange, GyroDlpf, GyroRange, MagMode, TempDlpf};
use crate::state::DeviceState;
use crate::{Bank, Error};

/// Time the chip needs after a hard reset before it accepts writes
const RESET_SETTLE_MS: u32 = 100;

/// IMU driver
///
/// `I` is the register transport and `C` the chip variant marker.
pub struct Imu<I: Transport, C: Chip> {
    registers: C::Registers<I>,
    state: DeviceState,
    raw: RawSample,
    sample: ScaledSample,
    new_imu_data: bool,
    new_mag_data: bool,
}

/// Driver for the MPU-9250
pub type Mpu9250Driver<I> = Imu<I, Mpu9250>;

/// Driver for the ICM-20649
pub type Icm20649Driver<I> = Imu<I, Icm20649>;

/// Driver for the ICM-20948
pub type Icm20948Driver<I> = Imu<I, Icm20948>;

impl<I, C> Imu<I, C>
where
    I: Transport,
    C: Chip,
{
    /// Create a driver around a transport
    ///
    /// No bus traffic happens until [`Imu::begin`]. The mirrored state starts
    /// at the chip's power-on configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = SpiInterface::new(spi_device);
    /// let mut imu = Icm20649Driver::new(interface);
    /// ```
    pub fn new(interface: I) -> Self {
        let spec = C::SPEC;
        Self {
            registers: ChipRegisters::new(interface),
            state: DeviceState::power_on(spec, I::MODE),
            raw: RawSample::default(),
            sample: ScaledSample::default(),
            new_imu_data: false,
            new_mag_data: false,
        }
    }

    /// Bring the chip up and apply its default configuration
    ///
    /// Resets the chip, checks its identity (and on the ICM-20948 that of the
    /// magnetometer behind the auxiliary bus), aligns output data rates where
    /// supported, then applies the defaults from [`ChipSpec::defaults`]. The
    /// first failing step aborts the sequence and the driver stays un-begun.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDevice`] if `WHO_AM_I` does not match the chip
    /// - [`Error::InvalidAuxDevice`] if the magnetometer identity does not match
    /// - [`Error::Bus`] on any transport failure
    pub fn begin<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: DelayNs,
    {
        let spec = C::SPEC;
        self.state.begun = false;
        self.state.interface = I::MODE;

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: begin over {}", spec.name, I::MODE);

        // Step 1: keep stray I2C traffic off an SPI session
        self.disable_i2c_slave()?;

        // Step 2: bring the aux master up far enough to reset the magnetometer
        if spec.aux.is_some() {
            self.registers.select_auto_clock()?;
            self.enable_aux_master()?;
            // SRST clears itself before the read-back, so only a bus failure counts
            match self.aux_bus()?.write(AK09916_REG_CNTL3, AK09916_CNTL3_SRST) {
                Ok(()) | Err(Error::VerificationFailed { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        // Step 3: hard reset
        self.reset(delay)?;

        // Step 4: the reset cleared USER_CTRL
        self.disable_i2c_slave()?;
        self.registers.select_auto_clock()?;

        // Step 5: identity
        let who_am_i = self.read_who_am_i()?;
        self.state.who_am_i = Some(who_am_i);
        if who_am_i != spec.who_am_i {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "{}: WHO_AM_I 0x{:02x}, expected 0x{:02x}",
                spec.name,
                who_am_i,
                spec.who_am_i
            );
            return Err(Error::InvalidDevice(who_am_i));
        }

        // Step 6: magnetometer identity
        if let Some(master) = spec.aux {
            self.enable_aux_master()?;
            let mut identity = [0u8; 1];
            self.aux_bus()?.read(master.identity_register, &mut identity)?;
            if identity[0] != master.identity {
                #[cfg(feature = "defmt")]
                defmt::error!(
                    "{}: aux identity 0x{:02x}, expected 0x{:02x}",
                    spec.name,
                    identity[0],
                    master.identity
                );
                return Err(Error::InvalidAuxDevice(identity[0]));
            }
        }

        self.registers.align_output_rates()?;

        // Step 7: defaults
        let defaults = spec.defaults;
        self.configure_accel_range(defaults.accel_range)?;
        self.configure_gyro_range(defaults.gyro_range)?;
        self.configure_accel_dlpf(defaults.accel_dlpf)?;
        self.configure_gyro_dlpf(defaults.gyro_dlpf)?;
        if let Some(temp_dlpf) = defaults.temp_dlpf {
            self.configure_temp_dlpf(temp_dlpf)?;
        }
        self.state.mag_mode = defaults.mag_mode;
        self.configure_srd(defaults.srd)?;

        self.state.begun = true;

        #[cfg(feature = "defmt")]
        defmt::info!("{} ready", spec.name);

        Ok(())
    }

    /// Hard-reset the chip and wait for it to settle
    ///
    /// Every register returns to its power-on value, so the mirrored
    /// configuration is reset too and [`Imu::begin`] has to run again.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: DelayNs,
    {
        let spec = C::SPEC;

        // REG_BANK_SEL resets to bank 0, which is where PWR_MGMT_1 lives, so
        // the cached bank stays accurate
        self.registers.hard_reset()?;
        delay.delay_ms(RESET_SETTLE_MS);

        self.state = self.state.after_reset(spec);
        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.registers.read_who_am_i()?)
    }

    /// Set the accelerometer full-scale range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] without touching the bus if the chip
    /// does not support `range`, or a bus error. The mirrored range and scale
    /// only change once the write succeeded.
    pub fn configure_accel_range(&mut self, range: AccelRange) -> Result<(), Error<I::Error>> {
        let spec = C::SPEC;
        let bits = spec.accel_range_bits(range).ok_or(Error::InvalidConfig)?;
        let staged = self.state.with_accel_range(range);

        self.registers.write_accel_range(bits)?;

        self.state = staged;
        Ok(())
    }

    /// Set the gyroscope full-scale range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] without touching the bus if the chip
    /// does not support `range`, or a bus error.
    pub fn configure_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<I::Error>> {
        let spec = C::SPEC;
        let bits = spec.gyro_range_bits(range).ok_or(Error::InvalidConfig)?;
        let staged = self.state.with_gyro_range(range);

        self.registers.write_gyro_range(bits)?;

        self.state = staged;
        Ok(())
    }

    /// Set the accelerometer low-pass filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the chip does not offer
    /// `bandwidth`, or a bus error.
    pub fn configure_accel_dlpf(&mut self, bandwidth: AccelDlpf) -> Result<(), Error<I::Error>> {
        let spec = C::SPEC;
        let bits = spec.accel_dlpf_bits(bandwidth).ok_or(Error::InvalidConfig)?;

        self.registers.write_accel_dlpf(bits)?;

        self.state.accel_dlpf = Some(bandwidth);
        Ok(())
    }

    /// Set the gyroscope low-pass filter bandwidth
    ///
    /// On the MPU-9250 this also clears `FCHOICE_B` in `GYRO_CONFIG`, which
    /// would otherwise bypass the filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the chip does not offer
    /// `bandwidth`, or a bus error.
    pub fn configure_gyro_dlpf(&mut self, bandwidth: GyroDlpf) -> Result<(), Error<I::Error>> {
        let spec = C::SPEC;
        let bits = spec.gyro_dlpf_bits(bandwidth).ok_or(Error::InvalidConfig)?;

        self.registers.write_gyro_dlpf(bits)?;

        self.state.gyro_dlpf = Some(bandwidth);
        Ok(())
    }

    /// Set the temperature sensor low-pass filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] on chips without a temperature
    /// filter or for an unsupported bandwidth, or a bus error.
    pub fn configure_temp_dlpf(&mut self, bandwidth: TempDlpf) -> Result<(), Error<I::Error>> {
        let bits = C::SPEC
            .temp_dlpf_bits(bandwidth)
            .ok_or(Error::InvalidConfig)?;

        self.registers.write_temp_dlpf(bits)?;

        self.state.temp_dlpf = Some(bandwidth);
        Ok(())
    }

    /// Set the sample rate divider
    ///
    /// Output data rate is `internal_rate / (1 + srd)`. On the ICM-20948 the
    /// magnetometer is re-armed in its configured mode afterwards and one
    /// measurement block is read to restart the stream into the burst window.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// [`Error::VerificationFailed`] if the magnetometer rejects its mode.
    ///
    /// If the dividers were written but re-arming the magnetometer fails,
    /// the chip already runs at the new `srd` while [`DeviceState::srd`]
    /// still reports the previous one. Call again to bring them back in line.
    pub fn configure_srd(&mut self, srd: u8) -> Result<(), Error<I::Error>> {
        let spec = C::SPEC;

        self.registers.write_srd(srd)?;

        let mag_mode = self.state.mag_mode.or(spec.defaults.mag_mode);
        if let (Some(_), Some(mode)) = (spec.aux, mag_mode) {
            self.aux_bus()?.write(AK09916_REG_CNTL2, mode.bits())?;
            self.rearm_mag_stream()?;
            self.state.mag_mode = Some(mode);
        }

        self.state.srd = srd;

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: srd {} ({} Hz)", spec.name, srd, spec.output_rate_hz(srd));

        Ok(())
    }

    /// Set the output data rate in Hz
    ///
    /// The divider is `internal_rate / rate_hz - 1`, truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `rate_hz` is zero, above the
    /// internal rate, or too low for an 8-bit divider.
    pub fn configure_output_rate(&mut self, rate_hz: u16) -> Result<(), Error<I::Error>> {
        let srd = C::SPEC.srd_for_rate(rate_hz).ok_or(Error::InvalidConfig)?;
        self.configure_srd(srd)
    }

    /// Route the raw data ready interrupt to the INT pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_data_ready_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        self.registers.write_data_ready_interrupt(true)?;

        self.state.data_ready_interrupt = true;
        Ok(())
    }

    /// Stop routing the raw data ready interrupt to the INT pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn disable_data_ready_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        self.registers.write_data_ready_interrupt(false)?;
        self.state.data_ready_interrupt = false;
        Ok(())
    }

    /// Poll for a new sample
    ///
    /// Returns `Ok(false)` when the chip has nothing new; the stored sample
    /// is left as it was. Otherwise reads the whole data block in one burst,
    /// converts it and returns `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read(&mut self) -> Result<bool, Error<I::Error>> {
        let spec = C::SPEC;
        self.new_imu_data = false;
        self.new_mag_data = false;

        if !self.registers.data_ready()? {
            return Ok(false);
        }

        let layout = &spec.layout;
        let mut buffer = [0u8; MAX_BURST_LEN];
        let burst = &mut buffer[..layout.len];
        self.registers.read_sensor_data(burst)?;

        let raw = RawSample::decode(layout, burst, &self.raw);
        let mut sample = ScaledSample::inertial(spec, &self.state, &raw, &self.sample);
        if layout.mag.is_some() && raw.mag_status.is_valid() {
            sample.mag = ScaledSample::magnetic(spec, raw.mag);
            self.new_mag_data = true;
        }

        self.raw = raw;
        self.sample = sample;
        self.new_imu_data = true;
        Ok(true)
    }

    /// Whether the last [`Imu::read`] produced a new sample
    #[must_use]
    pub const fn new_imu_data(&self) -> bool {
        self.new_imu_data
    }

    /// Most recent converted sample
    #[must_use]
    pub const fn sample(&self) -> &ScaledSample {
        &self.sample
    }

    /// Counts behind the most recent sample
    #[must_use]
    pub const fn raw(&self) -> &RawSample {
        &self.raw
    }

    /// Acceleration in m/s²
    #[must_use]
    pub const fn accel(&self) -> Vector3 {
        self.sample.accel
    }

    /// Angular rate in rad/s (ICM parts) or °/s (MPU-9250)
    #[must_use]
    pub const fn gyro(&self) -> Vector3 {
        self.sample.gyro
    }

    /// Die temperature in °C
    #[must_use]
    pub const fn temperature(&self) -> f32 {
        self.sample.temperature
    }

    /// Mirrored configuration
    #[must_use]
    pub const fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Register bank the driver last selected
    #[must_use]
    pub fn current_bank(&self) -> Option<Bank> {
        self.registers.current_bank()
    }

    /// Descriptor of the chip this driver is built for
    #[must_use]
    pub fn spec(&self) -> &'static ChipSpec {
        C::SPEC
    }

    /// Consume the driver and return the transport
    pub fn release(self) -> I {
        self.registers.release()
    }

    fn disable_i2c_slave(&mut self) -> Result<(), Error<I::Error>> {
        if I::MODE == InterfaceMode::Spi {
            #[cfg(feature = "defmt")]
            defmt::debug!("Disabling I2C slave interface");
            self.registers.disable_i2c_slave()?;
        }
        Ok(())
    }

    fn enable_aux_master(&mut self) -> Result<(), Error<I::Error>> {
        let master = C::SPEC.aux.ok_or(Error::InvalidConfig)?;
        self.registers.enable_aux_master(master.mst_clock_400khz)?;
        Ok(())
    }

    /// Read the magnetometer block once so slave 0 keeps streaming it
    fn rearm_mag_stream(&mut self) -> Result<(), Error<I::Error>> {
        let mut block = [0u8; AK09916_BLOCK_LEN];
        self.aux_bus()?.read(AK09916_REG_ST1, &mut block)
    }

    fn aux_bus(&mut self) -> Result<AuxBus<'_, C::Registers<I>>, Error<I::Error>> {
        let master = C::SPEC.aux.as_ref().ok_or(Error::InvalidConfig)?;
        Ok(AuxBus::new(&mut self.registers, master))
    }
}

impl<I> Imu<I, Mpu9250>
where
    I: Transport,
{
    /// Set both filters, the output rate and enable data ready in one go
    ///
    /// `bandwidth` has to be one of the shared accel and gyro bandwidths
    /// (184, 92, 41, 20, 10 or 5 Hz).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] before any bus traffic if the
    /// bandwidth or rate is unsupported, or a bus error.
    pub fn configure_filter(
        &mut self,
        bandwidth: GyroDlpf,
        rate_hz: u16,
    ) -> Result<(), Error<I::Error>> {
        let spec = <Mpu9250 as Chip>::SPEC;
        let accel = match bandwidth {
            GyroDlpf::Hz184 => AccelDlpf::Hz184,
            GyroDlpf::Hz92 => AccelDlpf::Hz92,
            GyroDlpf::Hz41 => AccelDlpf::Hz41,
            GyroDlpf::Hz20 => AccelDlpf::Hz20,
            GyroDlpf::Hz10 => AccelDlpf::Hz10,
            GyroDlpf::Hz5 => AccelDlpf::Hz5,
            _ => return Err(Error::InvalidConfig),
        };
        if spec.srd_for_rate(rate_hz).is_none() {
            return Err(Error::InvalidConfig);
        }

        self.configure_accel_dlpf(accel)?;
        self.configure_gyro_dlpf(bandwidth)?;
        self.configure_output_rate(rate_hz)?;
        self.enable_data_ready_interrupt()
    }
}

impl<I> Imu<I, Icm20948>
where
    I: Transport,
{
    /// Most recent magnetic flux density in µT
    ///
    /// Holds the last valid measurement; see [`Imu::new_mag_data`].
    #[must_use]
    pub const fn mag(&self) -> Vector3 {
        self.sample.mag
    }

    /// Whether the last [`Imu::read`] carried a fresh, in-range magnetometer sample
    #[must_use]
    pub const fn new_mag_data(&self) -> bool {
        self.new_mag_data
    }

    /// Change the magnetometer operating mode
    ///
    /// Single measurement mode falls back to power-down on its own, so its
    /// read-back is expected to report [`Error::VerificationFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::VerificationFailed`] if the mode did not stick, or a
    /// bus error.
    pub fn configure_mag_mode(&mut self, mode: MagMode) -> Result<(), Error<I::Error>> {
        self.aux_bus()?.write(AK09916_REG_CNTL2, mode.bits())?;
        self.state.mag_mode = Some(mode);
        self.rearm_mag_stream()
    }

    /// Read consecutive magnetometer registers
    ///
    /// This reprograms slave 0, so the magnetometer stream in the burst
    /// follows `register` until the block is re-armed by
    /// [`Imu::configure_mag_mode`] or [`Imu::configure_srd`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty buffer or one longer
    /// than 15 bytes, or a bus error.
    pub fn read_mag_registers(
        &mut self,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Error<I::Error>> {
        self.aux_bus()?.read(register, buffer)
    }

    /// Write one magnetometer register, verified by read-back
    ///
    /// # Errors
    ///
    /// Returns [`Error::VerificationFailed`] if the read-back differs, or a
    /// bus error.
    pub fn write_mag_register(&mut self, register: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.aux_bus()?.write(register, value)
    }
}
