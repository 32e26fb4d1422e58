//! Auxiliary I2C bridge
//!
//! The ICM-20948 talks to its AK09916 over a private I2C bus that the host
//! cannot reach directly. Transfers are delegated to the chip's I2C master
//! through slave channel 0:
//!
//! - a read programs `I2C_SLV0_ADDR` (with the read flag), `I2C_SLV0_REG`
//!   and `I2C_SLV0_CTRL`, then collects the bytes the master mirrored into
//!   `EXT_SLV_SENS_DATA_00..`;
//! - a write programs the same channel without the read flag, hands over
//!   the byte through `I2C_SLV0_DO`, then reads the register back to
//!   confirm it landed.
//!
//! After a read, slave 0 stays armed and keeps refreshing the data window
//! at the sample rate. The acquisition path relies on that: the last read
//! of the `ST1..ST2` block leaves the magnetometer streaming into the burst.

use crate::block::{BusError, ChipRegisters};
use crate::chip::{AuxMaster, SLV0_MAX_LEN};
use crate::Error;

/// Indirect register access to the device behind the auxiliary I2C master
pub struct AuxBus<'a, R> {
    registers: &'a mut R,
    master: &'a AuxMaster,
}

impl<'a, R: ChipRegisters> AuxBus<'a, R> {
    /// Borrow the register block for auxiliary transfers
    pub fn new(registers: &'a mut R, master: &'a AuxMaster) -> Self {
        Self { registers, master }
    }

    /// Read `buffer.len()` consecutive registers starting at `register`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the buffer is empty or longer than
    /// the 15 bytes a slave channel can move, or a bus error.
    pub fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Error<BusError<R>>> {
        let len = transfer_len(buffer.len())?;

        self.registers
            .start_slv0_read(self.master.device_address, register, len)?;
        self.registers.read_ext_sens_data(buffer)?;
        Ok(())
    }

    /// Write one register and confirm it by reading it back
    ///
    /// # Errors
    ///
    /// Returns [`Error::VerificationFailed`] if the read-back differs from
    /// `value`, or a bus error.
    pub fn write(&mut self, register: u8, value: u8) -> Result<(), Error<BusError<R>>> {
        self.registers
            .start_slv0_write(self.master.device_address, register, value)?;

        let mut readback = [0u8; 1];
        self.read(register, &mut readback)?;
        if readback[0] != value {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Aux write to 0x{:02x} not confirmed: wrote 0x{:02x}, read 0x{:02x}",
                register,
                value,
                readback[0]
            );
            return Err(Error::VerificationFailed {
                expected: value,
                actual: readback[0],
            });
        }
        Ok(())
    }
}

fn transfer_len<E>(len: usize) -> Result<u8, Error<E>> {
    if len == 0 || len > SLV0_MAX_LEN {
        return Err(Error::InvalidConfig);
    }
    u8::try_from(len).map_err(|_| Error::InvalidConfig)
}
