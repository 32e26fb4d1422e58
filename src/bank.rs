//! Banked register access
//!
//! The ICM-20649 and ICM-20948 split their register map into four banks
//! selected through `REG_BANK_SEL` (0x7F). Every address in 0x00-0x7E means
//! something different per bank, so each access first has to make sure the
//! right bank is active. [`BankedRegisters`] remembers the last bank it
//! selected and only writes `REG_BANK_SEL` when the target changes, which
//! keeps consecutive accesses to one bank (the common case for burst reads)
//! to a single transaction each.
//!
//! Single-bank parts such as the MPU-9250 have no bank-select register and
//! use their register block directly.

use crate::Bank;

/// Register block that can switch banks
pub trait BankSelect {
    /// Transport error
    type Error;

    /// Write the bank-select register, unconditionally
    ///
    /// # Errors
    ///
    /// Returns the transport error if the write fails.
    fn write_bank_select(&mut self, bank: Bank) -> Result<(), Self::Error>;
}

/// Register block wrapper that tracks the selected bank
pub struct BankedRegisters<D> {
    device: D,
    current_bank: Option<Bank>,
}

impl<D> BankedRegisters<D> {
    /// Wrap a register block
    ///
    /// The selected bank is unknown until the first successful switch.
    pub const fn new(device: D) -> Self {
        Self {
            device,
            current_bank: None,
        }
    }

    /// Bank the device is known to have selected, if any
    #[must_use]
    pub const fn current_bank(&self) -> Option<Bank> {
        self.current_bank
    }

    /// Consume the wrapper and return the register block
    pub fn release(self) -> D {
        self.device
    }
}

impl<D: BankSelect> BankedRegisters<D> {
    /// Select a register bank
    ///
    /// Writes the bank-select register only when `bank` differs from the
    /// cached bank. On a failed write the cache keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the bank-select write fails.
    pub fn select_bank(&mut self, bank: Bank) -> Result<(), D::Error> {
        if self.current_bank != Some(bank) {
            self.device.write_bank_select(bank)?;
            self.current_bank = Some(bank);
        }
        Ok(())
    }

    /// Select `bank` and hand out the register block for one access
    ///
    /// # Errors
    ///
    /// Returns the transport error if the bank-select write fails. The block
    /// is not handed out in that case, so nothing lands in the wrong bank.
    pub fn in_bank(&mut self, bank: Bank) -> Result<&mut D, D::Error> {
        self.select_bank(bank)?;
        Ok(&mut self.device)
    }
}
