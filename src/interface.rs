//! Bus interface implementations
//!
//! This module provides implementations of the `device-driver`
//! [`RegisterInterface`] trait for I2C and SPI communication, plus the
//! [`Transport`] extension the driver uses to tell the two apart during
//! bring-up.

use device_driver::RegisterInterface;

/// Default I2C address when the AD0 pin is low
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// Alternative I2C address when the AD0 pin is high
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Maximum payload of a single register write
const MAX_WRITE_LEN: usize = 32;

/// Physical bus the driver talks over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceMode {
    /// Two-wire I2C
    I2c,
    /// Four-wire SPI
    Spi,
}

/// Byte-level register transport used by the driver
///
/// Any [`RegisterInterface`] with 8-bit addresses can drive the IMU. The
/// mode matters during bring-up: on SPI the chip's I2C slave interface is
/// disabled so stray traffic on shared pins cannot corrupt the session.
pub trait Transport: RegisterInterface<AddressType = u8> {
    /// Which bus this transport drives
    const MODE: InterfaceMode;
}

/// I2C interface
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x68, AD0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Icm20948Driver::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x69, AD0 pin HIGH)
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = address;
        let len = write_data.len().min(MAX_WRITE_LEN);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }
}

impl<I2C, E> Transport for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    const MODE: InterfaceMode = InterfaceMode::I2c;
}

/// SPI interface
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which
/// manages the chip select pin and the bus clock. Both are handled by the
/// SPI device implementation you provide.
///
/// With `embedded-hal-bus`, you would typically create an `SpiDevice` like:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // MSB set selects a read
        let read_address = address | 0x80;

        let mut operations = [
            embedded_hal::spi::Operation::Write(&[read_address]),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = address & 0x7F;
        let len = write_data.len().min(MAX_WRITE_LEN);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.spi.write(&buffer[..=len])
    }
}

impl<SPI, E> Transport for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    const MODE: InterfaceMode = InterfaceMode::Spi;
}
