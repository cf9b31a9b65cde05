use embedded_hal::{digital::OutputPin, spi::SpiDevice};

pub(crate) mod bit_fields;
mod constants;
use bit_fields::Config;
pub use constants::{commands, mnemonics, registers};

mod addressing;
mod channel;
mod crc;
mod data_rate;
mod details;
mod fifo;
mod init;
mod mode;
mod payload;
mod payload_mode;
mod status;

use crate::types::{PayloadMode, StatusFlags};

/// A collection of error types to describe hardware malfunctions
/// and rejected configurations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// A requested setting was out of range for the radio.
    ///
    /// This is detected before any SPI traffic occurs,
    /// so the radio's state is left untouched.
    InvalidConfiguration,
    /// A payload exceeded the radio's 32 byte limit (or was empty).
    PayloadTooLong,
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
}

/// This struct implements the [`Radio*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// The radio's CSN pin (aka Chip Select pin) shall be defined
/// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
/// object (passed to the `spi` parameter of [`Nrf24::new()`]).
pub struct Nrf24<SPI, DO> {
    _spi: SPI,
    ce_pin: DO,
    _buf: [u8; 33],
    _status: StatusFlags,
    _config_reg: Config,
    _ce_level: bool,
    _transmitting: bool,
    _address_width: u8,
    _padding: u8,
    _payload_mode: PayloadMode,
}

impl<SPI, DO> Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    /// Instantiate an [`Nrf24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// This does not touch the hardware. Call
    /// [`init()`](fn@crate::radio::prelude::RadioInit::init) before using the radio.
    pub fn new(spi: SPI, ce_pin: DO) -> Nrf24<SPI, DO> {
        Nrf24 {
            _spi: spi,
            ce_pin,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            // 16 bit CRC, powered down as TX
            _config_reg: Config::from_bits(0xC),
            _ce_level: false,
            _transmitting: false,
            _address_width: 5,
            _padding: b' ',
            _payload_mode: PayloadMode::Fixed(32),
        }
    }

    fn spi_transfer(&mut self, len: u8) -> Result<(), Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len as usize])
            .map_err(Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        command: u8,
        byte: u8,
    ) -> Result<(), Error<SPI::Error, DO::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Error<SPI::Error, DO::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(&buf[..buf_len]);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Drive the CE pin and remember the level it was left at.
    fn set_ce(&mut self, level: bool) -> Result<(), Error<SPI::Error, DO::Error>> {
        if level {
            self.ce_pin.set_high().map_err(Error::Gpo)?;
        } else {
            self.ce_pin.set_low().map_err(Error::Gpo)?;
        }
        self._ce_level = level;
        Ok(())
    }

    /// Run `action` with the CE pin held LOW, then restore the previous level.
    ///
    /// The previous level is restored even when `action` fails, and a
    /// restoration failure takes precedence over `action`'s output.
    fn with_ce_low<T>(
        &mut self,
        action: impl FnOnce(&mut Self) -> Result<T, Error<SPI::Error, DO::Error>>,
    ) -> Result<T, Error<SPI::Error, DO::Error>> {
        let previous = self._ce_level;
        self.set_ce(false)?;
        let out = action(self);
        let restored = self.set_ce(previous);
        out.and_then(|val| restored.map(|()| val))
    }

    /// Pad (or truncate) an address to a full 5 bytes.
    ///
    /// Only the first [`Nrf24::set_address_width()`] bytes are meaningful.
    fn padded_address(&self, address: &[u8]) -> [u8; 5] {
        let mut out = [self._padding; 5];
        let used = address.len().min(self._address_width as usize);
        out[..used].copy_from_slice(&address[..used]);
        out
    }
}
