use crate::radio::{prelude::RadioCrc, Error, Nrf24};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioCrc for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type CrcErrorType = Error<SPI::Error, DO::Error>;

    fn set_crc_width(&mut self, width: u8) -> Result<(), Self::CrcErrorType> {
        if width < 1 || width > 2 {
            return Err(Error::InvalidConfiguration);
        }
        // cached only; the CONFIG register is rewritten on the next mode transition
        self._config_reg = self._config_reg.with_crc_width(width);
        Ok(())
    }

    fn crc_width(&self) -> u8 {
        self._config_reg.crc_width()
    }
}
