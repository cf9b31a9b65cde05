use super::registers;
use crate::radio::{prelude::RadioChannel, Error, Nrf24};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioChannel for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type ChannelErrorType = Error<SPI::Error, DO::Error>;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        if channel > 125 {
            return Err(Error::InvalidConfiguration);
        }
        self.spi_write_byte(registers::RF_CH, channel)
    }

    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.spi_read(1, registers::RF_CH)?;
        Ok(self._buf[1] & 0x7F)
    }
}
