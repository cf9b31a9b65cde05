use super::registers;
use crate::radio::{prelude::RadioAddressing, Error, Nrf24};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioAddressing for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type AddressingErrorType = Error<SPI::Error, DO::Error>;

    fn set_address_width(&mut self, width: u8) -> Result<(), Self::AddressingErrorType> {
        if width < 3 || width > 5 {
            return Err(Error::InvalidConfiguration);
        }
        self.spi_write_byte(registers::SETUP_AW, width - 2)?;
        self._address_width = width;
        Ok(())
    }

    fn set_padding(&mut self, padding: u8) {
        self._padding = padding;
    }

    fn set_local_address(&mut self, address: &[u8]) -> Result<(), Self::AddressingErrorType> {
        let padded = self.padded_address(address);
        let width = self._address_width as usize;
        self.with_ce_low(|radio| radio.spi_write_buf(registers::RX_ADDR_P1, &padded[..width]))
    }

    fn set_remote_address(&mut self, address: &[u8]) -> Result<(), Self::AddressingErrorType> {
        let padded = self.padded_address(address);
        let width = self._address_width as usize;
        self.with_ce_low(|radio| {
            radio.spi_write_buf(registers::TX_ADDR, &padded[..width])?;
            // pipe 0 listens on the remote address for auto-ack replies
            radio.spi_write_buf(registers::RX_ADDR_P0, &padded[..width])
        })
    }
}
