use super::{commands, registers};
use crate::radio::{prelude::RadioStatus, Error, Nrf24};
use crate::StatusFlags;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioStatus for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type StatusErrorType = Error<SPI::Error, DO::Error>;

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }

    fn status(&self) -> StatusFlags {
        self._status
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        // writing a 1 to an event bit resets it
        self.spi_write_byte(
            registers::STATUS,
            flags.into_bits() & StatusFlags::EVENT_MASK,
        )
    }
}
