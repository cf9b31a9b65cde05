use super::{commands, registers};
use crate::radio::{prelude::RadioFifo, Error, Nrf24};
use crate::FifoState;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioFifo for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type FifoErrorType = Error<SPI::Error, DO::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)
    }

    fn fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        self.spi_read(1, registers::FIFO_STATUS)?;
        let offset = about_tx as u8 * 4;
        FifoState::from_bits(self._buf[1] >> offset).ok_or(Error::BinaryCorruption)
    }
}
