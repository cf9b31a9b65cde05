use super::{commands, mnemonics, registers};
use crate::radio::{prelude::RadioMode, Error, Nrf24};
use crate::types::OperatingMode;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioMode for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type ModeErrorType = Error<SPI::Error, DO::Error>;

    fn power_up_rx(&mut self) -> Result<(), Self::ModeErrorType> {
        self.set_ce(false)?;
        self._transmitting = false;
        self._config_reg = self._config_reg.with_power(true).as_rx();
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())?;
        // discard stale events from a previous mode
        self.spi_write_byte(
            registers::STATUS,
            mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
        )?;
        self.set_ce(true)
    }

    fn power_up_tx(&mut self) -> Result<(), Self::ModeErrorType> {
        self.set_ce(false)?;
        self._transmitting = true;
        self._config_reg = self._config_reg.with_power(true).as_tx();
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())?;
        self.spi_write_byte(
            registers::STATUS,
            mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
        )?;
        self.set_ce(true)
    }

    fn power_down(&mut self) -> Result<(), Self::ModeErrorType> {
        self.set_ce(false)?;
        self._transmitting = false;
        self._config_reg = self._config_reg.with_power(false);
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())
    }

    fn mode(&self) -> OperatingMode {
        if !self._config_reg.power() {
            OperatingMode::PowerDown
        } else if !self._ce_level {
            OperatingMode::Standby
        } else if self._config_reg.is_rx() {
            OperatingMode::Receiving
        } else if self._transmitting {
            OperatingMode::Transmitting
        } else {
            OperatingMode::Standby
        }
    }

    fn is_transmitting(&mut self) -> Result<bool, Self::ModeErrorType> {
        if !self._transmitting {
            return Ok(false);
        }
        self.spi_read(0, commands::NOP)?;
        if self._status.tx_ds() || self._status.max_rt() {
            // transmission finished (or gave up); go back to listening
            self.power_up_rx()?;
            return Ok(false);
        }
        Ok(true)
    }
}
